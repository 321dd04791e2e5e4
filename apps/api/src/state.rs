use std::sync::Arc;

use crate::catalog::CatalogSource;
use crate::drafting::pipeline::PipelineConfig;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable catalog source. Default: FileCatalogSource. Swap via CATALOG_URL env.
    pub catalog: Arc<dyn CatalogSource>,
    /// Pipeline knobs: validation threshold and the domain phrase list.
    pub pipeline_config: PipelineConfig,
}
