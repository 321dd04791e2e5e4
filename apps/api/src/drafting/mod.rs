// Drafting pipeline: validation, keyword extraction, offering matching, composition.
// The pipeline is pure apart from the catalog load; handlers stay thin.

pub mod composer;
pub mod handlers;
pub mod keywords;
pub mod matcher;
pub mod pipeline;
pub mod validation;
