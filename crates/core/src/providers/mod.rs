pub mod traits;

// HTTP implementation
pub mod analyzer_api;
