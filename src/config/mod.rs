//! Configuration model for supervise.
//!
//! An optional YAML file supplies defaults for the timeout policy and for
//! diagnostic logging. Unknown fields are ignored, missing fields take their
//! defaults, and values are validated on load.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::LogFormat;
