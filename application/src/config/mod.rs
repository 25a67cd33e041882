//! Application-level configuration.
//!
//! - [`ReadingParams`] - model, system prompt and closing remark for the
//!   external interpretation

pub mod reading_params;

pub use reading_params::{DEFAULT_MODEL, ReadingParams};
