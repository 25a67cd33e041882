//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod catalog_loader;
pub mod interaction;
pub mod llm_gateway;
pub mod progress;
pub mod transcript_logger;
