//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - input validation errors
//! - [`error::WorkflowViolation`] - steps attempted out of order
//! - [`string`] - small text helpers

pub mod error;
pub mod string;
