//! OpenAI-compatible chat completions provider

mod gateway;
mod session;
mod types;

pub use gateway::OpenAiGateway;
pub use session::OpenAiSession;
