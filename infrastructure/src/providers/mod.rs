//! Text-generation backends implementing the
//! [`LlmGateway`](reverie_application::LlmGateway) port.

pub mod openai;
