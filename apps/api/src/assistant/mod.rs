// AI assistant features: prompt builders and the operations that drive the model gateway.
// All model calls go through llm_client — no direct provider calls here.

pub mod operations;
pub mod prompts;
