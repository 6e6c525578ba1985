// Shared prompt types.
// Each feature that needs LLM calls builds its own prompts alongside it
// (see `assistant::prompts`); this file only holds what every builder returns.

/// An immutable (system instruction, user prompt) pair built for a single model call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    pub system: &'static str,
    pub user: String,
}

impl PromptSpec {
    pub fn new(system: &'static str, user: String) -> Self {
        Self { system, user }
    }
}
