//! Token accounting for LLM operations.

/// Token usage statistics for a single LLM operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct TokenUsage {
    /// Tokens in the prompt/input.
    prompt_tokens: usize,
    /// Tokens in the response/output.
    completion_tokens: usize,
    /// Total tokens (prompt + completion).
    total_tokens: usize,
}

impl TokenUsage {
    /// Create a new token usage record.
    pub fn new(prompt_tokens: usize, completion_tokens: usize) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}
