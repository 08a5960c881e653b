use statdesk_core::error::AppError;

/// A language-model completion backend. Unlike the search boundary, errors
/// here propagate: no answer can be produced without a completion.
pub trait CompletionClient {
    fn complete(&self, system: &str, prompt: &str) -> Result<String, AppError>;
}

pub mod openai;
