use eli5_core::error::AppError;

/// Capability for a single blocking text completion.
pub trait Llm {
    fn generate(&self, model: &str, prompt: &str) -> Result<String, AppError>;
}

pub mod openai_llm;
