use thiserror::Error;

/// Top-level error type for the PantryForge runtime.
#[derive(Debug, Error)]
pub enum PantryError {
    #[error("LLM provider error ({provider}): {message}")]
    LlmError { provider: String, message: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
