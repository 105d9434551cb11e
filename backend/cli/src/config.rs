use pantryforge_core::PantryError;

/// PantryForge runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server bind address
    pub bind_address: String,
    /// HTTP server port
    pub port: u16,
    /// Which registered LLM provider serves completions ("groq" or "ollama")
    pub provider: String,
    /// Model requested from the provider
    pub model: String,
    /// Groq API key
    pub groq_api_key: Option<String>,
    /// Ollama base URL
    pub ollama_url: Option<String>,
    /// Directory the chat front-end is served from
    pub static_dir: String,
    /// Directory for rolling log files
    pub log_dir: String,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8080,
            provider: "groq".to_string(),
            model: "llama-3.1-8b-instant".to_string(),
            groq_api_key: None,
            ollama_url: Some("http://localhost:11434".to_string()),
            static_dir: "static".to_string(),
            log_dir: "logs".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: std::env::var("PANTRYFORGE_BIND")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PANTRYFORGE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            provider: std::env::var("PANTRYFORGE_PROVIDER")
                .unwrap_or_else(|_| "groq".to_string()),
            model: std::env::var("PANTRYFORGE_MODEL")
                .unwrap_or_else(|_| "llama-3.1-8b-instant".to_string()),
            groq_api_key: std::env::var("GROQ_API_KEY").ok(),
            ollama_url: std::env::var("OLLAMA_URL")
                .ok()
                .or(Some("http://localhost:11434".to_string())),
            static_dir: std::env::var("PANTRYFORGE_STATIC_DIR")
                .unwrap_or_else(|_| "static".to_string()),
            log_dir: std::env::var("PANTRYFORGE_LOG_DIR")
                .unwrap_or_else(|_| "logs".to_string()),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Reject configurations that would only fail mid-request.
    pub fn validate(&self) -> Result<(), PantryError> {
        match self.provider.as_str() {
            "groq" => {
                if self.groq_api_key.is_none() {
                    return Err(PantryError::ConfigError(
                        "provider 'groq' selected but GROQ_API_KEY is not set".to_string(),
                    ));
                }
            }
            "ollama" => {
                if self.ollama_url.is_none() {
                    return Err(PantryError::ConfigError(
                        "provider 'ollama' selected but OLLAMA_URL is not set".to_string(),
                    ));
                }
            }
            other => {
                return Err(PantryError::ConfigError(format!(
                    "unknown provider '{}' (expected 'groq' or 'ollama')",
                    other
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groq_requires_api_key() {
        let config = Config::default();
        assert!(config.validate().is_err());

        let config = Config {
            groq_api_key: Some("gsk_test".to_string()),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ollama_needs_no_key() {
        let config = Config {
            provider: "ollama".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let config = Config {
            provider: "skynet".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
