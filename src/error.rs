use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrabalhistaError {
    #[error("API token not configured. Set ESCAVADOR_TOKEN or run 'trabalhista config set escavador.token YOUR_TOKEN'.")]
    NoApiKey,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimit,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error ({code}): {message}")]
    ApiError {
        code: String,
        message: String,
        hint: Option<String>,
    },

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(String),
}

impl TrabalhistaError {
    /// Create an API error with an optional hint
    pub fn api_error(code: impl Into<String>, message: impl Into<String>, hint: Option<String>) -> Self {
        Self::ApiError {
            code: code.into(),
            message: message.into(),
            hint,
        }
    }

    /// Get user-friendly hint for the error
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::NoApiKey => Some(
                "Get a token at https://api.escavador.com and export ESCAVADOR_TOKEN, \
                 or run: trabalhista config set escavador.token YOUR_TOKEN".to_string()
            ),
            Self::AuthenticationFailed(_) => Some("Check that your Escavador token is valid and not expired.".to_string()),
            Self::InvalidParams(_) => Some("Check the CNPJ: it should have 14 digits.".to_string()),
            Self::ApiError { hint, .. } => hint.clone(),
            Self::Network(_) => Some("Check your internet connection and try again.".to_string()),
            Self::RateLimit => Some("You've made too many requests. Please wait a moment.".to_string()),
            _ => None,
        }
    }

    /// Whether the API reported that nothing exists for the queried identifier.
    ///
    /// Besides a plain 404, Escavador sometimes answers with a generic error
    /// whose message reads "não encontrado".
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::ApiError { message, .. } => {
                let message = message.to_lowercase();
                message.contains("não encontrado") || message.contains("nao encontrado")
            }
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrabalhistaError>;
