use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    /// No API key in the environment.
    #[error("AI feedback is not configured (set SQG_AI_API_KEY or GROQ_API_KEY)")]
    NotConfigured,

    /// The key holds characters an HTTP header cannot carry.
    #[error("API key is not a valid header value (check SQG_AI_API_KEY or GROQ_API_KEY)")]
    InvalidCredential,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("authentication rejected ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("empty response from the API")]
    EmptyResponse,

    /// The completion stopped on the token limit, mid-sentence.
    #[error("response truncated by the token limit")]
    Truncated,
}

impl AiError {
    /// Short stable tag for logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotConfigured => "not_configured",
            Self::InvalidCredential => "invalid_credential",
            Self::Http(e) if e.is_timeout() => "http_timeout",
            Self::Http(_) => "http",
            Self::Unauthorized { .. } => "unauthorized",
            Self::Api { .. } => "api",
            Self::MalformedResponse(_) => "malformed_response",
            Self::EmptyResponse => "empty_response",
            Self::Truncated => "truncated",
        }
    }

    /// Whether sending the same request again may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::EmptyResponse | Self::Truncated => true,
            Self::NotConfigured
            | Self::InvalidCredential
            | Self::Unauthorized { .. }
            | Self::MalformedResponse(_) => false,
        }
    }
}
