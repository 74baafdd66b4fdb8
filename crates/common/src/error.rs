/// RagProbe error types
#[derive(Debug, thiserror::Error)]
pub enum RagProbeError {
    /// Document ingestion error
    #[error("Ingest error: {0}")]
    Ingest(String),

    /// Embedding error
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Vector search related error
    #[error("Vector search error: {0}")]
    VectorSearch(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RagProbeError {
    /// Create ingest error
    pub fn ingest<S: Into<String>>(msg: S) -> Self {
        Self::Ingest(msg.into())
    }

    /// Create embedding error
    pub fn embedding<S: Into<String>>(msg: S) -> Self {
        Self::Embedding(msg.into())
    }

    /// Create vector search error
    pub fn vector_search<S: Into<String>>(msg: S) -> Self {
        Self::VectorSearch(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create not found error
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}
