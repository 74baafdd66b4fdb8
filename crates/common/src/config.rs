use crate::error::RagProbeError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// RagProbe application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory of extracted plain-text documents
    pub docs_dir: PathBuf,

    /// Chunk export CSV path
    pub chunks_csv: PathBuf,

    /// Labeled questions CSV path
    pub questions_csv: PathBuf,

    /// Evaluation report CSV path
    pub eval_output: PathBuf,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// Chunk window size in characters
    pub chunk_size: usize,

    /// Overlap between consecutive windows, in characters
    pub chunk_overlap: usize,

    /// Per-document chunk limit
    pub max_chunks_per_doc: usize,

    /// Corpus-wide chunk cap (diagnostic truncation limit)
    pub global_chunk_cap: usize,

    /// Embedding vector dimension
    pub embedding_dim: usize,

    /// Retrieval inspection depth for evaluation
    pub inspect_k: usize,

    /// Generation-critical top-K (recorded for downstream scoring)
    pub generation_top_k: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("./data/docs"),
            chunks_csv: PathBuf::from("./data/chunks_output.csv"),
            questions_csv: PathBuf::from("./data/question_input.csv"),
            eval_output: PathBuf::from("./data/retrieval_results.csv"),
            log_dir: PathBuf::from("./data/log"),
            log_level: "info".to_string(),
            chunk_size: 500,
            chunk_overlap: 50,
            max_chunks_per_doc: 1000,
            global_chunk_cap: 1000,
            embedding_dim: 128,
            inspect_k: 50,
            generation_top_k: 4,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, RagProbeError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();
        let config = Self {
            docs_dir: Self::get_env_path("RAGPROBE_DOCS_DIR")
                .unwrap_or(defaults.docs_dir),
            chunks_csv: Self::get_env_path("RAGPROBE_CHUNKS_CSV")
                .unwrap_or(defaults.chunks_csv),
            questions_csv: Self::get_env_path("RAGPROBE_QUESTIONS_CSV")
                .unwrap_or(defaults.questions_csv),
            eval_output: Self::get_env_path("RAGPROBE_EVAL_OUTPUT")
                .unwrap_or(defaults.eval_output),
            log_dir: Self::get_env_path("RAGPROBE_LOG_DIR")
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("RAGPROBE_LOG_LEVEL")
                .unwrap_or(defaults.log_level),
            chunk_size: Self::get_env_usize("RAGPROBE_CHUNK_SIZE")
                .unwrap_or(defaults.chunk_size),
            chunk_overlap: Self::get_env_usize("RAGPROBE_CHUNK_OVERLAP")
                .unwrap_or(defaults.chunk_overlap),
            max_chunks_per_doc: Self::get_env_usize("RAGPROBE_MAX_CHUNKS_PER_DOC")
                .unwrap_or(defaults.max_chunks_per_doc),
            global_chunk_cap: Self::get_env_usize("RAGPROBE_GLOBAL_CHUNK_CAP")
                .unwrap_or(defaults.global_chunk_cap),
            embedding_dim: Self::get_env_usize("RAGPROBE_EMBEDDING_DIM")
                .unwrap_or(defaults.embedding_dim),
            inspect_k: Self::get_env_usize("RAGPROBE_INSPECT_K")
                .unwrap_or(defaults.inspect_k),
            generation_top_k: Self::get_env_usize("RAGPROBE_GENERATION_TOP_K")
                .unwrap_or(defaults.generation_top_k),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    /// Get usize from environment variable
    fn get_env_usize(key: &str) -> Option<usize> {
        std::env::var(key).ok().and_then(|s| s.parse().ok())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), RagProbeError> {
        if self.chunk_size == 0 {
            return Err(RagProbeError::config("chunk_size must be greater than 0"));
        }

        // An overlap >= chunk_size would never advance the chunk window
        if self.chunk_overlap >= self.chunk_size {
            return Err(RagProbeError::config(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }

        if self.embedding_dim == 0 {
            return Err(RagProbeError::config("embedding_dim must be greater than 0"));
        }

        if self.inspect_k == 0 {
            return Err(RagProbeError::config("inspect_k must be greater than 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.chunk_size, 500);
        assert_eq!(config.chunk_overlap, 50);
        assert_eq!(config.embedding_dim, 128);
        assert_eq!(config.inspect_k, 50);
    }

    #[test]
    fn test_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let mut invalid = AppConfig::default();
        invalid.chunk_overlap = invalid.chunk_size;
        assert!(invalid.validate().is_err());

        let mut invalid = AppConfig::default();
        invalid.chunk_size = 0;
        assert!(invalid.validate().is_err());

        let mut invalid = AppConfig::default();
        invalid.embedding_dim = 0;
        assert!(invalid.validate().is_err());
    }
}
