use ragprobe_common::{RagProbeError, Result};

/// Chunk window parameters
#[derive(Debug, Clone)]
pub struct ChunkParams {
    /// Window size in characters
    pub chunk_size: usize,

    /// Overlap between consecutive windows, in characters
    pub overlap: usize,

    /// Per-document chunk limit
    pub max_chunks: usize,
}

impl Default for ChunkParams {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            overlap: 50,
            max_chunks: 1000,
        }
    }
}

impl ChunkParams {
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(RagProbeError::config("chunk_size must be greater than 0"));
        }
        // overlap >= chunk_size would never advance the window
        if self.overlap >= self.chunk_size {
            return Err(RagProbeError::config(format!(
                "overlap ({}) must be smaller than chunk_size ({})",
                self.overlap, self.chunk_size
            )));
        }
        Ok(())
    }
}

/// Split text into fixed-size overlapping windows.
///
/// Positions are character positions, not byte offsets, so multi-byte
/// text never splits inside a code point. The window that reaches the end
/// of the text is the last one emitted; no empty trailing windows.
///
/// Chunks carry no identity here. Document provenance and global chunk ids
/// are attached by the ingestion orchestrator.
pub fn chunk_text(text: &str, params: &ChunkParams) -> Result<Vec<String>> {
    params.validate()?;

    let chars: Vec<char> = text.chars().collect();
    let text_length = chars.len();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < text_length && chunks.len() < params.max_chunks {
        let end = (start + params.chunk_size).min(text_length);
        chunks.push(chars[start..end].iter().collect());

        if end == text_length {
            break;
        }

        start = end - params.overlap;
    }

    Ok(chunks)
}
