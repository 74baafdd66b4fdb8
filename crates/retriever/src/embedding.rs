use ndarray::Array1;

/// Fixed-dimension embedding vector
pub type Embedding = Array1<f32>;

/// Text embedding capability.
///
/// Implementations must be deterministic within a run and return a vector
/// of exactly `dimension()` entries for any input, including the empty
/// string. A semantic model can be swapped in behind this trait without
/// touching the index, search, or evaluation layers.
pub trait Embedder {
    fn dimension(&self) -> usize;

    fn embed(&self, text: &str) -> Embedding;
}

/// Diagnostic embedder used only to illustrate retrieval behavior.
///
/// Position i holds the code point of the i-th character; everything past
/// the text length (or past the dimension) stays zero. Intentionally
/// simplistic and NOT a semantic embedding.
#[derive(Debug, Clone)]
pub struct CharCodeEmbedder {
    dimension: usize,
}

impl CharCodeEmbedder {
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Default for CharCodeEmbedder {
    fn default() -> Self {
        Self::new(128)
    }
}

impl Embedder for CharCodeEmbedder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed(&self, text: &str) -> Embedding {
        let mut embedding = Array1::zeros(self.dimension);
        for (i, ch) in text.chars().take(self.dimension).enumerate() {
            embedding[i] = ch as u32 as f32;
        }
        embedding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_is_deterministic() {
        let embedder = CharCodeEmbedder::default();
        assert_eq!(embedder.embed("same text"), embedder.embed("same text"));
    }

    #[test]
    fn test_empty_text_gives_zero_vector() {
        let embedder = CharCodeEmbedder::default();
        let embedding = embedder.embed("");
        assert_eq!(embedding.len(), 128);
        assert!(embedding.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_char_codes_and_zero_padding() {
        let embedder = CharCodeEmbedder::new(8);
        let embedding = embedder.embed("ab");
        assert_eq!(embedding[0], 'a' as u32 as f32);
        assert_eq!(embedding[1], 'b' as u32 as f32);
        assert!(embedding.iter().skip(2).all(|&v| v == 0.0));
    }

    #[test]
    fn test_long_text_truncated_to_dimension() {
        let embedder = CharCodeEmbedder::new(4);
        let embedding = embedder.embed("abcdefgh");
        assert_eq!(embedding.len(), 4);
        assert_eq!(embedding[3], 'd' as u32 as f32);
    }

    #[test]
    fn test_non_ascii_characters() {
        let embedder = CharCodeEmbedder::new(4);
        let embedding = embedder.embed("µ°");
        assert_eq!(embedding[0], 0xB5 as f32);
        assert_eq!(embedding[1], 0xB0 as f32);
    }
}
