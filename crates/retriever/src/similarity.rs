use crate::embedding::Embedding;

/// Cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude. That keeps empty-text
/// embeddings comparable without NaNs or division errors.
pub fn cosine_similarity(a: &Embedding, b: &Embedding) -> f32 {
    let norm_a = a.dot(a).sqrt();
    let norm_b = b.dot(b).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    a.dot(b) / (norm_a * norm_b)
}
