use ragprobe_ingest::ChunkId;
use tracing::debug;

use crate::embedding::Embedder;
use crate::index::VectorIndex;
use crate::similarity::cosine_similarity;

/// One ranked search result
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub chunk_id: ChunkId,
    pub doc_id: String,
    pub text: String,
    pub score: f32,
}

/// Rank every index record against the query and return the top `top_k`.
///
/// Exhaustive linear scan; the query is embedded once. The sort is stable
/// and uses a total order on scores, so exact ties keep the index's
/// insertion order and results are identical across runs. A `top_k` larger
/// than the index returns every record.
pub fn search(
    index: &VectorIndex,
    embedder: &dyn Embedder,
    query: &str,
    top_k: usize,
) -> Vec<SearchHit> {
    let query_embedding = embedder.embed(query);

    let mut hits: Vec<SearchHit> = index
        .records()
        .iter()
        .map(|record| SearchHit {
            chunk_id: record.chunk_id,
            doc_id: record.doc_id.clone(),
            text: record.text.clone(),
            score: cosine_similarity(&query_embedding, &record.embedding),
        })
        .collect();

    // sort_by is stable; total_cmp keeps tied scores in insertion order
    hits.sort_by(|a, b| b.score.total_cmp(&a.score));
    hits.truncate(top_k);

    debug!(
        "Search over {} records returned {} hits (top_k={})",
        index.len(),
        hits.len(),
        top_k
    );

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::{CharCodeEmbedder, Embedder, Embedding};
    use ragprobe_ingest::{ingest_dir, ChunkParams};
    use std::io::Write;

    fn small_index() -> (VectorIndex, CharCodeEmbedder) {
        let dir = tempfile::tempdir().unwrap();
        let text: String = "retrieval quality evaluation corpus "
            .chars()
            .cycle()
            .take(1300)
            .collect();
        let mut file = std::fs::File::create(dir.path().join("doc.txt")).unwrap();
        file.write_all(text.as_bytes()).unwrap();

        let corpus = ingest_dir(dir.path(), &ChunkParams::default(), 1000).unwrap();
        let embedder = CharCodeEmbedder::default();
        let index = VectorIndex::build(&corpus, &embedder);
        (index, embedder)
    }

    #[test]
    fn test_top_k_bound() {
        let (index, embedder) = small_index();
        let n = index.len();
        for k in [0, 1, 2, n, n + 10] {
            let hits = search(&index, &embedder, "query", k);
            assert_eq!(hits.len(), k.min(n));
        }
    }

    #[test]
    fn test_exact_chunk_text_ranks_first_with_score_one() {
        let (index, embedder) = small_index();
        let gold = index.records()[1].clone();

        let hits = search(&index, &embedder, &gold.text, index.len());

        assert_eq!(hits[0].chunk_id, gold.chunk_id);
        assert!((hits[0].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_search_is_deterministic() {
        let (index, embedder) = small_index();
        let first = search(&index, &embedder, "evaluation corpus", 10);
        let second = search(&index, &embedder, "evaluation corpus", 10);

        let ids = |hits: &[SearchHit]| hits.iter().map(|h| h.chunk_id).collect::<Vec<_>>();
        let scores = |hits: &[SearchHit]| hits.iter().map(|h| h.score).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(scores(&first), scores(&second));
    }

    #[test]
    fn test_empty_query_scores_all_zero() {
        let (index, embedder) = small_index();
        let hits = search(&index, &embedder, "", index.len());

        assert_eq!(hits.len(), index.len());
        assert!(hits.iter().all(|h| h.score == 0.0));
        // All scores tie at 0.0, so insertion order must survive
        for (i, hit) in hits.iter().enumerate() {
            assert_eq!(hit.chunk_id, i as u64);
        }
    }

    /// Embedder that maps every text to the same vector, forcing full ties
    struct ConstantEmbedder;

    impl Embedder for ConstantEmbedder {
        fn dimension(&self) -> usize {
            4
        }

        fn embed(&self, _text: &str) -> Embedding {
            ndarray::array![1.0_f32, 2.0, 3.0, 4.0]
        }
    }

    #[test]
    fn test_tied_scores_keep_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let text: String = "tied score ordering check document ".chars().cycle().take(1300).collect();
        let mut file = std::fs::File::create(dir.path().join("doc.txt")).unwrap();
        file.write_all(text.as_bytes()).unwrap();
        let corpus = ingest_dir(dir.path(), &ChunkParams::default(), 1000).unwrap();

        let embedder = ConstantEmbedder;
        let index = VectorIndex::build(&corpus, &embedder);
        let hits = search(&index, &embedder, "anything", index.len());

        for (i, hit) in hits.iter().enumerate() {
            assert_eq!(hit.chunk_id, i as u64);
            assert!((hit.score - 1.0).abs() < 1e-6);
        }
    }
}
