use chrono::{DateTime, Utc};
use ragprobe_ingest::{ChunkId, Corpus};
use tracing::info;

use crate::embedding::{Embedder, Embedding};

/// One indexed chunk with its precomputed embedding
#[derive(Debug, Clone)]
pub struct IndexRecord {
    pub chunk_id: ChunkId,
    pub doc_id: String,
    pub text: String,
    pub embedding: Embedding,
}

/// In-memory vector index for one run.
///
/// Records sit in chunk-id order; the index is read-only once built, which
/// is what keeps search results reproducible (and would make concurrent
/// search safe). Rebuilding means constructing a new index.
#[derive(Debug)]
pub struct VectorIndex {
    records: Vec<IndexRecord>,
    dimension: usize,
    built_at: DateTime<Utc>,
}

impl VectorIndex {
    /// Embed every chunk of the corpus, in table order, into a new index
    pub fn build(corpus: &Corpus, embedder: &dyn Embedder) -> Self {
        let records = corpus
            .chunks()
            .iter()
            .map(|chunk| IndexRecord {
                chunk_id: chunk.chunk_id,
                doc_id: chunk.doc_id.clone(),
                text: chunk.text.clone(),
                embedding: embedder.embed(&chunk.text),
            })
            .collect::<Vec<_>>();

        let index = Self {
            records,
            dimension: embedder.dimension(),
            built_at: Utc::now(),
        };

        info!(
            "Vector index built: {} records, dimension {}",
            index.len(),
            index.dimension
        );
        index
    }

    pub fn records(&self) -> &[IndexRecord] {
        &self.records
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::CharCodeEmbedder;
    use ragprobe_ingest::{ingest_dir, ChunkParams};
    use std::io::Write;

    fn sample_corpus() -> Corpus {
        let dir = tempfile::tempdir().unwrap();
        let text: String = "sample document text ".chars().cycle().take(900).collect();
        let mut file = std::fs::File::create(dir.path().join("doc.txt")).unwrap();
        file.write_all(text.as_bytes()).unwrap();
        ingest_dir(dir.path(), &ChunkParams::default(), 1000).unwrap()
    }

    #[test]
    fn test_build_preserves_chunk_order() {
        let corpus = sample_corpus();
        let index = VectorIndex::build(&corpus, &CharCodeEmbedder::default());

        assert_eq!(index.len(), corpus.len());
        for (i, record) in index.records().iter().enumerate() {
            assert_eq!(record.chunk_id, i as ChunkId);
            assert_eq!(record.text, corpus.chunks()[i].text);
        }
    }

    #[test]
    fn test_record_embeddings_match_embedder() {
        let corpus = sample_corpus();
        let embedder = CharCodeEmbedder::default();
        let index = VectorIndex::build(&corpus, &embedder);

        for record in index.records() {
            assert_eq!(record.embedding, embedder.embed(&record.text));
            assert_eq!(record.embedding.len(), index.dimension());
        }
    }
}
