use std::path::Path;

use ragprobe_common::{RagProbeError, Result};
use tracing::{info, warn};

use crate::chunker::{chunk_text, ChunkParams};
use crate::loader::load_document;

/// Process-unique chunk identity, assigned 0,1,2,... in creation order
pub type ChunkId = u64;

/// One chunk with its document provenance
#[derive(Debug, Clone)]
pub struct ChunkRecord {
    /// Global chunk id
    pub chunk_id: ChunkId,

    /// Source document id (filename)
    pub doc_id: String,

    /// Chunk text
    pub text: String,
}

/// The global chunk table for one run.
///
/// `chunks[i].chunk_id == i`, so the table doubles as an insertion-ordered
/// id -> record mapping. Records are immutable once appended.
#[derive(Debug, Default)]
pub struct Corpus {
    chunks: Vec<ChunkRecord>,

    /// (doc_id, chunk count) in processing order
    doc_counts: Vec<(String, usize)>,

    /// Set when the global cap cut ingestion short
    truncated: bool,
}

impl Corpus {
    /// Append a chunk, assigning the next global id
    fn push(&mut self, doc_id: &str, text: String) -> ChunkId {
        let chunk_id = self.chunks.len() as ChunkId;
        self.chunks.push(ChunkRecord {
            chunk_id,
            doc_id: doc_id.to_string(),
            text,
        });
        chunk_id
    }

    pub fn chunks(&self) -> &[ChunkRecord] {
        &self.chunks
    }

    pub fn get(&self, chunk_id: ChunkId) -> Option<&ChunkRecord> {
        self.chunks.get(chunk_id as usize)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Per-document chunk counts in processing order
    pub fn doc_counts(&self) -> &[(String, usize)] {
        &self.doc_counts
    }

    /// Whether the global chunk cap cut ingestion short
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

/// Ingest every `.txt` document under `dir` into a global chunk table.
///
/// Files are processed in sorted filename order so chunk ids are identical
/// across runs. The global cap is a hard ceiling: once `cap` chunks exist,
/// a warning is logged and remaining chunks and remaining documents are
/// skipped entirely, leaving a partial but well-defined corpus.
pub fn ingest_dir(dir: &Path, params: &ChunkParams, cap: usize) -> Result<Corpus> {
    params.validate()?;

    let mut filenames: Vec<String> = std::fs::read_dir(dir)
        .map_err(|e| {
            RagProbeError::ingest(format!("Cannot read document directory {}: {}", dir.display(), e))
        })?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "txt"))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    filenames.sort();

    let mut corpus = Corpus::default();

    'documents: for filename in &filenames {
        let text = load_document(&dir.join(filename))?;
        let doc_chunks = chunk_text(&text, params)?;
        let mut kept = 0usize;

        for chunk in doc_chunks {
            if corpus.len() >= cap {
                warn!(
                    "Global chunk cap ({}) reached at document {}; corpus truncated for bounded diagnostic evaluation",
                    cap, filename
                );
                corpus.truncated = true;
                corpus.doc_counts.push((filename.clone(), kept));
                break 'documents;
            }
            corpus.push(filename, chunk);
            kept += 1;
        }

        corpus.doc_counts.push((filename.clone(), kept));
    }

    if corpus.is_empty() {
        return Err(RagProbeError::ingest(format!(
            "No document chunks were ingested from {}",
            dir.display()
        )));
    }

    info!(
        "Ingested {} chunks from {} documents",
        corpus.len(),
        corpus.doc_counts.len()
    );

    Ok(corpus)
}
