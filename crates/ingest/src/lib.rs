//! RagProbe document ingestion
//!
//! 문서 로딩, 청킹, 코퍼스 구축

pub mod chunker;
pub mod corpus;
pub mod loader;

pub use chunker::{chunk_text, ChunkParams};
pub use corpus::{ingest_dir, ChunkId, ChunkRecord, Corpus};
