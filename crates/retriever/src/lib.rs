//! RagProbe retrieval engine
//!
//! 임베딩, 벡터 인덱스, 유사도 검색

pub mod embedding;
pub mod index;
pub mod search;
pub mod similarity;

pub use embedding::{CharCodeEmbedder, Embedder, Embedding};
pub use index::{IndexRecord, VectorIndex};
pub use search::{search, SearchHit};
pub use similarity::cosine_similarity;
