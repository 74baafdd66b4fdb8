use ragprobe_ingest::ChunkId;
use ragprobe_retriever::{search, Embedder, VectorIndex};
use serde::Serialize;
use tracing::{debug, info};

use crate::questions::Question;

/// One evaluation row: the gold labels plus the full retrieval ranking.
///
/// No pass/fail here — rank-of-gold, hit@K and friends are downstream
/// computations over the preserved rank order.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationRecord {
    pub question_id: String,
    pub question: String,
    pub gold_chunk_id: ChunkId,
    pub gold_doc_id: String,
    pub retrieved_chunk_ids: Vec<ChunkId>,
}

impl EvaluationRecord {
    /// The retrieved ranking as the report's delimited string form
    pub fn retrieved_ids_joined(&self) -> String {
        self.retrieved_chunk_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// Run retrieval once per question, at inspection depth, in input order.
///
/// `inspect_k` is intentionally deeper than the generation-critical top-K
/// so downstream scoring can tell "retrievable within a generous window"
/// apart from "retrievable within the window actually used for generation".
pub fn run_retrieval_evaluation(
    index: &VectorIndex,
    embedder: &dyn Embedder,
    questions: &[Question],
    inspect_k: usize,
) -> Vec<EvaluationRecord> {
    info!(
        "Running retrieval evaluation: {} questions, inspection depth {}",
        questions.len(),
        inspect_k
    );

    questions
        .iter()
        .map(|question| {
            let hits = search(index, embedder, &question.question_text, inspect_k);
            let retrieved_chunk_ids: Vec<ChunkId> = hits.iter().map(|h| h.chunk_id).collect();

            debug!(
                "Question {}: retrieved {} chunks, gold chunk {}",
                question.question_id,
                retrieved_chunk_ids.len(),
                question.gold_chunk_id
            );

            EvaluationRecord {
                question_id: question.question_id.clone(),
                question: question.question_text.clone(),
                gold_chunk_id: question.gold_chunk_id,
                gold_doc_id: question.gold_doc_id.clone(),
                retrieved_chunk_ids,
            }
        })
        .collect()
}
