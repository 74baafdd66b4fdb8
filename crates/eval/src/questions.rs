use std::path::Path;

use ragprobe_common::{RagProbeError, Result};
use ragprobe_ingest::ChunkId;
use tracing::info;

use crate::csv;

/// One gold-labeled question
#[derive(Debug, Clone)]
pub struct Question {
    pub question_id: String,
    pub question_text: String,
    pub gold_chunk_id: ChunkId,
    pub gold_doc_id: String,
}

const REQUIRED_COLUMNS: [&str; 4] = [
    "question_id",
    "question_text",
    "gold_chunk_id",
    "gold_doc_id",
];

/// Load the labeled question dataset from a CSV file.
///
/// Columns are located by header name, so column order is free. A dataset
/// missing any required column is a fatal input error; there is no
/// partial-success mode for a malformed dataset.
pub fn load_questions(path: &Path) -> Result<Vec<Question>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        RagProbeError::invalid_input(format!(
            "Cannot read questions CSV {}: {}",
            path.display(),
            e
        ))
    })?;

    let records = csv::parse(&text)?;
    let mut rows = records.into_iter();
    let header = rows
        .next()
        .ok_or_else(|| RagProbeError::invalid_input("Questions CSV is empty"))?;

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !header.iter().any(|h| h == *col))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(RagProbeError::invalid_input(format!(
            "Questions CSV must contain columns {:?}; missing: {}",
            REQUIRED_COLUMNS,
            missing.join(", ")
        )));
    }

    let column = |name: &str| header.iter().position(|h| h == name);
    let id_col = column("question_id").unwrap_or_default();
    let text_col = column("question_text").unwrap_or_default();
    let gold_chunk_col = column("gold_chunk_id").unwrap_or_default();
    let gold_doc_col = column("gold_doc_id").unwrap_or_default();

    let mut questions = Vec::new();
    for (row_number, row) in rows.enumerate() {
        let field = |col: usize| -> Result<&String> {
            row.get(col).ok_or_else(|| {
                RagProbeError::invalid_input(format!(
                    "Questions CSV row {} has too few fields",
                    row_number + 2
                ))
            })
        };

        let gold_chunk_raw = field(gold_chunk_col)?;
        let gold_chunk_id: ChunkId = gold_chunk_raw.trim().parse().map_err(|_| {
            RagProbeError::invalid_input(format!(
                "Questions CSV row {}: gold_chunk_id '{}' is not an integer",
                row_number + 2,
                gold_chunk_raw
            ))
        })?;

        questions.push(Question {
            question_id: field(id_col)?.clone(),
            question_text: field(text_col)?.clone(),
            gold_chunk_id,
            gold_doc_id: field(gold_doc_col)?.clone(),
        });
    }

    info!("Loaded {} labeled questions from {}", questions.len(), path.display());

    Ok(questions)
}
