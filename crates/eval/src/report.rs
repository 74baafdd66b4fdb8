use std::io::Write;
use std::path::Path;

use ragprobe_common::Result;
use ragprobe_ingest::Corpus;
use tracing::info;

use crate::csv;
use crate::harness::EvaluationRecord;

/// Write the evaluation report CSV.
///
/// One row per question, in question input order. `retrieved_chunk_ids`
/// is the full inspection-depth ranking joined with `|`.
pub fn write_eval_csv(records: &[EvaluationRecord], path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)?;

    file.write_all(
        csv::format_row(&[
            "question_id",
            "question",
            "gold_chunk_id",
            "gold_doc_id",
            "retrieved_chunk_ids",
        ])
        .as_bytes(),
    )?;

    for record in records {
        let gold_chunk_id = record.gold_chunk_id.to_string();
        let retrieved = record.retrieved_ids_joined();
        file.write_all(
            csv::format_row(&[
                &record.question_id,
                &record.question,
                &gold_chunk_id,
                &record.gold_doc_id,
                &retrieved,
            ])
            .as_bytes(),
        )?;
    }

    info!("Retrieval evaluation results saved to {}", path.display());
    Ok(())
}

/// Write the evaluation report as JSON (retrieved ids as an array)
pub fn write_eval_json(records: &[EvaluationRecord], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json)?;

    info!("Retrieval evaluation JSON report saved to {}", path.display());
    Ok(())
}

/// Export chunk text and document provenance for inspection/debugging
pub fn write_chunks_csv(corpus: &Corpus, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)?;

    file.write_all(csv::format_row(&["chunk_id", "doc_id", "text"]).as_bytes())?;

    for chunk in corpus.chunks() {
        let chunk_id = chunk.chunk_id.to_string();
        file.write_all(csv::format_row(&[&chunk_id, &chunk.doc_id, &chunk.text]).as_bytes())?;
    }

    info!("Chunks exported to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ragprobe_ingest::{ingest_dir, ChunkParams};

    fn sample_records() -> Vec<EvaluationRecord> {
        vec![
            EvaluationRecord {
                question_id: "q1".to_string(),
                question: "What is the cap, and when does it fire?".to_string(),
                gold_chunk_id: 1,
                gold_doc_id: "a.txt".to_string(),
                retrieved_chunk_ids: vec![1, 0, 2],
            },
            EvaluationRecord {
                question_id: "q2".to_string(),
                question: "plain question".to_string(),
                gold_chunk_id: 0,
                gold_doc_id: "a.txt".to_string(),
                retrieved_chunk_ids: vec![0],
            },
        ]
    }

    #[test]
    fn test_eval_csv_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");

        write_eval_csv(&sample_records(), &path).unwrap();

        let parsed = csv::parse(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 3); // header + 2 rows
        assert_eq!(
            parsed[0],
            vec![
                "question_id",
                "question",
                "gold_chunk_id",
                "gold_doc_id",
                "retrieved_chunk_ids"
            ]
        );
        assert_eq!(parsed[1][1], "What is the cap, and when does it fire?");
        assert_eq!(parsed[1][4], "1|0|2");
        assert_eq!(parsed[2][4], "0");
    }

    #[test]
    fn test_eval_json_keeps_ids_as_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");

        write_eval_json(&sample_records(), &path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json[0]["retrieved_chunk_ids"], serde_json::json!([1, 0, 2]));
        assert_eq!(json[1]["question_id"], "q2");
    }

    #[test]
    fn test_chunks_csv_in_id_order() {
        let dir = tempfile::tempdir().unwrap();
        let text: String = "chunk export fixture text, with a comma "
            .chars()
            .cycle()
            .take(1100)
            .collect();
        std::fs::write(dir.path().join("doc.txt"), &text).unwrap();
        let corpus = ingest_dir(dir.path(), &ChunkParams::default(), 1000).unwrap();

        let path = dir.path().join("chunks.csv");
        write_chunks_csv(&corpus, &path).unwrap();

        let parsed = csv::parse(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.len(), corpus.len() + 1);
        for (i, row) in parsed.iter().skip(1).enumerate() {
            assert_eq!(row[0], i.to_string());
            assert_eq!(row[2], corpus.chunks()[i].text);
        }
    }
}
