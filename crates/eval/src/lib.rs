//! RagProbe retrieval evaluation
//!
//! 질문 데이터셋 검증, 평가 하네스, 리포트 출력

pub mod csv;
pub mod harness;
pub mod questions;
pub mod report;

pub use harness::{run_retrieval_evaluation, EvaluationRecord};
pub use questions::{load_questions, Question};
pub use report::{write_chunks_csv, write_eval_csv, write_eval_json};
