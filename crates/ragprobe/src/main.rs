use anyhow::Result;
use clap::Parser;
use ragprobe_common::{logger, AppConfig};
use ragprobe_eval::{load_questions, run_retrieval_evaluation, write_chunks_csv, write_eval_csv, write_eval_json};
use ragprobe_ingest::{ingest_dir, ChunkParams, Corpus};
use ragprobe_retriever::{CharCodeEmbedder, VectorIndex};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ragprobe")]
#[command(about = "RagProbe - retrieval-quality evaluation for a document QA pipeline", long_about = None)]
struct Cli {
    /// Directory containing extracted plain-text documents
    #[arg(long)]
    docs_dir: Option<PathBuf>,

    /// Export chunks to CSV for debugging
    #[arg(long)]
    export_chunks: bool,

    /// Path for the exported chunks CSV
    #[arg(long)]
    chunks_csv: Option<PathBuf>,

    /// Run retrieval evaluation against the labeled question set
    #[arg(long)]
    run_retrieval_eval: bool,

    /// Path to the labeled questions CSV
    #[arg(long)]
    questions_csv: Option<PathBuf>,

    /// Path for the evaluation results CSV
    #[arg(long)]
    eval_output: Option<PathBuf>,

    /// Optional JSON report written alongside the evaluation CSV
    #[arg(long)]
    report_json: Option<PathBuf>,

    /// Print corpus diagnostics (chunk counts and ID mappings)
    #[arg(long)]
    corpus_diag: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

/// Map CLI arguments onto environment variables so AppConfig::from_env
/// picks them up with the right precedence (CLI > env > default)
fn export_cli_overrides(cli: &Cli) {
    let overrides = [
        ("RAGPROBE_DOCS_DIR", cli.docs_dir.as_deref()),
        ("RAGPROBE_CHUNKS_CSV", cli.chunks_csv.as_deref()),
        ("RAGPROBE_QUESTIONS_CSV", cli.questions_csv.as_deref()),
        ("RAGPROBE_EVAL_OUTPUT", cli.eval_output.as_deref()),
    ];
    for (key, value) in overrides {
        if let Some(path) = value {
            std::env::set_var(key, path);
        }
    }
    if let Some(level) = &cli.log_level {
        std::env::set_var("RAGPROBE_LOG_LEVEL", level);
    }
}

fn print_corpus_diagnostics(corpus: &Corpus) {
    println!("\nCorpus diagnostics:\n");

    for (doc, chunk_count) in corpus.doc_counts() {
        println!("Document: {} | Chunks: {}", doc, chunk_count);
    }

    println!("\nTotal chunks across corpus: {}", corpus.len());
    if corpus.truncated() {
        println!("(corpus truncated at the global chunk cap)");
    }

    println!("\nChunk ID → Document ID mapping:");
    for chunk in corpus.chunks() {
        println!("Chunk ID: {} | Document ID: {}", chunk.chunk_id, chunk.doc_id);
    }
    println!();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env before reading config; CLI arguments override env values
    dotenv::dotenv().ok();
    export_cli_overrides(&cli);

    let config = AppConfig::from_env()?;
    logger::init(Some(&config.log_dir), &config.log_level)?;

    tracing::info!("RagProbe starting");
    tracing::info!("  Documents: {}", config.docs_dir.display());
    tracing::info!(
        "  Chunking: size={} overlap={} cap={}",
        config.chunk_size,
        config.chunk_overlap,
        config.global_chunk_cap
    );

    let params = ChunkParams {
        chunk_size: config.chunk_size,
        overlap: config.chunk_overlap,
        max_chunks: config.max_chunks_per_doc,
    };
    let corpus = ingest_dir(&config.docs_dir, &params, config.global_chunk_cap)?;

    if cli.export_chunks {
        write_chunks_csv(&corpus, &config.chunks_csv)?;
    }

    if cli.corpus_diag {
        print_corpus_diagnostics(&corpus);
    }

    let embedder = CharCodeEmbedder::new(config.embedding_dim);
    let index = VectorIndex::build(&corpus, &embedder);

    if cli.run_retrieval_eval {
        let questions = load_questions(&config.questions_csv)?;
        let records = run_retrieval_evaluation(&index, &embedder, &questions, config.inspect_k);

        write_eval_csv(&records, &config.eval_output)?;
        if let Some(json_path) = &cli.report_json {
            write_eval_json(&records, json_path)?;
        }

        tracing::info!(
            "Evaluation complete: {} questions at inspection depth {} (generation top-K {})",
            records.len(),
            config.inspect_k,
            config.generation_top_k
        );
    }

    Ok(())
}
