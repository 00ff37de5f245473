//! textmill — chunk a document from the command line.
//!
//! Reads a file (or stdin), splits it with the configured strategy, and
//! prints the chunks. Useful for inspecting chunker output before wiring it
//! into an embedding pipeline.
//!
//! Configuration precedence: flag > environment (`CHUNK_STRATEGY`,
//! `CHUNK_SIZE`, `CHUNK_OVERLAP`) > built-in defaults.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use textmill_core::config::load_dotenv;
use textmill_core::{chunk_text, optimal_chunk_size, validate_chunks, ChunkConfig, ChunkStrategy};

// ── CLI ─────────────────────────────────────────────────────────────

/// Split a document into embedding-ready chunks.
#[derive(Parser, Debug)]
#[command(name = "textmill", version, about)]
struct Cli {
    /// Input file. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Chunking strategy: sentence, paragraph, or fixed.
    #[arg(long)]
    strategy: Option<String>,

    /// Soft upper bound on a chunk's length in characters.
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Characters of trailing context carried into the next chunk.
    #[arg(long)]
    overlap: Option<usize>,

    /// Drop chunks that fail the quality filter.
    #[arg(long)]
    validate: bool,

    /// Print the suggested chunk size for this input and exit.
    #[arg(long)]
    estimate: bool,

    /// Emit chunks as a JSON array instead of annotated text.
    #[arg(long)]
    json: bool,
}

// ── main ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    load_dotenv();
    let cli = Cli::parse();

    let mut config = ChunkConfig::from_env();
    if let Some(strategy) = &cli.strategy {
        config.strategy = ChunkStrategy::parse(strategy);
    }
    if let Some(chunk_size) = cli.chunk_size {
        config.chunk_size = chunk_size.max(1);
    }
    if let Some(overlap) = cli.overlap {
        config.overlap = overlap;
    }
    config.log_summary();

    let content = match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    if cli.estimate {
        println!("{}", optimal_chunk_size(&content, &config));
        return Ok(());
    }

    let mut chunks = chunk_text(&content, &config);
    if cli.validate {
        let before = chunks.len();
        chunks = validate_chunks(&chunks);
        info!(dropped = before - chunks.len(), "validated chunks");
    }
    info!(chunks = chunks.len(), "chunked input");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&chunks)?);
    } else {
        for (i, chunk) in chunks.iter().enumerate() {
            println!("── chunk {i} ({} chars)", chunk.chars().count());
            println!("{chunk}");
            println!();
        }
    }

    Ok(())
}
