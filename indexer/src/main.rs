use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use textdex_core::write;
use textdex_indexer::{build_index, run_queries};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Build a word-location index over a text corpus and answer partial-search queries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index every .txt file under the input directory
    Build {
        /// Corpus root directory
        #[arg(long)]
        input: PathBuf,
        /// Where to write the index document
        #[arg(long)]
        index_out: Option<PathBuf>,
        /// Query file, one query per line
        #[arg(long)]
        queries: Option<PathBuf>,
        /// Where to write the query results document
        #[arg(long)]
        results_out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            index_out,
            queries,
            results_out,
        } => {
            let index = build_index(&input);

            if let Some(path) = index_out {
                if let Err(err) = write::write_index(&path, &index) {
                    tracing::warn!(file = %path.display(), %err, "error writing index document");
                }
            }

            if let Some(query_file) = queries {
                let results = run_queries(&query_file, &index);
                if let Some(path) = results_out {
                    if let Err(err) = write::write_results(&path, &results) {
                        tracing::warn!(file = %path.display(), %err, "error writing results document");
                    }
                }
            }
            Ok(())
        }
    }
}
