use anyhow::Result;
use chat::{answer, ask_json, run};
use clap::{Args, Parser, Subcommand};
use pdfqa_core::config::{CHUNK_OVERLAP, CHUNK_SIZE, DATA_DIR, TOP_K};
use pdfqa_core::{ChunkConfig, KnowledgeBase, LopdfBackend, Settings};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "pdfqa")]
#[command(about = "Answer questions from a folder of PDFs using keyword search", long_about = None)]
struct Cli {
    #[command(flatten)]
    opts: Opts,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct Opts {
    /// Folder scanned for .pdf files (created if missing)
    #[arg(long, env = "PDFQA_FOLDER", default_value = DATA_DIR, global = true)]
    folder: PathBuf,
    /// Number of passages returned per query
    #[arg(long, env = "PDFQA_TOP_K", default_value_t = TOP_K, global = true)]
    top_k: usize,
    /// Passage window length in characters
    #[arg(long, env = "PDFQA_CHUNK_SIZE", default_value_t = CHUNK_SIZE, global = true)]
    chunk_size: usize,
    /// Characters shared between consecutive passages
    #[arg(long, env = "PDFQA_CHUNK_OVERLAP", default_value_t = CHUNK_OVERLAP, global = true)]
    chunk_overlap: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt (default)
    Chat,
    /// Answer a single query and exit
    Ask {
        /// Query text
        #[arg(required = true)]
        query: Vec<String>,
        /// Print results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let settings = Settings {
        folder: cli.opts.folder,
        top_k: cli.opts.top_k,
        chunk: ChunkConfig { size: cli.opts.chunk_size, overlap: cli.opts.chunk_overlap },
    };
    let (kb, report) = KnowledgeBase::open(settings, LopdfBackend)?;
    for w in &report.skipped {
        eprintln!("{w}");
    }

    let k = kb.settings().top_k;
    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run(&kb, stdin.lock(), &mut stdout)
        }
        Commands::Ask { query, json } => {
            let query = query.join(" ");
            if json {
                println!("{}", ask_json(&kb, &query, k)?);
            } else {
                println!("{}", answer(&kb, &query, k));
            }
            Ok(())
        }
    }
}
