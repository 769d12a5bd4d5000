//! TikTok comment sentiment — binary entrypoint.
//! `analyze` runs one CSV batch and prints the report; `serve` boots the Axum API.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use tiktok_sentiment_analyzer::{
    api::{self, AppState},
    config::AppConfig,
    engine,
    loader,
    report::BatchReport,
    telemetry::{self, Metrics},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML config file (defaults to $SENTIMENT_CONFIG_PATH, then config/app.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify every comment of a CSV file and print a summary
    Analyze(AnalyzeArgs),
    /// Serve the HTTP API
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// CSV file to read
    #[arg(short, long, env = "SENTIMENT_INPUT")]
    input: Option<PathBuf>,

    /// Field delimiter (single ASCII character)
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Header name of the comment text column
    #[arg(long)]
    column: Option<String>,

    /// Sample comments shown per label
    #[arg(long)]
    samples: Option<usize>,

    /// Worker threads for scoring
    #[arg(short, long, env = "SENTIMENT_WORKERS")]
    workers: Option<usize>,

    /// Number of most frequent words listed
    #[arg(long)]
    top_words: Option<usize>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Listen address, e.g. 127.0.0.1:8000
    #[arg(short, long, env = "SENTIMENT_BIND")]
    bind: Option<String>,

    /// Worker threads per /batch request
    #[arg(short, long, env = "SENTIMENT_WORKERS")]
    workers: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();

    let cli = Cli::parse();
    let cfg = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Analyze(args) => run_analyze(cfg, args),
        Command::Serve(args) => run_serve(cfg, args).await,
    }
}

fn run_analyze(mut cfg: AppConfig, args: AnalyzeArgs) -> Result<()> {
    if let Some(v) = args.input {
        cfg.input = v;
    }
    if let Some(v) = args.delimiter {
        cfg.delimiter = v;
    }
    if let Some(v) = args.column {
        cfg.text_column = v;
    }
    if let Some(v) = args.samples {
        cfg.sample_size = v;
    }
    if let Some(v) = args.workers {
        cfg.workers = v;
    }
    if let Some(v) = args.top_words {
        cfg.top_words = v;
    }

    let analyzer = cfg.build_analyzer()?;
    let stopwords = cfg.stopwords()?;
    let loaded = loader::load_comments(&cfg.input, cfg.delimiter_byte()?, &cfg.text_column)?;
    info!(total = loaded.comments.len(), "[1/3] normalizing comments and scoring sentiment");

    let results = engine::analyze_batch_parallel(&analyzer, &loaded.comments, cfg.workers);
    info!("[2/3] aggregating results");

    let report = BatchReport::build(&results, cfg.sample_size, &stopwords, cfg.top_words);
    info!("[3/3] rendering report");

    if args.json {
        let out = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{out}");
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

async fn run_serve(mut cfg: AppConfig, args: ServeArgs) -> Result<()> {
    if let Some(v) = args.bind {
        cfg.bind = v;
    }
    if let Some(v) = args.workers {
        cfg.workers = v;
    }

    let analyzer = cfg.build_analyzer()?;
    let metrics = Metrics::init(analyzer.lexicon())?;
    let router = api::create_router(AppState::new(analyzer, cfg.workers)).merge(metrics.router());

    let listener = tokio::net::TcpListener::bind(cfg.bind.as_str())
        .await
        .with_context(|| format!("binding {}", cfg.bind))?;
    info!(bind = %cfg.bind, "listening");
    axum::serve(listener, router).await.context("http server")?;
    Ok(())
}
