use anyhow::Result;
use clap::Parser;
use indexer::FileTextExtractor;
use paperscout::{render, run, AppConfig, Overrides};
use scholar::ScholarClient;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "paperscout")]
#[command(about = "Rank local documents against a topic, falling back to Google Scholar", long_about = None)]
struct Args {
    /// Topic to look for
    topic: String,
    /// Root directory to scan recursively
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Minimum top raw score to trust local results
    #[arg(long)]
    threshold: Option<f64>,
    /// Minimum number of ranked documents to trust local results
    #[arg(long)]
    min_results: Option<usize>,
    /// Number of results to show
    #[arg(long)]
    top: Option<usize>,
    /// Comma-separated file extensions to scan, e.g. pdf,txt
    #[arg(long, value_delimiter = ',')]
    extensions: Option<Vec<String>>,
    /// Extraction threads (1 = no parallelism)
    #[arg(long)]
    jobs: Option<usize>,
    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    config.apply(Overrides {
        threshold: args.threshold,
        min_results: args.min_results,
        top: args.top,
        extensions: args.extensions,
        jobs: args.jobs,
    });
    config.validate()?;

    let web = ScholarClient::new(&config.scholar)?;
    let report = run(&args.root, &args.topic, &config, &FileTextExtractor, &web).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render(&report));
    }
    Ok(())
}
