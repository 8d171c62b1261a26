//! Extract links from text on the command line
//!
//! Run: cargo run --bin linkpure -- "see https://example.com, and magnet:?xt=urn:btih:abc"
//!      pbpaste | cargo run --bin linkpure -- --json

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use linkpure::{ExtractorConfig, LinkExtractor, LinkReport};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "linkpure", about = "Extract and classify links from pasted text")]
struct Args {
    /// Text to scan; reads stdin when neither TEXT nor --file is given
    text: Vec<String>,

    /// Read text from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Extractor configuration (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print links with category, icon and colors as JSON
    #[arg(long, conflicts_with = "count")]
    json: bool,

    /// Print only the number of links found
    #[arg(long)]
    count: bool,

    /// Log detector passes to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            ExtractorConfig::from_json(&json)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => ExtractorConfig::default(),
    };
    let extractor = LinkExtractor::new(&config)?;
    tracing::debug!(config = ?extractor.config(), "link extractor ready");

    let text = read_input(&args)?;
    let result = extractor.extract(&text);
    if let Some(diagnostic) = result.diagnostic {
        bail!("link extraction failed: {}", diagnostic);
    }

    if args.count {
        println!("{}", result.link_count);
    } else if args.json {
        let reports: Vec<LinkReport> = result.links.into_iter().map(LinkReport::new).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for link in &result.links {
            println!("{}", link);
        }
    }
    Ok(())
}

fn read_input(args: &Args) -> Result<String> {
    if let Some(path) = &args.file {
        return fs::read_to_string(path).with_context(|| format!("reading {}", path.display()));
    }
    if !args.text.is_empty() {
        return Ok(args.text.join(" "));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("reading stdin")?;
    Ok(text)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
