use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use agentgraph::stage::stage_sources;
use agentgraph::{load_sources, Config};

#[derive(Parser, Debug)]
#[command(name = "stage")]
#[command(about = "Stage .py sources as a JSON blob for the visualization page")]
struct Args {
    /// Python file or directory to stage
    path: PathBuf,

    /// Override the staging output path (default: stage.output_path from config)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info")).init();

    let args = Args::parse();
    let config = Config::load()?;

    let sources = load_sources(&args.path)?;
    let output = args
        .out
        .unwrap_or_else(|| config.stage_output().to_path_buf());

    stage_sources(&sources, &output)?;

    println!(
        "Staged {} file(s) to {}. Open the visualization page to view the graph.",
        sources.len(),
        output.display()
    );
    Ok(())
}
