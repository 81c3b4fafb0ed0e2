use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use agentgraph::{assemble, extract_all, load_sources, Config};

#[derive(Parser, Debug)]
#[command(name = "agentgraph")]
#[command(about = "Extract an agent/tool/handoff graph from agent SDK source files")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Write output to this file instead of stdout
    #[arg(short, long, global = true)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the merged entity bundle from a .py file or directory
    Extract { path: PathBuf },
    /// Extract and assemble the renderable {nodes, links} graph
    Graph { path: PathBuf },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info")).init();

    let cli = Cli::parse();
    let config = Config::load()?;

    let output = match &cli.command {
        Command::Extract { path } => {
            let sources = load_sources(path)?;
            let bundle = extract_all(&sources, &config.extract);
            log::info!("Extracted {} entities", bundle.len());
            to_json(&bundle, cli.pretty)?
        }
        Command::Graph { path } => {
            let sources = load_sources(path)?;
            let bundle = extract_all(&sources, &config.extract);
            let graph = assemble(&bundle)?;
            log::info!(
                "Assembled graph: {} nodes, {} links",
                graph.nodes.len(),
                graph.links.len()
            );
            to_json(&graph, cli.pretty)?
        }
    };

    match &cli.out {
        Some(path) => {
            std::fs::write(path, output)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            log::info!("Wrote output to {}", path.display());
        }
        None => println!("{}", output),
    }

    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
