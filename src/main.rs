use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use modgraph::graph::DependencyGraph;
use modgraph::parser;
use modgraph::render::{self, RenderFormat};

const LONG_ABOUT: &str = "\
modgraph parses the output of 'go mod graph' (one 'from to' pair per line)
and renders it as a plaintext tree, an interactive HTML page, a Mermaid
flowchart or a Graphviz DOT document.

Example usage:
  go mod graph > deps.graph
  modgraph deps.graph
  go mod graph | modgraph -f dot | dot -Tsvg > deps.svg
  modgraph -f html -o deps.html deps.graph";

#[derive(Parser)]
#[command(name = "modgraph")]
#[command(version, about = "Visualize module dependency graphs", long_about = LONG_ABOUT)]
struct Cli {
    /// Edge list to read (omit or use '-' for stdin)
    input: Option<PathBuf>,

    /// Output format (text, html, mermaid, dot)
    #[arg(short, long, env = "MODGRAPH_FORMAT", default_value = "text")]
    format: RenderFormat,

    /// Output file (omit or use '-' for stdout)
    #[arg(short, long, env = "MODGRAPH_OUTPUT")]
    output: Option<PathBuf>,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Treats an absent path or `-` as the standard stream.
fn file_arg(path: &Option<PathBuf>) -> Option<&Path> {
    path.as_deref().filter(|p| *p != Path::new("-"))
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "modgraph=warn",
        1 => "modgraph=info",
        _ => "modgraph=debug",
    };

    // Logs go to stderr; stdout carries the rendered graph
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_graph(input: Option<&Path>) -> Result<DependencyGraph> {
    match input {
        Some(path) => {
            info!("Reading module graph from {}", path.display());
            parser::parse_file(path)
                .with_context(|| format!("failed to parse graph file {}", path.display()))
        }
        None => {
            info!("Reading module graph from stdin");
            parser::parse_reader(io::stdin().lock()).context("failed to parse graph from stdin")
        }
    }
}

fn write_graph(format: RenderFormat, graph: &DependencyGraph, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            render::render(format, graph, &mut writer).context("failed to render graph")?;
            writer.flush().context("failed to render graph")?;
            eprintln!(
                "Successfully generated {} output in {}",
                format,
                path.display()
            );
        }
        None => {
            let mut writer = BufWriter::new(io::stdout().lock());
            render::render(format, graph, &mut writer).context("failed to render graph")?;
            writer.flush().context("failed to render graph")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Parse everything before touching the output so a bad input leaves no file behind
    let graph = read_graph(file_arg(&cli.input))?;
    info!(
        "Parsed {} dependencies across {} modules (root: {})",
        graph.edge_count(),
        graph.module_count(),
        graph.root()
    );

    write_graph(cli.format, &graph, file_arg(&cli.output))
}
