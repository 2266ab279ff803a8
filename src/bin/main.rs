//! Visualization graph extraction CLI
//!
//! Command-line tool for extracting node/edge graphs from JSON-LD documents
//! and inspecting their context and dialect.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use jsonld_vizgraph::{
    detect_format, load_document, process_document, ContextResolver, GraphError,
};

#[derive(Parser)]
#[command(name = "jsonld-vizgraph")]
#[command(about = "Extract visualization-ready property graphs from JSON-LD documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a node/edge graph from a document
    Extract(ExtractArgs),
    /// Report a document's dialect and prefix table without extracting
    Inspect(InspectArgs),
}

#[derive(Args)]
struct ExtractArgs {
    /// Path or URL of the JSON-LD (or plain nodes/edges) document
    source: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Args)]
struct InspectArgs {
    /// Path or URL of the document
    source: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

/// Write output to file or stdout
fn write_output(content: &str, output: Option<&PathBuf>) -> Result<(), GraphError> {
    match output {
        Some(path) => {
            fs::write(path, content)?;
            eprintln!("Wrote graph to {}", path.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

fn run_extract(args: ExtractArgs) -> Result<(), GraphError> {
    let document = load_document(&args.source)?;
    let graph = process_document(&document)?;

    eprintln!(
        "Extracted {} nodes and {} edges ({})",
        graph.metadata.total_nodes, graph.metadata.total_edges, graph.metadata.format
    );

    let content = match args.format {
        OutputFormat::Json => graph.to_json_string(args.pretty)?,
        OutputFormat::Csv => graph.to_csv(),
    };
    write_output(&content, args.output.as_ref())
}

fn run_inspect(args: InspectArgs) -> Result<(), GraphError> {
    let document = load_document(&args.source)?;

    println!("Format: {}", detect_format(&document));

    let mut resolver = ContextResolver::new();
    resolver.process_context(document.get("@context"));
    if resolver.prefixes().is_empty() {
        println!("Prefixes: none");
    } else {
        println!("Prefixes:");
        for (prefix, iri) in resolver.prefixes() {
            println!("  {} -> {}", prefix, iri);
        }
    }

    let item_count = match document.get("@graph") {
        Some(serde_json::Value::Array(items)) => items.len(),
        _ => 1,
    };
    println!("Graph items: {}", item_count);

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract(args) => run_extract(args),
        Commands::Inspect(args) => run_inspect(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
