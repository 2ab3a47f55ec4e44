mod logging;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use schemaviz_acquire::{AcquireOptions, acquire_schema};
use schemaviz_core::{Error as CoreError, build_schema_graph};
use schemaviz_render::render_dot;
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "schemaviz",
    version,
    about = "Render a database schema as a Graphviz diagram"
)]
struct Cli {
    /// Output path for the rendered DOT document.
    #[arg(long, value_name = "PATH")]
    out: PathBuf,
    /// Schema document on local disk (local mode).
    #[arg(long, value_name = "PATH", conflicts_with_all = ["address", "db"])]
    schema: Option<PathBuf>,
    /// Schema server address, e.g. 192.168.1.1:6640 (remote mode).
    #[arg(long, value_name = "ADDRESS", requires = "db")]
    address: Option<String>,
    /// Database name to request from the server (remote mode).
    #[arg(long, value_name = "NAME", requires = "address")]
    db: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Core(CoreError::DatabaseNotFound {
            requested,
            available,
        })) => {
            eprintln!("db {requested} not found, available dbs are {available:?}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let options = AcquireOptions {
        schema_path: cli.schema,
        address: cli.address,
        database: cli.db,
    };

    let source = options.source()?;
    tracing::info!(event = "acquisition_started", mode = source.mode_name());

    let schema = acquire_schema(&options).await?;
    tracing::info!(
        event = "schema_acquired",
        database = %schema.name,
        version = %schema.version,
        tables = schema.tables.len(),
    );

    let graph = build_schema_graph(&schema);
    let summary = graph.summary();
    tracing::info!(event = "graph_built", nodes = summary.nodes, edges = summary.edges);

    fs::write(&cli.out, render_dot(&graph))?;
    tracing::info!(event = "dot_written", path = %cli.out.display());

    Ok(())
}
