//! semql: compile semantic-layer query requests to SQL and run them on
//! BigQuery.

mod catalog;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use semql_configuration::ConnectionSettings;
use semql_execution::metrics::Metrics;
use semql_execution::query::{self as execution, QueryRows};
use semql_metadata::metadata::SemanticLayer;
use semql_metadata::request::QueryRequest;
use semql_sql::sql::string::SQL;
use semql_translation::translation;

#[derive(Parser)]
#[command(
    name = "semql",
    about = "Compile semantic-layer query requests to SQL",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a request against a semantic layer and print the SQL.
    Compile {
        /// Path to the query request JSON.
        #[arg(long)]
        request: PathBuf,
        /// Path to the semantic layer JSON.
        #[arg(long)]
        layer: PathBuf,
        /// Pretty-print the statement.
        #[arg(long)]
        pretty: bool,
    },
    /// Compile a request and run the statement on BigQuery.
    Run {
        /// Path to the query request JSON.
        #[arg(long)]
        request: PathBuf,
        /// Path to the semantic layer JSON.
        #[arg(long)]
        layer: PathBuf,
    },
    /// Walk the bundled example catalog, printing the SQL for each entry.
    Demo {
        /// Also run each compiled statement on BigQuery.
        #[arg(long)]
        execute: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Compile {
            request,
            layer,
            pretty,
        } => {
            let request = read_request(&request)?;
            let layer = read_layer(&layer)?;
            let statement = translation::query::translate(&layer, &request)?;
            if pretty {
                println!(
                    "{}",
                    sqlformat::format(
                        &statement.sql,
                        &sqlformat::QueryParams::None,
                        sqlformat::FormatOptions::default(),
                    )
                );
            } else {
                println!("{}", statement.sql);
            }
        }
        Command::Run { request, layer } => {
            let request = read_request(&request)?;
            let layer = read_layer(&layer)?;
            let statement = translation::query::translate(&layer, &request)?;
            println!("{}", statement.sql);
            let rows = run_statement(&statement).await?;
            print_rows(&rows);
        }
        Command::Demo { execute } => {
            for (index, entry) in catalog::entries()?.iter().enumerate() {
                println!("Query#{}", index + 1);
                println!("{}", serde_json::to_string_pretty(&entry.request)?);
                println!("{}", serde_json::to_string_pretty(&entry.layer)?);
                let statement = translation::query::translate(&entry.layer, &entry.request)?;
                println!("SQL Query: {}", statement.sql);
                if execute {
                    let rows = run_statement(&statement).await?;
                    print_rows(&rows);
                }
                println!("{}", "=".repeat(100));
            }
        }
    }

    Ok(())
}

fn read_request(path: &Path) -> anyhow::Result<QueryRequest> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read request file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("could not parse request file {}", path.display()))
}

fn read_layer(path: &Path) -> anyhow::Result<SemanticLayer> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read semantic layer file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("could not parse semantic layer file {}", path.display()))
}

async fn run_statement(statement: &SQL) -> anyhow::Result<QueryRows> {
    let settings = ConnectionSettings::from_environment()?;
    let mut metrics_registry = prometheus::Registry::new();
    let metrics = Metrics::initialize(&mut metrics_registry)?;
    let client = semql_configuration::create_client(&settings).await?;

    let rows = execution::execute(
        &client,
        &metrics,
        &settings.project_id,
        &settings.dataset_id,
        settings.max_results,
        statement,
    )
    .await?;

    Ok(rows)
}

fn print_rows(rows: &QueryRows) {
    println!(
        "{}",
        serde_json::Value::Array(
            rows.columns
                .iter()
                .map(|column| serde_json::Value::String(column.clone()))
                .collect(),
        )
    );
    for row in &rows.rows {
        println!("{}", serde_json::Value::Array(row.clone()));
    }
    println!("({} rows)", rows.rows.len());
}
