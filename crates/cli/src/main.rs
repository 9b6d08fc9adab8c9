use crate::{
    commands::{Commands, Target},
    config::ConnArgs,
    env::EnvManager,
    error::CliError,
};
use clap::Parser;
use connectors::search::{HttpTransport, ScrollOptions, SearchSource, Session};
use model::records::table::Table;
use processing::{
    normalize::normalize,
    schema::{Schema, config::SchemaConfig, presets::Preset},
    summary,
};
use std::str::FromStr;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod conn;
mod env;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "arbor",
    version = "0.1.0",
    about = "Fetch, normalize and summarize search-index data"
)]
struct Cli {
    #[command(flatten)]
    conn: ConnArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let mut env = EnvManager::new();
    if let Some(path) = &cli.conn.env_file {
        env.load_from_file(path)?;
    }

    match cli.command {
        Commands::Schema { kind } => {
            let schema = Preset::from_str(&kind)?.schema()?;
            let json = serde_json::to_string_pretty(&SchemaConfig::from(&schema))?;
            println!("{json}");
        }
        Commands::Config => {
            let config = cli.conn.resolve(&env)?;
            println!("{config:#?}");
        }
        Commands::Ping { target } => {
            let (source, _) = open_target(&cli.conn, &env, &target)?;
            conn::ping(&source)?;
            println!("Store reachable, index '{}'", source.index());
        }
        Commands::Page {
            target,
            size,
            pages,
            show_all,
        } => {
            let (source, schema) = open_target(&cli.conn, &env, &target)?;
            let mut session = Session::new();

            for _ in 0..pages {
                let before = session.records().len();
                let outcome = session.fetch_next(&source, size)?;
                if let Some(failure) = outcome.failure {
                    warn!("Stopping at offset {}: {}", session.offset(), failure);
                    break;
                }

                println!(
                    "Fetched {} records (offset now {})",
                    outcome.returned,
                    session.offset()
                );
                output::print_table(&normalize(&session.records()[before..], &schema));
                if outcome.reached_end {
                    break;
                }
            }

            if show_all {
                let table = normalize(session.records(), &schema);
                println!();
                print!("{}", summary::info(&table));
                output::print_table(&table);
            }
        }
        Commands::FetchAll {
            target,
            page_size,
            head,
            json,
        } => {
            let (source, schema) = open_target(&cli.conn, &env, &target)?;
            let table = load_table(&source, &schema, page_size)?;

            if json {
                output::print_json(&table)?;
            } else {
                print!("{}", summary::info(&table));
                output::print_table(&table.head(head));
            }
        }
        Commands::Summary {
            target,
            columns,
            group_by,
            value,
            page_size,
        } => {
            let (source, schema) = open_target(&cli.conn, &env, &target)?;
            let table = load_table(&source, &schema, page_size)?;

            let columns: Vec<&str> = columns.iter().map(String::as_str).collect();
            print!("{}", summary::describe(&table, &columns)?);
            println!();
            let groups = summary::group_mean(&table, &group_by, &value)?;
            output::print_group_means(&group_by, &value, &groups);
        }
    }

    Ok(())
}

/// Builds the HTTP-backed source and the schema for a command target.
fn open_target(
    conn: &ConnArgs,
    env: &EnvManager,
    target: &Target,
) -> Result<(SearchSource<HttpTransport>, Schema), CliError> {
    let preset = Preset::from_str(&target.kind)?;
    let schema = match &target.schema {
        Some(path) => Schema::from_json(&std::fs::read_to_string(path)?)?,
        None => preset.schema()?,
    };
    let index = target
        .index
        .clone()
        .unwrap_or_else(|| preset.default_index().to_string());

    let transport = HttpTransport::new(conn.resolve(env)?)?;
    let source = SearchSource::new(transport, index)?;
    Ok((source, schema))
}

/// Scrolls the whole index into a session and normalizes it. A partial fetch
/// is reported and the rows gathered so far are used.
fn load_table(
    source: &SearchSource<HttpTransport>,
    schema: &Schema,
    page_size: usize,
) -> Result<Table, CliError> {
    let mut session = Session::new();
    let outcome = session.load_all(source, ScrollOptions::with_page_size(page_size))?;
    if let Some(failure) = outcome.failure {
        warn!(
            "Fetch of '{}' incomplete, continuing with {} records: {}",
            source.index(),
            outcome.returned,
            failure
        );
    }

    let table = normalize(session.records(), schema);
    info!(
        "Normalized {} records into {} rows",
        session.records().len(),
        table.row_count()
    );
    Ok(table)
}
