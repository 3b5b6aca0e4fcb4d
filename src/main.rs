use anyhow::Context;
use battery_included::models::{FiltersInput, SearchInput, SuggestionInput};
use battery_included::{Config, PipelineContext, steps};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;

/// Run BatteryIncluded pipeline steps against a live collection.
#[derive(Parser, Debug)]
#[command(name = "bi", version)]
struct Cli {
    /// Log requests at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search products by phrase.
    Search {
        phrase: String,
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        offset: Option<i64>,
        #[arg(long)]
        limit: Option<i64>,
        /// Filters as a JSON object keyed by field name.
        #[arg(long)]
        filters: Option<String>,
    },
    /// Autocomplete suggestions for a phrase.
    Suggest { phrase: String },
    /// Filter facets available for a phrase.
    Filters { phrase: String },
    /// Print the configured catalog service.
    Catalog,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // fmt() also bridges `log` records, which is what the steps emit.
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(true)
        .init();

    let config = Config::from_env().context("loading BatteryIncluded configuration")?;
    let ctx = PipelineContext::new(config);

    match cli.command {
        Command::Search {
            phrase,
            sort,
            offset,
            limit,
            filters,
        } => {
            let filters: BTreeMap<String, serde_json::Value> = match filters {
                Some(raw) => serde_json::from_str(&raw).context("parsing --filters")?,
                None => BTreeMap::new(),
            };
            let input = SearchInput {
                search_phrase: Some(phrase),
                filters,
                sort,
                offset,
                limit,
            };
            print_json(&steps::get_products_by_search_phrase(&ctx, input).await?)
        }
        Command::Suggest { phrase } => {
            let input = SuggestionInput {
                search_phrase: Some(phrase),
            };
            print_json(&steps::get_search_suggestions(&ctx, input).await?)
        }
        Command::Filters { phrase } => {
            let input = FiltersInput {
                search_phrase: Some(phrase),
            };
            print_json(&steps::get_filters(&ctx, input).await?)
        }
        Command::Catalog => print_json(&steps::get_catalog_service(&ctx).await),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
