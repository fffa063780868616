//! Browse the recommendation service catalogs.
//!
//! Catalog payloads are opaque to the core; rendering here is defensive
//! and falls back to pretty-printed JSON when a payload does not have the
//! expected shape.

use anyhow::{Result, anyhow};
use clap::{Args, Subcommand};
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use pathway_core::{ApiConfig, HttpBackend};

/// Catalog arguments.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

/// Catalog subcommands.
#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// List every career the service scores against
    Careers,
    /// List career categories
    Categories,
    /// List every skill the service knows
    Skills,
}

/// Run a catalog command.
pub async fn run(args: CatalogArgs) -> Result<()> {
    let backend = HttpBackend::new(ApiConfig::from_env());

    match args.command {
        CatalogCommands::Careers => {
            let value = backend
                .list_careers()
                .await
                .map_err(|e| anyhow!(e.user_message()))?;
            print_careers(&value);
        }
        CatalogCommands::Categories => {
            let value = backend
                .list_categories()
                .await
                .map_err(|e| anyhow!(e.user_message()))?;
            print_strings(&value, "categories");
        }
        CatalogCommands::Skills => {
            let value = backend
                .list_skills()
                .await
                .map_err(|e| anyhow!(e.user_message()))?;
            print_strings(&value, "skills");
        }
    }
    Ok(())
}

fn print_careers(value: &serde_json::Value) {
    let Some(careers) = value.get("careers").and_then(|v| v.as_array()) else {
        print_raw(value);
        return;
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Career", "Category", "Salary"]);
    for career in careers {
        table.add_row(vec![
            career.get("title").and_then(|v| v.as_str()).unwrap_or("?"),
            career.get("category").and_then(|v| v.as_str()).unwrap_or(""),
            career
                .get("salary_range")
                .and_then(|v| v.as_str())
                .unwrap_or(""),
        ]);
    }
    println!("{table}");
    println!("{} careers", careers.len());
}

fn print_strings(value: &serde_json::Value, key: &str) {
    let Some(items) = value.get(key).and_then(|v| v.as_array()) else {
        print_raw(value);
        return;
    };

    for item in items {
        match item.as_str() {
            Some(s) => println!("{s}"),
            None => println!("{item}"),
        }
    }
    println!("{} {key}", items.len());
}

fn print_raw(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    );
}
