//! Command-line surface: argument types and the command runner.

use anyhow::Context;
use clap::{Parser, Subcommand};
use postopia_core::{config::Config, SearchCategory, SearchRequest};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "postopia-search", about = "Inspect Postopia search categories and requests")]
pub struct Cli {
    /// Write debug logs to stderr (filter with RUST_LOG).
    #[arg(long)]
    pub debug: bool,

    /// Read configuration from this file instead of ~/.config/postopia/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List categories in tab order with their endpoints.
    Categories,
    /// Resolve a label to its category, ignoring case.
    Parse { text: String },
    /// Describe the request for one page of a search.
    Request {
        query: String,
        /// Category label; overrides --tab.
        #[arg(long, conflicts_with = "tab")]
        category: Option<String>,
        /// Search screen tab index (0 post, 1 comment, 2 space, 3+ user).
        #[arg(long)]
        tab: Option<usize>,
        #[arg(long, default_value_t = 0)]
        page: u32,
        /// Page size; defaults to the configured page size.
        #[arg(long)]
        size: Option<u32>,
    },
}

/// Execute `command`, writing its output to `out`.
pub fn run(command: &Command, config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Command::Categories => {
            for category in SearchCategory::TAB_ORDER {
                writeln!(
                    out,
                    "{} {} {}",
                    category.tab_index(),
                    category,
                    category.endpoint()
                )?;
            }
        }
        Command::Parse { text } => {
            let category = SearchCategory::from_string(text)?;
            writeln!(out, "{} {}", category, category.endpoint())?;
        }
        Command::Request {
            query,
            category,
            tab,
            page,
            size,
        } => {
            let category = match (category, tab) {
                (Some(label), _) => SearchCategory::from_string(label)
                    .with_context(|| format!("invalid --category {label:?}"))?,
                (None, Some(tab)) => SearchCategory::from_tab(*tab),
                (None, None) => config.search.default_category,
            };
            let request = SearchRequest::new(category, query.as_str())
                .page(*page)
                .size(size.unwrap_or(config.search.page_size));
            tracing::debug!(?request, "rendering request");

            let rendered = serde_json::json!({
                "endpoint": request.endpoint(),
                "category": request.category,
                "query": request.query,
                "page": request.page,
                "size": request.size,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&rendered)?)?;
        }
    }
    Ok(())
}
