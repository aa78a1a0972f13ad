//! Command-line configuration for the `hymnal` binary.

use crate::pipeline::types::{SearchConfig, DEFAULT_DEBOUNCE, DEFAULT_MIN_QUERY_LEN};

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level CLI options.
#[derive(Parser, Debug)]
#[command(name = "hymnal")]
#[command(about = "Browse and search a hymn collection")]
pub struct Cli {
    /// Path to the hymn collection (JSON array of hymns)
    #[arg(long, env = "HYMNAL_HYMNS", default_value = "data/hymns.json")]
    pub hymns: PathBuf,

    /// Quiescence window before a query is searched, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DEBOUNCE.as_millis() as u64)]
    pub debounce_ms: u64,

    /// Queries shorter than this (after trimming) return no results
    #[arg(long, default_value_t = DEFAULT_MIN_QUERY_LEN)]
    pub min_query_len: usize,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search titles, verses and choruses; every word must match
    Search {
        /// Query text
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Print one hymn by its number
    Show {
        /// Hymn number as typed on the number pad (1-3 digits)
        number: String,
    },
    /// List hymn numbers and titles in collection order
    List,
    /// Read query edits from stdin, one per line, and print results as they settle
    Interactive,
}

impl Cli {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            debounce: Duration::from_millis(self.debounce_ms),
            min_query_len: self.min_query_len,
        }
    }
}
