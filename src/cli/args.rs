//! Command-line argument definitions
//!
//! This module defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Drive a keyboard-first command palette from the terminal
#[derive(Parser, Debug)]
#[command(name = "kbar")]
#[command(version)]
#[command(about = "Keyboard-first command palette: prefix search, default items and wrap-around selection", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace (overrides config)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter a JSON catalog with a query and print the visible items
    Query {
        /// Catalog file with "items" and optional "default_items"
        #[arg(short = 'f', long, value_name = "FILE")]
        catalog: PathBuf,

        /// Also match item subtitles (overrides config)
        #[arg(long)]
        match_subtitle: bool,

        /// Print every visible item instead of the first max_items_shown
        #[arg(long)]
        all: bool,

        /// The query; empty shows the default items
        #[arg(default_value = "")]
        query: String,
    },

    /// Interactive favorite-numbers palette read from stdin
    ///
    /// Plain lines set the query. Commands start with ':':
    /// :open :up :down :enter :esc :dismiss :hover N :tap N :1 .. :9 :quit
    Demo,

    /// Show current configuration
    ShowConfig,

    /// Generate a configuration file
    GenerateConfig {
        /// Output path for the config file (defaults to standard location)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
