//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for affilink using clap's derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// affilink - Terminal dashboard for affiliate links
#[derive(Parser)]
#[command(name = "affilink")]
#[command(version)]
#[command(about = "Manage affiliate links from the terminal", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./affilink.toml if present)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive dashboard (default)
    #[cfg(feature = "tui")]
    Tui,

    /// List one page of links
    List {
        /// Page index, starting at 0
        #[arg(long, default_value_t = 0)]
        page: u32,

        /// Page size (2, 20, 50 or 100)
        #[arg(long)]
        page_size: Option<u32>,

        /// Free-text search term
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Category filter ("all" for none)
        #[arg(long)]
        category: Option<String>,

        /// Sort field (createdAt, campaignTitle, originalUrl, category, clickCount)
        #[arg(long, default_value = "createdAt")]
        sort: String,

        /// Sort order (asc or desc)
        #[arg(long, default_value = "desc")]
        order: String,
    },

    /// List distinct categories
    Categories,

    /// Create a link
    Add {
        /// Campaign title
        campaign_title: String,

        /// Original (destination) URL
        original_url: String,

        /// Category
        category: String,
    },

    /// Replace a link's fields
    Update {
        /// Link identifier
        id: String,

        /// Campaign title
        campaign_title: String,

        /// Original (destination) URL
        original_url: String,

        /// Category
        category: String,
    },

    /// Delete a link
    Remove {
        /// Link identifier
        id: String,
    },

    /// Print the shareable redirect URL of a link
    Share {
        /// Link identifier
        id: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: affilink.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
