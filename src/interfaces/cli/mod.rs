//! CLI interface module
//!
//! Scriptable front end over the same [`LinkDashboard`](crate::dashboard::LinkDashboard)
//! operations the TUI uses.

pub mod commands;

use std::fmt;

use crate::api::ApiError;
use crate::cli::{Commands, ConfigCommands};
use crate::errors::AffilinkError;
use crate::runtime::lifetime::startup::StartupContext;
use commands::{
    ListArgs, add_link, config_generate, list_categories, list_links, remove_link, share_link,
    update_link,
};

#[derive(Debug)]
pub enum CliError {
    ApiError(String),
    ParseError(String),
    PermissionDenied(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ApiError(msg) => format!("API error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::PermissionDenied(msg) => format!("Permission denied: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ApiError(msg) => format!("{} {}", "API error:".red().bold(), msg.white()),
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::PermissionDenied(msg) => {
                format!("{} {}", "Permission denied:".magenta().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<AffilinkError> for CliError {
    fn from(err: AffilinkError) -> Self {
        match err {
            AffilinkError::Api(msg) => CliError::ApiError(msg),
            AffilinkError::Validation(msg) => CliError::ParseError(msg),
            other => CliError::CommandError(other.format_simple()),
        }
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        CliError::ApiError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(ctx: &StartupContext, cmd: Commands) -> Result<(), CliError> {
    match cmd {
        Commands::List {
            page,
            page_size,
            search,
            category,
            sort,
            order,
        } => {
            let args = ListArgs {
                page,
                page_size: page_size.unwrap_or(ctx.config.dashboard.default_page_size),
                search: search.unwrap_or_default(),
                category: category.unwrap_or_default(),
                sort,
                order,
            };
            list_links(ctx, args).await
        }

        Commands::Categories => list_categories(ctx).await,

        Commands::Add {
            campaign_title,
            original_url,
            category,
        } => add_link(ctx, campaign_title, original_url, category).await,

        Commands::Update {
            id,
            campaign_title,
            original_url,
            category,
        } => update_link(ctx, id, campaign_title, original_url, category).await,

        Commands::Remove { id } => remove_link(ctx, id).await,

        Commands::Share { id } => share_link(ctx, id),

        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),

        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "TUI is started from main, not the CLI dispatcher".to_string(),
        )),
    }
}
