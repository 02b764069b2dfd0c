//! Affilink - terminal dashboard for affiliate links
//!
//! Entry point: parses arguments, loads configuration, sets up logging and
//! dispatches to the CLI or TUI mode.

use std::process;

use clap::Parser;
use colored::Colorize;
use tracing::debug;

use affilink::cli::Cli;
use affilink::config::AppConfig;
use affilink::runtime::lifetime::startup::prepare_startup;
use affilink::runtime::modes::{Mode, detect_mode};
use affilink::system::logging::{LogTarget, init_logging};
use affilink::system::panic_handler::{RunMode, install_panic_hook};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    if let Err(message) = run(cli).await {
        eprintln!("{}", message);
        process::exit(1);
    }
}

fn startup_error(err: anyhow::Error) -> String {
    format!("{} {:#}", "Startup failed:".red().bold(), err)
}

async fn run(cli: Cli) -> Result<(), String> {
    // `config generate` 不需要有效配置
    #[cfg(feature = "cli")]
    if let Some(affilink::cli::Commands::Config {
        action: affilink::cli::ConfigCommands::Generate { output_path, force },
    }) = &cli.command
    {
        install_panic_hook(RunMode::Cli);
        return affilink::interfaces::cli::commands::config_generate(output_path.clone(), *force)
            .map_err(|e| e.format_colored());
    }

    let config = AppConfig::load(cli.config.as_deref()).map_err(|e| e.format_colored())?;

    match detect_mode(cli.command.as_ref()) {
        #[cfg(feature = "tui")]
        Mode::Tui => {
            install_panic_hook(RunMode::Tui);
            let _guard = init_logging(&config.logging, LogTarget::FileOnly)
                .map_err(|e| e.format_colored())?;
            debug!("Starting TUI mode");

            let ctx = prepare_startup(config).map_err(startup_error)?;
            affilink::runtime::modes::run_tui(&ctx)
                .await
                .map_err(|e| e.format_colored())
        }
        #[cfg(feature = "cli")]
        Mode::Cli => {
            install_panic_hook(RunMode::Cli);
            let _guard = init_logging(&config.logging, LogTarget::FileOrStderr)
                .map_err(|e| e.format_colored())?;

            let ctx = prepare_startup(config).map_err(startup_error)?;
            match cli.command {
                Some(cmd) => affilink::runtime::modes::run_cli(&ctx, cmd)
                    .await
                    .map_err(|e| e.format_colored()),
                None => Ok(()),
            }
        }
        Mode::Unknown => Err(format!(
            "{} no front end enabled; build with the `cli` or `tui` feature",
            "Error:".red().bold()
        )),
    }
}
