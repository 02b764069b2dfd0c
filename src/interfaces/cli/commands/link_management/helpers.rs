//! Shared helpers for link commands

use colored::Colorize;

use crate::dashboard::{LinkDashboard, SubmitOutcome};
use crate::errors::AffilinkError;
use crate::interfaces::cli::CliError;

/// Map a submit outcome to CLI output
pub(super) fn report_submit(dashboard: &LinkDashboard, outcome: SubmitOutcome) -> Result<(), CliError> {
    match outcome {
        SubmitOutcome::Created => {
            println!("{} Link created", "✓".bold().green());
            Ok(())
        }
        SubmitOutcome::Updated => {
            println!("{} Link updated", "✓".bold().green());
            Ok(())
        }
        SubmitOutcome::Invalid => {
            let errors = dashboard
                .form()
                .map(|form| form.errors.to_string())
                .unwrap_or_default();
            Err(AffilinkError::validation(errors).into())
        }
        SubmitOutcome::Failed(e) => {
            tracing::debug!("Submit failed: {}", e);
            Err(CliError::CommandError(banner_or(dashboard, &e.to_string())))
        }
        SubmitOutcome::NoForm => Err(CliError::CommandError("No form open".to_string())),
    }
}

/// The dashboard's banner text, or `fallback` if none was set
pub(super) fn banner_or(dashboard: &LinkDashboard, fallback: &str) -> String {
    dashboard.banner().unwrap_or(fallback).to_string()
}
