//! Remove link command

use colored::Colorize;

use crate::dashboard::DeleteOutcome;
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::startup::StartupContext;

use super::helpers::banner_or;

pub async fn remove_link(ctx: &StartupContext, id: String) -> Result<(), CliError> {
    let mut dashboard = ctx.dashboard();

    if !dashboard.open_delete(id.clone()) {
        return Err(CliError::PermissionDenied(
            "current role cannot delete links".to_string(),
        ));
    }

    match dashboard.confirm_delete().await {
        DeleteOutcome::Deleted => {
            println!("{} Deleted link: {}", "✓".bold().green(), id.cyan());
            Ok(())
        }
        DeleteOutcome::Failed(e) => Err(CliError::CommandError(banner_or(
            &dashboard,
            &e.to_string(),
        ))),
        DeleteOutcome::NoTarget => Err(CliError::CommandError(
            "No delete target".to_string(),
        )),
    }
}
