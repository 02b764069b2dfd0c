//! Share link command

use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::startup::StartupContext;

/// Print the redirect URL; plain output so it can be piped
pub fn share_link(ctx: &StartupContext, id: String) -> Result<(), CliError> {
    if id.trim().is_empty() {
        return Err(CliError::ParseError("link id must not be empty".to_string()));
    }
    println!("{}", ctx.dashboard().share_url(id.trim()));
    Ok(())
}
