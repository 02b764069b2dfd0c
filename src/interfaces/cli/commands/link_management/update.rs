//! Update link command

use crate::dashboard::{FormMode, LinkDraft};
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::startup::StartupContext;

use super::helpers::report_submit;

pub async fn update_link(
    ctx: &StartupContext,
    id: String,
    campaign_title: String,
    original_url: String,
    category: String,
) -> Result<(), CliError> {
    let mut dashboard = ctx.dashboard();
    let draft = LinkDraft::new(campaign_title, original_url, category);

    if !dashboard.open_form(draft, FormMode::Edit { id }) {
        return Err(CliError::PermissionDenied(
            "current role cannot edit links".to_string(),
        ));
    }

    let outcome = dashboard.submit().await;
    report_submit(&dashboard, outcome)
}
