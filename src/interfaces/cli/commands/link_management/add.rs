//! Add link command

use crate::dashboard::{FormMode, LinkDraft};
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::startup::StartupContext;

use super::helpers::report_submit;

pub async fn add_link(
    ctx: &StartupContext,
    campaign_title: String,
    original_url: String,
    category: String,
) -> Result<(), CliError> {
    let mut dashboard = ctx.dashboard();
    let draft = LinkDraft::new(campaign_title, original_url, category);

    if !dashboard.open_form(draft, FormMode::Create) {
        return Err(CliError::PermissionDenied(
            "current role cannot create links".to_string(),
        ));
    }

    let outcome = dashboard.submit().await;
    report_submit(&dashboard, outcome)
}
