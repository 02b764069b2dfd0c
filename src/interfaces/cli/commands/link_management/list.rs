//! List links and categories commands

use colored::Colorize;

use crate::dashboard::{
    CategoryFilter, PageSize, QueryAction, QueryState, SortField, SortOrder, SortSpec, view,
};
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::startup::StartupContext;

/// Parsed `list` arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListArgs {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub category: String,
    pub sort: String,
    pub order: String,
}

impl ListArgs {
    /// Build the query state through the reducer, page last so filter resets
    /// don't clobber it
    pub fn to_query(&self) -> Result<QueryState, CliError> {
        let page_size = PageSize::try_from(self.page_size).map_err(CliError::ParseError)?;
        let field: SortField = self.sort.parse().map_err(|_| {
            CliError::ParseError(format!(
                "Invalid sort field: '{}'. Valid: createdAt, campaignTitle, originalUrl, category, clickCount",
                self.sort
            ))
        })?;
        let order: SortOrder = self.order.parse().map_err(|_| {
            CliError::ParseError(format!(
                "Invalid sort order: '{}'. Valid: asc, desc",
                self.order
            ))
        })?;

        Ok(QueryState::with_page_size(page_size)
            .reduce(QueryAction::SetSearchTerm(self.search.trim().to_string()))
            .reduce(QueryAction::SetCategoryFilter(CategoryFilter::from(
                self.category.as_str(),
            )))
            .reduce(QueryAction::SetSort(SortSpec::new(field, order)))
            .reduce(QueryAction::SetPage(self.page)))
    }
}

pub async fn list_links(ctx: &StartupContext, args: ListArgs) -> Result<(), CliError> {
    let query = args.to_query()?;
    let mut dashboard = ctx.dashboard_with_query(query);
    dashboard.fetch_links().await;

    if let Some(banner) = dashboard.banner() {
        return Err(CliError::ApiError(banner.to_string()));
    }

    let rows = view::build_rows(
        dashboard.rows(),
        ctx.api.base_url(),
        dashboard.permissions(),
    );

    if rows.is_empty() {
        println!("{} No links found", "ℹ".bold().blue());
        return Ok(());
    }

    if let Some(summary) = dashboard.summary() {
        println!("{}", summary.bold().green());
    }
    println!();
    for row in &rows {
        println!(
            "  {} {} -> {}",
            row.campaign.cyan().bold(),
            format!("[{}]", row.category).yellow(),
            row.url.blue().underline()
        );
        println!(
            "      {} {}  {} {}",
            "id:".dimmed(),
            row.id,
            "clicks:".dimmed(),
            row.clicks.to_string().green()
        );
        println!("      {} {}", "share:".dimmed(), row.share_url.dimmed());
    }
    println!();
    println!(
        "{} Page {}/{} ({} per page)",
        "ℹ".bold().blue(),
        dashboard.query().page + 1,
        dashboard.page_count(),
        dashboard.query().page_size.value()
    );
    Ok(())
}

pub async fn list_categories(ctx: &StartupContext) -> Result<(), CliError> {
    let categories = ctx.api.list_categories().await?;

    if categories.is_empty() {
        println!("{} No categories found", "ℹ".bold().blue());
    } else {
        for category in &categories {
            println!("  {}", category.cyan());
        }
        println!();
        println!(
            "{} Total {} categories",
            "ℹ".bold().blue(),
            categories.len().to_string().green()
        );
    }
    Ok(())
}
