//! Link management commands

mod add;
mod helpers;
mod list;
mod remove;
mod share;
mod update;

pub use add::add_link;
pub use list::{ListArgs, list_categories, list_links};
pub use remove::remove_link;
pub use share::share_link;
pub use update::update_link;
