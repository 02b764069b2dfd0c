//! CLI command implementations
//!
//! - link_management: list, categories, add, update, remove, share
//! - config_management: config generate

pub mod config_management;
pub mod link_management;

pub use config_management::config_generate;
pub use link_management::{
    ListArgs, add_link, list_categories, list_links, remove_link, share_link, update_link,
};
