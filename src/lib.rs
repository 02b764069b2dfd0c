//! Affilink - terminal dashboard for affiliate links
//!
//! Lists, filters, sorts and paginates affiliate links served by a remote
//! HTTP API, and creates, edits, deletes and shares them.
//!
//! # Features
//! - **cli**: Command-line interface
//! - **tui**: Terminal user interface (default)
//!
//! # Architecture
//! - `api`: HTTP client and wire types
//! - `dashboard`: Query state, form validation and the dashboard controller
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Start-up wiring and execution modes
//! - `system`: Logging and panic handling

pub mod api;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod system;
