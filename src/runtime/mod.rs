//! Application lifecycle and execution modes
//!
//! - `lifetime`: start-up wiring (config -> API client -> dashboard)
//! - `modes`: CLI / TUI entry points

pub mod lifetime;
pub mod modes;
