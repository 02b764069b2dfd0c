//! System-level modules
//!
//! - Logging initialization
//! - Panic hook (crash.log, terminal restore)

pub mod logging;
pub mod panic_handler;
