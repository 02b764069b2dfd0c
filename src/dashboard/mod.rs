//! Dashboard core shared by the TUI and CLI front ends
//!
//! - `query`: immutable query state and reducer
//! - `form`: draft, form mode, field validation
//! - `controller`: [`LinkDashboard`], fetches and CRUD commands
//! - `view`: columns, row actions, header summary
//! - `permissions`: read-only role capabilities
//! - `messages`: user-facing error copy

mod controller;
pub mod form;
pub mod messages;
mod permissions;
pub mod query;
pub mod view;

pub use controller::{DeleteOutcome, FetchTicket, LinkDashboard, Modal, SubmitOutcome};
pub use form::{FieldErrors, FormField, FormMode, LinkDraft, LinkForm, validate};
pub use permissions::{PermissionSet, Permissions};
pub use query::{
    ALL_CATEGORIES, CategoryFilter, PageSize, QueryAction, QueryState, SortField, SortOrder,
    SortSpec,
};
