//! Calendar core for the dashboard.
//!
//! This crate holds the parts of the dashboard with real semantics:
//! - `date_grid` builds Monday-first month grids
//! - `binder` binds events to days and cycles through a day's events
//! - `transform` converts between the API's wire events and UI events
//! - `department` enriches departments against the bundled catalog
//! - `preferences` persists the layout flag through an injected store

pub mod binder;
pub mod date_grid;
pub mod department;
pub mod error;
pub mod event;
pub mod notification;
pub mod preferences;
pub mod transform;

// Re-export event types at crate root for convenience
pub use event::*;
