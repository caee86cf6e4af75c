//! Core types and calendar logic for daybook.
//!
//! This crate holds everything the `daybook` CLI builds on:
//! - `event`: `Event`/`EventForm` and their recurrence rule
//! - `date_grid`: month lengths, week spans, month grids and labels
//! - `recurrence`, `overlap`, `filter`: occurrence, conflict and view logic
//! - `notification`: reminder timing
//! - `store`, `holidays`, `clock`, `config`: the collaborators around them

pub mod clock;
pub mod config;
pub mod date_grid;
pub mod error;
pub mod event;
pub mod filter;
pub mod holidays;
pub mod notification;
pub mod overlap;
pub mod recurrence;
pub mod store;
pub mod view;

// Re-export the event types at crate root for convenience
pub use event::*;
pub use error::{DaybookError, DaybookResult};
