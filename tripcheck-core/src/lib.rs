//! Core types for tripcheck.
//!
//! This crate provides everything the CLI needs apart from rendering:
//! - `Trip` and `Holiday` records and a strict `CalendarDate`
//! - `conflict` for finding trips that overlap public holidays
//! - `store` and `source` for loading trips and holidays
//! - `config` for the global configuration file

pub mod config;
pub mod conflict;
pub mod date;
pub mod error;
pub mod holiday;
pub mod source;
pub mod store;
pub mod trip;

pub use conflict::{Conflict, detect_conflicts, years_referenced, years_referenced_at};
pub use date::CalendarDate;
pub use holiday::{Country, Holiday};
pub use trip::Trip;
