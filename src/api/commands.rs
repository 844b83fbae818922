//! Command modules for the presentation layer
//!
//! Each command takes and returns serializable DTOs so any shell (the CLI
//! here, or a GUI/web front end) can drive the converter.
//!
//! ## Architecture
//!
//! - `converter`: categories, units, conversions and free-text queries
//! - `history`: conversion history and session reset

pub mod converter;
pub mod history;

pub use converter::{
    convert_query_command, convert_units_command, list_categories_command, list_units_command,
};
pub use history::{get_history_command, reset_command};
