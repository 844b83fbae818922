//! Conversion core
//!
//! - `features`: the unit converter (tables, rules, query parsing)
//! - `history`: bounded history of recent conversions
//! - `session`: per-session state tying the two together

pub mod features;
pub mod history;
pub mod session;
