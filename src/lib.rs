//! Unit conversion within a category (Length, Weight, Temperature, Time)
//! with a short, bounded history of recent conversions.
//!
//! The presentation layer drives everything through a [`ConverterSession`],
//! either directly or via the DTO-based functions in [`api::commands`].

pub mod api;
pub mod core;
pub mod shared;

pub use crate::core::features::unit_converter::{
    convert, format_result, infer_category, list_categories, list_units, parse_conversion_query,
    Category,
};
pub use crate::core::history::{ConversionHistory, ConversionRecord, MAX_HISTORY_SIZE};
pub use crate::core::session::{ConverterSession, Selection};
pub use crate::shared::error::{ConversionError, ConversionResult};
pub use crate::shared::errors::{CommandError, CommandResult};
pub use crate::shared::settings::ConverterSettings;
