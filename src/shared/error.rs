use thiserror::Error;
use serde::Serialize;

/// Errors raised by the conversion core
///
/// None of these are fatal: the caller surfaces the message and the
/// session carries on unchanged.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum ConversionError {
    /// Category is not one of Length, Weight, Temperature, Time
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Unit is not a member of the given category
    #[error("Invalid unit: '{unit}' is not a {category} unit")]
    InvalidUnit { unit: String, category: String },

    /// Both units are valid but no rule connects them
    #[error("Conversion not supported: {from} to {to} ({category})")]
    UnsupportedConversion {
        from: String,
        to: String,
        category: String,
    },
}

impl ConversionError {
    pub(crate) fn invalid_unit(unit: &str, category: impl ToString) -> Self {
        ConversionError::InvalidUnit {
            unit: unit.to_string(),
            category: category.to_string(),
        }
    }
}

pub type ConversionResult<T> = Result<T, ConversionError>;
