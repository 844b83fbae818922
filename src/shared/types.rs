use serde::{Deserialize, Serialize};

use crate::core::features::unit_converter::Category;
use crate::core::history::ConversionRecord;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDTO {
    pub id: Category,
    pub label: String,
    pub units: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUnitsResponse {
    pub category: Category,
    pub units: Vec<String>,
}

/// Conversion request from the presentation layer
///
/// Every field is optional: anything left out is taken from the session's
/// current selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertUnitsRequest {
    pub value: Option<f64>,
    pub category: Option<String>,
    pub from_unit: Option<String>,
    pub to_unit: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertUnitsResponse {
    pub result: f64,
    pub formatted_result: String,
    pub from_unit: String,
    pub to_unit: String,
    pub category: Category,
    pub record: ConversionRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetHistoryResponse {
    /// Display strings, most recent last
    pub entries: Vec<String>,
    pub records: Vec<ConversionRecord>,
}
