//! Conversion command module

use crate::core::features::unit_converter::{self, parse_conversion_query, Category};
use crate::core::history::ConversionRecord;
use crate::core::session::ConverterSession;
use crate::shared::errors::CommandResult;
use crate::shared::types::{CategoryDTO, ConvertUnitsRequest, ConvertUnitsResponse, GetUnitsResponse};

/// All categories with their units, for populating selection controls
pub fn list_categories_command() -> Vec<CategoryDTO> {
    unit_converter::list_categories()
        .into_iter()
        .map(|category| CategoryDTO {
            id: category,
            label: category.to_string(),
            units: category.units().into_iter().map(String::from).collect(),
        })
        .collect()
}

pub fn list_units_command(category: &str) -> CommandResult<GetUnitsResponse> {
    let category: Category = category.parse()?;
    Ok(GetUnitsResponse {
        category,
        units: category.units().into_iter().map(String::from).collect(),
    })
}

/// Convert using the request, falling back to the session selection
///
/// Provided fields update the selection first, as a form would. A field that
/// fails validation leaves the selection untouched. Fails with
/// `IncompleteFields` if anything is still missing afterwards.
pub fn convert_units_command(
    session: &mut ConverterSession,
    request: ConvertUnitsRequest,
) -> CommandResult<ConvertUnitsResponse> {
    session.update_selection(
        request.category.as_deref(),
        request.from_unit.as_deref(),
        request.to_unit.as_deref(),
        request.value,
    )?;

    let record = session.convert_selection()?.clone();
    tracing::info!("[convert_units_command] {}", record.display);
    Ok(to_response(record))
}

/// Parse a free-text query such as "5 km to mi" and convert it
pub fn convert_query_command(session: &mut ConverterSession, text: &str) -> CommandResult<ConvertUnitsResponse> {
    let query = parse_conversion_query(text)?;
    let record = session
        .convert_and_record(query.value, query.from_unit, query.to_unit, query.category)?
        .clone();
    tracing::info!("[convert_query_command] {}", record.display);
    Ok(to_response(record))
}

fn to_response(record: ConversionRecord) -> ConvertUnitsResponse {
    ConvertUnitsResponse {
        result: record.result_value,
        formatted_result: unit_converter::format_result(record.result_value, &record.to_unit),
        from_unit: record.from_unit.clone(),
        to_unit: record.to_unit.clone(),
        category: record.category,
        record,
    }
}
