use unit_converter_lib::api::commands::{convert_units_command, get_history_command, reset_command};
use unit_converter_lib::shared::types::ConvertUnitsRequest;
use unit_converter_lib::{convert, Category, CommandError, ConversionError, ConverterSession, MAX_HISTORY_SIZE};

fn request(value: f64, category: &str, from: &str, to: &str) -> ConvertUnitsRequest {
    ConvertUnitsRequest {
        value: Some(value),
        category: Some(category.to_string()),
        from_unit: Some(from.to_string()),
        to_unit: Some(to.to_string()),
    }
}

#[test]
fn kilometer_to_mile_scenario() {
    let mut session = ConverterSession::new();
    let response = convert_units_command(&mut session, request(5.0, "Length", "Kilometer", "Mile")).unwrap();

    assert!((response.result - 3.106855).abs() < 1e-9);
    assert_eq!(get_history_command(&session).entries, vec!["5 Kilometer = 3.1069 Mile (Length)"]);
}

#[test]
fn seven_conversions_keep_the_last_five() {
    let mut session = ConverterSession::new();
    for i in 1..=7 {
        convert_units_command(&mut session, request(i as f64, "Time", "Minute", "Second")).unwrap();
        assert!(session.get_history().len() <= MAX_HISTORY_SIZE);
    }

    let entries = get_history_command(&session).entries;
    assert_eq!(entries.len(), 5);
    assert_eq!(entries.first().unwrap(), "3 Minute = 180.0000 Second (Time)");
    assert_eq!(entries.last().unwrap(), "7 Minute = 420.0000 Second (Time)");
}

#[test]
fn errors_do_not_disturb_the_session() {
    let mut session = ConverterSession::new();
    convert_units_command(&mut session, request(1.0, "Weight", "Kilogram", "Gram")).unwrap();

    let err = convert_units_command(&mut session, request(1.0, "Volume", "Liter", "Gallon")).unwrap_err();
    assert_eq!(err, CommandError::Conversion(ConversionError::InvalidCategory("Volume".to_string())));

    let err = convert_units_command(&mut session, request(1.0, "Length", "Meter", "Celsius")).unwrap_err();
    assert!(matches!(err, CommandError::Conversion(ConversionError::InvalidUnit { .. })));

    assert_eq!(session.get_history(), vec!["1 Kilogram = 1000.0000 Gram (Weight)"]);
}

#[test]
fn reset_clears_everything() {
    let mut session = ConverterSession::new();
    for unit in ["Celsius", "Fahrenheit", "Kelvin"] {
        convert_units_command(&mut session, request(10.0, "Temperature", unit, unit)).unwrap();
    }
    assert_eq!(session.get_history().len(), 3);

    reset_command(&mut session);
    assert!(get_history_command(&session).entries.is_empty());
    assert_eq!(session.selection().category, None);
    assert!(convert_units_command(&mut session, ConvertUnitsRequest::default()).is_err());
}

#[test]
fn mismatched_unit_is_invalid_unit() {
    assert!(matches!(
        convert(1.0, "Meter", "Celsius", Category::Length),
        Err(ConversionError::InvalidUnit { .. })
    ));
}
