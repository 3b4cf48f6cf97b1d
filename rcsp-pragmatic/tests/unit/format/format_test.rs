use super::*;

fn create_error(code: &str) -> FormatError {
    FormatError::new(code.to_string(), "some cause".to_string(), "some action".to_string())
}

#[test]
fn can_display_format_error() {
    assert_eq!(create_error("E1100").to_string(), "E1100, cause: 'some cause', action: 'some action'.");
}

#[test]
fn can_serialize_format_error_without_empty_details() {
    let json = create_error("E1100").to_json();

    assert!(json.contains("\"code\": \"E1100\""));
    assert!(!json.contains("details"));

    let json = FormatError::new_with_details(
        "E1101".to_string(),
        "cause".to_string(),
        "action".to_string(),
        "details".to_string(),
    )
    .to_json();

    assert!(json.contains("\"details\": \"details\""));
}

#[test]
fn can_format_many_errors() {
    let errors = vec![create_error("E1100"), create_error("E1200")];

    let result = FormatError::format_many(errors.as_slice(), "\n");

    assert_eq!(
        result,
        "E1100, cause: 'some cause', action: 'some action'.\nE1200, cause: 'some cause', action: 'some action'."
    );
    assert!(FormatError::format_many_to_json(errors.as_slice()).starts_with('['));
}

#[test]
fn can_create_multi_format_error() {
    let error: MultiFormatError = vec![create_error("E1100"), create_error("E1300")].into();

    assert_eq!(error.codes(), vec!["E1100".to_string(), "E1300".to_string()]);
    assert_eq!(error.to_string().lines().count(), 2);
    assert_eq!(error.into_iter().count(), 2);

    let error: MultiFormatError = create_error("E0000").into();
    assert_eq!(error.codes(), vec!["E0000".to_string()]);
}
