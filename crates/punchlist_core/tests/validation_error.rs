use punchlist_core::{ApiResponse, ValidationError, UNKNOWN_ERROR_MESSAGE};

#[test]
fn ok_response_yields_no_error() {
    let response = ApiResponse::new(true, "not even json");
    assert_eq!(ValidationError::check_response(&response), Ok(()));
}

#[test]
fn failed_response_carries_server_error_list() {
    let response = ApiResponse::from_status(
        422,
        r#"{"errors":["Title cannot be empty","Due date is invalid"]}"#,
    );
    assert!(!response.ok);

    let err = ValidationError::check_response(&response).unwrap_err();
    assert_eq!(
        err.messages,
        vec![
            "Title cannot be empty".to_string(),
            "Due date is invalid".to_string()
        ]
    );
    assert_eq!(
        err.to_string(),
        "Title cannot be empty, Due date is invalid"
    );
}

#[test]
fn unparseable_or_missing_errors_fall_back_to_unknown_error() {
    for body in [
        "<html>502</html>",
        "{}",
        r#"{"errors":null}"#,
        r#"{"errors":[1,2]}"#,
        r#"[["boom"]]"#,
        r#""str""#,
    ] {
        let err = ValidationError::check_response(&ApiResponse::from_status(500, body))
            .unwrap_err();
        assert_eq!(err.messages, vec![UNKNOWN_ERROR_MESSAGE.to_string()], "body: {body}");
    }
}

#[test]
fn from_status_marks_only_2xx_as_ok() {
    assert!(ApiResponse::from_status(200, "").ok);
    assert!(ApiResponse::from_status(204, "").ok);
    assert!(!ApiResponse::from_status(302, "").ok);
    assert!(!ApiResponse::from_status(404, "").ok);
}
