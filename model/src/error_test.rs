use super::*;

#[test]
fn string_detail_is_returned_verbatim() {
    assert_eq!(
        detail_message(r#"{"detail":"Username already registered"}"#).as_deref(),
        Some("Username already registered")
    );
}

#[test]
fn validation_detail_joins_field_messages() {
    let body = r#"{"detail":[
        {"loc":["body","progress"],"msg":"ensure this value is less than or equal to 100","type":"value_error"},
        {"loc":["body"],"msg":"field required","type":"value_error.missing"}
    ]}"#;
    assert_eq!(
        detail_message(body).as_deref(),
        Some("progress: ensure this value is less than or equal to 100; field required")
    );
}

#[test]
fn plain_text_body_falls_back_to_raw() {
    assert_eq!(detail_message("Internal Server Error\n").as_deref(), Some("Internal Server Error"));
}

#[test]
fn json_string_body_is_unquoted() {
    assert_eq!(detail_message(r#""oops""#).as_deref(), Some("oops"));
}

#[test]
fn empty_body_has_no_message() {
    assert_eq!(detail_message("  "), None);
}

#[test]
fn acknowledgement_tolerates_missing_detail() {
    let ack: Acknowledgement = serde_json::from_str(r#"{"detail":"Task deleted"}"#).unwrap();
    assert_eq!(ack.detail, "Task deleted");
    let empty: Acknowledgement = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, Acknowledgement::default());
}
