use pokedex::modules::funtranslations::dto::{TranslationErrorResponse, TranslationResponse};

const YODA_SUCCESS: &str = r#"{
    "success": {"total": 1},
    "contents": {
        "translated": "Created by a scientist, it was.",
        "text": "It was created by a scientist.",
        "translation": "yoda"
    }
}"#;

const RATE_LIMITED: &str = r#"{
    "error": {
        "code": 429,
        "message": "Too Many Requests: Rate limit of 5 requests per hour exceeded."
    }
}"#;

#[test]
fn success_payload_carries_translated_text() {
    let response: TranslationResponse = serde_json::from_str(YODA_SUCCESS).unwrap();
    assert_eq!(
        response.contents.translated,
        "Created by a scientist, it was."
    );
}

#[test]
fn error_payload_carries_message() {
    let response: TranslationErrorResponse = serde_json::from_str(RATE_LIMITED).unwrap();
    assert_eq!(
        response.error.message,
        "Too Many Requests: Rate limit of 5 requests per hour exceeded."
    );
}

#[test]
fn null_translated_text_fails_to_parse() {
    let json = r#"{"contents": {"translated": null}}"#;
    assert!(serde_json::from_str::<TranslationResponse>(json).is_err());
}

#[test]
fn payload_without_contents_fails_to_parse() {
    let json = r#"{"translated": "Created by a scientist, it was."}"#;
    assert!(serde_json::from_str::<TranslationResponse>(json).is_err());
}

#[test]
fn error_payload_without_message_fails_to_parse() {
    let json = r#"{"error": {"code": 500}}"#;
    assert!(serde_json::from_str::<TranslationErrorResponse>(json).is_err());
}
