use serde::Deserialize;

/// Success payload: `{ "contents": { "translated": "..." } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationResponse {
    pub contents: TranslationContents,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationContents {
    pub translated: String,
}

/// Failure payload: `{ "error": { "message": "..." } }`.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationErrorResponse {
    pub error: TranslationErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationErrorBody {
    pub message: String,
}
