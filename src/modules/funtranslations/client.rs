use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::AppConfig;
use crate::modules::pokedex::TranslationProvider;
use crate::shared::errors::{ClientError, ClientResult};
use crate::shared::http::{build_client, join_url};

use super::dto::{TranslationErrorResponse, TranslationResponse};
use super::style::TranslationStyle;

/// Text produced by the translation provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
}

/// Client for the text transformer (a FunTranslations-compatible service).
pub struct FunTranslationsClient {
    client: Client,
    base_url: String,
}

impl FunTranslationsClient {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client: build_client()?,
            base_url: config.funtranslations_url.clone(),
        })
    }

    /// Rewrite `text` in the requested style.
    ///
    /// The provider answers JSON for both success and failure shapes, so the
    /// body is decoded before the status check; a rejection carries its
    /// message in the payload's `error.message` field.
    pub async fn translate(&self, text: &str, style: TranslationStyle) -> ClientResult<Translation> {
        let url = join_url(&self.base_url, style.endpoint());
        debug!("GET {} ({} characters)", url, text.len());

        let response = self
            .client
            .get(&url)
            .query(&[("text", text)])
            .send()
            .await?;
        let status = response.status();

        let payload: Value = response
            .json()
            .await
            .map_err(|_| ClientError::BadResponse)?;

        if !status.is_success() {
            let rejection: TranslationErrorResponse =
                serde_json::from_value(payload).map_err(|_| ClientError::BadResponse)?;
            return Err(ClientError::UpstreamRejected {
                message: rejection.error.message,
                status: status.as_u16(),
            });
        }

        let translation: TranslationResponse =
            serde_json::from_value(payload).map_err(|_| ClientError::ParseFailed)?;
        Ok(Translation {
            text: translation.contents.translated,
        })
    }
}

#[async_trait]
impl TranslationProvider for FunTranslationsClient {
    async fn translate(&self, text: &str, style: TranslationStyle) -> ClientResult<Translation> {
        FunTranslationsClient::translate(self, text, style).await
    }
}
