use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::modules::funtranslations::{Translation, TranslationStyle};
use crate::shared::errors::ClientResult;

use super::species::SpeciesInfo;

/// Port (interface) for the species catalog.
/// Infrastructure implements this with the PokeAPI client.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeciesProvider: Send + Sync {
    /// Resolve a species name to its full descriptive record.
    async fn species_by_name(&self, name: &str) -> ClientResult<SpeciesInfo>;
}

/// Port (interface) for the text transformer.
/// Infrastructure implements this with the FunTranslations client.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Rewrite free text in the requested style.
    async fn translate(&self, text: &str, style: TranslationStyle) -> ClientResult<Translation>;
}
