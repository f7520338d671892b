use std::sync::Arc;

use tracing::{debug, warn};

use crate::modules::funtranslations::TranslationStyle;
use crate::shared::errors::ClientResult;

use super::ports::{SpeciesProvider, TranslationProvider};
use super::species::SpeciesInfo;

/// Pick the translation style for a species record.
///
/// Cave dwellers and legendaries get the Yoda treatment, everything else is
/// rendered in Shakespearean English. The habitat comparison ignores case.
pub fn style_for(species: &SpeciesInfo) -> TranslationStyle {
    if species.habitat.eq_ignore_ascii_case("cave") || species.is_legendary {
        TranslationStyle::Yoda
    } else {
        TranslationStyle::Shakespeare
    }
}

/// Orchestrates the species lookup and the optional description translation.
///
/// The two upstream calls are strictly sequential: the transform consumes
/// the description produced by the lookup. No retries, no parallelism.
pub struct PokedexService {
    species: Arc<dyn SpeciesProvider>,
    translator: Arc<dyn TranslationProvider>,
}

impl PokedexService {
    pub fn new(species: Arc<dyn SpeciesProvider>, translator: Arc<dyn TranslationProvider>) -> Self {
        Self {
            species,
            translator,
        }
    }

    /// Plain lookup, untranslated description.
    pub async fn species_by_name(&self, name: &str) -> ClientResult<SpeciesInfo> {
        self.species.species_by_name(name).await
    }

    /// Lookup with the description rewritten by the translation provider.
    ///
    /// A failed lookup short-circuits the whole operation. A failed
    /// translation does not: the untranslated record is served instead, so
    /// instability in the transform service never turns a successful lookup
    /// into an error response.
    pub async fn translated_species_by_name(&self, name: &str) -> ClientResult<SpeciesInfo> {
        let species = self.species.species_by_name(name).await?;

        let style = style_for(&species);
        debug!("translating description of '{}' as {}", species.name, style);

        match self.translator.translate(&species.description, style).await {
            Ok(translation) => Ok(SpeciesInfo {
                description: translation.text,
                ..species
            }),
            Err(err) => {
                warn!(
                    "translation of '{}' failed, serving untranslated description: {}",
                    species.name, err
                );
                Ok(species)
            }
        }
    }
}
