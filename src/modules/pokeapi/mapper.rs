use crate::modules::pokedex::SpeciesInfo;
use crate::shared::errors::{ClientError, ClientResult};

use super::dto::SpeciesResource;

/// Characters PokeAPI embeds in flavor text that must not reach clients.
const LINE_BREAKS: [char; 3] = ['\n', '\r', '\u{0c}'];

pub struct SpeciesMapper;

impl SpeciesMapper {
    /// Flatten a species resource into the outward record. The first flavor
    /// text entry becomes the description; an empty list is a parse failure.
    pub fn to_domain(dto: SpeciesResource) -> ClientResult<SpeciesInfo> {
        let description = dto
            .flavor_text_entries
            .into_iter()
            .next()
            .map(|entry| normalize_flavor_text(&entry.flavor_text))
            .ok_or(ClientError::ParseFailed)?;

        Ok(SpeciesInfo {
            name: dto.name,
            habitat: dto.habitat.name,
            is_legendary: dto.is_legendary,
            description,
        })
    }
}

/// Replace embedded line-break characters with single spaces.
fn normalize_flavor_text(raw: &str) -> String {
    raw.replace(&LINE_BREAKS[..], " ")
}

/// Extract the numeric species identifier from a resource URL shaped like
/// `.../pokemon-species/{id}/`: the second-to-last path segment.
pub fn species_id_from_url(url: &str) -> ClientResult<u32> {
    let mut segments = url.rsplit('/');
    segments.next();
    segments
        .next()
        .and_then(|segment| segment.parse().ok())
        .ok_or(ClientError::ParseFailed)
}
