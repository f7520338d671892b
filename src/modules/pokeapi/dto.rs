use serde::Deserialize;

/// Subset of the `/pokemon/{name}` payload the gateway cares about: the
/// species reference whose URL encodes the numeric species identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResource {
    pub species: NamedResource,
}

/// PokeAPI's ubiquitous name-and-url pair.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// Subset of the `/pokemon-species/{id}/` payload the gateway cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesResource {
    pub name: String,
    pub habitat: NamedResource,
    pub is_legendary: bool,
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
}
