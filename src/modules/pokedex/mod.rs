pub mod ports;
pub mod service;
pub mod species;

pub use ports::{SpeciesProvider, TranslationProvider};
pub use service::{style_for, PokedexService};
pub use species::SpeciesInfo;
