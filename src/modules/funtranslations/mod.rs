pub mod client;
pub mod dto;
pub mod style;

pub use client::{FunTranslationsClient, Translation};
pub use style::TranslationStyle;
