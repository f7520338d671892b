use std::fmt;

use serde::{Deserialize, Serialize};

/// The two rewriting modes offered by the translation provider. The enum is
/// closed: there is no way to request a style the provider does not serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStyle {
    Yoda,
    Shakespeare,
}

impl TranslationStyle {
    /// Upstream endpoint serving this style.
    pub fn endpoint(&self) -> &'static str {
        match self {
            TranslationStyle::Yoda => "/yoda.json",
            TranslationStyle::Shakespeare => "/shakespeare.json",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TranslationStyle::Yoda => "yoda",
            TranslationStyle::Shakespeare => "shakespeare",
        }
    }
}

impl fmt::Display for TranslationStyle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
