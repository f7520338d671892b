use serde::{Deserialize, Serialize};

/// Descriptive record of a Pokemon species, assembled from the upstream
/// catalog and served outward as-is. All four fields are mandatory; a
/// payload that cannot fill them is a parse failure, never a partial record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesInfo {
    pub name: String,
    pub habitat: String,
    pub is_legendary: bool,
    /// Flavor text with embedded line-break characters already normalized
    /// to single spaces.
    pub description: String,
}
