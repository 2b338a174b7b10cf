//! # Species
//!
//! The closed set of iris species the classifier can return, plus the static
//! description table shown next to a prediction.

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{IrisError, IrisResult};

/// Wire keys in [`Species::ALL`] order
const WIRE_KEYS: &[&str] = &["setosa", "versicolor", "virginica"];

/// Iris species keys as used on the wire.
///
/// Serialises as the lowercase key. Deserialising accepts every spelling
/// [`Species::from_str_flexible`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    /// Iris setosa
    Setosa,
    /// Iris versicolor
    Versicolor,
    /// Iris virginica
    Virginica,
}

impl Species {
    /// All species variants for UI selection
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    /// Wire key (e.g., "setosa")
    pub fn key(&self) -> &'static str {
        match self {
            Species::Setosa => "setosa",
            Species::Versicolor => "versicolor",
            Species::Virginica => "virginica",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> IrisResult<Self> {
        let normalized = s.trim().to_lowercase();
        let key = normalized.strip_prefix("iris-").unwrap_or(&normalized);
        match key {
            "setosa" => Ok(Species::Setosa),
            "versicolor" | "versicolour" => Ok(Species::Versicolor),
            "virginica" => Ok(Species::Virginica),
            _ => Err(IrisError::invalid_input("species", s, "Unknown species key")),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::Setosa => "Setosa",
            Species::Versicolor => "Versicolor",
            Species::Virginica => "Virginica",
        }
    }

    /// Short field-guide description
    pub fn description(&self) -> &'static str {
        match self {
            Species::Setosa => "Small flowers with short, narrow petals; easily separated from the other two species.",
            Species::Versicolor => "Medium-sized flowers; blue-flag iris with petals of intermediate length and width.",
            Species::Virginica => "Largest flowers with long, broad petals; overlaps partly with versicolor.",
        }
    }
}

impl<'de> Deserialize<'de> for Species {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Species::from_str_flexible(&raw).map_err(|_| serde::de::Error::unknown_variant(&raw, WIRE_KEYS))
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
