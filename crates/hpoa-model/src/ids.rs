#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Prefix shared by all Human Phenotype Ontology identifiers.
pub const HPO_PREFIX: &str = "HP";

/// An ontology term identifier in CURIE form, e.g. `HP:0001250`.
///
/// Only the shape `PREFIX:LOCAL` is enforced here. Whether the id belongs to a
/// particular ontology is decided by the ontology view.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TermId(pub(crate) String);

impl TermId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ModelError::InvalidTermId(value));
        }
        match trimmed.split_once(':') {
            Some((prefix, local)) if !prefix.is_empty() && !local.is_empty() => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ModelError::InvalidTermId(value)),
        }
    }

    /// Builds an HPO id from its numeric part (`"0012823"` -> `HP:0012823`).
    pub fn hpo(local: &str) -> Self {
        Self(format!("{HPO_PREFIX}:{local}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn prefix(&self) -> &str {
        self.0.split_once(':').map(|(prefix, _)| prefix).unwrap_or("")
    }

    pub fn local_id(&self) -> &str {
        self.0.split_once(':').map(|(_, local)| local).unwrap_or("")
    }
}

impl FromStr for TermId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl serde::Serialize for TermId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for TermId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}
