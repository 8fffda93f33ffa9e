//! Ontology file path resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the ontology file.
pub const ONTOLOGY_ENV_VAR: &str = "HPOA_ONTOLOGY";

/// Get the ontology file path.
///
/// Resolution order:
/// 1. an explicit path (e.g. from a command-line flag)
/// 2. `HPOA_ONTOLOGY` environment variable
/// 3. `data/hp.obo` relative to the working directory
pub fn resolve_ontology_path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Ok(path) = std::env::var(ONTOLOGY_ENV_VAR)
        && !path.trim().is_empty()
    {
        return PathBuf::from(path);
    }
    PathBuf::from("data").join("hp.obo")
}
