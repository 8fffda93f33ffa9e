//! Ontology access for the annotation migrator.
//!
//! - **view**: the read-only [`OntologyView`] contract used by conversion
//! - **ontology**: an in-memory implementation
//! - **obo**: loading an [`Ontology`] from an OBO file
//! - **modifier**: the clinical modifier label index

pub mod error;
pub mod modifier;
pub mod obo;
pub mod ontology;
pub mod paths;
pub mod view;

pub use error::OntologyError;
pub use modifier::{CLINICAL_MODIFIER_ROOT, LabelCollision, ModifierIndex};
pub use obo::{load_obo, parse_obo};
pub use ontology::{Ontology, Term};
pub use paths::{ONTOLOGY_ENV_VAR, resolve_ontology_path};
pub use view::OntologyView;
