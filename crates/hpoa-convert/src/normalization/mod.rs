//! Per-column normalization of legacy values.
//!
//! - **disease**: disease id to source database, disease name
//! - **term**: HPO term id validation and alternate id resolution
//! - **evidence**: closed evidence code set
//! - **frequency**: frequency vocabulary table
//! - **sex** / **negation**: closed code sets
//! - **date**: creation date to `YYYY-MM-DD`
//!
//! Each function looks at one value and says nothing about QC codes. The
//! assembler decides which code a normalization outcome raises.

pub mod date;
pub mod disease;
pub mod evidence;
pub mod frequency;
pub mod negation;
pub mod sex;
pub mod term;

pub use date::{NormalizedDate, normalize_date};
pub use disease::{normalize_disease_id, normalize_disease_name};
pub use evidence::parse_evidence_code;
pub use frequency::{frequency_category_for, normalize_frequency};
pub use negation::parse_negation;
pub use sex::parse_sex;
pub use term::{HPO_ID_LENGTH, ResolvedTerm, resolve_hpo_term};
