pub mod enums;
pub mod error;
pub mod ids;
pub mod legacy;
pub mod qc;
pub mod record;

pub use enums::{DiseaseDatabase, EvidenceCode, FrequencyCategory, QcCode, Sex};
pub use error::{ModelError, Result};
pub use ids::{HPO_PREFIX, TermId};
pub use legacy::{LegacyColumn, LegacyLine, LegacyRow};
pub use qc::QcIssues;
pub use record::{CanonicalRecord, Frequency};
