use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::QcCode;

/// The set of QC codes raised while converting one row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QcIssues {
    codes: BTreeSet<QcCode>,
}

impl QcIssues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a code. Returns `true` if it was not already present.
    pub fn raise(&mut self, code: QcCode) -> bool {
        self.codes.insert(code)
    }

    pub fn contains(&self, code: QcCode) -> bool {
        self.codes.contains(&code)
    }

    /// `false` when no code was raised, or when every raised code is cosmetic
    /// (only `UPDATED_DATE_FORMAT`).
    pub fn has_issues(&self) -> bool {
        self.codes.iter().any(|code| !code.is_cosmetic())
    }

    pub fn iter(&self) -> impl Iterator<Item = QcCode> + '_ {
        self.codes.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Codes joined with `;`, e.g. `GOT_GENE_DATA;UPDATING_ALT_ID`.
    pub fn render(&self) -> String {
        self.codes
            .iter()
            .map(QcCode::as_str)
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl FromIterator<QcCode> for QcIssues {
    fn from_iter<I: IntoIterator<Item = QcCode>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}
