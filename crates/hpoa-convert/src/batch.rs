//! Batch conversion of line-tagged legacy rows.

use std::collections::BTreeMap;
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, info_span, warn};

use hpoa_model::{LegacyLine, QcCode};

use crate::{Conversion, ConversionContext, ConversionError, ErrorKind, FailurePolicy, convert_row};

/// Outcome of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineResult {
    pub line: usize,
    pub outcome: Result<Conversion, ConversionError>,
}

/// A conversion error tied to the line it happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineError<'a> {
    pub line: usize,
    pub error: &'a ConversionError,
}

/// Results of a batch, in line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub results: Vec<LineResult>,
    /// Line of the fatal error that stopped a `Halt` run.
    pub halted_at: Option<usize>,
}

impl BatchOutcome {
    pub fn conversions(&self) -> impl Iterator<Item = &Conversion> {
        self.results
            .iter()
            .filter_map(|result| result.outcome.as_ref().ok())
    }

    /// Fatal errors and recoverable warnings, in line order.
    pub fn errors(&self) -> impl Iterator<Item = LineError<'_>> {
        self.results.iter().flat_map(|result| {
            let line = result.line;
            let errors: Vec<&ConversionError> = match &result.outcome {
                Ok(conversion) => conversion.warnings.iter().collect(),
                Err(error) => vec![error],
            };
            errors.into_iter().map(move |error| LineError { line, error })
        })
    }

    pub fn has_fatal_errors(&self) -> bool {
        self.results.iter().any(|result| result.outcome.is_err())
    }

    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary {
            rows: self.results.len(),
            halted_at: self.halted_at,
            ..BatchSummary::default()
        };
        for conversion in self.conversions() {
            summary.converted += 1;
            if conversion.record.has_issues() {
                summary.with_issues += 1;
            }
            for code in conversion.record.qc.iter() {
                *summary.qc_counts.entry(code).or_default() += 1;
            }
        }
        for LineError { error, .. } in self.errors() {
            match error.kind() {
                ErrorKind::Fatal => summary.fatal += 1,
                ErrorKind::Recoverable => summary.recoverable += 1,
            }
        }
        summary
    }
}

/// Counts over a finished batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Lines processed (after a halt, lines past the failure are not counted).
    pub rows: usize,
    pub converted: usize,
    pub with_issues: usize,
    pub fatal: usize,
    pub recoverable: usize,
    pub qc_counts: BTreeMap<QcCode, usize>,
    pub halted_at: Option<usize>,
}

/// Converts every line, on the rayon pool once the batch is large enough.
///
/// Results come back in input order. Under [`FailurePolicy::Halt`] the
/// results stop at the first fatal line; everything before it is kept.
pub fn convert_batch(context: &ConversionContext<'_>, lines: &[LegacyLine]) -> BatchOutcome {
    let span = info_span!("convert_batch", rows = lines.len());
    let _guard = span.enter();
    let start = Instant::now();

    let convert = |line: &LegacyLine| {
        let outcome = convert_row(context, &line.row);
        match &outcome {
            Ok(conversion) => debug!(
                line = line.line,
                disease_id = %conversion.record.disease_id,
                qc = %conversion.record.qc.render(),
                "row converted"
            ),
            Err(error) => warn!(line = line.line, column = %error.column(), error = %error, "row failed"),
        }
        LineResult {
            line: line.line,
            outcome,
        }
    };

    let mut results: Vec<LineResult> = if lines.len() >= context.options().parallel_threshold {
        lines.par_iter().map(convert).collect()
    } else {
        lines.iter().map(convert).collect()
    };

    let mut halted_at = None;
    if context.options().failure_policy == FailurePolicy::Halt
        && let Some(position) = results.iter().position(|result| result.outcome.is_err())
    {
        halted_at = Some(results[position].line);
        results.truncate(position + 1);
    }

    let outcome = BatchOutcome { results, halted_at };
    let summary = outcome.summary();
    info!(
        rows = summary.rows,
        converted = summary.converted,
        fatal = summary.fatal,
        recoverable = summary.recoverable,
        with_issues = summary.with_issues,
        halted_at = ?summary.halted_at,
        duration_ms = start.elapsed().as_millis(),
        "batch converted"
    );
    outcome
}
