//! Conversion of legacy ("old small file") HPO annotation rows into v2
//! records.
//!
//! - **normalization**: per-column validation and normalization
//! - **description**: mining of the free-text description column
//! - **assembler**: column-ordered record assembly and finalization
//! - **batch**: line-tagged batch conversion with halt/collect policies

pub mod assembler;
pub mod batch;
pub mod context;
pub mod description;
pub mod error;
pub mod normalization;
pub mod options;

pub use assembler::{Conversion, RecordBuilder, convert_row};
pub use batch::{BatchOutcome, BatchSummary, LineError, LineResult, convert_batch};
pub use hpoa_model::LegacyLine;
pub use context::ConversionContext;
pub use description::{MinedDescription, mine_description};
pub use error::{ConversionError, ErrorKind, Result};
pub use options::{ConversionOptions, DEFAULT_PARALLEL_THRESHOLD, FailurePolicy};
