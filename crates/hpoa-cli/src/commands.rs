use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span, warn};

use hpoa_convert::{
    BatchOutcome, ConversionContext, ConversionOptions, FailurePolicy, convert_batch,
};
use hpoa_ingest::read_legacy_file;
use hpoa_model::TermId;
use hpoa_ontology::{ModifierIndex, Ontology, load_obo, resolve_ontology_path};

use hpoa_cli::output::write_v2_file;

use crate::cli::{ConvertArgs, ModifiersArgs};
use crate::types::{ConvertResult, FileSummary, HaltPoint, ModifierListing, RowError};

/// File extension of v2 small files.
const V2_EXTENSION: &str = "tab";

fn load_ontology(explicit: Option<&Path>) -> Result<(PathBuf, Ontology)> {
    let path = resolve_ontology_path(explicit);
    let start = Instant::now();
    let ontology = load_obo(&path).with_context(|| format!("load ontology: {}", path.display()))?;
    info!(
        path = %path.display(),
        duration_ms = start.elapsed().as_millis(),
        "ontology ready"
    );
    Ok((path, ontology))
}

fn conversion_options(args: &ConvertArgs) -> ConversionOptions {
    let policy = if args.halt_on_error {
        FailurePolicy::Halt
    } else {
        FailurePolicy::Collect
    };
    let mut options = ConversionOptions::new().with_failure_policy(policy);
    if let Some(threshold) = args.parallel_threshold {
        options = options.with_parallel_threshold(threshold);
    }
    options
}

/// Output path for a converted file: same file stem, v2 extension.
fn output_path(output_dir: &Path, source: &Path) -> Result<PathBuf> {
    let stem = source
        .file_stem()
        .ok_or_else(|| anyhow!("input has no file name: {}", source.display()))?;
    Ok(output_dir.join(format!("{}.{V2_EXTENSION}", stem.to_string_lossy())))
}

fn row_errors(outcome: &BatchOutcome) -> Vec<RowError> {
    outcome
        .errors()
        .map(|entry| RowError {
            line: entry.line,
            kind: entry.error.kind(),
            column: entry.error.column(),
            message: entry.error.to_string(),
        })
        .collect()
}

pub fn run_convert(args: &ConvertArgs, ontology: Option<&Path>) -> Result<ConvertResult> {
    let (ontology_path, ontology) = load_ontology(ontology)?;
    let context = ConversionContext::new(&ontology, conversion_options(args));
    if context.modifiers().is_empty() {
        warn!(
            root = %context.options().modifier_root,
            "modifier index is empty; descriptions with MODIFIER: tokens will fail"
        );
    }

    let mut result = ConvertResult {
        ontology: ontology_path,
        output_dir: args.output_dir.clone(),
        dry_run: args.dry_run,
        files: Vec::new(),
        halted: None,
        has_errors: false,
    };

    for source in &args.inputs {
        let span = info_span!("file", source = %source.display());
        let _guard = span.enter();

        let table = read_legacy_file(source)
            .with_context(|| format!("read legacy file: {}", source.display()))?;
        let outcome = convert_batch(&context, &table.lines);
        let batch = outcome.summary();
        result.has_errors |= outcome.has_fatal_errors();

        // A halted file still gets the rows converted before the failure.
        let output = if args.dry_run {
            None
        } else {
            let path = output_path(&args.output_dir, source)?;
            let records = outcome.conversions().map(|conversion| &conversion.record);
            write_v2_file(&path, records)?;
            info!(output = %path.display(), records = batch.converted, "v2 file written");
            Some(path)
        };

        result.files.push(FileSummary {
            source: source.clone(),
            output,
            errors: row_errors(&outcome),
            batch,
        });

        if let Some(line) = outcome.halted_at {
            warn!(line, "halting after fatal row");
            result.halted = Some(HaltPoint {
                source: source.clone(),
                line,
            });
            break;
        }
    }
    Ok(result)
}

pub fn run_modifiers(args: &ModifiersArgs, ontology: Option<&Path>) -> Result<ModifierListing> {
    let (_, ontology) = load_ontology(ontology)?;
    let root = TermId::new(args.root.as_str())
        .with_context(|| format!("invalid modifier root: {}", args.root))?;
    let index = ModifierIndex::build(&ontology, &root);
    let entries = index
        .entries()
        .into_iter()
        .map(|(label, id)| (label.to_string(), id.to_string()))
        .collect();
    Ok(ModifierListing {
        root: root.to_string(),
        entries,
        collisions: index.collisions().to_vec(),
    })
}
