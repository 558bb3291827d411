//! Pipeline orchestration: discovery → locate → extract → accumulate
//!
//! Per-file and per-class failures are isolated: they are logged, recorded
//! as warnings, and processing continues with the remaining work. The only
//! fatal conditions are the empty results — zero files discovered, or
//! files discovered but zero classes extracted across all of them.

use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use qmlgen_logger as logger;
use qmlgen_manifest::ClassRecord;

use crate::discovery;
use crate::extractor;
use crate::locator::ClassLocator;
use crate::registry::ScanConfig;

/// Fatal pipeline failures. Everything else is isolated per file/class.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("No Python files found for the given path specs")]
    NoFilesFound,

    #[error("No reactive classes found in any of the scanned files")]
    NoClassesFound,

    #[error("Found reactive classes but none could be parsed")]
    NoClassesParsed,
}

/// Options for one pipeline run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Module name used in export strings.
    pub module_name: String,
    pub config: ScanConfig,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            module_name: "module".to_string(),
            config: ScanConfig::default(),
        }
    }
}

/// Accumulated result of one run. Records are in file order, then class
/// order within each file — the emitter preserves this order verbatim.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub classes: Vec<ClassRecord>,
    pub files_scanned: usize,
    /// Files in which at least one candidate class was located.
    pub files_with_classes: usize,
    pub warnings: Vec<String>,
}

/// Run the full extraction pipeline over the given path specs.
pub fn run_pipeline(specs: &[String], opts: &GenerateOptions) -> Result<ScanOutcome, PipelineError> {
    let discovered = discovery::collect_python_files(specs);
    let mut warnings = discovered.warnings;
    for warning in &warnings {
        logger::warn(warning);
    }

    if discovered.files.is_empty() {
        return Err(PipelineError::NoFilesFound);
    }
    logger::info(&format!(
        "Found {} Python files to process",
        discovered.files.len()
    ));

    let mut outcome = ScanOutcome::default();
    for file in &discovered.files {
        logger::info(&format!("Processing file: {}", file.display()));
        outcome.files_scanned += 1;

        match scan_file(file, opts, &mut warnings) {
            Ok(records) if records.is_empty() => {
                logger::info(&format!(
                    "  No reactive classes found in {}, skipping...",
                    file.display()
                ));
            }
            Ok(mut records) => {
                outcome.files_with_classes += 1;
                outcome.classes.append(&mut records);
            }
            Err(err) => {
                let message = format!("Error processing file {}: {:#}", file.display(), err);
                logger::warn(&message);
                logger::warn("  Skipping this file and continuing with others...");
                warnings.push(message);
            }
        }
    }

    outcome.warnings = warnings;
    if outcome.classes.is_empty() {
        if outcome.files_with_classes > 0 {
            return Err(PipelineError::NoClassesParsed);
        }
        return Err(PipelineError::NoClassesFound);
    }
    Ok(outcome)
}

/// Scan a single file: locate candidates, extract members for each.
/// Per-class extraction failures are recorded and skipped.
fn scan_file(
    path: &Path,
    opts: &GenerateOptions,
    warnings: &mut Vec<String>,
) -> anyhow::Result<Vec<ClassRecord>> {
    let source = fs::read_to_string(path)?;
    let locator = ClassLocator::new(&source, &opts.config);
    let located = locator.locate_all()?;

    if !located.is_empty() {
        let names: Vec<&str> = located.iter().map(|c| c.name.as_str()).collect();
        logger::info(&format!(
            "  Found {} reactive classes: {:?}",
            located.len(),
            names
        ));
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut records = Vec::new();
    for class in located {
        match extractor::extract_members(class.span, &opts.config) {
            Ok(members) => {
                let mut record =
                    ClassRecord::new(&file_name, &class.name, &opts.module_name, &class.prototype);
                record.set_singleton(class.is_singleton);
                record.properties = members.properties;
                record.signals = members.signals;
                record.methods = members.methods;
                debug!("Extracted class record: {}", record.name);
                records.push(record);
            }
            Err(err) => {
                let message = format!(
                    "Error parsing class {} in {}: {:#}",
                    class.name, file_name, err
                );
                logger::warn(&message);
                warnings.push(message);
            }
        }
    }
    Ok(records)
}
