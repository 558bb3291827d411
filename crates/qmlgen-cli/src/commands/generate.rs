//! `qmlgen generate` - scan Python sources and write the type manifest

use anyhow::Context;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use qmlgen_logger as logger;
use qmlgen_manifest::{write_manifest, write_qmldir};
use qmlgen_scan::{run_pipeline, GenerateOptions, ScanConfig};

use crate::common::GlobalOpts;

/// Generate a `.qmltypes` manifest from Python reactive-component sources
#[derive(Args, Debug)]
pub struct GenerateCommand {
    /// Python file paths, directories, or glob patterns to scan
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Output path for the generated qmltypes file
    #[arg(short, long, default_value = "generated.qmltypes")]
    pub output: PathBuf,

    /// Module name used in export strings and the qmldir file
    #[arg(short, long, default_value = "module")]
    pub module: String,

    /// Also write a qmldir registration file next to the manifest
    #[arg(short = 'q', long)]
    pub qmldir: bool,
}

pub fn handle_generate(cmd: GenerateCommand, opts: GlobalOpts) -> anyhow::Result<()> {
    let options = GenerateOptions {
        module_name: cmd.module.clone(),
        config: ScanConfig::default(),
    };

    logger::debug(&format!(
        "module={} output={} qmldir={}",
        cmd.module,
        cmd.output.display(),
        cmd.qmldir
    ));

    logger::spinner_start("Scanning Python sources...");
    let outcome = match run_pipeline(&cmd.paths, &options) {
        Ok(outcome) => {
            logger::spinner_stop();
            outcome
        }
        Err(err) => {
            logger::spinner_error("Scan failed");
            return Err(err.into());
        }
    };
    logger::info(&format!(
        "Successfully processed {} files with reactive classes",
        outcome.files_with_classes
    ));

    if !opts.quiet {
        println!(
            "{} {} classes from {} of {} scanned files",
            "Extracted".green().bold(),
            outcome.classes.len(),
            outcome.files_with_classes,
            outcome.files_scanned
        );
    }

    write_manifest(&outcome.classes, &cmd.output)
        .with_context(|| format!("Failed to write manifest to {}", cmd.output.display()))?;
    logger::spinner_success(&format!(
        "Generated qmltypes file: {}",
        cmd.output.display()
    ));

    if cmd.qmldir {
        let output_dir = cmd.output.parent().unwrap_or_else(|| Path::new("."));
        let qmldir_path = write_qmldir(output_dir, &cmd.module)
            .with_context(|| "Failed to write qmldir file".to_string())?;
        logger::success(&format!("Generated qmldir file: {}", qmldir_path.display()));
    }

    Ok(())
}
