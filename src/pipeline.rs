//! Single-file and batch brief generation

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::brief::{parse_notes, Mode};
use crate::error::{BriefError, Result};
use crate::input::{read_input_text, InputFormat};
use crate::output::save_markdown;
use crate::render::{format_markdown, RenderOptions, DEFAULT_MAX_KTAS};

/// Runtime options for one invocation
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: Mode,
    pub output_dir: PathBuf,
    /// Uniform per-section cap overriding the mode defaults
    pub max_bullets: Option<usize>,
    pub max_ktas: usize,
    pub email_ready: bool,
}

impl RunConfig {
    pub fn new(mode: Mode, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            output_dir: output_dir.into(),
            max_bullets: None,
            max_ktas: DEFAULT_MAX_KTAS,
            email_ready: false,
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            max_ktas: self.max_ktas,
            email_ready: self.email_ready,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_bullets == Some(0) {
            return Err(BriefError::validation("--max-bullets must be >= 1"));
        }
        if self.max_ktas == 0 {
            return Err(BriefError::validation("--max-ktas must be >= 1"));
        }
        Ok(())
    }
}

pub fn validate_input_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BriefError::validation(format!(
            "Input file not found: {}",
            path.display()
        )));
    }
    if path.is_dir() {
        return Err(BriefError::validation(format!(
            "Expected a file path, got directory: {}",
            path.display()
        )));
    }
    if InputFormat::from_path(path).is_none() {
        return Err(BriefError::validation(format!(
            "Expected a .txt or .docx file, got: {}",
            path.display()
        )));
    }
    Ok(())
}

pub fn validate_batch_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(BriefError::validation(format!(
            "Batch directory not found: {}",
            path.display()
        )));
    }
    if !path.is_dir() {
        return Err(BriefError::validation(format!(
            "Expected a directory for --batch-dir, got: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Supported notes files directly inside `batch_dir`, sorted by path
pub fn collect_batch_files(batch_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(batch_dir).map_err(|e| BriefError::read_failed(batch_dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| BriefError::read_failed(batch_dir, e))?.path();
        if path.is_file() && InputFormat::from_path(&path).is_some() {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(BriefError::validation(format!(
            "No .txt or .docx files found in batch directory: {}",
            batch_dir.display()
        )));
    }
    Ok(files)
}

/// Read, parse, render and save one notes file; returns the output path
pub fn process_single_file(input_path: &Path, config: &RunConfig) -> Result<PathBuf> {
    validate_input_file(input_path)?;
    let raw_text = read_input_text(input_path)?;

    let brief = parse_notes(&raw_text, config.mode, config.max_bullets);
    info!(
        "Parsed {} source lines from {}",
        brief.source_lines.len(),
        input_path.display()
    );

    let markdown = format_markdown(&brief, config.mode, input_path, config.render_options());
    save_markdown(&markdown, config.mode, &config.output_dir)
}

/// Process every supported file in `batch_dir` in order.
///
/// Stops at the first failure; briefs already written stay on disk.
pub fn process_batch(batch_dir: &Path, config: &RunConfig) -> Result<Vec<PathBuf>> {
    validate_batch_dir(batch_dir)?;
    let files = collect_batch_files(batch_dir)?;
    info!("Batch processing {} files from {}", files.len(), batch_dir.display());

    let mut outputs = Vec::with_capacity(files.len());
    for (i, file) in files.iter().enumerate() {
        info!("[{}/{}] {}", i + 1, files.len(), file.display());
        outputs.push(process_single_file(file, config)?);
    }
    Ok(outputs)
}
