//! Rendered brief persistence

use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::brief::Mode;
use crate::error::{BriefError, Result};

/// Write `markdown` to `<output_dir>/brief_<mode>_<YYYYmmdd_HHMMSS>.md`
pub fn save_markdown(markdown: &str, mode: Mode, output_dir: &Path) -> Result<PathBuf> {
    save_markdown_at(markdown, mode, output_dir, Local::now())
}

/// Same as [`save_markdown`] with a fixed timestamp.
///
/// Creates `output_dir` when missing. A name already taken within the same
/// second gets a `_2`, `_3`, ... suffix instead of being overwritten.
pub fn save_markdown_at(
    markdown: &str,
    mode: Mode,
    output_dir: &Path,
    timestamp: DateTime<Local>,
) -> Result<PathBuf> {
    let write_failed = |source| BriefError::OutputWrite {
        dir: output_dir.to_path_buf(),
        source,
    };

    fs::create_dir_all(output_dir).map_err(write_failed)?;

    let stem = format!("brief_{mode}_{}", timestamp.format("%Y%m%d_%H%M%S"));
    let mut attempt = 1;
    loop {
        let file_name = if attempt == 1 {
            format!("{stem}.md")
        } else {
            format!("{stem}_{attempt}.md")
        };
        let path = output_dir.join(file_name);

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(markdown.as_bytes()).map_err(write_failed)?;
                info!("Brief written: {}", path.display());
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(write_failed(e)),
        }
    }
}
