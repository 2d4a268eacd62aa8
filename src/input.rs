//! Notes file reading (.txt and .docx)

use roxmltree::{Document, Node};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::info;
use zip::ZipArchive;

use crate::error::{BriefError, Result};

const DOCX_DOCUMENT_PART: &str = "word/document.xml";
const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Why `word/document.xml` could not be turned into text
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Xml(#[from] roxmltree::Error),

    #[error("missing w:document root")]
    NotWordDocument,
}

/// Supported input file kinds, keyed by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Text,
    Docx,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(Self::Text),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Read notes text from a .txt or .docx file.
///
/// Content that is blank after trimming is rejected.
pub fn read_input_text(path: &Path) -> Result<String> {
    let format = InputFormat::from_path(path).ok_or_else(|| {
        BriefError::validation(format!("Expected a .txt or .docx file, got: {}", path.display()))
    })?;

    info!("Reading notes file: {}", path.display());
    let content = match format {
        InputFormat::Text => {
            fs::read_to_string(path).map_err(|e| BriefError::read_failed(path, e))?
        }
        InputFormat::Docx => read_docx_text(path)?,
    };

    if content.trim().is_empty() {
        return Err(BriefError::validation(format!(
            "Input file is empty: {}",
            path.display()
        )));
    }
    Ok(content)
}

fn read_docx_text(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| BriefError::read_failed(path, e))?;
    let mut archive = ZipArchive::new(file).map_err(|e| BriefError::docx_invalid(path, e))?;

    let mut xml = String::new();
    let mut part = archive
        .by_name(DOCX_DOCUMENT_PART)
        .map_err(|e| BriefError::docx_invalid(path, e))?;
    part.read_to_string(&mut xml)
        .map_err(|e| BriefError::docx_invalid(path, e))?;

    extract_document_text(&xml).map_err(|e| BriefError::docx_invalid(path, e))
}

/// One line per non-empty `<w:p>` paragraph, its `<w:t>` runs joined.
///
/// Paragraphs nested in text boxes are visited too, and their runs also
/// count toward the enclosing paragraph.
pub fn extract_document_text(xml: &str) -> std::result::Result<String, DocumentError> {
    let doc = Document::parse(xml)?;
    if !is_word_element(&doc.root_element(), "document") {
        return Err(DocumentError::NotWordDocument);
    }

    let paragraphs: Vec<String> = doc
        .descendants()
        .filter(|node| is_word_element(node, "p"))
        .map(|paragraph| {
            paragraph
                .descendants()
                .filter(|node| is_word_element(node, "t"))
                .filter_map(|run| run.text())
                .collect::<String>()
        })
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .collect();

    Ok(paragraphs.join("\n"))
}

fn is_word_element(node: &Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(WORD_NS)
}
