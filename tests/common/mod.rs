// Shared fixtures for integration tests

use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Write a minimal Word document with one paragraph per entry
pub fn write_minimal_docx(path: &Path, paragraphs: &[&str]) -> anyhow::Result<()> {
    let body: String = paragraphs
        .iter()
        .map(|text| format!("<w:p><w:r><w:t>{text}</w:t></w:r></w:p>"))
        .collect();
    let document_xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{WORD_NS}"><w:body>{body}</w:body></w:document>"#
    );
    write_docx_part(path, &document_xml)
}

/// Write a Word package whose `word/document.xml` is exactly `document_xml`
pub fn write_docx_part(path: &Path, document_xml: &str) -> anyhow::Result<()> {
    let content_types = concat!(
        r#"<?xml version="1.0" encoding="UTF-8"?>"#,
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        r#"<Default Extension="xml" ContentType="application/xml"/>"#,
        r#"</Types>"#
    );

    let mut zip = ZipWriter::new(File::create(path)?);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(content_types.as_bytes())?;
    zip.start_file("word/document.xml", options)?;
    zip.write_all(document_xml.as_bytes())?;
    zip.finish()?;
    Ok(())
}
