//! Uploaded resume files to plain text.
//!
//! PDF, DOCX and TXT are read. Legacy DOC is recognised but refused with a
//! message asking for DOCX or pasted text.

use std::io::{Cursor, Read};

use axum::{extract::Multipart, Json};
use bytes::Bytes;
use quick_xml::{events::Event, Reader};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use zip::ZipArchive;

use crate::errors::AppError;

const UPLOAD_FIELD: &str = "file";

/// Main document part inside a DOCX archive.
const DOCX_BODY: &str = "word/document.xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Doc,
    Text,
    Unknown,
}

impl DocumentKind {
    /// Classifies by MIME type first, then by file extension.
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Self {
        let name = file_name.to_lowercase();
        let mime = content_type.unwrap_or_default();

        if mime == "application/pdf" || name.ends_with(".pdf") {
            DocumentKind::Pdf
        } else if mime == "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            || name.ends_with(".docx")
        {
            DocumentKind::Docx
        } else if mime == "application/msword" || name.ends_with(".doc") {
            DocumentKind::Doc
        } else if mime == "text/plain" || name.ends_with(".txt") {
            DocumentKind::Text
        } else {
            DocumentKind::Unknown
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("DOC format is not fully supported. Please save as DOCX or paste the text directly.")]
    DocUnsupported,

    #[error("Unsupported file format. Please upload a PDF, DOCX, or TXT file.")]
    UnknownFormat,

    #[error("Failed to parse PDF. Please try pasting the text directly.")]
    Pdf(String),

    #[error("Failed to parse DOCX. Please try pasting the text directly.")]
    Docx(String),

    #[error("Text file is not valid UTF-8. Please try pasting the text directly.")]
    Encoding,

    #[error("No text could be extracted from the file.")]
    Empty,
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::DocUnsupported | ExtractionError::UnknownFormat => {
                AppError::UnsupportedFormat(err.to_string())
            }
            ExtractionError::Pdf(ref detail) => {
                warn!("PDF parse failed: {detail}");
                AppError::Unprocessable(err.to_string())
            }
            ExtractionError::Docx(ref detail) => {
                warn!("DOCX parse failed: {detail}");
                AppError::Unprocessable(err.to_string())
            }
            ExtractionError::Encoding | ExtractionError::Empty => {
                AppError::Unprocessable(err.to_string())
            }
        }
    }
}

/// Extracts trimmed text from an uploaded document. CPU-bound for PDF and
/// DOCX; call from a blocking task.
pub fn extract_text(
    file_name: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<String, ExtractionError> {
    let text = match DocumentKind::detect(file_name, content_type) {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractionError::Pdf(e.to_string()))?,
        DocumentKind::Text => std::str::from_utf8(bytes)
            .map_err(|_| ExtractionError::Encoding)?
            .to_string(),
        DocumentKind::Docx => docx_text(bytes).map_err(ExtractionError::Docx)?,
        DocumentKind::Doc => return Err(ExtractionError::DocUnsupported),
        DocumentKind::Unknown => return Err(ExtractionError::UnknownFormat),
    };

    let text = text.trim();
    if text.is_empty() {
        return Err(ExtractionError::Empty);
    }
    Ok(text.to_string())
}

/// Raw text of a DOCX body: `w:t` runs in document order, tabs and breaks
/// kept, paragraphs separated by a blank line.
fn docx_text(bytes: &[u8]) -> Result<String, String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(|e| e.to_string())?;
    let mut xml = String::new();
    archive
        .by_name(DOCX_BODY)
        .map_err(|e| e.to_string())?
        .read_to_string(&mut xml)
        .map_err(|e| e.to_string())?;

    let mut reader = Reader::from_str(&xml);
    let mut text = String::new();
    let mut in_run = false;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_run = false,
                b"w:p" => text.push_str("\n\n"),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" => text.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_run => {
                text.push_str(&t.unescape().map_err(|e| e.to_string())?);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(text)
}

/// Builds a minimal DOCX archive holding `document_xml` as its body.
#[cfg(test)]
pub(crate) fn docx_fixture(document_xml: &str) -> Vec<u8> {
    use std::io::Write;
    use zip::{write::FileOptions, CompressionMethod, ZipWriter};

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Stored);
    writer.start_file(DOCX_BODY, options).unwrap();
    writer.write_all(document_xml.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedText {
    pub file_name: String,
    pub text: String,
    pub characters: usize,
}

/// POST /api/extract-text
pub async fn handle_extract_text(mut multipart: Multipart) -> Result<Json<ExtractedText>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes: Bytes = field.bytes().await?;

        let name = file_name.clone();
        let text = tokio::task::spawn_blocking(move || {
            extract_text(&name, content_type.as_deref(), &bytes)
        })
        .await
        .map_err(|e| anyhow::anyhow!("extraction task failed: {e}"))??;

        let characters = text.chars().count();
        info!("Extracted text from upload: file={file_name}, characters={characters}");

        return Ok(Json(ExtractedText {
            file_name,
            text,
            characters,
        }));
    }

    Err(AppError::Validation(format!("{UPLOAD_FIELD} is required")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_mime_and_extension() {
        assert_eq!(DocumentKind::detect("cv.PDF", None), DocumentKind::Pdf);
        assert_eq!(
            DocumentKind::detect("upload", Some("application/pdf")),
            DocumentKind::Pdf
        );
        assert_eq!(DocumentKind::detect("cv.docx", None), DocumentKind::Docx);
        assert_eq!(DocumentKind::detect("cv.doc", None), DocumentKind::Doc);
        assert_eq!(
            DocumentKind::detect("notes", Some("text/plain")),
            DocumentKind::Text
        );
        assert_eq!(DocumentKind::detect("cv.rtf", None), DocumentKind::Unknown);
    }

    #[test]
    fn test_plain_text_is_trimmed() {
        let text = extract_text("cv.txt", None, b"  Jane Doe\nEngineer \n").unwrap();
        assert_eq!(text, "Jane Doe\nEngineer");
    }

    const SAMPLE_BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p>
      <w:r><w:t xml:space="preserve">Rust &amp; Go </w:t></w:r>
      <w:r><w:tab/><w:t>Engineer</w:t></w:r>
    </w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_docx_runs_are_extracted() {
        let bytes = docx_fixture(SAMPLE_BODY);
        let text = extract_text("cv.docx", None, &bytes).unwrap();
        assert_eq!(text, "Jane Doe\n\nRust & Go \tEngineer");
    }

    #[test]
    fn test_broken_docx_is_unprocessable() {
        let err = extract_text("cv.docx", None, b"PK\x03\x04").unwrap_err();
        assert!(matches!(err, ExtractionError::Docx(_)));
        assert!(matches!(
            AppError::from(err),
            AppError::Unprocessable(msg) if msg.starts_with("Failed to parse DOCX")
        ));
    }

    #[test]
    fn test_docx_without_text_is_empty() {
        let bytes = docx_fixture("<w:document><w:body><w:p/></w:body></w:document>");
        assert!(matches!(
            extract_text("cv.docx", None, &bytes),
            Err(ExtractionError::Empty)
        ));
    }

    #[test]
    fn test_legacy_doc_is_refused() {
        let err = extract_text("cv.doc", None, b"\xd0\xcf\x11\xe0").unwrap_err();
        assert!(matches!(err, ExtractionError::DocUnsupported));
        assert!(matches!(
            AppError::from(err),
            AppError::UnsupportedFormat(msg) if msg.contains("save as DOCX")
        ));
    }

    #[test]
    fn test_garbage_pdf_is_unprocessable() {
        let err = extract_text("cv.pdf", None, b"not a pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
        assert!(matches!(AppError::from(err), AppError::Unprocessable(_)));
    }

    #[test]
    fn test_empty_and_invalid_text() {
        assert!(matches!(
            extract_text("cv.txt", None, b"   "),
            Err(ExtractionError::Empty)
        ));
        assert!(matches!(
            extract_text("cv.txt", None, &[0xff, 0xfe, 0x00]),
            Err(ExtractionError::Encoding)
        ));
    }

    #[test]
    fn test_unsupported_maps_to_415_variant() {
        let err: AppError = ExtractionError::UnknownFormat.into();
        assert!(matches!(err, AppError::UnsupportedFormat(msg) if msg.contains("PDF, DOCX, or TXT")));
    }
}
