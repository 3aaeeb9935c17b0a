//! Document Text Extractor — turns an uploaded byte buffer into plain text.
//!
//! Each supported format is a `TextExtractor` implementation. `extract()` picks
//! one by the declared media type; adding a format means adding a variant to
//! `MediaType` and a decoder module, nothing downstream changes.

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

pub mod docx;
pub mod pdf;

use docx::DocxExtractor;
use pdf::PdfExtractor;

pub const PDF_MEDIA_TYPE: &str = "application/pdf";
pub const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported media type '{0}'. Please upload a PDF or DOCX file.")]
    UnsupportedMediaType(String),

    #[error("Failed to parse resume file: {0}")]
    ParseFailure(String),
}

impl ExtractionError {
    pub fn parse(err: impl std::fmt::Display) -> Self {
        ExtractionError::ParseFailure(err.to_string())
    }
}

/// Formats the extractor knows how to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Pdf,
    Docx,
}

impl MediaType {
    /// Exact match on the declared type string; parameters or casing
    /// differences are not normalized.
    pub fn from_declared(media_type: &str) -> Result<Self, ExtractionError> {
        match media_type {
            PDF_MEDIA_TYPE => Ok(MediaType::Pdf),
            DOCX_MEDIA_TYPE => Ok(MediaType::Docx),
            other => Err(ExtractionError::UnsupportedMediaType(other.to_string())),
        }
    }

    fn extractor(&self) -> &'static dyn TextExtractor {
        match self {
            MediaType::Pdf => &PdfExtractor,
            MediaType::Docx => &DocxExtractor,
        }
    }
}

/// Produce text from the bytes of one document format.
///
/// Implementations must either return the full text or fail; partial output
/// on a decode error is not allowed.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError>;
}

/// A single upload awaiting extraction.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub bytes: Bytes,
    pub media_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractedDocument {
    pub text: String,
}

impl ExtractionRequest {
    pub fn new(bytes: impl Into<Bytes>, media_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            media_type: media_type.into(),
        }
    }

    pub fn extract(&self) -> Result<ExtractedDocument, ExtractionError> {
        extract(&self.bytes, &self.media_type)
    }
}

/// Extracts plain text from `bytes` interpreted as `media_type`.
///
/// The media type is resolved before the bytes are inspected, so an
/// unrecognized type fails even for garbage input.
pub fn extract(bytes: &[u8], media_type: &str) -> Result<ExtractedDocument, ExtractionError> {
    let kind = MediaType::from_declared(media_type)?;
    let text = kind.extractor().extract_text(bytes)?;
    Ok(ExtractedDocument { text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_recognizes_pdf_and_docx() {
        assert_eq!(
            MediaType::from_declared("application/pdf").unwrap(),
            MediaType::Pdf
        );
        assert_eq!(
            MediaType::from_declared(DOCX_MEDIA_TYPE).unwrap(),
            MediaType::Docx
        );
    }

    #[test]
    fn test_unrecognized_media_types_fail_before_reading_bytes() {
        // Garbage bytes: a decoder would report ParseFailure if it ran.
        let garbage = b"\x00\x01not a document";
        for media_type in [
            "text/plain",
            "application/msword",
            "APPLICATION/PDF",
            "application/pdf; charset=binary",
            "",
        ] {
            let err = extract(garbage, media_type).unwrap_err();
            match err {
                ExtractionError::UnsupportedMediaType(t) => assert_eq!(t, media_type),
                other => panic!("expected UnsupportedMediaType, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_malformed_bytes_fail_with_parse_failure() {
        for media_type in [PDF_MEDIA_TYPE, DOCX_MEDIA_TYPE] {
            let err = extract(b"definitely not a document", media_type).unwrap_err();
            assert!(
                matches!(err, ExtractionError::ParseFailure(_)),
                "{media_type}: expected ParseFailure, got {err:?}"
            );
        }
    }

    #[test]
    fn test_extraction_request_delegates_to_extract() {
        let request = ExtractionRequest::new(b"hello".to_vec(), "text/plain");
        assert!(matches!(
            request.extract(),
            Err(ExtractionError::UnsupportedMediaType(_))
        ));
    }

    #[test]
    fn test_parse_failure_message_carries_cause() {
        let err = ExtractionError::parse("invalid Zip archive");
        assert_eq!(
            err.to_string(),
            "Failed to parse resume file: invalid Zip archive"
        );
    }
}
