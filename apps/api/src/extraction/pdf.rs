use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::extraction::{ExtractionError, TextExtractor};

/// PDF decoder backed by `pdf-extract`.
///
/// Pages are concatenated in page order with no separator. Image-only pages
/// yield an empty string rather than an error. pdf-extract opens every
/// text-bearing page with blank lines; those are stripped so a page's first
/// word keeps its leading position.
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        // pdf-extract panics on some malformed streams instead of returning Err.
        let pages = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem_by_pages(bytes)
        }))
        .map_err(|payload| ExtractionError::ParseFailure(panic_message(payload.as_ref())))?
        .map_err(ExtractionError::parse)?;

        debug!(pages = pages.len(), "PDF decoded");
        Ok(pages.iter().map(|page| strip_page_start(page)).collect())
    }
}

fn strip_page_start(page: &str) -> &str {
    page.trim_start_matches(['\r', '\n'])
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "PDF decoder aborted on malformed input".to_string()
    }
}
