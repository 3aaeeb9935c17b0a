use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use crate::extraction::{ExtractionError, TextExtractor};

const DOCUMENT_PART: &str = "word/document.xml";
/// Uncompressed size cap for the document part; the upload limit only bounds
/// the compressed package.
const MAX_DOCUMENT_PART_BYTES: u64 = 32 * 1024 * 1024;

/// OOXML word-processing decoder.
///
/// Reads the main document part out of the zip package and emits every body
/// paragraph followed by a newline. Paragraphs inside tables, headers and
/// footers are not body paragraphs and are skipped, as is text of textbox
/// paragraphs anchored inside a run.
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(ExtractionError::parse)?;
        let part = archive
            .by_name(DOCUMENT_PART)
            .map_err(|e| ExtractionError::ParseFailure(format!("{DOCUMENT_PART}: {e}")))?;

        if part.size() > MAX_DOCUMENT_PART_BYTES {
            return Err(oversized_part());
        }
        let xml = read_capped(part, MAX_DOCUMENT_PART_BYTES)?;

        let paragraphs = body_paragraphs(&xml)?;
        debug!(paragraphs = paragraphs.len(), "DOCX decoded");

        let mut text = String::new();
        for paragraph in &paragraphs {
            text.push_str(paragraph);
            text.push('\n');
        }
        Ok(text)
    }
}

/// Reads at most `limit` bytes; anything longer is rejected rather than
/// truncated, whatever size the archive header declared.
fn read_capped(reader: impl Read, limit: u64) -> Result<String, ExtractionError> {
    let mut buf = Vec::new();
    reader
        .take(limit + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ExtractionError::ParseFailure(format!("{DOCUMENT_PART}: {e}")))?;
    if buf.len() as u64 > limit {
        return Err(oversized_part());
    }
    String::from_utf8(buf)
        .map_err(|e| ExtractionError::ParseFailure(format!("{DOCUMENT_PART}: {e}")))
}

fn oversized_part() -> ExtractionError {
    ExtractionError::ParseFailure(format!(
        "{DOCUMENT_PART}: exceeds {MAX_DOCUMENT_PART_BYTES} bytes uncompressed"
    ))
}

/// Walks `word/document.xml` and returns the text of each `w:p` that is a
/// direct child of `w:body`, in document order.
fn body_paragraphs(xml: &str) -> Result<Vec<String>, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut paragraphs = Vec::new();
    // Local names of the currently open elements.
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event().map_err(ExtractionError::parse)? {
            Event::Start(e) => {
                let name = e.local_name().as_ref().to_vec();
                if name == b"p" && parent_is_body(&stack) {
                    current = Some(String::new());
                }
                stack.push(name);
            }
            Event::Empty(e) => {
                let name = e.local_name();
                match name.as_ref() {
                    b"p" if parent_is_body(&stack) => paragraphs.push(String::new()),
                    b"tab" => push_in_run(&mut current, &stack, "\t"),
                    b"br" | b"cr" => push_in_run(&mut current, &stack, "\n"),
                    b"noBreakHyphen" => push_in_run(&mut current, &stack, "-"),
                    _ => {}
                }
            }
            Event::Text(t) => {
                if in_outer_text(&stack) {
                    if let Some(paragraph) = current.as_mut() {
                        let text = t.unescape().map_err(ExtractionError::parse)?;
                        paragraph.push_str(&text);
                    }
                }
            }
            Event::CData(t) => {
                if in_outer_text(&stack) {
                    if let Some(paragraph) = current.as_mut() {
                        paragraph.push_str(&String::from_utf8_lossy(&t));
                    }
                }
            }
            Event::End(e) => {
                let name = e.local_name();
                stack.pop();
                if name.as_ref() == b"p" && parent_is_body(&stack) {
                    if let Some(paragraph) = current.take() {
                        paragraphs.push(paragraph);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(ExtractionError::ParseFailure(format!(
            "{DOCUMENT_PART}: unexpected end of document"
        )));
    }
    Ok(paragraphs)
}

fn parent_is_body(stack: &[Vec<u8>]) -> bool {
    stack.last().map(Vec::as_slice) == Some(b"body".as_slice())
}

/// True while inside content owned by a paragraph nested in the current one:
/// a textbox paragraph, or the fallback copy of alternate content.
fn in_nested_content(stack: &[Vec<u8>]) -> bool {
    let paragraphs = stack.iter().filter(|name| name.as_slice() == b"p").count();
    paragraphs > 1
        || stack
            .iter()
            .any(|name| matches!(name.as_slice(), b"txbxContent" | b"Fallback"))
}

fn in_outer_text(stack: &[Vec<u8>]) -> bool {
    stack.last().map(Vec::as_slice) == Some(b"t".as_slice()) && !in_nested_content(stack)
}

/// Run-level break and tab elements only count inside a run of a body paragraph.
fn push_in_run(current: &mut Option<String>, stack: &[Vec<u8>], s: &str) {
    if stack.last().map(Vec::as_slice) != Some(b"r".as_slice()) || in_nested_content(stack) {
        return;
    }
    if let Some(paragraph) = current.as_mut() {
        paragraph.push_str(s);
    }
}
