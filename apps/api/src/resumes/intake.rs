//! Upload pipeline: extract text → tag skills.
//!
//! Runs synchronously and touches no shared state; callers on the async
//! runtime should move it onto the blocking pool.

use tracing::{debug, info};

use crate::extraction::{ExtractedDocument, ExtractionError, ExtractionRequest};
use crate::skills::{tag_skills, SkillMatchSet, SkillVocabulary};

#[derive(Debug, Clone)]
pub struct IntakeOutcome {
    pub document: ExtractedDocument,
    pub skills: SkillMatchSet,
}

/// Extracts the upload and tags it. An extraction failure yields neither
/// text nor skills.
pub fn analyze_upload(
    request: &ExtractionRequest,
    vocabulary: &SkillVocabulary,
) -> Result<IntakeOutcome, ExtractionError> {
    let document = request.extract()?;
    let skills = tag_skills(&document.text, vocabulary);

    info!(
        media_type = %request.media_type,
        bytes = request.bytes.len(),
        chars = document.text.len(),
        skills = skills.len(),
        "Resume analysed"
    );

    if skills.is_empty() {
        debug!("No vocabulary skills found in upload");
    }

    Ok(IntakeOutcome { document, skills })
}
