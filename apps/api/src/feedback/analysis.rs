use serde::{Deserialize, Serialize};

use crate::feedback::templates::{ANALYSIS_MISTAKES, ANALYSIS_SUGGESTIONS};

/// Canned review attached to every upload. It does not depend on the resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub mistakes: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ResumeAnalysis {
    pub fn standard() -> Self {
        Self {
            mistakes: ANALYSIS_MISTAKES.iter().map(|s| s.to_string()).collect(),
            suggestions: ANALYSIS_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
