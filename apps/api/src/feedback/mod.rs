// Templated outputs built from a skill set: canned analysis and cover letter.
// No decision logic lives here; every string is fixed except the skill list.

pub mod analysis;
pub mod cover_letter;
pub mod templates;

pub use analysis::ResumeAnalysis;
pub use cover_letter::render_cover_letter;
