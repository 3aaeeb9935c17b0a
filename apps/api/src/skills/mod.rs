// Skill tagging: fixed keyword vocabulary + whitespace-boundary matcher.

pub mod tagger;
pub mod vocabulary;

pub use tagger::{tag_skills, SkillMatchSet};
pub use vocabulary::SkillVocabulary;
