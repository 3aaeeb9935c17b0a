//! Skill Tagger — finds vocabulary keywords in extracted resume text.
//!
//! Matching is a plain whitespace-boundary scan over the lower-cased text:
//! a keyword counts when it appears as `" <skill> "` anywhere, or as
//! `"<skill> "` at the very start. Keywords followed by punctuation or sitting
//! at the very end of the text do not match. Downstream output depends on
//! this exact rule, so it must not be swapped for a real tokenizer.

use serde::Serialize;

use crate::skills::vocabulary::SkillVocabulary;

/// Deduplicated canonical skill labels, iterated in first-match order
/// (which is vocabulary order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillMatchSet {
    skills: Vec<String>,
}

impl SkillMatchSet {
    /// Adds `skill` unless an equal label is already present.
    pub fn insert(&mut self, skill: String) -> bool {
        if self.skills.contains(&skill) {
            return false;
        }
        self.skills.push(skill);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.skills
    }
}

/// Scans `text` for every vocabulary entry. Never fails; an empty set is a
/// valid result.
pub fn tag_skills(text: &str, vocabulary: &SkillVocabulary) -> SkillMatchSet {
    let text_lower = text.to_lowercase();
    let mut matches = SkillMatchSet::default();

    for skill in vocabulary.iter() {
        let skill_lower = skill.to_lowercase();
        if occurs_as_token_run(&text_lower, &skill_lower) {
            matches.insert(canonical_display_form(skill));
        }
    }

    matches
}

fn occurs_as_token_run(text_lower: &str, skill_lower: &str) -> bool {
    text_lower.contains(&format!(" {skill_lower} "))
        || text_lower.starts_with(&format!("{skill_lower} "))
}

/// Capitalizes each whitespace-separated word: first character upper-cased,
/// the rest lower-cased. Symbols pass through untouched (`c++` → `C++`).
pub fn canonical_display_form(skill: &str) -> String {
    skill
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
