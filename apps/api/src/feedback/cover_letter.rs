use crate::feedback::templates::COVER_LETTER_TEMPLATE;
use crate::skills::SkillMatchSet;

/// How many skills are named in the opening paragraph.
pub const COVER_LETTER_SKILL_LIMIT: usize = 5;

/// Fills the cover letter template with the first five skills in set order.
/// With no skills the sentence is left with an empty list, as before.
pub fn render_cover_letter(skills: &SkillMatchSet) -> String {
    let named = skills
        .iter()
        .take(COVER_LETTER_SKILL_LIMIT)
        .collect::<Vec<_>>()
        .join(", ");
    COVER_LETTER_TEMPLATE.replace("{skills}", &named)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(labels: &[&str]) -> SkillMatchSet {
        let mut set = SkillMatchSet::default();
        for label in labels {
            set.insert(label.to_string());
        }
        set
    }

    #[test]
    fn test_interpolates_skills_in_set_order() {
        let letter = render_cover_letter(&set_of(&["Python", "React"]));
        assert!(letter.contains("technologies like Python, React, I am confident"));
        assert!(letter.starts_with("Dear Hiring Manager,\n\n"));
        assert!(letter.ends_with("Sincerely,\n[Your Name]\n"));
    }

    #[test]
    fn test_only_first_five_skills_are_named() {
        let letter = render_cover_letter(&set_of(&["A", "B", "C", "D", "E", "F", "G"]));
        assert!(letter.contains("technologies like A, B, C, D, E, I am"));
        assert!(!letter.contains("F,"));
    }

    #[test]
    fn test_placeholders_are_left_for_the_candidate() {
        let letter = render_cover_letter(&set_of(&["Git"]));
        assert!(letter.contains("[mention a key achievement from your resume"));
        assert!(letter.contains("[mention something specific about the company or role]"));
        assert!(!letter.contains("{skills}"));
    }

    #[test]
    fn test_no_skills_leaves_empty_list() {
        let letter = render_cover_letter(&SkillMatchSet::default());
        assert!(letter.contains("technologies like , I am confident"));
    }
}
