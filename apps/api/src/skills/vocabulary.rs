use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};

/// Built-in skill keywords, in display/tie-break order.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "c#",
    "javascript",
    "typescript",
    "html",
    "css",
    "sql",
    "nosql",
    "react",
    "angular",
    "vue",
    "django",
    "flask",
    "fastapi",
    "spring",
    "node.js",
    "nodejs",
    "git",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "cloud",
    "machine learning",
    "data science",
    "artificial intelligence",
    "deep learning",
    "nlp",
    "api",
    "rest",
    "graphql",
    "agile",
    "scrum",
    "project management",
    "figma",
    "sketch",
    "adobe xd",
    "autocad",
    "solidworks",
    "blender",
    "tensorflow",
    "pytorch",
    "scikit-learn",
    "pandas",
    "numpy",
];

/// Immutable, ordered list of skill keywords the tagger matches against.
///
/// Cheap to clone; all clones share one allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    entries: Arc<[String]>,
}

impl SkillVocabulary {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a newline-separated vocabulary. Blank lines and `#` comments are
    /// skipped; each remaining line is trimmed and kept verbatim otherwise.
    pub fn parse(source: &str) -> Self {
        Self::new(
            source
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Loads a vocabulary file. An empty file is rejected so a typo in the
    /// path of a real list cannot silently disable tagging.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skills file '{}'", path.display()))?;
        let vocabulary = Self::parse(&source);
        if vocabulary.is_empty() {
            bail!("Skills file '{}' contains no entries", path.display());
        }
        Ok(vocabulary)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_vocabulary_keeps_declared_order() {
        let vocab = SkillVocabulary::default();
        assert_eq!(vocab.len(), DEFAULT_SKILLS.len());
        assert_eq!(vocab.iter().next(), Some("python"));
        assert_eq!(vocab.iter().nth(2), Some("c++"));
        assert!(vocab.iter().any(|s| s == "machine learning"));
    }

    #[test]
    fn test_parse_skips_blank_lines_and_comments() {
        let vocab = SkillVocabulary::parse("# languages\nrust\n\n  go  \n#infra\nterraform\n");
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["rust", "go", "terraform"]);
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rust\nmachine learning").unwrap();
        let vocab = SkillVocabulary::load(file.path()).unwrap();
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["rust", "machine learning"]);
    }

    #[test]
    fn test_load_rejects_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = SkillVocabulary::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("contains no entries"));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SkillVocabulary::load(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read skills file"));
    }

    #[test]
    fn test_clones_share_entries() {
        let a = SkillVocabulary::new(["rust"]);
        let b = a.clone();
        assert_eq!(a, b);
        assert!(Arc::ptr_eq(&a.entries, &b.entries));
    }
}
