//! Ignore rules for the reconciliation report
//!
//! Two pattern modes share one compiled form: a plain token becomes an
//! anchored literal match, anything else is treated as a regular expression
//! searched anywhere in the path suffix. Rules come from explicit patterns
//! unioned with an optional `<descriptor>.ignore` sidecar file.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::{Error, Result};

/// Compiled ignore rules, matched against a path's suffix relative to the
/// descriptor's directory (leading separator included).
#[derive(Debug, Default)]
pub struct IgnoreSet {
    rules: Vec<Regex>,
}

impl IgnoreSet {
    /// Compile `patterns`. One invalid regular expression fails the whole
    /// scan for this descriptor; other descriptors are unaffected.
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let mut rules = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let source = if treated_as_regex(pattern) {
                pattern.to_string()
            } else {
                format!("^{}$", regex::escape(pattern))
            };
            let rule = Regex::new(&source).map_err(|e| Error::IgnorePattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
            rules.push(rule);
        }
        Ok(Self { rules })
    }

    /// Whether any rule matches `suffix`.
    pub fn is_ignored(&self, suffix: &str) -> bool {
        self.rules.iter().any(|rule| rule.is_match(suffix))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A pattern is a regular expression when it contains any character outside
/// `[a-zA-Z0-9_/\-]` or begins with `!`. The leading-`!` case looks like an
/// accident of the original probe but existing ignore files rely on it, so
/// it is contractual.
fn treated_as_regex(pattern: &str) -> bool {
    pattern.starts_with('!')
        || pattern
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '/' | '\\' | '-')))
}

/// Read `<descriptor>.ignore` if present: one pattern per line, trimmed,
/// blank lines skipped. A missing sidecar is an empty pattern list.
pub fn load_sidecar(descriptor: &Path) -> Result<Vec<String>> {
    let path = sidecar_path(descriptor);
    if !path.is_file() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(&path).map_err(|e| Error::read(&path, e))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

/// `app.csproj` becomes `app.csproj.ignore`.
pub fn sidecar_path(descriptor: &Path) -> PathBuf {
    let mut name = descriptor.as_os_str().to_owned();
    name.push(".ignore");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case("obj", false)]
    #[case("bin/Debug", false)]
    #[case("some\\windows\\path", false)]
    #[case("name-with-dash_and_underscore", false)]
    #[case(".*generated.*", true)]
    #[case("obj|bin", true)]
    #[case("file.cs", true)]
    #[case("!literal-looking", true)]
    #[case("has space", true)]
    fn test_regex_detection(#[case] pattern: &str, #[case] regex: bool) {
        assert_eq!(treated_as_regex(pattern), regex);
    }

    #[test]
    fn test_literal_pattern_is_anchored() {
        let rules = IgnoreSet::compile(&["/obj"]).unwrap();
        // "/" makes it literal-eligible; no substring matches allowed.
        assert!(rules.is_ignored("/obj"));
        assert!(!rules.is_ignored("/obj/Debug"));
        assert!(!rules.is_ignored("/src/obj"));
    }

    #[test]
    fn test_regex_pattern_matches_anywhere() {
        let rules = IgnoreSet::compile(&[r"\.Designer\.cs"]).unwrap();
        assert!(rules.is_ignored("/src/Form1.Designer.cs"));
        assert!(!rules.is_ignored("/src/Form1.cs"));
    }

    #[test]
    fn test_invalid_regex_is_an_error() {
        let err = IgnoreSet::compile(&["*broken["]).unwrap_err();
        assert!(matches!(err, Error::IgnorePattern { .. }));
    }

    #[test]
    fn test_empty_set_ignores_nothing() {
        let rules = IgnoreSet::compile::<&str>(&[]).unwrap();
        assert!(rules.is_empty());
        assert!(!rules.is_ignored("/anything"));
    }

    #[test]
    fn test_sidecar_path_appends_suffix() {
        assert_eq!(
            sidecar_path(Path::new("/proj/app.csproj")),
            PathBuf::from("/proj/app.csproj.ignore")
        );
    }

    #[test]
    fn test_load_sidecar_trims_and_skips_blanks() {
        let temp = TempDir::new().unwrap();
        let descriptor = temp.path().join("app.csproj");
        fs::write(
            sidecar_path(&descriptor),
            "  /obj  \n\n\t\n.*generated.*\n",
        )
        .unwrap();

        let patterns = load_sidecar(&descriptor).unwrap();
        assert_eq!(patterns, vec!["/obj".to_string(), ".*generated.*".to_string()]);
    }

    #[test]
    fn test_load_sidecar_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let descriptor = temp.path().join("app.csproj");
        assert!(load_sidecar(&descriptor).unwrap().is_empty());
    }
}
