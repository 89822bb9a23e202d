//! Text comparison with whitespace normalization.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

static PACKAGE_DECL_RE: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();

fn package_decl_re() -> &'static Regex {
    PACKAGE_DECL_RE.get_or_init(|| Regex::new(r"package\s+[\w.]+\s*").unwrap())
}

fn whitespace_re() -> &'static Regex {
    WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// How two pieces of text are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareMode {
    /// Literal string equality.
    Exact,
    /// Equality after whitespace and package-declaration normalization.
    IgnoreWhitespace,
}

impl fmt::Display for CompareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareMode::Exact => write!(f, "exact match"),
            CompareMode::IgnoreWhitespace => write!(f, "ignoring whitespace"),
        }
    }
}

/// Checks if two strings are exactly equal.
pub fn equals_exactly(actual: &str, expected: &str) -> bool {
    actual == expected
}

/// Checks if two strings are equal ignoring whitespace differences and
/// package declarations.
///
/// Both inputs are normalized independently: package declarations are
/// removed, then every whitespace run, then leading and trailing braces left
/// over from differing indentation styles. The comparison is deliberately
/// coarse: braces are only stripped at the boundaries, so `{ a }` equals `a`
/// while interior braces still count. That looseness is what lets callers
/// compare differently-indented source.
pub fn equals_ignoring_whitespace(actual: &str, expected: &str) -> bool {
    normalize(actual) == normalize(expected)
}

fn normalize(text: &str) -> String {
    let without_package = package_decl_re().replace_all(text, "");
    let without_whitespace = whitespace_re().replace_all(&without_package, "");
    without_whitespace
        .trim_matches(|c: char| matches!(c, '{' | '}' | ' ' | '\t' | '\n' | '\r'))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_equality_is_identity() {
        assert!(equals_exactly("", ""));
        assert!(equals_exactly("plugins {}", "plugins {}"));
        assert!(!equals_exactly("   \n\t", ""));
    }

    #[test]
    fn whitespace_only_strings_normalize_to_empty() {
        assert!(equals_ignoring_whitespace("", ""));
        assert!(equals_ignoring_whitespace("   \n\t", ""));
    }

    #[test]
    fn indentation_differences_are_ignored() {
        let script = "plugins {\n kotlin(\"jvm\")\n}";
        let reindented = "plugins {\n        kotlin(\"jvm\")\n}\n";
        assert!(equals_ignoring_whitespace(script, reindented));
        assert!(!equals_exactly(script, reindented));
    }

    #[test]
    fn package_declarations_are_ignored() {
        assert!(equals_ignoring_whitespace(
            "package a.b\nclass X",
            "package c.d\nclass X"
        ));
    }

    #[test]
    fn comparison_is_symmetric() {
        let cases = [
            ("package a.b\nclass X", "class X"),
            ("fun main() {}", "fun main() { }"),
            ("a{b}", "ab"),
        ];
        for (a, b) in cases {
            assert_eq!(
                equals_ignoring_whitespace(a, b),
                equals_ignoring_whitespace(b, a)
            );
        }
    }

    #[test]
    fn differing_tokens_still_mismatch() {
        assert!(!equals_ignoring_whitespace("class X", "class Y"));
    }

    #[test]
    fn boundary_braces_are_trimmed() {
        assert!(equals_ignoring_whitespace("{ class X }", "class X"));
    }
}
