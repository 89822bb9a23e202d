//! Build results and file assertions.

use std::fs;
use std::path::{Path, PathBuf};

use crate::compare::{self, CompareMode};
use crate::error::{Error, Result};
use crate::executor::BuildOutcome;

/// Result of a generated project build, with file assertion capabilities.
#[derive(Debug)]
pub struct ProjectBuildResult {
    project_root: PathBuf,
    outcome: BuildOutcome,
}

/// Spec for a single file assertion, populated by a configuring closure.
#[derive(Debug)]
pub struct FileAssertion {
    path: Option<String>,
    expected_content: Option<String>,
    ignore_whitespace: bool,
}

impl Default for FileAssertion {
    fn default() -> Self {
        Self {
            path: None,
            expected_content: None,
            ignore_whitespace: true,
        }
    }
}

impl FileAssertion {
    /// Sets the path to the file to be checked, relative to the project root.
    pub fn path(&mut self, path: impl Into<String>) -> &mut Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the expected content of the file.
    pub fn content(&mut self, content: impl Into<String>) -> &mut Self {
        self.expected_content = Some(content.into());
        self
    }

    /// Sets the expected content and requires an exact match.
    pub fn content_exactly(&mut self, content: impl Into<String>) -> &mut Self {
        self.expected_content = Some(content.into());
        self.ignore_whitespace = false;
        self
    }

    /// Sets whether content comparison ignores whitespace (default `true`).
    pub fn ignore_whitespace(&mut self, ignore: bool) -> &mut Self {
        self.ignore_whitespace = ignore;
        self
    }

    fn mode(&self) -> CompareMode {
        if self.ignore_whitespace {
            CompareMode::IgnoreWhitespace
        } else {
            CompareMode::Exact
        }
    }
}

impl ProjectBuildResult {
    pub(crate) fn new(project_root: PathBuf, outcome: BuildOutcome) -> Self {
        Self {
            project_root,
            outcome,
        }
    }

    /// Returns the project root the files were generated under.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns the captured build outcome.
    pub fn outcome(&self) -> &BuildOutcome {
        &self.outcome
    }

    /// Returns the captured build output.
    pub fn output(&self) -> &str {
        &self.outcome.output
    }

    /// Checks if the captured build output contains a substring.
    pub fn output_contains(&self, needle: &str) -> bool {
        self.outcome.output_contains(needle)
    }

    /// Asserts that a file exists and optionally checks its content.
    ///
    /// The closure populates a [`FileAssertion`]; the path is mandatory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when no path was set (before any filesystem
    /// access), [`Error::MissingFile`] when the file does not exist, and
    /// [`Error::ContentMismatch`] when expected content was set and does not
    /// match under the configured comparison mode.
    pub fn assert_file<F>(&self, configure: F) -> Result<()>
    where
        F: FnOnce(&mut FileAssertion),
    {
        let mut assertion = FileAssertion::default();
        configure(&mut assertion);

        let path = assertion
            .path
            .as_deref()
            .ok_or_else(|| Error::Config("path must be specified in assert_file".to_string()))?;

        let file = self.project_root.join(path);
        if !file.exists() {
            return Err(Error::MissingFile { path: file });
        }

        if let Some(expected) = &assertion.expected_content {
            let actual = fs::read_to_string(&file)?;
            let matches = match assertion.mode() {
                CompareMode::IgnoreWhitespace => {
                    compare::equals_ignoring_whitespace(&actual, expected)
                }
                CompareMode::Exact => compare::equals_exactly(&actual, expected),
            };
            if !matches {
                return Err(Error::ContentMismatch {
                    path: file,
                    mode: assertion.mode(),
                });
            }
        }

        Ok(())
    }

    /// Asserts that a file exists.
    pub fn assert_file_exists(&self, path: &str) -> Result<()> {
        self.assert_file(|a| {
            a.path(path);
        })
    }

    /// Asserts that a file's content matches, ignoring whitespace.
    pub fn assert_file_content(&self, path: &str, expected: &str) -> Result<()> {
        self.assert_file(|a| {
            a.path(path).content(expected);
        })
    }

    /// Asserts that a file's content matches exactly.
    pub fn assert_file_content_exactly(&self, path: &str, expected: &str) -> Result<()> {
        self.assert_file(|a| {
            a.path(path).content_exactly(expected);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn result_for(root: &Path) -> ProjectBuildResult {
        ProjectBuildResult::new(
            root.to_path_buf(),
            BuildOutcome {
                output: "BUILD SUCCESSFUL in 1s".to_string(),
                succeeded: true,
            },
        )
    }

    #[test]
    fn existing_file_passes() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("hello.txt"), "Hello").unwrap();

        let result = result_for(temp.path());
        result.assert_file_exists("hello.txt").unwrap();
    }

    #[test]
    fn missing_file_carries_resolved_path() {
        let temp = TempDir::new().unwrap();

        let result = result_for(temp.path());
        let err = result.assert_file_exists("missing.txt").unwrap_err();
        match err {
            Error::MissingFile { path } => assert_eq!(path, temp.path().join("missing.txt")),
            other => panic!("expected MissingFile, got {other}"),
        }
    }

    #[test]
    fn missing_path_is_a_configuration_error() {
        let temp = TempDir::new().unwrap();

        let result = result_for(temp.path());
        let err = result
            .assert_file(|a| {
                a.content("anything");
            })
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn output_accessors_expose_build_log() {
        let temp = TempDir::new().unwrap();

        let result = result_for(temp.path());
        assert!(result.output_contains("BUILD SUCCESSFUL"));
        assert_eq!(result.output(), "BUILD SUCCESSFUL in 1s");
        assert!(result.outcome().succeeded);
    }
}
