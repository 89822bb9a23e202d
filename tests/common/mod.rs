//! Shared test helpers.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use gradle_harness::{BuildExecutor, BuildOutcome, Result};

/// Executor that returns canned output and records its invocations.
pub struct StubExecutor {
    output: String,
    succeeded: bool,
    pub calls: RefCell<Vec<(PathBuf, String)>>,
}

impl StubExecutor {
    /// Stub that reports a successful build.
    pub fn successful() -> Self {
        Self::with_output("> Task :build\n\nBUILD SUCCESSFUL in 1s\n", true)
    }

    /// Stub that reports a failed build.
    pub fn failing() -> Self {
        Self::with_output("> Task :build FAILED\n\nBUILD FAILED in 1s\n", false)
    }

    /// Stub with arbitrary canned output.
    pub fn with_output(output: &str, succeeded: bool) -> Self {
        Self {
            output: output.to_string(),
            succeeded,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl BuildExecutor for StubExecutor {
    fn run(&self, project_root: &Path, task: &str) -> Result<BuildOutcome> {
        self.calls
            .borrow_mut()
            .push((project_root.to_path_buf(), task.to_string()));
        Ok(BuildOutcome {
            output: self.output.clone(),
            succeeded: self.succeeded,
        })
    }

    fn name(&self) -> &str {
        "stub"
    }
}
