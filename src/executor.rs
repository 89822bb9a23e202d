//! Build executor seam and the Gradle implementation.
//!
//! The harness drives the external build tool through the narrow
//! [`BuildExecutor`] trait; everything else treats the build as opaque.

use std::path::Path;
use std::process::Command;

use crate::error::Result;

/// Marker token whose presence in captured output signals a successful build.
///
/// This is the wire contract with the executor's textual output; it must not
/// be altered without coordinating both sides.
pub const SUCCESS_MARKER: &str = "BUILD SUCCESSFUL";

/// Captured outcome of one build invocation.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// Combined stdout and stderr of the build process.
    pub output: String,
    /// Whether the executor reported success.
    pub succeeded: bool,
}

impl BuildOutcome {
    /// Checks if the captured output contains a substring.
    pub fn output_contains(&self, needle: &str) -> bool {
        self.output.contains(needle)
    }
}

/// Trait for build executors.
pub trait BuildExecutor {
    /// Runs the build tool against the project root with a single task
    /// argument, blocking until it exits.
    fn run(&self, project_root: &Path, task: &str) -> Result<BuildOutcome>;

    /// Returns the name of this executor.
    fn name(&self) -> &str;
}

/// Executor that shells out to Gradle.
///
/// Prefers the project's own `gradlew` wrapper when present, otherwise runs
/// the configured CLI path.
pub struct GradleExecutor {
    /// Path to the gradle CLI binary.
    cli_path: String,
}

impl Default for GradleExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GradleExecutor {
    /// Creates a new executor using the default `gradle` command.
    pub fn new() -> Self {
        Self {
            cli_path: "gradle".to_string(),
        }
    }

    /// Creates a new executor with a custom CLI path.
    pub fn with_cli_path(cli_path: impl Into<String>) -> Self {
        Self {
            cli_path: cli_path.into(),
        }
    }

    /// Picks the program to run for a given project root.
    fn program_for(&self, project_root: &Path) -> String {
        let wrapper = project_root.join("gradlew");
        if wrapper.exists() {
            wrapper.to_string_lossy().into_owned()
        } else {
            self.cli_path.clone()
        }
    }
}

impl BuildExecutor for GradleExecutor {
    fn run(&self, project_root: &Path, task: &str) -> Result<BuildOutcome> {
        let program = self.program_for(project_root);

        tracing::info!(
            program = %program,
            task = %task,
            root = %project_root.display(),
            "running gradle build"
        );

        let output = Command::new(&program)
            .arg(task)
            .current_dir(project_root)
            .output()?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        Ok(BuildOutcome {
            output: format!("{}\n{}", stdout, stderr),
            succeeded: output.status.success(),
        })
    }

    fn name(&self) -> &str {
        "gradle"
    }
}
