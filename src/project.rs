//! Project generation.
//!
//! Accumulates a project configuration fluently, then materializes it under
//! a caller-owned root directory and runs a build against it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::executor::{BuildExecutor, SUCCESS_MARKER};
use crate::result::ProjectBuildResult;

const LOCAL_PROPERTIES_FILE: &str = "local.properties";
const BUILD_SCRIPT_FILE: &str = "build.gradle.kts";
const SETTINGS_FILE: &str = "settings.gradle.kts";

/// Directory under which additional sources are placed.
const SOURCE_ROOT: &str = "src/main/kotlin";

/// Builder for a throwaway Gradle project.
///
/// The root directory must already exist and is owned by the caller
/// (typically a temp-dir fixture); the builder only writes beneath it.
#[derive(Debug)]
pub struct ProjectBuilder {
    root: PathBuf,
    local_properties: Vec<(String, String)>,
    build_script: Option<String>,
    settings: Option<String>,
    sources: Vec<(String, String)>,
    task: String,
    assert_build_success: bool,
    print_output: bool,
}

impl ProjectBuilder {
    /// Creates a builder for the given project root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            local_properties: Vec::new(),
            build_script: None,
            settings: None,
            sources: Vec::new(),
            task: "build".to_string(),
            assert_build_success: true,
            print_output: true,
        }
    }

    /// Appends a `key=value` pair to `local.properties`.
    ///
    /// Pairs are written in insertion order; duplicate keys are legal and
    /// both are written.
    pub fn with_local_property(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.local_properties.push((key.into(), value.into()));
        self
    }

    /// Sets the build script content (last call wins).
    pub fn with_build_script(mut self, script: impl Into<String>) -> Self {
        self.build_script = Some(script.into());
        self
    }

    /// Sets the settings script content (last call wins).
    pub fn with_settings(mut self, settings: impl Into<String>) -> Self {
        self.settings = Some(settings.into());
        self
    }

    /// Adds a source file under the source root.
    ///
    /// `path` is slash-separated and relative to `src/main/kotlin`;
    /// intermediate directories are created when the project is generated.
    pub fn with_source(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.sources.push((path.into(), content.into()));
        self
    }

    /// Adds a source file whose content is read from an existing file.
    ///
    /// The file is read eagerly, at configuration time; later changes to it
    /// do not affect the generated project.
    pub fn with_source_file(self, path: impl Into<String>, file: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(file.as_ref())?;
        Ok(self.with_source(path, content))
    }

    /// Sets the task argument passed to the executor (default `build`).
    pub fn with_task(mut self, task: impl Into<String>) -> Self {
        self.task = task.into();
        self
    }

    /// Sets whether generation fails when the build does not report success
    /// (default `true`).
    pub fn with_assert_build_success(mut self, assert_build_success: bool) -> Self {
        self.assert_build_success = assert_build_success;
        self
    }

    /// Sets whether captured build output is echoed to stderr (default `true`).
    pub fn with_print_output(mut self, print_output: bool) -> Self {
        self.print_output = print_output;
        self
    }

    /// Materializes the project and runs the build.
    ///
    /// Writes `local.properties` (when any properties were added), the build
    /// and settings scripts (when set), then the additional sources, in that
    /// order; then invokes the executor with the configured task.
    ///
    /// Consumes the builder: the configuration cannot be mutated once
    /// generation has started, and generating twice from the same
    /// configuration is a compile error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if any write fails, and [`Error::BuildFailed`]
    /// if `assert_build_success` is set and the captured output lacks
    /// [`SUCCESS_MARKER`].
    pub fn generate(self, executor: &dyn BuildExecutor) -> Result<ProjectBuildResult> {
        tracing::info!(
            root = %self.root.display(),
            task = %self.task,
            executor = %executor.name(),
            "generating project"
        );

        if !self.local_properties.is_empty() {
            let content = self
                .local_properties
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect::<Vec<_>>()
                .join("\n");
            self.write(LOCAL_PROPERTIES_FILE, &content)?;
        }

        if let Some(script) = &self.build_script {
            self.write(BUILD_SCRIPT_FILE, script)?;
        }

        if let Some(settings) = &self.settings {
            self.write(SETTINGS_FILE, settings)?;
        }

        for (path, content) in &self.sources {
            self.write(&format!("{}/{}", SOURCE_ROOT, path), content)?;
        }

        let outcome = executor.run(&self.root, &self.task)?;

        if self.assert_build_success && !outcome.output_contains(SUCCESS_MARKER) {
            return Err(Error::BuildFailed {
                output: outcome.output,
            });
        }

        if self.print_output {
            eprintln!("{}", outcome.output);
        }

        Ok(ProjectBuildResult::new(self.root, outcome))
    }

    /// Writes a file under the project root, creating parent directories.
    fn write(&self, relative: &str, content: &str) -> Result<()> {
        let target = self.root.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        tracing::debug!(file = %target.display(), "writing project file");
        fs::write(&target, content)?;
        Ok(())
    }
}

/// Creates, configures, and generates a test project in one call.
///
/// The closure receives a builder for the given root and returns it
/// configured; the result wraps the build outcome and the project root for
/// file assertions.
pub fn test_project<F>(
    root: impl Into<PathBuf>,
    executor: &dyn BuildExecutor,
    configure: F,
) -> Result<ProjectBuildResult>
where
    F: FnOnce(ProjectBuilder) -> ProjectBuilder,
{
    configure(ProjectBuilder::new(root)).generate(executor)
}
