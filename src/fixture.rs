//! Declarative project specs.
//!
//! A [`ProjectSpec`] describes a test project as data, loadable from a YAML
//! file and convertible into a configured [`ProjectBuilder`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::project::ProjectBuilder;

/// A `key=value` entry for `local.properties`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyEntry {
    pub key: String,
    pub value: String,
}

/// A source file entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceEntry {
    /// Path relative to the source root.
    pub path: String,
    /// File content, written verbatim.
    pub content: String,
}

/// A declarative description of a test project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSpec {
    /// Spec name.
    pub name: String,

    /// Description of what this spec exercises.
    #[serde(default)]
    pub description: String,

    /// Entries for `local.properties`, in order.
    #[serde(default)]
    pub local_properties: Vec<PropertyEntry>,

    /// Build script content.
    #[serde(default)]
    pub build_script: Option<String>,

    /// Settings script content.
    #[serde(default)]
    pub settings: Option<String>,

    /// Additional source files, in order.
    #[serde(default)]
    pub sources: Vec<SourceEntry>,

    /// Task argument passed to the executor.
    #[serde(default = "default_task")]
    pub task: String,

    /// Whether generation fails when the build does not report success.
    #[serde(default = "default_true")]
    pub assert_build_success: bool,

    /// Whether captured build output is echoed.
    #[serde(default = "default_true")]
    pub print_output: bool,
}

fn default_task() -> String {
    "build".to_string()
}

fn default_true() -> bool {
    true
}

impl ProjectSpec {
    /// Loads a spec from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(Error::Io)?;

        serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse project spec: {}", e)))
    }

    /// Converts the spec into a configured builder for the given root.
    pub fn into_builder(self, root: impl Into<PathBuf>) -> ProjectBuilder {
        let mut builder = ProjectBuilder::new(root)
            .with_task(self.task)
            .with_assert_build_success(self.assert_build_success)
            .with_print_output(self.print_output);

        for entry in self.local_properties {
            builder = builder.with_local_property(entry.key, entry.value);
        }
        if let Some(script) = self.build_script {
            builder = builder.with_build_script(script);
        }
        if let Some(settings) = self.settings {
            builder = builder.with_settings(settings);
        }
        for source in self.sources {
            builder = builder.with_source(source.path, source.content);
        }

        builder
    }
}
