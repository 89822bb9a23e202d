//! gradle-harness - declarative test fixtures for Gradle builds
//!
//! This library materializes throwaway Gradle projects from a declarative
//! configuration, runs an external build against them through a narrow
//! executor seam, and provides assertion helpers for the build outcome and
//! the generated file contents.

pub mod compare;
pub mod error;
pub mod executor;
pub mod fixture;
pub mod project;
pub mod result;

pub use compare::{equals_exactly, equals_ignoring_whitespace, CompareMode};
pub use error::{Error, Result};
pub use executor::{BuildExecutor, BuildOutcome, GradleExecutor, SUCCESS_MARKER};
pub use fixture::{ProjectSpec, PropertyEntry, SourceEntry};
pub use project::{test_project, ProjectBuilder};
pub use result::{FileAssertion, ProjectBuildResult};
