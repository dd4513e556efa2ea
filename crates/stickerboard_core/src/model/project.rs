//! Project domain model.
//!
//! # Responsibility
//! - Define the named container that an editor session is bound to.
//! - Validate project identity and naming at construction time.
//!
//! # Invariants
//! - `id` is never nil and never reused for another project.
//! - `name` is non-empty and stored exactly as given.
//! - A project is immutable after creation; there is no rename path.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a project.
///
/// Random v4 UUIDs avoid the collisions a clock-derived id would produce
/// under rapid sequential creation.
pub type ProjectId = Uuid;

/// Validation failures for project construction and deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    NilId,
    EmptyName,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "project id must not be nil"),
            Self::EmptyName => write!(f, "project name must not be empty"),
        }
    }
}

impl Error for ProjectValidationError {}

/// Named editing session container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProject")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
}

impl Project {
    /// Creates a project with a freshly generated id.
    ///
    /// # Errors
    /// - Returns `EmptyName` when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ProjectValidationError> {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a project with a caller-provided id.
    ///
    /// # Errors
    /// - Returns `NilId` for `Uuid::nil()`.
    /// - Returns `EmptyName` when `name` is empty.
    pub fn with_id(id: ProjectId, name: impl Into<String>) -> Result<Self, ProjectValidationError> {
        let project = Self {
            id,
            name: name.into(),
        };
        project.validate()?;
        Ok(project)
    }

    /// Checks identity and naming invariants.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.is_nil() {
            return Err(ProjectValidationError::NilId);
        }
        if self.name.is_empty() {
            return Err(ProjectValidationError::EmptyName);
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawProject {
    id: ProjectId,
    name: String,
}

impl TryFrom<RawProject> for Project {
    type Error = ProjectValidationError;

    fn try_from(value: RawProject) -> Result<Self, Self::Error> {
        Self::with_id(value.id, value.name)
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectValidationError};
    use uuid::Uuid;

    #[test]
    fn new_keeps_name_verbatim_and_assigns_id() {
        let project = Project::new("  Summer trip  ").expect("valid name");
        assert_eq!(project.name, "  Summer trip  ");
        assert!(!project.id.is_nil());
    }

    #[test]
    fn rejects_empty_name_and_nil_id() {
        assert_eq!(
            Project::new("").unwrap_err(),
            ProjectValidationError::EmptyName
        );
        assert!(Project::new(" ").is_ok());
        assert_eq!(
            Project::with_id(Uuid::nil(), "ok").unwrap_err(),
            ProjectValidationError::NilId
        );
    }
}
