//! Project repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide keyed insert/remove/lookup over project records.
//! - Keep enumeration order stable for list views.
//!
//! # Invariants
//! - Write paths call `Project::validate()` before mutating storage.
//! - Keys are unique; inserting an existing id is rejected, never overwritten.
//! - Lookups signal absence with `None`, not an error.
//! - State lives only in process memory.

use crate::model::project::{Project, ProjectId, ProjectValidationError};
use indexmap::IndexMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for project write operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(ProjectValidationError),
    DuplicateId(ProjectId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "project id already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<ProjectValidationError> for RepoError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for project records.
pub trait ProjectRepository {
    fn insert_project(&mut self, project: Project) -> RepoResult<ProjectId>;
    /// Removes and returns the project; `None` when absent.
    fn remove_project(&mut self, id: ProjectId) -> Option<Project>;
    fn get_project(&self, id: ProjectId) -> Option<&Project>;
    fn contains_project(&self, id: ProjectId) -> bool;
    /// Projects in insertion order.
    fn list_projects(&self) -> Vec<&Project>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local project store.
#[derive(Debug, Default)]
pub struct InMemoryProjectRepository {
    projects: IndexMap<ProjectId, Project>,
}

impl InMemoryProjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectRepository for InMemoryProjectRepository {
    fn insert_project(&mut self, project: Project) -> RepoResult<ProjectId> {
        project.validate()?;
        if self.projects.contains_key(&project.id) {
            return Err(RepoError::DuplicateId(project.id));
        }

        let id = project.id;
        self.projects.insert(id, project);
        Ok(id)
    }

    fn remove_project(&mut self, id: ProjectId) -> Option<Project> {
        // Remaining entries must keep insertion order.
        self.projects.shift_remove(&id)
    }

    fn get_project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.get(&id)
    }

    fn contains_project(&self, id: ProjectId) -> bool {
        self.projects.contains_key(&id)
    }

    fn list_projects(&self) -> Vec<&Project> {
        self.projects.values().collect()
    }

    fn len(&self) -> usize {
        self.projects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryProjectRepository, ProjectRepository, RepoError};
    use crate::model::project::Project;

    #[test]
    fn rejects_duplicate_id_without_overwriting() {
        let mut repo = InMemoryProjectRepository::new();
        let original = Project::new("first").expect("valid project");
        repo.insert_project(original.clone())
            .expect("first insert should succeed");

        let clash = Project::with_id(original.id, "second").expect("valid project");
        let err = repo
            .insert_project(clash)
            .expect_err("duplicate id must be rejected");
        assert_eq!(err, RepoError::DuplicateId(original.id));
        assert_eq!(
            repo.get_project(original.id).map(|p| p.name.as_str()),
            Some("first")
        );
    }

    #[test]
    fn insert_validates_record() {
        let mut repo = InMemoryProjectRepository::new();
        let mut project = Project::new("valid").expect("valid project");
        project.name = String::new();
        let err = repo.insert_project(project).expect_err("empty name must fail");
        assert!(matches!(err, RepoError::Validation(_)));
        assert!(repo.is_empty());
    }

    #[test]
    fn removal_preserves_order_of_remaining_projects() {
        let mut repo = InMemoryProjectRepository::new();
        let ids: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|name| {
                repo.insert_project(Project::new(name).expect("valid project"))
                    .expect("insert")
            })
            .collect();

        repo.remove_project(ids[1]);
        let names: Vec<_> = repo
            .list_projects()
            .into_iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }
}
