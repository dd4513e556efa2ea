//! Project registry use-case service.
//!
//! # Responsibility
//! - Provide create/remove/lookup/list entry points for project views.
//! - Own id allocation so callers never pick project ids.
//!
//! # Invariants
//! - Allocated ids are unique among live projects; a colliding draw is
//!   re-drawn before insert.
//! - `remove_project` is idempotent.
//! - `get_project` never fails; absence is `None`.
//! - The registry is an explicitly owned value, never a process global.

use crate::model::project::{Project, ProjectId};
use crate::repo::project_repo::{InMemoryProjectRepository, ProjectRepository, RepoResult};
use log::{info, warn};
use uuid::Uuid;

/// Source of candidate project ids.
pub type IdSource = fn() -> ProjectId;

/// Use-case service wrapper for project CRUD operations.
pub struct ProjectRegistry<R: ProjectRepository = InMemoryProjectRepository> {
    repo: R,
    next_id: IdSource,
}

impl ProjectRegistry<InMemoryProjectRepository> {
    /// Creates an empty process-local registry.
    pub fn in_memory() -> Self {
        Self::new(InMemoryProjectRepository::new())
    }
}

impl Default for ProjectRegistry<InMemoryProjectRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<R: ProjectRepository> ProjectRegistry<R> {
    /// Creates a registry over `repo` with random v4 ids.
    pub fn new(repo: R) -> Self {
        Self::with_id_source(repo, Uuid::new_v4)
    }

    /// Creates a registry with a caller-provided id source.
    ///
    /// Used by tests and import paths that need deterministic ids.
    pub fn with_id_source(repo: R, next_id: IdSource) -> Self {
        Self { repo, next_id }
    }

    /// Creates a project and returns its allocated id.
    ///
    /// # Contract
    /// - `name` is stored exactly as given.
    /// - The returned id resolves through `get_project` immediately.
    ///
    /// # Errors
    /// - Returns `RepoError::Validation` when `name` is empty.
    pub fn create_project(&mut self, name: impl Into<String>) -> RepoResult<ProjectId> {
        let mut id = (self.next_id)();
        while id.is_nil() || self.repo.contains_project(id) {
            warn!(
                "event=project_create module=registry status=retry reason=id_collision project_id={}",
                id
            );
            id = (self.next_id)();
        }

        let project = Project::with_id(id, name)?;
        let id = self.repo.insert_project(project)?;
        info!(
            "event=project_create module=registry status=ok project_id={} total={}",
            id,
            self.repo.len()
        );
        Ok(id)
    }

    /// Removes a project if present. Removing an absent id is a no-op.
    pub fn remove_project(&mut self, id: ProjectId) {
        match self.repo.remove_project(id) {
            Some(_) => info!(
                "event=project_remove module=registry status=ok project_id={} total={}",
                id,
                self.repo.len()
            ),
            None => info!(
                "event=project_remove module=registry status=noop project_id={}",
                id
            ),
        }
    }

    /// Looks up one project by id.
    pub fn get_project(&self, id: ProjectId) -> Option<&Project> {
        self.repo.get_project(id)
    }

    /// Lists projects in creation order.
    pub fn list_projects(&self) -> Vec<&Project> {
        self.repo.list_projects()
    }

    pub fn len(&self) -> usize {
        self.repo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_empty()
    }
}
