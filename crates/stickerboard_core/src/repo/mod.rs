//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate storage details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Project::validate()` before storing.
//! - Missing records are reported as `None`, duplicate keys as `DuplicateId`.

pub mod project_repo;
