//! Core domain logic for the school record store.
//! Records live in memory only; nothing is persisted across runs.

pub mod demo;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogInitError};
pub use model::record::{
    RecordKind, RecordValidationError, Student, StudentId, Subject, SubjectId, Teacher, TeacherId,
};
pub use repo::school_repo::{InMemorySchoolRepository, RepoError, RepoResult, SchoolRepository};
pub use service::school_service::SchoolService;
pub use store::SchoolDataStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
