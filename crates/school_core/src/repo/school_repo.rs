//! School repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Append, query, update and remove records in the bound store.
//! - Return semantic errors instead of printing them.
//!
//! # Invariants
//! - A rejected write leaves every collection unchanged.
//! - Adds always append; the same record may be stored more than once.
//! - Update/remove touch only the first slot with a matching id.
//! - Query results keep insertion order.
//! - Subjects without a teacher are skipped by teacher-name queries.

use crate::model::record::{
    RecordKind, RecordValidationError, Student, StudentId, Subject, SubjectId, Teacher,
};
use crate::store::SchoolDataStore;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for school record writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(RecordValidationError),
    NotFound { kind: RecordKind, id: Uuid },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<RecordValidationError> for RepoError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl RepoError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Repository interface for school record operations.
pub trait SchoolRepository {
    fn add_student(&mut self, student: Student) -> RepoResult<()>;
    fn add_teacher(&mut self, teacher: Teacher) -> RepoResult<()>;
    fn add_subject(&mut self, subject: Subject) -> RepoResult<()>;
    fn students_in_class(&self, class_and_section: &str) -> Vec<Student>;
    fn subjects_taught_by(&self, teacher_name: &str) -> Vec<Subject>;
    fn update_student(&mut self, existing_id: StudentId, updated: Student) -> RepoResult<()>;
    fn remove_subject(&mut self, id: SubjectId) -> RepoResult<Subject>;
    fn list_students(&self) -> Vec<Student>;
    fn list_teachers(&self) -> Vec<Teacher>;
    fn list_subjects(&self) -> Vec<Subject>;
}

/// Repository bound to one caller-owned store.
pub struct InMemorySchoolRepository<'store> {
    store: &'store mut SchoolDataStore,
}

impl<'store> InMemorySchoolRepository<'store> {
    pub fn new(store: &'store mut SchoolDataStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SchoolDataStore {
        &*self.store
    }
}

impl SchoolRepository for InMemorySchoolRepository<'_> {
    fn add_student(&mut self, student: Student) -> RepoResult<()> {
        student.validate()?;
        self.store.students.push(student);
        Ok(())
    }

    fn add_teacher(&mut self, teacher: Teacher) -> RepoResult<()> {
        teacher.validate()?;
        self.store.teachers.push(teacher);
        Ok(())
    }

    fn add_subject(&mut self, subject: Subject) -> RepoResult<()> {
        subject.validate()?;
        self.store.subjects.push(subject);
        Ok(())
    }

    fn students_in_class(&self, class_and_section: &str) -> Vec<Student> {
        self.store
            .students
            .iter()
            .filter(|student| student.class_and_section == class_and_section)
            .cloned()
            .collect()
    }

    fn subjects_taught_by(&self, teacher_name: &str) -> Vec<Subject> {
        self.store
            .subjects
            .iter()
            .filter(|subject| subject.is_taught_by(teacher_name))
            .cloned()
            .collect()
    }

    fn update_student(&mut self, existing_id: StudentId, updated: Student) -> RepoResult<()> {
        updated.validate()?;

        let index = self
            .store
            .students
            .iter()
            .position(|student| student.id == existing_id)
            .ok_or(RepoError::NotFound {
                kind: RecordKind::Student,
                id: existing_id,
            })?;

        self.store.students[index] = updated;
        Ok(())
    }

    fn remove_subject(&mut self, id: SubjectId) -> RepoResult<Subject> {
        let index = self
            .store
            .subjects
            .iter()
            .position(|subject| subject.id == id)
            .ok_or(RepoError::NotFound {
                kind: RecordKind::Subject,
                id,
            })?;

        Ok(self.store.subjects.remove(index))
    }

    fn list_students(&self) -> Vec<Student> {
        self.store.students.clone()
    }

    fn list_teachers(&self) -> Vec<Teacher> {
        self.store.teachers.clone()
    }

    fn list_subjects(&self) -> Vec<Subject> {
        self.store.subjects.clone()
    }
}
