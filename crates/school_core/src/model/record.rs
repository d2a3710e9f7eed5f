//! Student, teacher and subject records.
//!
//! # Responsibility
//! - Define the canonical shape of every record kind.
//! - Reject nil identifiers, which would break key-based matching.
//!
//! # Invariants
//! - `id` is stable for the lifetime of a record and never reused.
//! - A subject owns a copy of its teacher; the teacher is not required to be
//!   registered in the store.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type StudentId = Uuid;
pub type TeacherId = Uuid;
pub type SubjectId = Uuid;

/// Record kind tag used in errors and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Student,
    Teacher,
    Subject,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Subject => "subject",
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors for record invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Nil uuid cannot be used as a matching key.
    NilId { kind: RecordKind },
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId { kind } => write!(f, "{kind} id must not be nil"),
        }
    }
}

impl Error for RecordValidationError {}

/// A student enrolled in one class section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    /// Free-form label such as `ClassA`; compared by exact equality.
    pub class_and_section: String,
}

impl Student {
    /// Creates a student with a generated id.
    pub fn new(name: impl Into<String>, class_and_section: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            class_and_section: class_and_section.into(),
        }
    }

    /// Creates a student with a caller-provided id.
    ///
    /// # Errors
    /// - Returns `NilId` when `id` is the nil uuid.
    pub fn with_id(
        id: StudentId,
        name: impl Into<String>,
        class_and_section: impl Into<String>,
    ) -> Result<Self, RecordValidationError> {
        let student = Self {
            id,
            name: name.into(),
            class_and_section: class_and_section.into(),
        };
        student.validate()?;
        Ok(student)
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        ensure_id(RecordKind::Student, self.id)
    }
}

/// A teacher assigned to one class section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub class_and_section: String,
}

impl Teacher {
    /// Creates a teacher with a generated id.
    pub fn new(name: impl Into<String>, class_and_section: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            class_and_section: class_and_section.into(),
        }
    }

    /// Creates a teacher with a caller-provided id.
    ///
    /// # Errors
    /// - Returns `NilId` when `id` is the nil uuid.
    pub fn with_id(
        id: TeacherId,
        name: impl Into<String>,
        class_and_section: impl Into<String>,
    ) -> Result<Self, RecordValidationError> {
        let teacher = Self {
            id,
            name: name.into(),
            class_and_section: class_and_section.into(),
        };
        teacher.validate()?;
        Ok(teacher)
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        ensure_id(RecordKind::Teacher, self.id)
    }
}

/// A subject taught by at most one teacher.
///
/// `teacher` is optional so records imported without an assignment can still
/// be stored; such subjects never match a teacher-name query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub subject_code: String,
    pub teacher: Option<Teacher>,
}

impl Subject {
    /// Creates a subject with a generated id and an assigned teacher.
    pub fn new(name: impl Into<String>, subject_code: impl Into<String>, teacher: Teacher) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            subject_code: subject_code.into(),
            teacher: Some(teacher),
        }
    }

    /// Creates a subject with no teacher assigned.
    pub fn unassigned(name: impl Into<String>, subject_code: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            subject_code: subject_code.into(),
            teacher: None,
        }
    }

    /// Returns whether the assigned teacher carries exactly `teacher_name`.
    ///
    /// Unassigned subjects never match.
    pub fn is_taught_by(&self, teacher_name: &str) -> bool {
        self.teacher
            .as_ref()
            .is_some_and(|teacher| teacher.name == teacher_name)
    }

    /// Validates this subject and its embedded teacher, if any.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        ensure_id(RecordKind::Subject, self.id)?;
        match &self.teacher {
            Some(teacher) => teacher.validate(),
            None => Ok(()),
        }
    }
}

fn ensure_id(kind: RecordKind, id: Uuid) -> Result<(), RecordValidationError> {
    if id.is_nil() {
        return Err(RecordValidationError::NilId { kind });
    }
    Ok(())
}
