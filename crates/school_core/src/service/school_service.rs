//! School record facade.
//!
//! # Responsibility
//! - Provide the add/query/update/remove entry points for core callers.
//! - Log every failure as a structured event before handing it back.
//!
//! # Invariants
//! - Queries never fail; a miss yields an empty list.
//! - Errors are returned unchanged so callers may ignore or propagate them.
//! - Not-found is signalled for both update and remove.

use crate::model::record::{RecordKind, Student, StudentId, Subject, SubjectId, Teacher};
use crate::repo::school_repo::{RepoError, RepoResult, SchoolRepository};
use log::{debug, error, info, warn};
use uuid::Uuid;

/// Use-case facade over a school repository.
pub struct SchoolService<R: SchoolRepository> {
    repo: R,
}

impl<R: SchoolRepository> SchoolService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Appends one student; on error nothing is stored.
    pub fn add_student(&mut self, student: Student) -> RepoResult<()> {
        let id = student.id;
        let result = self.repo.add_student(student);
        log_write("add", RecordKind::Student, id, &result);
        result
    }

    /// Appends one teacher; on error nothing is stored.
    pub fn add_teacher(&mut self, teacher: Teacher) -> RepoResult<()> {
        let id = teacher.id;
        let result = self.repo.add_teacher(teacher);
        log_write("add", RecordKind::Teacher, id, &result);
        result
    }

    /// Appends one subject; its teacher is not checked against the store.
    pub fn add_subject(&mut self, subject: Subject) -> RepoResult<()> {
        let id = subject.id;
        let result = self.repo.add_subject(subject);
        log_write("add", RecordKind::Subject, id, &result);
        result
    }

    /// Lists students whose class label equals `class_and_section`.
    pub fn students_in_class(&self, class_and_section: &str) -> Vec<Student> {
        let students = self.repo.students_in_class(class_and_section);
        debug!(
            "event=students_in_class module=school status=ok matches={}",
            students.len()
        );
        students
    }

    /// Lists subjects whose assigned teacher has exactly `teacher_name`.
    pub fn subjects_taught_by(&self, teacher_name: &str) -> Vec<Subject> {
        let subjects = self.repo.subjects_taught_by(teacher_name);
        debug!(
            "event=subjects_taught_by module=school status=ok matches={}",
            subjects.len()
        );
        subjects
    }

    /// Replaces the student stored under `existing_id`, keeping its position.
    ///
    /// # Errors
    /// - `NotFound` when no student carries `existing_id`.
    /// - `Validation` when `updated` carries a nil id.
    pub fn update_student(&mut self, existing_id: StudentId, updated: Student) -> RepoResult<()> {
        let result = self.repo.update_student(existing_id, updated);
        log_write("update", RecordKind::Student, existing_id, &result);
        result
    }

    /// Removes the subject stored under `id` and returns it.
    ///
    /// # Errors
    /// - `NotFound` when no subject carries `id`; the collection is unchanged.
    pub fn remove_subject(&mut self, id: SubjectId) -> RepoResult<Subject> {
        let result = self.repo.remove_subject(id);
        log_write("remove", RecordKind::Subject, id, &result);
        result
    }

    pub fn list_students(&self) -> Vec<Student> {
        self.repo.list_students()
    }

    pub fn list_teachers(&self) -> Vec<Teacher> {
        self.repo.list_teachers()
    }

    pub fn list_subjects(&self) -> Vec<Subject> {
        self.repo.list_subjects()
    }

    /// Returns the wrapped repository.
    pub fn into_inner(self) -> R {
        self.repo
    }
}

fn log_write<T>(op: &str, kind: RecordKind, id: Uuid, result: &RepoResult<T>) {
    match result {
        Ok(_) => info!(
            "event=record_{op} module=school status=ok kind={} id={id}",
            kind.as_str()
        ),
        Err(err @ RepoError::NotFound { .. }) => warn!(
            "event=record_{op} module=school status=not_found kind={} id={id} error={err}",
            kind.as_str()
        ),
        Err(err) => error!(
            "event=record_{op} module=school status=error kind={} id={id} error={err}",
            kind.as_str()
        ),
    }
}
