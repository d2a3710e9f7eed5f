//! In-memory holder of the three school record collections.
//!
//! # Responsibility
//! - Keep students, teachers and subjects in insertion order.
//! - Offer an explicitly constructed store for one logical session, and a
//!   lazily created process-wide store behind a single lock.
//!
//! # Invariants
//! - Collections only grow through repository writes; no absent entries.
//! - The shared store is created on first access and lives until exit.

use crate::model::record::{Student, Subject, Teacher};
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};

static SHARED_STORE: Lazy<Mutex<SchoolDataStore>> =
    Lazy::new(|| Mutex::new(SchoolDataStore::new()));

/// Passive container for all school records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolDataStore {
    pub(crate) students: Vec<Student>,
    pub(crate) teachers: Vec<Teacher>,
    pub(crate) subjects: Vec<Subject>,
}

impl SchoolDataStore {
    /// Creates an empty store owned by the caller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide store, creating it on first access.
    ///
    /// One mutex guards all three collections.
    pub fn shared() -> &'static Mutex<SchoolDataStore> {
        &SHARED_STORE
    }

    /// Locks the process-wide store.
    ///
    /// A poisoned lock is recovered: the collections hold plain values, so a
    /// panic mid-write cannot leave a partially appended record behind.
    pub fn lock_shared() -> MutexGuard<'static, SchoolDataStore> {
        SHARED_STORE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty() && self.teachers.is_empty() && self.subjects.is_empty()
    }
}
