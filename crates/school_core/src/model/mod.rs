//! School record domain model.
//!
//! # Responsibility
//! - Define the three record kinds held by the school store.
//! - Provide stable identifiers used for update/remove matching.
//!
//! # Invariants
//! - Every record is identified by a non-nil id.
//! - Name and class fields carry no uniqueness constraint.

pub mod record;
