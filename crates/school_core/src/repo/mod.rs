//! Repository layer over the in-memory school store.
//!
//! # Responsibility
//! - Define use-case oriented access contracts for school records.
//! - Keep collection handling details out of the service layer.
//!
//! # Invariants
//! - Writes validate records before touching a collection.
//! - Update/remove match by record id and report `NotFound` when absent.

pub mod school_repo;
