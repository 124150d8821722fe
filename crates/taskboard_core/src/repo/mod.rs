//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the persistence adapter contract for task storage.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Adapter writes must enforce title validation before persistence.
//! - Adapter APIs signal "row not found" as an affected-row boolean, not an
//!   error; transport failures are returned as errors.

pub mod task_repo;
