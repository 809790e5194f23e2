//! # Placement Store
//!
//! Repository traits injected into the HTTP layer, plus an in-memory
//! implementation. Nothing here is durable: the store lives as long as the
//! process does.

pub mod memory;
pub mod repositories;
pub mod seed;

pub use memory::InMemoryStore;
