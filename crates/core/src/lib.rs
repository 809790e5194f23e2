//! # Placement Core
//!
//! Domain types and pure logic for the placement portal: interview slot
//! generation, drive lifecycle, eligibility evaluation and calendar export.
//! Nothing in this crate performs I/O; storage and the HTTP surface live in
//! `placement-store` and `placement-api`.

pub mod calendar;
pub mod eligibility;
pub mod errors;
pub mod models;
pub mod slots;
