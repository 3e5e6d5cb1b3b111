//! Core types shared across trackdiff facilities
//!
//! This crate provides foundational types used by both the error and
//! logging facilities of `trackdiff-core`:
//!
//! - **Correlation types**: RunId
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::RunId;
