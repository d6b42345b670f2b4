//! # sctoo-core
//!
//! Shared data model for binning genomic variants into gene intervals.
//!
//! All coordinates are 0-based. A [`models::Region`] covers the half-open range
//! `[start, end)` and a [`models::Position`] is a single base, so a position at a
//! region's `start` is contained by it while a position at its `end` is not.
//!
pub mod errors;
pub mod models;
pub mod utils;
