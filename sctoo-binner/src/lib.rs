//! # Variant binning
//!
//! Counts how many variants fall into each gene interval. Variants and
//! intervals have to be sorted the same way; the count is a single merge-style
//! pass over both (see [counter]).
//!
//! ```rust
//! use sctoo_binner::count_variants;
//! use sctoo_core::models::{GeneInterval, VariantPosition};
//!
//! let intervals = vec![
//!     GeneInterval::new("g1", "chr1", 10, 20),
//!     GeneInterval::new("g2", "chr1", 20, 30),
//! ];
//! let variants = vec![
//!     VariantPosition::new("chr1", 15),
//!     VariantPosition::new("chr1", 18),
//!     VariantPosition::new("chr1", 25),
//! ];
//!
//! let bins = count_variants(&variants, &intervals);
//! assert_eq!(bins[0].count, 2);
//! assert_eq!(bins[1].count, 1);
//! ```
pub mod binning;
pub mod config;
pub mod consts;
pub mod counter;
pub mod parallel;

// re-exports
pub use binning::*;
pub use config::*;
pub use counter::*;
pub use parallel::*;
