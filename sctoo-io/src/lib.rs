//! # Input/Output for variant binning.
//!
//! Readers turn VCF files into [sctoo_core::models::VariantPosition]s and BED or CSV
//! files into [sctoo_core::models::GeneInterval]s, keeping the order of the file.
//! Writers put [sctoo_core::models::BinRecord]s back on disk, one per line.
//!
//! Every reader returns a [Result]: an `Ok` with an empty vector means the file
//! had no records, while a missing file or a malformed line is an error that
//! names the file and line. A parse never yields partial results.
//!
pub mod bed;
pub mod bins;
pub mod error;
pub mod table;
pub mod vcf;

// re-expose core functions
pub use bed::*;
pub use bins::*;
pub use error::*;
pub use table::*;
pub use vcf::*;
