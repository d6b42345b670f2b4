pub mod bin_record;
pub mod fields;
pub mod gene_interval;
pub mod position;
pub mod region;
pub mod variant;

// re-export for cleaner imports
pub use self::bin_record::BinRecord;
pub use self::fields::{BinField, IntervalField};
pub use self::gene_interval::GeneInterval;
pub use self::position::Position;
pub use self::region::Region;
pub use self::variant::VariantPosition;
