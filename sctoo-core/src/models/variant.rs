use std::fmt::{self, Display};

use crate::models::Position;

///
/// A called variant reduced to what binning needs: where it is, plus the
/// identifying columns kept for reporting.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct VariantPosition {
    pub id: Option<String>,
    pub ref_allele: String,
    pub alt_allele: String,
    pub position: Position,
}

impl VariantPosition {
    /// Create a variant with unknown id and alleles.
    pub fn new(chr: &str, pos: u32) -> Self {
        VariantPosition {
            id: None,
            ref_allele: String::new(),
            alt_allele: String::new(),
            position: Position::new(chr, pos),
        }
    }

    pub fn chr(&self) -> &str {
        &self.position.chr
    }

    pub fn pos(&self) -> u32 {
        self.position.pos
    }
}

impl Display for VariantPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/{}",
            self.position, self.ref_allele, self.alt_allele
        )
    }
}
