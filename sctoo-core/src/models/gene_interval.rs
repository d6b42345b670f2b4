use std::fmt::{self, Display};

use crate::models::{Region, VariantPosition};

///
/// A named interval (usually a gene) that variants are binned into.
/// Names are not required to be unique.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct GeneInterval {
    pub name: String,
    pub region: Region,
}

impl GeneInterval {
    pub fn new(name: &str, chr: &str, start: u32, end: u32) -> Self {
        GeneInterval {
            name: name.to_owned(),
            region: Region::new(chr, start, end),
        }
    }

    pub fn chr(&self) -> &str {
        &self.region.chr
    }

    pub fn start(&self) -> u32 {
        self.region.start
    }

    pub fn end(&self) -> u32 {
        self.region.end
    }

    #[inline]
    pub fn contains(&self, variant: &VariantPosition) -> bool {
        self.region.contains(&variant.position)
    }
}

impl Display for GeneInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{}-{}",
            self.name, self.region.chr, self.region.start, self.region.end
        )
    }
}
