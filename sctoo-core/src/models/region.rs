use std::fmt::{self, Display};

use crate::models::Position;

///
/// Region struct, a half-open span `[start, end)` on one chromosome
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Region {
    pub chr: String,
    pub start: u32,
    pub end: u32,
}

impl Region {
    pub fn new(chr: &str, start: u32, end: u32) -> Self {
        Region {
            chr: chr.to_owned(),
            start,
            end,
        }
    }

    ///
    /// Get length of the region
    ///
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    ///
    /// Check whether a position lies inside the region. The start is
    /// inclusive and the end is exclusive.
    ///
    #[inline]
    pub fn contains(&self, position: &Position) -> bool {
        self.chr == position.chr && self.start <= position.pos && position.pos < self.end
    }

    ///
    /// Get file string of Region
    ///
    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}", self.chr, self.start, self.end)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
