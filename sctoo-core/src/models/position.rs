use std::fmt::{self, Display};

///
/// Position struct, a single 0-based base on a chromosome
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Position {
    pub chr: String,
    pub pos: u32,
}

impl Position {
    pub fn new(chr: &str, pos: u32) -> Self {
        Position {
            chr: chr.to_owned(),
            pos,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chr, self.pos)
    }
}
