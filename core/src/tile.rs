use core::fmt;
use serde::{Deserialize, Serialize};

/// Marker held by a single field cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Grass,
    Hole,
    Carrot,
    Player,
}

impl Cell {
    pub const fn glyph(self) -> char {
        match self {
            Self::Grass => '░',
            Self::Hole => 'O',
            Self::Carrot => '^',
            Self::Player => '*',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        use Cell::*;
        [Grass, Hole, Carrot, Player]
            .into_iter()
            .find(|cell| cell.glyph() == glyph)
    }

    pub const fn is_terrain(self) -> bool {
        matches!(self, Self::Grass | Self::Hole)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Grass
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
