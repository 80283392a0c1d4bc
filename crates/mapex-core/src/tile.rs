//! Terrain tiles and their text encoding.

use std::fmt;

/// A single map cell's terrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Open ground.
    #[default]
    Free,
    /// Impassable wall.
    Blocked,
    /// The origin of a search. Exactly one per map.
    Start,
    /// The goal of a search. Exactly one per map.
    Destination,
}

impl Tile {
    /// Decode a tile from the map text format, or `None` for a character
    /// outside the map alphabet.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Free),
            'X' => Some(Self::Blocked),
            'S' => Some(Self::Start),
            'D' => Some(Self::Destination),
            _ => None,
        }
    }

    /// The map text encoding of this tile.
    pub const fn to_char(self) -> char {
        match self {
            Self::Free => '.',
            Self::Blocked => 'X',
            Self::Start => 'S',
            Self::Destination => 'D',
        }
    }

    /// Whether a search may step onto this tile.
    ///
    /// Start is excluded: it is only ever the origin of a search, never an
    /// expansion target.
    pub const fn is_walkable(self) -> bool {
        matches!(self, Self::Free | Self::Destination)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
