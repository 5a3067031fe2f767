//! Traveler kinds.

use std::fmt;

/// The closed set of navigating entity kinds.
///
/// Cost tables match on this enum exhaustively, so adding a kind is a
/// compile error in every terrain cost rule until it gets an entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Traveler {
    Duck,
    Koala,
}

impl Traveler {
    pub const ALL: [Traveler; 2] = [Traveler::Duck, Traveler::Koala];

    /// Single-character map marker.
    pub const fn glyph(self) -> char {
        match self {
            Traveler::Duck => 'D',
            Traveler::Koala => 'K',
        }
    }
}

impl fmt::Display for Traveler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Traveler::Duck => f.write_str("duck"),
            Traveler::Koala => f.write_str("koala"),
        }
    }
}
