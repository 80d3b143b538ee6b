//! The three chapter puzzles. Each one owns its local state and answers a
//! single question: is it solved?
pub mod cipher;
pub mod lights_out;
pub mod tools;

use crate::progress::Stage;
use serde::{Deserialize, Serialize};

pub use cipher::{CipherPuzzle, caesar_shift};
pub use lights_out::{LightsOut, NeighborRule};
pub use tools::{TOOLS, Tool, ToolSelection};

/// Identifies which chapter a solved signal came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PuzzleId {
    Tools,
    Cipher,
    LightsOut,
}

impl PuzzleId {
    pub const ALL: [Self; 3] = [Self::Tools, Self::Cipher, Self::LightsOut];

    /// Stage during which this puzzle is on screen.
    #[must_use]
    pub const fn stage(self) -> Stage {
        match self {
            Self::Tools => Stage::Tools,
            Self::Cipher => Stage::Cipher,
            Self::LightsOut => Stage::LightsOut,
        }
    }

    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::Tools => "puzzle.tools.title",
            Self::Cipher => "puzzle.cipher.title",
            Self::LightsOut => "puzzle.grid.title",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn puzzles_map_to_their_own_stage() {
        for puzzle in PuzzleId::ALL {
            assert_eq!(puzzle.stage().puzzle(), Some(puzzle));
        }
    }
}
