use serde::{Deserialize, Serialize};

/// Player-visible state of a single board cell.
///
/// `Mine` only ever appears after a lost game, when the whole minefield is
/// disclosed; during play a mined cell reads as `Hidden` like any other.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Hidden,
    Open(u8),
    Mine,
}

impl Cell {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Hidden
    }
}
