use serde::{Deserialize, Serialize};

/// State of a single board cell. The three states are mutually exclusive, so
/// the cat's cell can never also be blocked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Open,
    Blocked,
    Cat,
}

impl Cell {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub const fn is_blocked(self) -> bool {
        matches!(self, Self::Blocked)
    }

    pub const fn has_cat(self) -> bool {
        matches!(self, Self::Cat)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Open
    }
}
