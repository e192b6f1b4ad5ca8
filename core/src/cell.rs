use serde::{Deserialize, Serialize};

/// One grid position as the player can observe it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Revealed, either by the player or by the loss cascade.
    pub is_open: bool,
    /// Holds a mine. Set during placement, cleared again if the player flags
    /// the cell.
    pub is_mine: bool,
    /// Marked by the player.
    pub is_flagged: bool,
    /// This exact cell was the target of a player command, as opposed to
    /// being force-opened when the board is revealed on a loss.
    pub revealed_by_player: bool,
}

impl Cell {
    /// A board is cleared once every cell is either open or still a mine.
    pub const fn is_resolved(self) -> bool {
        self.is_open || self.is_mine
    }

    /// Counts towards the flag-gated win rule: an open flag that is not a mine.
    pub const fn is_cleared_flag(self) -> bool {
        self.is_open && self.is_flagged && !self.is_mine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_safe_cell_is_unresolved() {
        assert!(!Cell::default().is_resolved());
    }

    #[test]
    fn mines_and_open_cells_are_resolved() {
        let mine = Cell {
            is_mine: true,
            ..Cell::default()
        };
        let open = Cell {
            is_open: true,
            ..Cell::default()
        };
        assert!(mine.is_resolved());
        assert!(open.is_resolved());
    }

    #[test]
    fn cleared_flag_requires_open_and_defused() {
        let flagged = Cell {
            is_open: true,
            is_flagged: true,
            revealed_by_player: true,
            is_mine: false,
        };
        assert!(flagged.is_cleared_flag());
        assert!(
            !Cell {
                is_mine: true,
                ..flagged
            }
            .is_cleared_flag()
        );
        assert!(
            !Cell {
                is_open: false,
                ..flagged
            }
            .is_cleared_flag()
        );
    }
}
