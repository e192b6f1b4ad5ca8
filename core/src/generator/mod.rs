use alloc::collections::BTreeSet;

use crate::*;

pub use random::*;

mod random;

/// Distinct flat indices that receive a mine.
pub type MineSet = BTreeSet<CellIx>;

/// Strategy seam for choosing which cells hold mines.
///
/// A placement for a board of side `size` holds exactly `size` distinct
/// indices; the mine count equals the side length, not a fraction of the
/// area.
pub trait MinePlacer {
    fn place(self, size: BoardSize) -> MineSet;
}

/// Pins the mine positions, for tests and scripted boards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedMinePlacer {
    mines: MineSet,
}

impl FixedMinePlacer {
    pub fn new(size: BoardSize, mine_indices: &[CellIx]) -> Result<Self> {
        let total = usize::from(total_cells(size));
        let mut mines = MineSet::new();

        for &ix in mine_indices {
            if ix >= total {
                return Err(MineError::IndexOutOfRange);
            }
            if !mines.insert(ix) {
                return Err(MineError::DuplicateIndex);
            }
        }

        if mines.len() != usize::from(size) {
            return Err(MineError::WrongMineCount);
        }

        Ok(Self { mines })
    }
}

impl MinePlacer for FixedMinePlacer {
    fn place(self, _size: BoardSize) -> MineSet {
        self.mines
    }
}
