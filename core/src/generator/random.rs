use super::*;

/// Uniform sampling without replacement: draw indices over the whole board
/// and reject collisions until the set holds one mine per board row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMinePlacer {
    seed: u64,
}

impl RandomMinePlacer {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place(self, size: BoardSize) -> MineSet {
        use rand::prelude::*;

        let total = usize::from(total_cells(size));
        let wanted = usize::from(size);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines = MineSet::new();

        while mines.len() < wanted {
            mines.insert(rng.random_range(0..total));
        }

        log::debug!("placed {} mines on a {}x{} board", mines.len(), size, size);
        mines
    }
}
