#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use event::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod event;
mod generator;
mod types;

/// Per-session configuration chosen by the player before the board exists.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: BoardSize,
    /// Win-rule variant: when set, clearing the board additionally requires
    /// the player to have flagged exactly `size` non-mine cells.
    pub require_flag_count: bool,
}

impl GameConfig {
    pub const fn new_unchecked(size: BoardSize, require_flag_count: bool) -> Self {
        Self {
            size,
            require_flag_count,
        }
    }

    pub fn new(size: BoardSize, require_flag_count: bool) -> Self {
        let size = size.clamp(MIN_SIZE, MAX_SIZE);
        Self::new_unchecked(size, require_flag_count)
    }

    pub const fn total_cells(&self) -> CellCount {
        total_cells(self.size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(4, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_clamps_size_to_supported_range() {
        assert_eq!(GameConfig::new(0, false).size, MIN_SIZE);
        assert_eq!(GameConfig::new(9, false).size, MAX_SIZE);
        assert_eq!(GameConfig::new(3, true).size, 3);
    }

    #[test]
    fn total_cells_is_square_of_side() {
        assert_eq!(GameConfig::new(4, false).total_cells(), 16);
        assert_eq!(GameConfig::new(5, true).total_cells(), 25);
    }
}
