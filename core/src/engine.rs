use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Lost (reveal hits a mine)
/// - Playing -> Won (win predicate satisfied after reveal/flag)
/// - Lost/Won -> Playing only through reset or resize
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Lost,
    Won,
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost | Self::Won)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Outcome of a reveal command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of a flag command.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Won,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the board.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Represents a game from start to finish.
///
/// The session exclusively owns its board; the presentation layer reads
/// cells through [`cell_at`](Self::cell_at)/[`cells`](Self::cells) and
/// issues commands back. Cell indices are row-major flat indices and must
/// be in range; an out-of-range index is a caller bug and panics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    board: Array2<Cell>,
    state: SessionState,
}

impl GameSession {
    pub fn new(config: GameConfig, placer: impl MinePlacer) -> Self {
        let size = config.size;
        let mut board: Array2<Cell> = Array2::default((usize::from(size), usize::from(size)));

        for ix in placer.place(size) {
            board[to_nd_index(ix, size)].is_mine = true;
        }

        Self {
            config,
            board,
            state: Default::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> BoardSize {
        self.config.size
    }

    pub fn total_cells(&self) -> CellCount {
        self.config.total_cells()
    }

    pub fn cell_at(&self, ix: CellIx) -> Cell {
        self.assert_in_range(ix);
        self.board[to_nd_index(ix, self.config.size)]
    }

    /// Iterates cells in the flat row-major order of the command indices.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.board.iter().copied()
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_cells(|cell| cell.is_mine)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_cells(|cell| cell.is_flagged)
    }

    fn count_cells(&self, pred: impl Fn(Cell) -> bool) -> CellCount {
        self.board.iter().filter(|&&cell| pred(cell)).count() as CellCount
    }

    /// Open a closed cell.
    ///
    /// No-op on a finished session or an already-open cell. The cell is
    /// opened before the mine test, preserving the source's
    /// mutate-then-check sequencing; hitting a mine force-opens the whole
    /// board.
    pub fn reveal(&mut self, ix: CellIx) -> RevealOutcome {
        use RevealOutcome::*;

        self.assert_in_range(ix);

        if self.state.is_finished() {
            return NoChange;
        }

        let nd = to_nd_index(ix, self.config.size);
        if self.board[nd].is_open {
            return NoChange;
        }

        self.board[nd].is_open = true;
        self.board[nd].revealed_by_player = true;

        if self.board[nd].is_mine {
            self.state = SessionState::Lost;
            for cell in self.board.iter_mut() {
                cell.is_open = true;
            }
            log::debug!("mine hit at {}, board revealed", ix);
            return HitMine;
        }

        log::trace!("opened safe cell at {}", ix);
        if self.check_cleared() {
            Won
        } else {
            Revealed
        }
    }

    /// Flag a closed cell, opening it and neutralizing any mine it held.
    ///
    /// The mine bit is cleared before any mine test is possible, so a
    /// flagged mine never explodes. Faithful to the source even though it
    /// allows trivially defusing any cell.
    pub fn flag(&mut self, ix: CellIx) -> FlagOutcome {
        use FlagOutcome::*;

        self.assert_in_range(ix);

        if self.state.is_finished() {
            return NoChange;
        }

        let nd = to_nd_index(ix, self.config.size);
        if self.board[nd].is_open {
            return NoChange;
        }

        let cell = &mut self.board[nd];
        cell.is_open = true;
        cell.revealed_by_player = true;
        cell.is_flagged = true;
        if cell.is_mine {
            log::debug!("flag defused mine at {}", ix);
            cell.is_mine = false;
        }

        if self.check_cleared() {
            Won
        } else {
            Flagged
        }
    }

    /// Discard the board and deal a fresh one of the same size.
    pub fn reset(&mut self, placer: impl MinePlacer) {
        log::debug!("session reset, size {}", self.config.size);
        *self = Self::new(self.config, placer);
    }

    /// Replace the session wholesale with a board of the new size.
    pub fn resize(&mut self, new_size: BoardSize, placer: impl MinePlacer) {
        log::debug!("session resized to {}", new_size);
        let config = GameConfig::new(new_size, self.config.require_flag_count);
        *self = Self::new(config, placer);
    }

    /// Evaluates the win predicate and transitions to `Won` when satisfied:
    /// every cell resolved (`is_open || is_mine`), and under the flag-gated
    /// rule exactly `size` open flagged non-mine cells.
    fn check_cleared(&mut self) -> bool {
        if !self.board.iter().all(|cell| cell.is_resolved()) {
            return false;
        }

        if self.config.require_flag_count {
            let cleared_flags = self.count_cells(|cell| cell.is_cleared_flag());
            if cleared_flags != CellCount::from(self.config.size) {
                return false;
            }
        }

        log::debug!("board cleared");
        self.state = SessionState::Won;
        true
    }

    fn assert_in_range(&self, ix: CellIx) {
        assert!(
            ix < usize::from(self.total_cells()),
            "cell index {} out of range for side length {}",
            ix,
            self.config.size
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(size: BoardSize, mines: &[CellIx], require_flag_count: bool) -> GameSession {
        GameSession::new(
            GameConfig::new_unchecked(size, require_flag_count),
            FixedMinePlacer::new(size, mines).unwrap(),
        )
    }

    #[test]
    fn initialize_places_one_mine_per_row_all_closed() {
        for size in MIN_SIZE..=MAX_SIZE {
            let session = GameSession::new(
                GameConfig::new(size, false),
                RandomMinePlacer::new(u64::from(size)),
            );
            assert_eq!(session.mine_count(), CellCount::from(size));
            assert_eq!(session.cells().count(), usize::from(total_cells(size)));
            assert!(session.cells().all(|cell| !cell.is_open));
            assert_eq!(session.state(), SessionState::Playing);
        }
    }

    #[test]
    fn reveal_hits_mine_and_opens_whole_board() {
        let mut session = session(2, &[0, 1], false);

        assert_eq!(session.reveal(0), RevealOutcome::HitMine);
        assert_eq!(session.state(), SessionState::Lost);
        assert!(session.cells().all(|cell| cell.is_open));
        // only the target cell carries the player mark
        assert!(session.cell_at(0).revealed_by_player);
        assert!(!session.cell_at(3).revealed_by_player);
    }

    #[test]
    fn reveal_is_a_noop_once_finished() {
        let mut session = session(2, &[0, 1], false);
        session.reveal(0);

        let before = session.clone();
        assert_eq!(session.reveal(3), RevealOutcome::NoChange);
        assert_eq!(session, before);
    }

    #[test]
    fn reveal_on_open_cell_mutates_nothing() {
        let mut session = session(2, &[0, 1], false);

        assert_eq!(session.reveal(2), RevealOutcome::Revealed);
        let before = session.clone();
        assert_eq!(session.reveal(2), RevealOutcome::NoChange);
        assert_eq!(session, before);
    }

    #[test]
    fn opening_all_safe_cells_wins_plain_variant() {
        let mut session = session(2, &[0, 1], false);

        assert_eq!(session.reveal(2), RevealOutcome::Revealed);
        assert_eq!(session.reveal(3), RevealOutcome::Won);
        assert_eq!(session.state(), SessionState::Won);
    }

    #[test]
    fn flag_gated_variant_requires_exactly_size_cleared_flags() {
        let mut session = session(2, &[0, 1], true);

        assert_eq!(session.reveal(2), RevealOutcome::Revealed);
        // all cells resolved after this reveal, but zero flags: not a win
        assert_eq!(session.reveal(3), RevealOutcome::Revealed);
        assert_eq!(session.state(), SessionState::Playing);

        // one flag is still short of the required two
        assert_eq!(session.flag(0), FlagOutcome::Flagged);
        assert_eq!(session.state(), SessionState::Playing);

        assert_eq!(session.flag(1), FlagOutcome::Won);
        assert_eq!(session.state(), SessionState::Won);
    }

    #[test]
    fn flag_defuses_mine_without_exploding() {
        let mut session = session(2, &[0, 1], false);

        assert_eq!(session.flag(0), FlagOutcome::Flagged);
        assert_eq!(session.state(), SessionState::Playing);

        let cell = session.cell_at(0);
        assert!(cell.is_open && cell.is_flagged && cell.revealed_by_player);
        assert!(!cell.is_mine);
        assert_eq!(session.mine_count(), 1);
    }

    #[test]
    fn flag_is_a_noop_on_open_cells_and_finished_sessions() {
        let mut session = session(2, &[0, 1], true);

        session.reveal(2);
        let before = session.clone();
        assert_eq!(session.flag(2), FlagOutcome::NoChange);
        assert_eq!(session, before);

        session.reveal(0);
        let before = session.clone();
        assert_eq!(session.flag(3), FlagOutcome::NoChange);
        assert_eq!(session, before);
    }

    #[test]
    fn reset_deals_a_fresh_board_of_the_same_size() {
        let mut session = session(3, &[0, 1, 2], false);
        session.reveal(0);
        assert_eq!(session.state(), SessionState::Lost);

        session.reset(RandomMinePlacer::new(99));

        assert_eq!(session.state(), SessionState::Playing);
        assert_eq!(session.size(), 3);
        assert_eq!(session.mine_count(), 3);
        assert!(session.cells().all(|cell| !cell.is_open && !cell.is_flagged));
    }

    #[test]
    fn resize_discards_all_prior_state() {
        let mut session = session(2, &[0, 1], true);
        session.reveal(2);

        session.resize(5, RandomMinePlacer::new(5));

        assert_eq!(session.size(), 5);
        assert_eq!(session.total_cells(), 25);
        assert_eq!(session.mine_count(), 5);
        assert!(session.config().require_flag_count);
        assert!(session.cells().all(|cell| !cell.is_open));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_index_is_a_caller_bug() {
        let mut session = session(2, &[0, 1], false);
        session.reveal(4);
    }
}
