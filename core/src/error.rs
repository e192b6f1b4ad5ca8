use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MineError {
    #[error("Mine index out of range")]
    IndexOutOfRange,
    #[error("Duplicate mine index")]
    DuplicateIndex,
    #[error("Mine count must equal the board side length")]
    WrongMineCount,
}

pub type Result<T> = core::result::Result<T, MineError>;
