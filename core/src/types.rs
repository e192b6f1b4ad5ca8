/// Side length of the square board, restricted by the UI to `2..=5`.
pub type BoardSize = u8;

/// Count type for mines and total-cell counts.
pub type CellCount = u16;

/// Row-major flat cell index, `index = row * size + col`.
pub type CellIx = usize;

pub const MIN_SIZE: BoardSize = 2;
pub const MAX_SIZE: BoardSize = 5;

pub const fn total_cells(size: BoardSize) -> CellCount {
    let size = size as CellCount;
    size.saturating_mul(size)
}

/// Splits a flat index into the `(row, col)` pair the `Array2` board expects.
pub(crate) const fn to_nd_index(ix: CellIx, size: BoardSize) -> [usize; 2] {
    [ix / size as usize, ix % size as usize]
}
