/// Single board axis: a row or column index, and the side length itself.
pub type Coord = u8;

/// Area-scale count, used for total-cell and mine counts.
pub type CellCount = u16;

/// A board position as `(row, column)`.
pub type Coord2 = (Coord, Coord);

/// Converts a position into an `ndarray` index.
pub(crate) const fn nd((row, col): Coord2) -> (usize, usize) {
    (row as usize, col as usize)
}

/// Board area, saturating so a `Coord::MAX`-sided board stays representable.
pub const fn area(side: Coord) -> CellCount {
    (side as CellCount).saturating_mul(side as CellCount)
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `pos`, returning the neighbor only while it stays on a
/// `side`×`side` board.
fn apply_delta((row, col): Coord2, (dr, dc): (i8, i8), side: Coord) -> Option<Coord2> {
    let row = row.checked_add_signed(dr)?;
    let col = col.checked_add_signed(dc)?;
    if row < side && col < side {
        Some((row, col))
    } else {
        None
    }
}

/// In-bounds neighbors of `center`, corners included.
pub(crate) fn neighbors(center: Coord2, side: Coord) -> impl Iterator<Item = Coord2> {
    DISPLACEMENTS
        .into_iter()
        .filter_map(move |delta| apply_delta(center, delta, side))
}
