use petardo_core::{BoardEngine, Cell, Coord, Coord2};

const GLYPH_CLOSED: &str = ".";
const GLYPH_MINE: &str = "*";
const GLYPH_EMPTY: &str = "_";

/// The player's view: one space-separated line per row, in row-major order,
/// with a blank line after the grid.
pub fn board(engine: &BoardEngine) -> String {
    grid(engine.side(), |pos| glyph(engine.cell_at(pos)))
}

/// Diagnostic pre-game view: the closed board with mine locations marked.
pub fn mines_only(engine: &BoardEngine) -> String {
    grid(engine.side(), |pos| {
        if engine.has_mine_at(pos) {
            GLYPH_MINE.into()
        } else {
            GLYPH_CLOSED.into()
        }
    })
}

fn glyph(cell: Cell) -> String {
    match cell {
        Cell::Hidden => GLYPH_CLOSED.into(),
        Cell::Mine => GLYPH_MINE.into(),
        Cell::Open(0) => GLYPH_EMPTY.into(),
        Cell::Open(count) => count.to_string(),
    }
}

fn grid(side: Coord, mut cell: impl FnMut(Coord2) -> String) -> String {
    let mut out = String::new();
    for row in 0..side {
        for col in 0..side {
            if col > 0 {
                out.push(' ');
            }
            out.push_str(&cell((row, col)));
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use petardo_core::MineLayout;

    fn engine(side: Coord, mines: &[Coord2]) -> BoardEngine {
        BoardEngine::new(MineLayout::from_mine_coords(side, mines).unwrap())
    }

    #[test]
    fn fresh_board_renders_fully_closed() {
        let engine = engine(2, &[(0, 0)]);
        assert_eq!(board(&engine), ". .\n. .\n\n");
    }

    #[test]
    fn open_cells_render_counts_and_empties() {
        let mut engine = engine(3, &[(0, 0)]);
        engine.reveal((2, 2)).unwrap();

        assert_eq!(board(&engine), ". 1 _\n1 1 _\n_ _ _\n\n");
    }

    #[test]
    fn lost_board_renders_disclosed_mines() {
        let mut engine = engine(2, &[(0, 0)]);
        engine.reveal((0, 0)).unwrap();

        assert_eq!(board(&engine), "* .\n. .\n\n");
    }

    #[test]
    fn mines_only_marks_mines_on_a_closed_board() {
        let engine = engine(2, &[(0, 1)]);
        assert_eq!(mines_only(&engine), ". *\n. .\n\n");
    }
}
