use crate::board::{Board, Digit};
use crate::error::PuzzleError;

/// Solves a compact puzzle string by backtracking search.
///
/// Validation failures propagate unchanged; exhaustion of the search space
/// reports `Unsolvable`. Cells are filled first-empty in row-major order
/// with digits tried ascending, so the result is deterministic for a given
/// input (and the unique solution when the puzzle has one). There is no
/// upfront contradiction scan: a contradictory input fails by exhaustion,
/// and a board with no empty cells is returned as-is.
pub fn solve(puzzle: &str) -> Result<String, PuzzleError> {
    let mut board = Board::from_compact(puzzle)?;
    if search(&mut board) {
        Ok(board.to_compact())
    } else {
        Err(PuzzleError::Unsolvable)
    }
}

fn search(board: &mut Board) -> bool {
    let Some((r, c)) = board.first_empty() else {
        return true;
    };
    for d in 1..=9 {
        if fits(board, r, c, d) {
            board.set(r, c, d);
            if search(board) {
                return true;
            }
            board.set(r, c, 0);
        }
    }
    false
}

/// True when `d` appears nowhere in the cell's row, column, or 3x3 region
/// on the live board. Unlike the string-based checker this uses the true
/// 0-based region arithmetic, and the target cell is empty by construction.
fn fits(board: &Board, row: usize, col: usize, d: Digit) -> bool {
    let (br, bc) = ((row / 3) * 3, (col / 3) * 3);
    for i in 0..9 {
        if board.get(row, i) == d
            || board.get(i, col) == d
            || board.get(br + i / 3, bc + i % 3) == d
        {
            return false;
        }
    }
    true
}
