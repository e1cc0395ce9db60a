pub mod api;
pub mod board;
pub mod checker;
pub mod error;
pub mod solver;

pub use board::{row_index, validate, Board};
pub use checker::{check_placement, Conflict, Coordinate};
pub use error::PuzzleError;
pub use solver::solve;
