use crate::error::PuzzleError;

pub type Digit = u8; // 0 = empty, 1..=9 otherwise

/// Checks that a puzzle string is 81 characters of `1-9` or `.`.
///
/// Length is checked before content: a short string full of garbage still
/// reports the length problem.
pub fn validate(puzzle: &str) -> Result<(), PuzzleError> {
    if puzzle.chars().count() != 81 {
        return Err(PuzzleError::BadLength);
    }
    if !puzzle.chars().all(|ch| matches!(ch, '1'..='9' | '.')) {
        return Err(PuzzleError::BadCharacter);
    }
    Ok(())
}

/// Maps a row letter A-I (either case) to its 1-based row index.
pub fn row_index(letter: char) -> Option<u8> {
    match letter.to_ascii_uppercase() {
        ch @ 'A'..='I' => Some(ch as u8 - b'A' + 1),
        _ => None,
    }
}

/// A 9x9 grid, mutable while solving, convertible back to the compact
/// 81-character form. Built fresh per call; never shared across requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Digit; 9]; 9],
}

impl Board {
    /// Parses a validated-shape compact string (row-major, `.` for empty).
    pub fn from_compact(s: &str) -> Result<Self, PuzzleError> {
        validate(s)?;
        let mut cells = [[0u8; 9]; 9];
        for (i, ch) in s.chars().enumerate() {
            if let Some(d) = ch.to_digit(10) {
                cells[i / 9][i % 9] = d as Digit;
            }
        }
        Ok(Self { cells })
    }

    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&d| if d == 0 { '.' } else { (b'0' + d) as char })
            .collect()
    }

    pub fn get(&self, r: usize, c: usize) -> Digit {
        self.cells[r][c]
    }

    pub fn set(&mut self, r: usize, c: usize, d: Digit) {
        self.cells[r][c] = d;
    }

    /// First empty cell in row-major order, if any.
    pub fn first_empty(&self) -> Option<(usize, usize)> {
        (0..81).map(|i| (i / 9, i % 9)).find(|&(r, c)| self.cells[r][c] == 0)
    }
}
