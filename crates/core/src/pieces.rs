//! Pieces module - falling shapes and their letters
//!
//! Shapes are a fixed set with static rotation tables. Offsets are (dx, dy)
//! from the piece anchor; every rotation of a shape has the same cell count,
//! so the i-th letter always belongs to the i-th offset.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::error::ConfigError;
use crate::rng::SimpleRng;

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Largest number of cells in any shape.
pub const MAX_PIECE_CELLS: usize = 4;

/// Letters carried by one piece.
pub type PieceLetters = ArrayVec<char, MAX_PIECE_CELLS>;

/// Vowels of the Russian alphabet.
const VOWELS: [char; 10] = ['А', 'Е', 'Ё', 'И', 'О', 'У', 'Ы', 'Э', 'Ю', 'Я'];

/// Every shape a falling piece can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceShape {
    /// One letter.
    Single,
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

const SINGLE: &[&[CellOffset]] = &[&[(0, 0)]];

const I: &[&[CellOffset]] = &[
    &[(0, 1), (1, 1), (2, 1), (3, 1)],
    &[(2, 0), (2, 1), (2, 2), (2, 3)],
    &[(0, 2), (1, 2), (2, 2), (3, 2)],
    &[(1, 0), (1, 1), (1, 2), (1, 3)],
];

const O: &[&[CellOffset]] = &[&[(0, 0), (1, 0), (0, 1), (1, 1)]];

const T: &[&[CellOffset]] = &[
    &[(1, 0), (0, 1), (1, 1), (2, 1)],
    &[(1, 0), (1, 1), (2, 1), (1, 2)],
    &[(0, 1), (1, 1), (2, 1), (1, 2)],
    &[(1, 0), (0, 1), (1, 1), (1, 2)],
];

const S: &[&[CellOffset]] = &[
    &[(1, 0), (2, 0), (0, 1), (1, 1)],
    &[(1, 0), (1, 1), (2, 1), (2, 2)],
    &[(1, 1), (2, 1), (0, 2), (1, 2)],
    &[(0, 0), (0, 1), (1, 1), (1, 2)],
];

const Z: &[&[CellOffset]] = &[
    &[(0, 0), (1, 0), (1, 1), (2, 1)],
    &[(2, 0), (1, 1), (2, 1), (1, 2)],
    &[(0, 1), (1, 1), (1, 2), (2, 2)],
    &[(1, 0), (0, 1), (1, 1), (0, 2)],
];

const J: &[&[CellOffset]] = &[
    &[(0, 0), (0, 1), (1, 1), (2, 1)],
    &[(1, 0), (2, 0), (1, 1), (1, 2)],
    &[(0, 1), (1, 1), (2, 1), (2, 2)],
    &[(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L: &[&[CellOffset]] = &[
    &[(2, 0), (0, 1), (1, 1), (2, 1)],
    &[(1, 0), (1, 1), (1, 2), (2, 2)],
    &[(0, 1), (1, 1), (2, 1), (0, 2)],
    &[(0, 0), (1, 0), (1, 1), (1, 2)],
];

impl PieceShape {
    /// Parse a shape name (case-insensitive).
    ///
    /// ```
    /// use lettergrid_core::pieces::PieceShape;
    ///
    /// assert_eq!(PieceShape::from_name("Single").unwrap(), PieceShape::Single);
    /// assert!(PieceShape::from_name("pentomino").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.trim().to_lowercase().as_str() {
            "single" => Ok(PieceShape::Single),
            "i" => Ok(PieceShape::I),
            "o" => Ok(PieceShape::O),
            "t" => Ok(PieceShape::T),
            "s" => Ok(PieceShape::S),
            "z" => Ok(PieceShape::Z),
            "j" => Ok(PieceShape::J),
            "l" => Ok(PieceShape::L),
            _ => Err(ConfigError::UnknownShape(name.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceShape::Single => "single",
            PieceShape::I => "i",
            PieceShape::O => "o",
            PieceShape::T => "t",
            PieceShape::S => "s",
            PieceShape::Z => "z",
            PieceShape::J => "j",
            PieceShape::L => "l",
        }
    }

    /// Rotation table; entry `r` holds the offsets of rotation `r`.
    pub fn rotations(&self) -> &'static [&'static [CellOffset]] {
        match self {
            PieceShape::Single => SINGLE,
            PieceShape::I => I,
            PieceShape::O => O,
            PieceShape::T => T,
            PieceShape::S => S,
            PieceShape::Z => Z,
            PieceShape::J => J,
            PieceShape::L => L,
        }
    }

    pub fn offsets(&self, rotation: u8) -> &'static [CellOffset] {
        let table = self.rotations();
        table[rotation as usize % table.len()]
    }

    pub fn cell_count(&self) -> usize {
        self.rotations()[0].len()
    }

    /// Columns spanned by the spawn rotation.
    pub fn spawn_width(&self) -> usize {
        self.rotations()[0]
            .iter()
            .map(|&(dx, _)| dx as usize + 1)
            .max()
            .unwrap_or(1)
    }
}

/// Pick letters for a new piece.
///
/// A single letter is a vowel with probability one half, otherwise a
/// consonant, both drawn from `allowed`. Multi-cell pieces draw every letter
/// uniformly from `allowed`. Falls back to `'?'` only if `allowed` is empty.
pub fn generate_letters(shape: PieceShape, allowed: &[char], rng: &mut SimpleRng) -> PieceLetters {
    let mut letters = PieceLetters::new();

    if shape.cell_count() == 1 {
        let (vowels, consonants): (Vec<char>, Vec<char>) =
            allowed.iter().copied().partition(|c| VOWELS.contains(c));
        let pool = match (rng.chance(50), vowels.is_empty(), consonants.is_empty()) {
            (true, false, _) | (false, false, true) => &vowels,
            _ => &consonants,
        };
        letters.push(rng.choose(pool).copied().unwrap_or('?'));
        return letters;
    }

    for _ in 0..shape.cell_count() {
        letters.push(rng.choose(allowed).copied().unwrap_or('?'));
    }
    letters
}

/// A falling piece: shape, rotation, anchor and one letter per cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    shape: PieceShape,
    rotation: u8,
    pub x: i8,
    pub y: i8,
    letters: PieceLetters,
}

impl Piece {
    pub fn new(shape: PieceShape, x: i8, y: i8, letters: PieceLetters) -> Self {
        Self {
            shape,
            rotation: 0,
            x,
            y,
            letters,
        }
    }

    /// A one-cell piece holding `letter`.
    pub fn single(letter: char, x: i8, y: i8) -> Self {
        let mut letters = PieceLetters::new();
        letters.push(letter);
        Self::new(PieceShape::Single, x, y, letters)
    }

    pub fn shape(&self) -> PieceShape {
        self.shape
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn offsets(&self) -> &'static [CellOffset] {
        self.shape.offsets(self.rotation)
    }

    /// Absolute cells `(x, y, letter)` of the piece.
    pub fn cells(&self) -> ArrayVec<(i32, i32, char), MAX_PIECE_CELLS> {
        self.offsets()
            .iter()
            .zip(self.letters.iter())
            .map(|(&(dx, dy), &letter)| {
                (
                    self.x as i32 + dx as i32,
                    self.y as i32 + dy as i32,
                    letter,
                )
            })
            .collect()
    }

    /// Whether the piece shifted by (dx, dy) lies on free cells only.
    pub fn fits(&self, board: &Board, dx: i8, dy: i8) -> bool {
        self.cells()
            .iter()
            .all(|&(x, y, _)| board.is_free(x + dx as i32, y + dy as i32))
    }

    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// Next rotation, trying in place, then one cell left, then one right.
    pub fn try_rotate(&self, board: &Board) -> Option<Self> {
        let table_len = self.shape.rotations().len() as u8;
        if table_len <= 1 {
            return None;
        }
        let rotated = Self {
            rotation: (self.rotation + 1) % table_len,
            ..self.clone()
        };
        [0i8, -1, 1]
            .iter()
            .map(|&dx| rotated.moved(dx, 0))
            .find(|candidate| candidate.fits(board, 0, 0))
    }
}
