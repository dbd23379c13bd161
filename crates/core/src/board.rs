//! Board module - the letter grid shared by every game
//!
//! The board is a fixed `width x height` grid where each cell is either empty
//! or holds one letter. Storage is a flat row-major vector.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! Every access is bounds-checked: reads outside the grid see an empty cell
//! and writes outside the grid are ignored.

use crate::types::{Axis, Cell, Direction, BLANK};

/// How a whole-board slide moves letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideRule {
    /// Every row/column rotates one step with wrap-around (torus shift).
    #[default]
    Cyclic,
    /// Letters are packed toward the edge, keeping their order.
    Compact,
}

/// A fixed-size grid of optional letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Build a board from text rows.
    ///
    /// `' '` and `'.'` are empty cells; every other char is a letter. Short
    /// rows are padded with empty cells, the width is the longest row.
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut board = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch != BLANK && ch != '.' {
                    board.cells[y * width + x] = Some(ch);
                }
            }
        }
        board
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.is_inside(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    /// Letter at (x, y); `None` for empty or out-of-range cells.
    pub fn letter(&self, x: i32, y: i32) -> Option<char> {
        self.index(x, y).and_then(|idx| self.cells[idx])
    }

    /// Put a letter at (x, y). Returns false (and does nothing) out of bounds.
    pub fn set_letter(&mut self, x: i32, y: i32, letter: char) -> bool {
        self.set(x, y, Some(letter))
    }

    /// Empty the cell at (x, y). Returns false out of bounds.
    pub fn clear_cell(&mut self, x: i32, y: i32) -> bool {
        self.set(x, y, None)
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Inside the board and empty.
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|idx| self.cells[idx].is_none())
    }

    /// Inside the board and holding a letter.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.letter(x, y).is_some()
    }

    /// Length of a line along `axis` (width for rows, height for columns).
    pub fn line_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.width,
            Axis::Column => self.height,
        }
    }

    /// Number of lines along `axis`.
    pub fn line_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.height,
            Axis::Column => self.width,
        }
    }

    #[inline(always)]
    fn line_index(&self, axis: Axis, line: usize, offset: usize) -> usize {
        match axis {
            Axis::Row => line * self.width + offset,
            Axis::Column => offset * self.width + line,
        }
    }

    /// Cells of one line in order. Empty for an out-of-range index.
    pub fn line(&self, index: usize, axis: Axis) -> Vec<Cell> {
        if index >= self.line_count(axis) {
            return Vec::new();
        }
        (0..self.line_len(axis))
            .map(|offset| self.cells[self.line_index(axis, index, offset)])
            .collect()
    }

    /// Letters of one line with `BLANK` for empty cells.
    ///
    /// Positions are preserved exactly (no trimming) so match offsets map
    /// back to board coordinates. Out-of-range index yields an empty string.
    pub fn line_string(&self, index: usize, axis: Axis) -> String {
        self.line(index, axis)
            .into_iter()
            .map(|cell| cell.unwrap_or(BLANK))
            .collect()
    }

    pub fn row_string(&self, y: usize) -> String {
        self.line_string(y, Axis::Row)
    }

    pub fn column_string(&self, x: usize) -> String {
        self.line_string(x, Axis::Column)
    }

    /// Indices of lines with no empty cell.
    pub fn full_lines(&self, axis: Axis) -> Vec<usize> {
        (0..self.line_count(axis))
            .filter(|&line| {
                (0..self.line_len(axis))
                    .all(|offset| self.cells[self.line_index(axis, line, offset)].is_some())
            })
            .collect()
    }

    /// Delete the given rows, shift the remaining rows down and refill the
    /// top with empty rows. Out-of-range and repeated indices are ignored.
    pub fn remove_rows(&mut self, rows: &[usize]) -> usize {
        let width = self.width;
        let mut write_y = self.height;
        let mut removed = 0;

        // Two-pointer compaction from the bottom up.
        for read_y in (0..self.height).rev() {
            if rows.contains(&read_y) {
                removed += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        removed
    }

    /// Empty every cell of the given columns. Nothing shifts.
    pub fn clear_columns(&mut self, columns: &[usize]) {
        for &x in columns.iter().filter(|&&x| x < self.width) {
            for y in 0..self.height {
                self.cells[y * self.width + x] = None;
            }
        }
    }

    /// Rotate one row or column cyclically by one step.
    pub fn rotate(&mut self, index: usize, direction: Direction) -> bool {
        self.rotate_with_locks(index, direction, |_| false)
    }

    /// Rotate one row or column by one step, skipping locked positions.
    ///
    /// `locked(offset)` marks positions along the line that must stay put.
    /// The unlocked values are gathered in order, rotated among themselves and
    /// scattered back to the unlocked positions. Returns false when the index
    /// is out of range or fewer than two positions are unlocked.
    pub fn rotate_with_locks(
        &mut self,
        index: usize,
        direction: Direction,
        locked: impl Fn(usize) -> bool,
    ) -> bool {
        let axis = direction.axis();
        if index >= self.line_count(axis) {
            return false;
        }

        let positions: Vec<usize> = (0..self.line_len(axis))
            .filter(|&offset| !locked(offset))
            .map(|offset| self.line_index(axis, index, offset))
            .collect();
        if positions.len() <= 1 {
            return false;
        }

        let mut values: Vec<Cell> = positions.iter().map(|&idx| self.cells[idx]).collect();
        if direction.toward_start() {
            values.rotate_left(1);
        } else {
            values.rotate_right(1);
        }
        for (&idx, value) in positions.iter().zip(values) {
            self.cells[idx] = value;
        }
        true
    }

    /// Slide the whole board one step in `direction`.
    ///
    /// Returns whether the move happened. A cyclic shift is always possible;
    /// a compacting slide reports false when nothing changed.
    pub fn shift(&mut self, direction: Direction, rule: SlideRule) -> bool {
        let axis = direction.axis();
        match rule {
            SlideRule::Cyclic => {
                for line in 0..self.line_count(axis) {
                    self.rotate(line, direction);
                }
                true
            }
            SlideRule::Compact => {
                let mut moved = false;
                for line in 0..self.line_count(axis) {
                    moved |= self.compact_line(line, direction);
                }
                moved
            }
        }
    }

    fn compact_line(&mut self, line: usize, direction: Direction) -> bool {
        let axis = direction.axis();
        let len = self.line_len(axis);
        let letters: Vec<char> = self.line(line, axis).into_iter().flatten().collect();

        let mut packed: Vec<Cell> = vec![None; len];
        let first = if direction.toward_start() {
            0
        } else {
            len - letters.len()
        };
        for (i, letter) in letters.into_iter().enumerate() {
            packed[first + i] = Some(letter);
        }

        let mut changed = false;
        for (offset, cell) in packed.into_iter().enumerate() {
            let idx = self.line_index(axis, line, offset);
            if self.cells[idx] != cell {
                self.cells[idx] = cell;
                changed = true;
            }
        }
        changed
    }

    /// Write letters at absolute coordinates; cells outside are skipped.
    pub fn place_letters(&mut self, cells: impl IntoIterator<Item = (i32, i32, char)>) {
        for (x, y, letter) in cells {
            self.set_letter(x, y, letter);
        }
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Every cell, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the whole board.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Text rows, `'.'` for empty cells (debugging and logs).
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|y| {
                self.line(y, Axis::Row)
                    .into_iter()
                    .map(|cell| cell.unwrap_or('.'))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(5, 4);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(4, 0), Some(4));
        assert_eq!(board.index(0, 1), Some(5));
        assert_eq!(board.index(4, 3), Some(19));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(5, 0), None);
        assert_eq!(board.index(0, 4), None);
    }

    #[test]
    fn test_from_rows_roundtrip() {
        let board = Board::from_rows(&["АБ.", ".В ", "ГДЕ"]);
        assert_eq!(board.width(), 3);
        assert_eq!(board.to_rows(), vec!["АБ.", ".В.", "ГДЕ"]);
        assert_eq!(board.occupied_count(), 6);
    }

    #[test]
    fn test_rotate_with_locks_keeps_locked_in_place() {
        let mut board = Board::from_rows(&["АБВГД"]);
        assert!(board.rotate_with_locks(0, Direction::Left, |x| x == 1 || x == 3));
        // Unlocked А В Д rotate to В Д А; Б and Г stay.
        assert_eq!(board.row_string(0), "ВБДГА");
    }

    #[test]
    fn test_compact_line_reports_change() {
        let mut board = Board::from_rows(&[".А.Б"]);
        assert!(board.compact_line(0, Direction::Left));
        assert_eq!(board.row_string(0), "АБ  ");
        assert!(!board.compact_line(0, Direction::Left));
    }
}
