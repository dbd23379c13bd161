//! Frame of letter cells, each tagged with the role it plays on screen.
//!
//! Views only say what a cell *is* (a plain letter, a highlighted match, a
//! locked line); the renderer decides what that looks like.

/// Screen role of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    /// Empty board cell.
    Field,
    Border,
    /// Settled letter.
    Letter,
    /// Falling piece or the runner.
    Active,
    /// Part of a found word.
    Highlight,
    /// Letter in a locked puzzle line.
    Locked,
    Selected,
    Label,
    Value,
    Done,
    Wrong,
    Overlay,
}

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub tone: Tone,
}

impl Default for Cell {
    fn default() -> Self {
        Self { ch: ' ', tone: Tone::Plain }
    }
}

/// Horizontal run of cells that differ between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

/// A full screen of cells. Writes outside the frame are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    rows: Vec<Vec<Cell>>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![Cell::default(); width as usize]; height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn same_size(&self, other: &FrameBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.rows.get(y as usize)?.get(x as usize).copied()
    }

    pub fn row(&self, y: u16) -> &[Cell] {
        self.rows.get(y as usize).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, tone: Tone) {
        if let Some(cell) = self.rows.get_mut(y as usize).and_then(|r| r.get_mut(x as usize)) {
            *cell = Cell { ch, tone };
        }
    }

    /// Write a string on one row, clipped at the right edge.
    /// Returns the column after the last character written.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, tone: Tone) -> u16 {
        let mut end = x;
        for (ch, cx) in s.chars().zip(x..self.width) {
            self.put_char(cx, y, ch, tone);
            end = cx + 1;
        }
        end
    }

    /// Paint `w` blank cells starting at `(x, y)`.
    pub fn fill_row(&mut self, x: u16, y: u16, w: u16, tone: Tone) {
        for cx in x..x.saturating_add(w) {
            self.put_char(cx, y, ' ', tone);
        }
    }

    /// Single-line box of outer size `w` x `h`.
    pub fn draw_border(&mut self, x: u16, y: u16, w: u16, h: u16, tone: Tone) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        for cx in x + 1..right {
            self.put_char(cx, y, '─', tone);
            self.put_char(cx, bottom, '─', tone);
        }
        for cy in y + 1..bottom {
            self.put_char(x, cy, '│', tone);
            self.put_char(right, cy, '│', tone);
        }
        self.put_char(x, y, '┌', tone);
        self.put_char(right, y, '┐', tone);
        self.put_char(x, bottom, '└', tone);
        self.put_char(right, bottom, '┘', tone);
    }

    /// Row `y` as plain text.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }

    /// Runs of cells that changed since `prev`. Every row is one span when the
    /// sizes differ.
    pub fn changed_spans(&self, prev: &FrameBuffer) -> Vec<Span> {
        if !self.same_size(prev) {
            return (0..self.height)
                .map(|y| Span { x: 0, y, len: self.width })
                .collect();
        }

        let mut spans = Vec::new();
        for (y, (now, before)) in self.rows.iter().zip(&prev.rows).enumerate() {
            let mut start: Option<usize> = None;
            for (x, (a, b)) in now.iter().zip(before).enumerate() {
                match (a != b, start) {
                    (true, None) => start = Some(x),
                    (false, Some(s)) => {
                        spans.push(Span { x: s as u16, y: y as u16, len: (x - s) as u16 });
                        start = None;
                    }
                    _ => {}
                }
            }
            if let Some(s) = start {
                spans.push(Span { x: s as u16, y: y as u16, len: (now.len() - s) as u16 });
            }
        }
        spans
    }
}
