//! The frame the renderer draws into before it is flushed to the terminal.

use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

const DEFAULT_FG: Rgb = Rgb::new(255, 255, 255);
const DEFAULT_BG: Rgb = Rgb::new(0, 0, 0);

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub attrs: TextStyle,
    /// Right half of a double-width symbol drawn in the cell to the left.
    /// Never written to the terminal.
    pub continuation: bool,
}

impl Cell {
    /// An empty cell with only a background.
    pub const fn blank(bg: Rgb) -> Self {
        Self {
            symbol: ' ',
            fg: DEFAULT_FG,
            bg,
            attrs: TextStyle::new(),
            continuation: false,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(DEFAULT_BG)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.offset(x, y).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.offset(x, y).map(|i| &mut self.cells[i])
    }

    /// Draw `symbol` at `(x, y)`, keeping the cell's background when `bg` is
    /// `None`. A double-width symbol also claims the cell to its right.
    ///
    /// Returns the number of columns the symbol occupies.
    pub fn put(&mut self, x: u16, y: u16, symbol: char, fg: Rgb, bg: Option<Rgb>, attrs: TextStyle) -> u16 {
        let width = char_width(symbol) as u16;
        let Some(cell) = self.get_mut(x, y) else {
            return width;
        };
        let bg = bg.unwrap_or(cell.bg);
        *cell = Cell {
            symbol,
            fg,
            bg,
            attrs,
            continuation: false,
        };

        if width == 2 {
            if let Some(right) = self.get_mut(x.saturating_add(1), y) {
                *right = Cell {
                    fg,
                    continuation: true,
                    ..Cell::blank(bg)
                };
            }
        }
        width
    }

    /// Paint the background of every cell in the given span, clipped to the buffer.
    pub fn paint(&mut self, x: u16, y: u16, width: u16, height: u16, bg: Rgb) {
        let right = x.saturating_add(width).min(self.width);
        let bottom = y.saturating_add(height).min(self.height);
        for row in y..bottom {
            for col in x..right {
                if let Some(cell) = self.get_mut(col, row) {
                    cell.bg = bg;
                }
            }
        }
    }

    /// The visible symbols of row `y`.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.continuation)
            .map(|cell| cell.symbol)
            .collect()
    }

    /// Cells of `self` that differ from `previous`, with their positions.
    /// Both buffers must have the same size.
    pub fn changes<'a>(&'a self, previous: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        let width = self.width as usize;
        self.cells
            .iter()
            .zip(&previous.cells)
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(move |(i, (cell, _))| ((i % width) as u16, (i / width) as u16, cell))
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }
}
