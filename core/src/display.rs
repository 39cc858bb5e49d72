use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Output side of the board: whatever shows the grid to the player.
pub trait BoardRenderer {
    /// Replaces the whole grid with `board`: headers from category titles, every cell showing its clue face.
    fn render(&mut self, board: &Board);

    /// Replaces the text of exactly one cell.
    fn patch(&mut self, addr: CellAddr, text: &str);

    /// Drops the headers and masks every cell, keeping the grid dimensions.
    fn reset(&mut self);
}

/// Text model of the displayed grid, `cells[[col, row]]`.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayGrid {
    headers: Vec<String>,
    cells: Array2<String>,
}

impl DisplayGrid {
    /// A masked grid without headers.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            headers: Vec::new(),
            cells: Array2::from_elem((config.categories, config.questions), String::from(MASKED)),
        }
    }

    pub fn cols(&self) -> usize {
        self.cells.dim().0
    }

    pub fn rows(&self) -> usize {
        self.cells.dim().1
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn cell(&self, addr: CellAddr) -> &str {
        &self.cells[addr.to_nd_index()]
    }

    pub fn is_masked(&self) -> bool {
        self.cells.iter().all(|text| text == MASKED)
    }
}

impl BoardRenderer for DisplayGrid {
    fn render(&mut self, board: &Board) {
        self.headers = board
            .categories()
            .iter()
            .map(|category| String::from(category.title()))
            .collect();
        self.cells = Array2::from_shape_fn((board.cols(), board.rows()), |(col, row)| {
            String::from(board[CellAddr::new(col, row)].face())
        });
    }

    fn patch(&mut self, addr: CellAddr, text: &str) {
        match self.cells.get_mut(addr.to_nd_index()) {
            Some(cell) => {
                cell.clear();
                cell.push_str(text);
            }
            None => log::warn!("patch outside of the grid: {}", addr),
        }
    }

    fn reset(&mut self) {
        self.headers.clear();
        self.cells.fill(String::from(MASKED));
    }
}
