use alloc::string::String;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// Categories in display column order, every one holding the same number of clues.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    /// Builds a board, rejecting anything that is not exactly `config.categories` columns of `config.questions` clues.
    pub fn new(config: BoardConfig, categories: Vec<Category>) -> Result<Self> {
        if categories.len() != config.categories
            || categories
                .iter()
                .any(|category| category.clues.len() != config.questions)
        {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn cols(&self) -> usize {
        self.categories.len()
    }

    pub fn rows(&self) -> usize {
        self.categories.first().map_or(0, |c| c.clues.len())
    }

    pub fn validate_addr(&self, addr: CellAddr) -> Result<CellAddr> {
        if addr.col < self.cols() && addr.row < self.rows() {
            Ok(addr)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn clue(&self, addr: CellAddr) -> Result<&Clue> {
        let addr = self.validate_addr(addr)?;
        Ok(&self[addr])
    }

    pub fn reveal(&mut self, addr: CellAddr) -> Result<Option<&str>> {
        let addr = self.validate_addr(addr)?;
        Ok(self[addr].reveal())
    }

    pub fn iter_addrs(&self) -> impl Iterator<Item = CellAddr> + use<> {
        let (cols, rows) = (self.cols(), self.rows());
        (0..rows).flat_map(move |row| (0..cols).map(move |col| CellAddr::new(col, row)))
    }
}

impl Index<CellAddr> for Board {
    type Output = Clue;

    fn index(&self, addr: CellAddr) -> &Self::Output {
        &self.categories[addr.col].clues[addr.row]
    }
}

impl IndexMut<CellAddr> for Board {
    fn index_mut(&mut self, addr: CellAddr) -> &mut Self::Output {
        &mut self.categories[addr.col].clues[addr.row]
    }
}
