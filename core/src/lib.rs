#![no_std]

extern crate alloc;

pub use board::*;
pub use client::*;
pub use clue::*;
pub use display::*;
pub use error::*;
pub use game::*;
pub use interaction::{Activation, on_cell_activated};
pub use payload::*;
pub use sample::*;
pub use types::*;

mod board;
mod client;
mod clue;
mod display;
mod error;
mod game;
mod interaction;
mod payload;
mod sample;
mod types;

/// Shape of a game: how many categories, how many clues each, and how many candidates to draw categories from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub categories: usize,
    pub questions: usize,
    pub pool_size: usize,
}

impl BoardConfig {
    /// Six categories of five clues, picked out of a hundred.
    pub const STANDARD: Self = Self::new(6, 5);

    pub const DEFAULT_POOL_SIZE: usize = 100;

    pub const fn new(categories: usize, questions: usize) -> Self {
        Self {
            categories,
            questions,
            pool_size: Self::DEFAULT_POOL_SIZE,
        }
    }

    pub const fn total_cells(&self) -> usize {
        self.categories * self.questions
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}
