use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::*;

/// Remote end of the game: wherever categories and clues come from.
#[allow(async_fn_in_trait)]
pub trait TriviaSource {
    /// Lists up to `count` candidate categories.
    async fn category_pool(&self, count: usize) -> TriviaResult<Vec<CategorySummary>>;

    /// Full clue data for a single category.
    async fn category(&self, id: CategoryId) -> TriviaResult<CategoryPayload>;
}

impl<S: TriviaSource + ?Sized> TriviaSource for &S {
    async fn category_pool(&self, count: usize) -> TriviaResult<Vec<CategorySummary>> {
        (**self).category_pool(count).await
    }

    async fn category(&self, id: CategoryId) -> TriviaResult<CategoryPayload> {
        (**self).category(id).await
    }
}

/// Turns what a [`TriviaSource`] serves into boards of the configured shape.
#[derive(Debug)]
pub struct TriviaClient<S> {
    source: S,
    config: BoardConfig,
    sampler: Sampler,
}

impl<S: TriviaSource> TriviaClient<S> {
    pub fn new(source: S, config: BoardConfig, seed: u64) -> Self {
        Self {
            source,
            config,
            sampler: Sampler::new(seed),
        }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Picks `categories` distinct category ids out of a larger pool.
    pub async fn fetch_category_ids(&mut self) -> TriviaResult<Vec<CategoryId>> {
        let pool = self.source.category_pool(self.config.pool_size).await?;

        let mut seen = BTreeSet::new();
        let unique: Vec<CategoryId> = pool
            .into_iter()
            .map(|summary| summary.id)
            .filter(|&id| seen.insert(id))
            .collect();

        if unique.len() < self.config.categories {
            return Err(TriviaError::NotEnoughCategories {
                wanted: self.config.categories,
                available: unique.len(),
            });
        }

        Ok(self.sampler.pick(&unique, self.config.categories))
    }

    /// Fetches one category and keeps `questions` random clues of it, all hidden.
    ///
    /// A category with fewer clues than that fails with [`TriviaError::NotEnoughClues`], boards are never short.
    pub async fn fetch_category(&mut self, id: CategoryId) -> TriviaResult<Category> {
        let CategoryPayload { title, clues } = self.source.category(id).await?;

        if clues.len() < self.config.questions {
            return Err(TriviaError::NotEnoughClues {
                id,
                wanted: self.config.questions,
                available: clues.len(),
            });
        }

        let clues = self
            .sampler
            .pick(&clues, self.config.questions)
            .into_iter()
            .map(|CluePayload { question, answer }| Clue::new(question, answer))
            .collect();

        Ok(Category::new(title, clues))
    }

    /// Whole board: ids first, then every category one after the other.
    pub async fn fetch_board(&mut self) -> TriviaResult<Board> {
        let ids = self.fetch_category_ids().await?;
        log::debug!("category ids: {:?}", ids);

        let mut categories = Vec::with_capacity(ids.len());
        for id in ids {
            categories.push(self.fetch_category(id).await?);
        }

        Ok(Board::new(self.config, categories)?)
    }
}
