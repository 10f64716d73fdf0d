// Trivia service client
//
// Two layers:
// - TriviaSource: raw reads from the service (category listing, one category)
// - TriviaClient: turns those reads into board material by sampling random
//   categories and random clues without replacement
//
// The HTTP implementation lives in `http`; tests use an in-memory source.

mod error;
mod http;

pub use error::ApiError;
pub use http::JServiceSource;

use crate::board::{Category, Clue};
use crate::util::clean_clue_text;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};

/// Category identifier as issued by the trivia service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One record of the category listing endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    #[serde(default)]
    #[allow(dead_code)]
    pub title: String,
    /// Reported clue count; not trusted, the detail endpoint is authoritative
    #[serde(default)]
    #[allow(dead_code)]
    pub clues_count: Option<u32>,
}

/// Full category as returned by the detail endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDetail {
    pub id: CategoryId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub clues: Vec<RawClue>,
}

/// Clue record as the service sends it (may contain HTML, may be blank or null)
#[derive(Debug, Clone, Deserialize)]
pub struct RawClue {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

impl RawClue {
    /// Cleaned clue, or `None` when either side is missing or blank
    fn usable(&self) -> Option<Clue> {
        let question = clean_clue_text(self.question.as_deref()?);
        let answer = clean_clue_text(self.answer.as_deref()?);
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        Some(Clue::new(question, answer))
    }
}

/// Raw read access to a trivia service
#[async_trait]
pub trait TriviaSource: Send + Sync {
    /// Fetch up to `count` category records
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>, ApiError>;

    /// Fetch one category with all of its clues
    async fn category(&self, id: CategoryId) -> Result<CategoryDetail, ApiError>;
}

/// Sampling client over a [`TriviaSource`]
///
/// Holds the only RNG used for board generation. A fixed seed makes boards
/// reproducible for a given service state.
pub struct TriviaClient {
    source: Arc<dyn TriviaSource>,
    pool_size: usize,
    clues_per_category: usize,
    rng: Mutex<StdRng>,
}

impl TriviaClient {
    pub fn new(
        source: Arc<dyn TriviaSource>,
        pool_size: usize,
        clues_per_category: usize,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            source,
            pool_size,
            clues_per_category,
            rng: Mutex::new(rng),
        }
    }

    /// Pick `sample_size` distinct category ids at random from the service's pool
    pub async fn list_category_ids(&self, sample_size: usize) -> Result<Vec<CategoryId>, ApiError> {
        let records = self.source.list_categories(self.pool_size).await?;

        // The listing can repeat records; sampling must stay without replacement
        let mut seen = HashSet::new();
        let ids: Vec<CategoryId> = records
            .into_iter()
            .map(|r| r.id)
            .filter(|id| seen.insert(*id))
            .collect();

        if ids.len() < sample_size {
            return Err(ApiError::PoolTooSmall {
                available: ids.len(),
                requested: sample_size,
            });
        }

        let picked = self.with_rng(|rng| sample_without_replacement(ids, sample_size, rng));
        tracing::debug!("Sampled category ids: {:?}", picked);
        Ok(picked)
    }

    /// Fetch one category and draw a random column of clues from it
    pub async fn fetch_category(&self, id: CategoryId) -> Result<Category, ApiError> {
        let detail = self.source.category(id).await?;
        if detail.id != id {
            tracing::warn!("Asked for category {}, service returned {}", id, detail.id);
        }

        let usable: Vec<Clue> = detail.clues.iter().filter_map(RawClue::usable).collect();

        if usable.len() < self.clues_per_category {
            tracing::warn!(
                "Category {} ({:?}) has only {} usable clues",
                id,
                detail.title,
                usable.len()
            );
            return Err(ApiError::InsufficientClues {
                category_id: id,
                available: usable.len(),
                required: self.clues_per_category,
            });
        }

        let clues =
            self.with_rng(|rng| sample_without_replacement(usable, self.clues_per_category, rng));

        Ok(Category {
            title: clean_clue_text(&detail.title),
            clues,
        })
    }

    /// Run `f` with the RNG locked; never hold the guard across an await
    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A poisoned lock still holds a usable RNG
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut rng)
    }
}

/// Uniformly random subset of `amount` items, in random order
pub(crate) fn sample_without_replacement<T, R: Rng + ?Sized>(
    mut items: Vec<T>,
    amount: usize,
    rng: &mut R,
) -> Vec<T> {
    items.shuffle(rng);
    items.truncate(amount);
    items
}
