use super::decode::decode_phrases;
use super::error::LoadError;
use super::types::Phrase;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// Immutable in-memory index over a phrase dataset.
///
/// Every derived view is computed once in the constructor and only read
/// afterwards, so the index can be shared behind an `Arc` by any number of
/// request handlers. The random source is the only mutable piece and sits
/// behind its own lock.
pub struct PhraseIndex {
    all: Vec<Phrase>,
    /// Folded term -> position in `all`. Later duplicates overwrite earlier ones.
    by_term: HashMap<String, usize>,
    /// Folded category -> positions in `all`, in source order.
    by_category: HashMap<String, Vec<usize>>,
    /// Positions of phrases with a non-blank Dutch explanation, in source order.
    dutch: Vec<usize>,
    rng: Mutex<StdRng>,
}

impl PhraseIndex {
    /// Reads and indexes the dataset at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        let bytes = std::fs::read(path).map_err(|source| {
            tracing::error!("Failed to read phrases from {}: {}", path.display(), source);
            match source.kind() {
                ErrorKind::NotFound => LoadError::SourceNotFound {
                    path: path.to_path_buf(),
                },
                _ => LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                },
            }
        })?;

        tracing::info!("Loading phrases from {}", path.display());
        Self::from_slice(&bytes)
    }

    /// Indexes an in-memory serialized dataset.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, LoadError> {
        let phrases = decode_phrases(bytes)?;
        Ok(Self::from_phrases(phrases))
    }

    pub fn from_phrases(phrases: Vec<Phrase>) -> Self {
        Self::with_rng(phrases, StdRng::from_entropy())
    }

    /// Builds the index with an explicit random source (e.g. a seeded one).
    pub fn with_rng(phrases: Vec<Phrase>, rng: StdRng) -> Self {
        let mut by_term = HashMap::with_capacity(phrases.len());
        let mut by_category: HashMap<String, Vec<usize>> = HashMap::new();
        let mut dutch = Vec::new();

        for (position, phrase) in phrases.iter().enumerate() {
            by_term.insert(fold(&phrase.text), position);
            by_category
                .entry(fold(&phrase.category))
                .or_default()
                .push(position);
            if phrase.has_dutch_explanation() {
                dutch.push(position);
            }
        }

        if by_term.len() < phrases.len() {
            tracing::warn!(
                "{} duplicate term(s) in dataset, keeping the last occurrence",
                phrases.len() - by_term.len()
            );
        }

        tracing::info!(
            "Phrase index ready: {} phrases, {} with Dutch explanation, {} categories",
            phrases.len(),
            dutch.len(),
            by_category.len()
        );

        Self {
            all: phrases,
            by_term,
            by_category,
            dutch,
            rng: Mutex::new(rng),
        }
    }

    /// A uniformly random phrase, or `Phrase::default()` when the index is empty.
    pub fn get_random(&self) -> Phrase {
        match self.pick(self.all.len()) {
            Some(i) => {
                let phrase = self.all[i].clone();
                tracing::debug!("Random phrase: '{}' ({})", phrase.text, phrase.category);
                phrase
            }
            None => {
                tracing::debug!("Random phrase requested but index is empty");
                Phrase::default()
            }
        }
    }

    /// Case-insensitive exact match on the phrase text.
    pub fn get_by_term(&self, term: &str) -> Option<Phrase> {
        let found = self.by_term.get(&fold(term)).map(|&i| self.all[i].clone());
        tracing::debug!("Lookup term '{}': found={}", term, found.is_some());
        found
    }

    /// All phrases in `category` (case-insensitive), in source order.
    pub fn get_by_category(&self, category: &str) -> Vec<Phrase> {
        let phrases = self
            .by_category
            .get(&fold(category))
            .map(|positions| self.collect(positions))
            .unwrap_or_default();
        tracing::debug!("Lookup category '{}': {} phrases", category, phrases.len());
        phrases
    }

    /// Every phrase carrying a Dutch explanation, in source order.
    pub fn get_for_dutch(&self) -> Vec<Phrase> {
        self.collect(&self.dutch)
    }

    /// Like `get_random`, restricted to phrases with a Dutch explanation.
    pub fn get_random_for_dutch(&self) -> Phrase {
        match self.pick(self.dutch.len()) {
            Some(i) => self.all[self.dutch[i]].clone(),
            None => {
                tracing::debug!("Random Dutch phrase requested but none are available");
                Phrase::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn dutch_count(&self) -> usize {
        self.dutch.len()
    }

    pub fn category_count(&self) -> usize {
        self.by_category.len()
    }

    /// Folded category keys, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.by_category.keys().cloned().collect();
        keys.sort();
        keys
    }

    fn collect(&self, positions: &[usize]) -> Vec<Phrase> {
        positions.iter().map(|&i| self.all[i].clone()).collect()
    }

    fn pick(&self, upper: usize) -> Option<usize> {
        if upper == 0 {
            return None;
        }
        Some(self.lock_rng().gen_range(0..upper))
    }

    fn lock_rng(&self) -> MutexGuard<'_, StdRng> {
        // The generator holds no invariant a panicking holder could break.
        self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Locale-independent, per-character case folding used for both term and
/// category keys. Each char folds the same way wherever it appears.
pub fn fold(key: &str) -> String {
    key.chars().flat_map(char::to_lowercase).collect()
}
