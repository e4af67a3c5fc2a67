//! Solver-ready word lists built from a flat dictionary.
//!
//! The solver needs both pools sorted and free of duplicates, and treats
//! every possible answer as an allowed guess. None of this is done by the
//! decoder, which reproduces the source lists exactly.

use std::path::Path;

use crate::error::Result;
use crate::flat::FlatDictionary;
use crate::io::read_flat;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    solutions: Vec<String>,
    guesses: Vec<String>,
}

impl Vocabulary {
    pub fn from_flat(flat: &FlatDictionary) -> Self {
        let mut solutions = flat.solutions.clone();
        solutions.sort();
        solutions.dedup();

        let mut guesses = Vec::with_capacity(solutions.len() + flat.guesses.len());
        guesses.extend_from_slice(&solutions);
        guesses.extend_from_slice(&flat.guesses);
        guesses.sort();
        guesses.dedup();

        Self { solutions, guesses }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let flat = read_flat(path)?;
        let vocabulary = Self::from_flat(&flat);
        log::info!(
            "Vocabulary: {} solutions, {} guesses",
            vocabulary.solutions.len(),
            vocabulary.guesses.len()
        );
        Ok(vocabulary)
    }

    /// Sorted, distinct possible answers
    pub fn solutions(&self) -> &[String] {
        &self.solutions
    }

    /// Sorted, distinct allowed guesses, answers included
    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    pub fn is_solution(&self, word: &str) -> bool {
        self.solutions
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    pub fn is_guess(&self, word: &str) -> bool {
        self.guesses
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }
}
