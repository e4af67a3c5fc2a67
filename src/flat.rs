//! The expanded dictionary handed to the solver.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::Result;

/// Fully expanded word lists, in the order the compressed source defines.
///
/// Field order matters: it fixes the key order of the written document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatDictionary {
    pub guesses: Vec<String>,
    pub solutions: Vec<String>,
}

impl FlatDictionary {
    pub fn words(&self, category: Category) -> &[String] {
        match category {
            Category::Solutions => &self.solutions,
            Category::Guesses => &self.guesses,
        }
    }

    /// Total number of words across both lists, duplicates included
    pub fn len(&self) -> usize {
        self.guesses.len() + self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty() && self.solutions.is_empty()
    }

    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
