//! The two vocabularies carried by the compressed dictionary.
//!
//! Labels are a fixed convention of the source data: `N` holds the answer
//! pool and `I` holds the extra accepted guesses.

use std::fmt;

/// One of the two top-level groups of the compressed dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Possible answers (`N`)
    Solutions,
    /// Accepted guesses (`I`)
    Guesses,
}

impl Category {
    /// Both categories, in the order the decoder processes them.
    pub const ALL: [Category; 2] = [Category::Solutions, Category::Guesses];

    /// Key of this category in the compressed document
    pub fn label(self) -> &'static str {
        match self {
            Category::Solutions => "N",
            Category::Guesses => "I",
        }
    }

    /// Key of this category in the flat document
    pub fn output_key(self) -> &'static str {
        match self {
            Category::Solutions => "solutions",
            Category::Guesses => "guesses",
        }
    }

    /// Parse a compressed-document label. Labels are case sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "N" => Some(Category::Solutions),
            "I" => Some(Category::Guesses),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
