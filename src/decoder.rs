//! Expansion of prefix groups into words.
//!
//! Each group stores a prefix and a run of fixed-width suffixes. The run is
//! cut into consecutive chunks of [`SUFFIX_LENGTH`] characters starting at
//! offset 0, and every chunk is appended to the prefix:
//!
//! ```text
//! "ab": "cdexyz"  =>  ["abcde", "abxyz"]
//! ```
//!
//! Runs whose length is not a whole number of chunks are rejected; the
//! partial trailing chunk has no defined meaning.

use crate::category::Category;
use crate::compressed::{CompressedDictionary, PrefixGroup};
use crate::error::DecodeError;
use crate::flat::FlatDictionary;
use crate::SUFFIX_LENGTH;

/// Expand both categories of a compressed dictionary.
///
/// Nothing is returned unless every group of both categories is well formed.
pub fn decode(dictionary: &CompressedDictionary) -> Result<FlatDictionary, DecodeError> {
    let solutions = expand_category(Category::Solutions, dictionary.groups(Category::Solutions))?;
    let guesses = expand_category(Category::Guesses, dictionary.groups(Category::Guesses))?;

    log::debug!(
        "Decoded {} solutions and {} guesses",
        solutions.len(),
        guesses.len()
    );

    Ok(FlatDictionary { guesses, solutions })
}

/// Expand the groups of one category, keeping group order then chunk order.
pub fn expand_category(
    category: Category,
    groups: &[PrefixGroup],
) -> Result<Vec<String>, DecodeError> {
    let capacity = groups
        .iter()
        .map(|g| g.suffixes.len() / SUFFIX_LENGTH)
        .sum();
    let mut words = Vec::with_capacity(capacity);

    for group in groups {
        let chunks = split_suffix_run(&group.suffixes).ok_or_else(|| {
            DecodeError::MalformedDictionary {
                category,
                prefix: group.prefix.clone(),
                len: group.suffixes.chars().count(),
            }
        })?;

        words.extend(chunks.into_iter().map(|chunk| join_word(&group.prefix, chunk)));
    }

    log::debug!(
        "Category '{}': {} prefixes, {} words",
        category,
        groups.len(),
        words.len()
    );

    Ok(words)
}

/// Split a suffix run into its fixed-width chunks.
///
/// Widths are counted in characters, not bytes. Returns `None` when the run
/// does not divide evenly. An empty run yields no chunks.
pub fn split_suffix_run(run: &str) -> Option<Vec<&str>> {
    let mut chunks = Vec::with_capacity(run.len() / SUFFIX_LENGTH);
    let mut start = 0;

    for (count, (idx, c)) in run.char_indices().enumerate() {
        if count % SUFFIX_LENGTH == SUFFIX_LENGTH - 1 {
            let end = idx + c.len_utf8();
            chunks.push(&run[start..end]);
            start = end;
        }
    }

    (start == run.len()).then_some(chunks)
}

fn join_word(prefix: &str, suffix: &str) -> String {
    let mut word = String::with_capacity(prefix.len() + suffix.len());
    word.push_str(prefix);
    word.push_str(suffix);
    word.to_lowercase()
}
