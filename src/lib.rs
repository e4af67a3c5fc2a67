//! # Absurdle Dict
//!
//! Expands the compressed Absurdle dictionary into flat word lists.
//!
//! The game ships its two vocabularies grouped by prefix, with the remaining
//! letters of every word packed into one string per prefix. Decoding turns
//! that into a `{"guesses": [...], "solutions": [...]}` document that a
//! solver can load directly.

pub mod category;
pub mod compressed;
pub mod decoder;
pub mod error;
pub mod flat;
pub mod io;
pub mod vocabulary;

pub use category::Category;
pub use compressed::{CompressedDictionary, PrefixGroup};
pub use decoder::{decode, expand_category, split_suffix_run};
pub use error::{DecodeError, Error, Result};
pub use flat::FlatDictionary;
pub use io::{decode_file, read_compressed, read_flat, write_flat};
pub use vocabulary::Vocabulary;

/// Width of every suffix in a suffix run, in characters
pub const SUFFIX_LENGTH: usize = 3;

/// Load the bundled sample dictionary
pub fn sample_dictionary() -> Result<CompressedDictionary> {
    CompressedDictionary::from_json_str(include_str!("../res/sample_raw.json"))
}
