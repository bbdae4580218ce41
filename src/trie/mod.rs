/// Trait for types that can serve as trie edge labels.
pub mod char_trait;
/// Errors reported when a word cannot be added.
pub mod error;
/// Trie node and child entry types.
pub(crate) mod node;
/// The prefix tree itself.
pub mod tree;
/// Conversion of strings and sequences into words.
pub mod word;

#[cfg(test)]
mod property_tests;

pub use char_trait::TrieChar;
pub use error::AddError;
pub use tree::Trie;
pub use word::{IntoWord, WordBuf};
