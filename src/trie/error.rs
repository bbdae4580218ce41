use super::char_trait::TrieChar;

/// Reasons a word was not inserted by [`Trie::try_add`](super::Trie::try_add).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddError<C: TrieChar> {
    /// The word was already stored. The trie is unchanged.
    #[error("word is already present")]
    AlreadyPresent,

    /// The word contains the reserved terminator. The trie is unchanged.
    #[error("word contains the terminator {terminator:?} at position {position}")]
    ContainsTerminator {
        /// The trie's terminator symbol.
        terminator: C,
        /// Index of the first occurrence of the terminator within the word.
        position: usize,
    },
}
