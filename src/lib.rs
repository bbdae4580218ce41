//! # libtrie
//!
//! A [prefix tree](https://en.wikipedia.org/wiki/Trie) (trie) for Rust with a reserved
//! terminator symbol.
//!
//! Every trie is created with one terminator symbol. A stored word is recorded by
//! adding the terminator as a child key of the node the word's path ends at, so the
//! terminator itself can never be part of a word. Adding a word that contains it is
//! rejected, and any nodes the attempt created are discarded again: a failed
//! [`add`](Trie::add) leaves the trie exactly as it found it.
//!
//! ## Features
//!
//! - **Generic over character type**: works with `char`, `u8`, `u16`, or any type
//!   implementing [`TrieChar`](trie::TrieChar)
//! - **Atomic insertion**: rejected words leave no partial paths behind
//! - **Iterative**: no operation recurses, so very long words are safe
//!
//! ## Quick Start
//!
//! ```
//! use libtrie::Trie;
//!
//! let mut trie = Trie::new('*');
//! assert!(trie.add("cat"));
//! assert!(trie.add("car"));
//! assert!(!trie.add("cat"));
//! assert!(trie.contains("cat"));
//! assert!(!trie.contains("ca"));
//!
//! trie.delete("cat");
//! assert!(!trie.contains("cat"));
//! assert!(trie.contains("car"));
//! ```
//!
//! ## Rejected Words
//!
//! ```
//! use libtrie::{AddError, Trie};
//!
//! let mut trie = Trie::new('*');
//! assert_eq!(
//!     trie.try_add("te*st"),
//!     Err(AddError::ContainsTerminator { terminator: '*', position: 2 })
//! );
//! assert!(!trie.has_prefix("t"));
//! ```
//!
//! ## Generic Usage
//!
//! ```
//! use libtrie::Trie;
//!
//! let mut trie: Trie<u8> = Trie::new(0);
//! trie.add([1, 2, 3]);
//! trie.add(vec![1, 2, 4]);
//! assert!(trie.contains([1u8, 2, 3].as_slice()));
//! assert!(!trie.contains([1u8, 2].as_slice()));
//! assert!(!trie.add([1u8, 0, 4]));
//! ```
//!
//! ## Logging
//!
//! Insertions, removals and rejected words emit [`tracing`] events at the `trace` and
//! `debug` levels. The library never installs a subscriber.

#![warn(missing_docs)]

/// Prefix tree, node types and word conversion.
pub mod trie;

pub use trie::{AddError, IntoWord, Trie, TrieChar};
