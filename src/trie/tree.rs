use tracing::{debug, trace};

use super::char_trait::TrieChar;
use super::error::AddError;
use super::node::{Edge, TrieNode};
use super::word::IntoWord;

/// A prefix tree holding words over an alphabet of `C`, with one reserved
/// terminator symbol.
///
/// A word is stored by adding the terminator as a child key of the node its
/// path ends at. The terminator can therefore never be part of a word:
/// [`add`](Trie::add) rejects such words and leaves the trie exactly as it was.
///
/// Mutation takes `&mut self`, so every call has exclusive access to the tree.
/// To share a trie between threads that mutate it, wrap it in a lock such as
/// `std::sync::Mutex`.
///
/// # Examples
///
/// ```
/// use libtrie::Trie;
///
/// let mut trie = Trie::new('*');
/// assert!(trie.add("cat"));
/// assert!(trie.add("car"));
/// assert!(!trie.add("cat")); // already present
/// assert!(!trie.contains("ca"));
///
/// trie.delete("cat");
/// assert!(!trie.contains("cat"));
/// assert!(trie.contains("car"));
///
/// assert!(!trie.add("te*st")); // contains the terminator
/// assert!(!trie.has_prefix("te"));
/// ```
pub struct Trie<C: TrieChar = char> {
    root: TrieNode<C>,
    terminator: C,
}

impl<C: TrieChar> Trie<C> {
    /// Creates an empty trie reserving `terminator`.
    ///
    /// The terminator is the one symbol that may never appear inside a word.
    pub fn new(terminator: C) -> Self {
        Trie {
            root: TrieNode::new(terminator, true),
            terminator,
        }
    }

    /// Returns the reserved terminator symbol.
    #[inline]
    pub fn terminator(&self) -> C {
        self.terminator
    }

    /// Returns the number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.nodes().map(|(_, child)| child));
        }
        count
    }

    /// Adds a word to the trie.
    ///
    /// Returns `true` if the word was inserted or is empty. Returns `false` if
    /// it was already present or contains the terminator; the trie is then
    /// unchanged. Use [`try_add`](Trie::try_add) to tell the two apart.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::Trie;
    ///
    /// let mut trie = Trie::new('$');
    /// assert!(trie.add("FAKE"));
    /// assert!(!trie.add("FAKE"));
    /// assert!(!trie.add("FA$KE"));
    /// assert!(trie.add(""));
    /// ```
    pub fn add(&mut self, word: impl IntoWord<C>) -> bool {
        self.try_add(word).is_ok()
    }

    /// Adds a word to the trie, reporting why it was not inserted.
    ///
    /// The empty word is accepted without changing the trie.
    ///
    /// # Errors
    ///
    /// * [`AddError::AlreadyPresent`] if the word is already stored.
    /// * [`AddError::ContainsTerminator`] if the word contains the terminator.
    ///   Any nodes created for the word before the terminator was reached are
    ///   discarded again.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::{AddError, Trie};
    ///
    /// let mut trie = Trie::new('*');
    /// assert_eq!(trie.try_add("cat"), Ok(()));
    /// assert_eq!(trie.try_add("cat"), Err(AddError::AlreadyPresent));
    /// assert_eq!(
    ///     trie.try_add("ca*t"),
    ///     Err(AddError::ContainsTerminator { terminator: '*', position: 2 })
    /// );
    /// ```
    pub fn try_add(&mut self, word: impl IntoWord<C>) -> Result<(), AddError<C>> {
        let word = word.collect_word();
        if word.is_empty() {
            return Ok(());
        }

        let terminator = self.terminator;

        // Phase 1: Walk the word, creating unclean nodes for missing edges.
        let mut current = &mut self.root;
        let mut rejected_at = None;
        for (i, &ch) in word.iter().enumerate() {
            if ch == terminator {
                rejected_at = Some(i);
                break;
            }
            current = current.get_or_insert(ch);
        }

        if let Some(position) = rejected_at {
            self.discard_unclean_path(&word[..position]);
            return Err(AddError::ContainsTerminator {
                terminator,
                position,
            });
        }

        // Phase 2: Record the word at the final node.
        if current.has_end(terminator) {
            return Err(AddError::AlreadyPresent);
        }
        current.set_end(terminator);

        // Phase 3: Confirm every node on the path.
        self.mark_path_clean(&word);
        trace!(len = word.len(), "added word");
        Ok(())
    }

    /// Marks every node along `word` as clean.
    fn mark_path_clean(&mut self, word: &[C]) {
        let mut current = &mut self.root;
        for &ch in word {
            match current.get_mut(ch) {
                Some(child) => {
                    child.mark_clean();
                    current = child;
                }
                None => break,
            }
        }
    }

    /// Undoes a rejected insertion along `prefix`, the part of the word that
    /// preceded the terminator.
    ///
    /// The first unclean node on the path was created by the rejected call; it
    /// is dropped with everything below it. If the whole prefix was already
    /// clean, the terminator entry at its end is reset to the end marker.
    fn discard_unclean_path(&mut self, prefix: &[C]) {
        let terminator = self.terminator;
        let mut current = &mut self.root;
        for (depth, &ch) in prefix.iter().enumerate() {
            match current.get(ch).map(TrieNode::is_clean) {
                Some(true) => {}
                Some(false) => {
                    current.remove_child(ch);
                    debug!(depth, "rejected word, discarded unclean path");
                    debug_assert!(self.is_clean());
                    return;
                }
                None => return,
            }
            current = match current.get_mut(ch) {
                Some(child) => child,
                None => return,
            };
        }
        if current.reset_end(terminator) {
            debug!(depth = prefix.len(), "rejected word, repaired terminator entry");
        } else {
            debug!(depth = prefix.len(), "rejected word, no new nodes to discard");
        }
    }

    /// Returns `true` if the given word is in the trie.
    ///
    /// The empty word is always contained. A word holding the terminator can
    /// never be stored, so it is reported as not contained.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::Trie;
    ///
    /// let mut trie = Trie::new('*');
    /// trie.add("BAKE");
    /// assert!(trie.contains("BAKE"));
    /// assert!(!trie.contains("BAK"));
    /// assert!(!trie.contains("BAKE*"));
    /// assert!(trie.contains(""));
    /// ```
    pub fn contains(&self, word: impl IntoWord<C>) -> bool {
        let word = word.collect_word();
        if word.is_empty() {
            return true;
        }
        if word.contains(&self.terminator) {
            return false;
        }
        self.find(&word).is_some_and(|n| n.has_end(self.terminator))
    }

    /// Returns `true` if some path in the trie starts with `prefix`.
    ///
    /// Paths left behind by [`delete`](Trie::delete) still count until
    /// [`prune`](Trie::prune) drops them.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::Trie;
    ///
    /// let mut trie = Trie::new('*');
    /// trie.add("BAKER");
    /// assert!(trie.has_prefix("BAK"));
    /// assert!(trie.has_prefix(""));
    /// assert!(!trie.has_prefix("CAK"));
    /// ```
    pub fn has_prefix(&self, prefix: impl IntoWord<C>) -> bool {
        let prefix = prefix.collect_word();
        !prefix.contains(&self.terminator) && self.find(&prefix).is_some()
    }

    fn find(&self, word: &[C]) -> Option<&TrieNode<C>> {
        word.iter().try_fold(&self.root, |n, &ch| n.get(ch))
    }

    /// Removes a word from the trie.
    ///
    /// Words that are not present, including the empty word and words holding
    /// the terminator, leave the trie unchanged. Nodes on the word's path are
    /// kept; see [`prune`](Trie::prune).
    pub fn delete(&mut self, word: impl IntoWord<C>) {
        self.remove(word);
    }

    /// Removes a word from the trie.
    ///
    /// Returns `true` if the word was removed, `false` if it was not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::Trie;
    ///
    /// let mut trie = Trie::new('*');
    /// trie.add("CAR");
    /// trie.add("CART");
    /// assert!(trie.remove("CAR"));
    /// assert!(!trie.remove("CAR")); // already removed
    /// assert!(trie.contains("CART"));
    /// ```
    pub fn remove(&mut self, word: impl IntoWord<C>) -> bool {
        let word = word.collect_word();
        if word.is_empty() || word.contains(&self.terminator) {
            return false;
        }

        let terminator = self.terminator;
        let mut current = &mut self.root;
        for &ch in word.iter() {
            current = match current.get_mut(ch) {
                Some(child) => child,
                None => return false,
            };
        }

        let removed = current.clear_end(terminator);
        if removed {
            trace!(len = word.len(), "removed word");
        }
        removed
    }

    /// Drops every node whose subtree holds no word, as left behind by
    /// [`delete`](Trie::delete).
    ///
    /// Returns the number of nodes dropped. The set of contained words is
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::Trie;
    ///
    /// let mut trie = Trie::new('*');
    /// trie.add("HELLO");
    /// trie.delete("HELLO");
    /// assert!(trie.has_prefix("HELL"));
    /// assert_eq!(trie.prune(), 5);
    /// assert!(!trie.has_prefix("H"));
    /// ```
    pub fn prune(&mut self) -> usize {
        let terminator = self.terminator;
        let root = std::mem::replace(&mut self.root, TrieNode::new(terminator, true));

        // Post-order walk over owned nodes: each frame holds a node whose
        // children are detached, and puts back the ones that still lead to a
        // word once they have been visited.
        let mut root = Box::new(root);
        let pending = root.detach_nodes();
        let mut stack: Vec<(Option<C>, Box<TrieNode<C>>, Vec<(C, Box<TrieNode<C>>)>)> =
            vec![(None, root, pending)];
        let mut dropped = 0;

        while let Some((_, _, pending)) = stack.last_mut() {
            if let Some((ch, mut child)) = pending.pop() {
                let grandchildren = child.detach_nodes();
                stack.push((Some(ch), child, grandchildren));
                continue;
            }
            let Some((letter, node, _)) = stack.pop() else {
                break;
            };
            match (letter, stack.last_mut()) {
                (Some(ch), Some((_, parent, _))) => {
                    if node.child_count() > 0 {
                        parent.attach(ch, node);
                    } else {
                        dropped += 1;
                    }
                }
                _ => self.root = *node,
            }
        }

        if dropped > 0 {
            debug!(dropped, "pruned dead nodes");
        }
        dropped
    }

    /// Checks the structural invariants of the tree:
    ///
    /// - every reachable node is clean,
    /// - every node's value matches the edge label leading to it,
    /// - no node other than the root holds the terminator as its value,
    /// - the terminator key only ever maps to the end marker.
    pub(crate) fn is_clean(&self) -> bool {
        let terminator = self.terminator;
        if !self.root.is_clean() || self.root.value() != terminator {
            return false;
        }
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            for (letter, edge) in node.edges() {
                match edge {
                    Edge::End if letter == terminator => {}
                    Edge::End => return false,
                    Edge::Node(_) if letter == terminator => return false,
                    Edge::Node(child) => {
                        if !child.is_clean() || child.value() != letter {
                            return false;
                        }
                        stack.push(child.as_ref());
                    }
                }
            }
        }
        true
    }
}

impl<C: TrieChar, W: IntoWord<C>> Extend<W> for Trie<C> {
    /// Adds every word, skipping duplicates and words holding the terminator.
    fn extend<I: IntoIterator<Item = W>>(&mut self, words: I) {
        for word in words {
            self.add(word);
        }
    }
}

impl<C: TrieChar> std::fmt::Debug for Trie<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("terminator", &self.terminator)
            .field("node_count", &self.node_count())
            .finish()
    }
}
