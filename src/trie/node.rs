use hashbrown::HashMap;

use super::char_trait::TrieChar;

/// An entry in a node's children map.
///
/// Word-character keys lead to a real node. The terminator key maps to
/// [`Edge::End`], which marks that the path to this node spells a stored word.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Edge<C: TrieChar> {
    /// A traversable child node.
    Node(Box<TrieNode<C>>),
    /// The "no node" marker stored under the terminator key.
    End,
}

/// A node in the prefix tree.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct TrieNode<C: TrieChar> {
    value: C,
    clean: bool,
    children: HashMap<C, Edge<C>>,
}

impl<C: TrieChar> TrieNode<C> {
    /// Creates a node with no children.
    ///
    /// # Arguments
    ///
    /// * `value` - The character on the edge leading to this node
    /// * `clean` - Whether the node already lies on a completed insertion
    pub(crate) fn new(value: C, clean: bool) -> Self {
        TrieNode {
            value,
            clean,
            children: HashMap::new(),
        }
    }

    /// The character this node represents.
    #[inline]
    pub(crate) fn value(&self) -> C {
        self.value
    }

    /// True if this node lies on at least one completed insertion.
    #[inline]
    pub(crate) fn is_clean(&self) -> bool {
        self.clean
    }

    pub(crate) fn mark_clean(&mut self) {
        self.clean = true;
    }

    /// Returns the node that letter's edge leads to, or None if no such node exists.
    ///
    /// The end marker is not a node, so looking up the terminator always yields None.
    #[inline]
    pub(crate) fn get(&self, letter: C) -> Option<&TrieNode<C>> {
        match self.children.get(&letter) {
            Some(Edge::Node(node)) => Some(node.as_ref()),
            Some(Edge::End) | None => None,
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, letter: C) -> Option<&mut TrieNode<C>> {
        match self.children.get_mut(&letter) {
            Some(Edge::Node(node)) => Some(node.as_mut()),
            Some(Edge::End) | None => None,
        }
    }

    /// Returns the child for `letter`, creating an unclean one if absent.
    ///
    /// `letter` must not be the terminator.
    pub(crate) fn get_or_insert(&mut self, letter: C) -> &mut TrieNode<C> {
        let edge = self
            .children
            .entry(letter)
            .or_insert_with(|| Edge::Node(Box::new(TrieNode::new(letter, false))));
        match edge {
            Edge::Node(node) => node.as_mut(),
            Edge::End => unreachable!("end marker is only stored under the terminator"),
        }
    }

    /// Removes the child entry for `letter` together with its whole subtree.
    pub(crate) fn remove_child(&mut self, letter: C) -> Option<Edge<C>> {
        self.children.remove(&letter)
    }

    /// True if a word ends at this node.
    #[inline]
    pub(crate) fn has_end(&self, terminator: C) -> bool {
        self.children.contains_key(&terminator)
    }

    /// Records that a word ends at this node.
    pub(crate) fn set_end(&mut self, terminator: C) {
        self.children.insert(terminator, Edge::End);
    }

    /// Forgets that a word ends at this node. Returns true if one did.
    pub(crate) fn clear_end(&mut self, terminator: C) -> bool {
        self.children.remove(&terminator).is_some()
    }

    /// Resets a terminator entry that is not the end marker back to [`Edge::End`].
    ///
    /// Returns true if the entry had to be repaired.
    pub(crate) fn reset_end(&mut self, terminator: C) -> bool {
        match self.children.get_mut(&terminator) {
            Some(edge) if matches!(edge, Edge::Node(_)) => {
                *edge = Edge::End;
                true
            }
            _ => false,
        }
    }

    /// Iterates over the real child nodes, skipping the end marker.
    pub(crate) fn nodes(&self) -> impl Iterator<Item = (C, &TrieNode<C>)> + '_ {
        self.children.iter().filter_map(|(&letter, edge)| match edge {
            Edge::Node(node) => Some((letter, node.as_ref())),
            Edge::End => None,
        })
    }

    /// Iterates over the children entries, end marker included.
    pub(crate) fn edges(&self) -> impl Iterator<Item = (C, &Edge<C>)> + '_ {
        self.children.iter().map(|(&letter, edge)| (letter, edge))
    }

    /// Returns the number of children entries, end marker included.
    #[inline]
    pub(crate) fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Takes every child node out of the map, leaving the end marker in place.
    pub(crate) fn detach_nodes(&mut self) -> Vec<(C, Box<TrieNode<C>>)> {
        let mut nodes = Vec::with_capacity(self.children.len());
        for (letter, edge) in std::mem::take(&mut self.children) {
            match edge {
                Edge::Node(node) => nodes.push((letter, node)),
                Edge::End => {
                    self.children.insert(letter, Edge::End);
                }
            }
        }
        nodes
    }

    /// Puts a child node back under `letter`.
    pub(crate) fn attach(&mut self, letter: C, node: Box<TrieNode<C>>) {
        self.children.insert(letter, Edge::Node(node));
    }
}

// Tear the subtree down with an explicit stack, so dropping a very deep path
// cannot overflow the call stack.
impl<C: TrieChar> Drop for TrieNode<C> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TrieNode<C>>> =
            self.detach_nodes().into_iter().map(|(_, node)| node).collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.detach_nodes().into_iter().map(|(_, node)| node));
        }
    }
}
