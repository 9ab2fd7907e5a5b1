//! Node type for the [`Trie`]'s internal prefix tree.
//!
//! Edges between nodes are defined by codepoints (`char`), and traversal through the tree is done
//! one codepoint at a time. Every child is exclusively owned by its parent, so the structure can
//! never contain cycles or shared nodes.
//!
//! Each node also carries a set of [`Flags`] identifying whether it is the root, and whether some
//! inserted word terminates exactly at it.
//!
//! [`Trie`]: crate::Trie

use bitflags::bitflags;
use hashbrown::HashMap;

bitflags! {
    /// Bitflags that define attributes on a [`Node`].
    pub struct Flags: u8 {
        /// The node is the single root of its tree.
        ///
        /// The root owns no edge, so its character is meaningless.
        const ROOT = 0b0000_0001;
        /// Some inserted word terminates exactly at this node.
        ///
        /// Clearing this flag is how a word is soft-deleted.
        const PATH_END = 0b0000_0010;
    }
}

/// A prefix tree node.
///
/// It represents a tree with codepoint edges. The `character` is the codepoint of the edge leading
/// into this node from its parent.
#[derive(Debug, PartialEq)]
pub struct Node {
    character: char,
    flags: Flags,
    children: HashMap<char, Node>,
}

impl Node {
    /// Creates a new non-root node reached by the edge `character`.
    pub(crate) fn new(character: char) -> Self {
        Self {
            character,
            flags: Flags::empty(),
            children: HashMap::new(),
        }
    }

    /// Creates a new root node.
    pub(crate) fn new_root() -> Self {
        Self {
            character: '\0',
            flags: Flags::ROOT,
            children: HashMap::new(),
        }
    }

    /// The codepoint owned by the edge into this node.
    ///
    /// This is meaningless for the root node.
    #[inline]
    #[must_use]
    pub fn character(&self) -> char {
        self.character
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.flags.contains(Flags::ROOT)
    }

    /// Returns whether an inserted word terminates at this node.
    #[inline]
    #[must_use]
    pub fn is_path_end(&self) -> bool {
        self.flags.contains(Flags::PATH_END)
    }

    /// Returns whether this node has no children.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Follows the edge for `c`, if one exists.
    #[inline]
    #[must_use]
    pub fn child(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }

    /// Iterates over all children, in no particular order.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.values()
    }

    /// Add nodes and edges representing `word`, and mark the final node as a path end.
    ///
    /// Existing edges are reused. An empty `word` touches nothing, so the root can never become a
    /// path end. Returns whether a path end was newly marked.
    pub(crate) fn add_path(&mut self, word: &str) -> bool {
        let mut chars = word.chars().peekable();
        if chars.peek().is_none() {
            return false;
        }

        let mut current = self;
        for c in chars {
            current = current.children.entry(c).or_insert_with(|| Node::new(c));
        }
        let added = !current.is_path_end();
        current.flags.insert(Flags::PATH_END);
        added
    }

    /// Walks the existing path for `word`, returning the node it lands on.
    ///
    /// Returns `None` if any edge along the way is missing. An empty `word` lands on `self`.
    #[must_use]
    pub(crate) fn search(&self, word: &str) -> Option<&Node> {
        word.chars().try_fold(self, |node, c| node.child(c))
    }

    fn search_mut(&mut self, word: &str) -> Option<&mut Node> {
        word.chars().try_fold(self, |node, c| node.children.get_mut(&c))
    }

    /// Clears the path end flag at the end of `word`'s path.
    ///
    /// Nodes are never removed, since longer words may share the path. Returns whether a path end
    /// was actually cleared.
    pub(crate) fn soft_delete(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        match self.search_mut(word) {
            Some(node) if node.is_path_end() => {
                node.flags.remove(Flags::PATH_END);
                true
            }
            _ => false,
        }
    }
}
