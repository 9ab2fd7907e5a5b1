//! Walker for [`Trie`] internal searching.
//!
//! [`Walker`] is the single traversal primitive shared by every scan operation. It moves a window
//! `[left, position]` over the input's codepoints, following edges from the root as long as they
//! exist, and reports two kinds of [`Event`]s:
//!
//! - a [`Event::Miss`] when no word can start at `left`. The walker has already restarted at the
//!   root one codepoint later when this is reported.
//! - a [`Event::Match`] whenever the live path lands on a path end. By default the walker keeps
//!   extending the same path afterwards.
//!
//! How a match is consumed is up to the caller: it may keep extending, or call
//! [`Walker::restart_at`] to resume strictly after the matched span. There are no failure links,
//! so a miss always rescans from `left + 1`.
//!
//! A walker that owns its input can also have it rewritten mid-scan through
//! [`Walker::input_mut`]. Later windows then read the rewritten codepoints.
//!
//! [`Trie`]: crate::Trie

use crate::{node::Node, placeholder::Pos};

/// Something the [`Walker`] found while stepping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    /// No dictionary word starts at `left`.
    ///
    /// The codepoint at `left` is unmatched by this window.
    Miss { left: usize },
    /// The window `[pos.start, pos.end]` spells a dictionary word.
    Match(Pos),
}

/// A windowed cursor over a codepoint sequence and a prefix tree.
///
/// The `Walker` keeps track of the live path within the tree, as well as the window start and
/// cursor within the input. It is an [`Iterator`] of [`Event`]s and ends once the cursor passes
/// the end of the input.
#[derive(Clone, Debug)]
pub(crate) struct Walker<'t, I> {
    root: &'t Node,
    node: &'t Node,
    input: I,

    left: usize,
    position: usize,
}

impl<'t, I> Walker<'t, I>
where
    I: AsRef<[char]>,
{
    #[inline]
    #[must_use]
    pub(crate) fn new(root: &'t Node, input: I) -> Self {
        Self {
            root,
            node: root,
            input,

            left: 0,
            position: 0,
        }
    }

    /// Drop the live path and start a new window at `left`.
    #[inline]
    pub(crate) fn restart_at(&mut self, left: usize) {
        self.node = self.root;
        self.left = left;
        self.position = left;
    }

    /// The codepoints from the current window start to the end of the input.
    ///
    /// Once the walker is exhausted, this is whatever was never consumed by a window.
    #[inline]
    #[must_use]
    pub(crate) fn rest(&self) -> &[char] {
        self.input.as_ref().get(self.left..).unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub(crate) fn into_input(self) -> I {
        self.input
    }
}

impl<I> Walker<'_, I>
where
    I: AsMut<[char]>,
{
    /// The input being scanned, for rewriting codepoints the walker has already passed.
    #[inline]
    pub(crate) fn input_mut(&mut self) -> &mut [char] {
        self.input.as_mut()
    }
}

impl<I> Iterator for Walker<'_, I>
where
    I: AsRef<[char]>,
{
    type Item = Event;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&c) = self.input.as_ref().get(self.position) {
            let position = self.position;
            match self.node.child(c) {
                Some(child) if child.is_path_end() => {
                    self.node = child;
                    self.position += 1;
                    return Some(Event::Match(Pos::new(self.left, position)));
                }
                // A non-terminal node on the last codepoint can never be extended.
                Some(child) if position + 1 < self.input.as_ref().len() => {
                    self.node = child;
                    self.position += 1;
                }
                _ => {
                    let left = self.left;
                    self.restart_at(left + 1);
                    return Some(Event::Miss { left });
                }
            }
        }
        None
    }
}
