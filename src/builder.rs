//! Configuration and construction of a [`Trie`].
//!
//! [`Trie`]: crate::Trie

use crate::{placeholder::Placeholder, Trie};
use alloc::{
    string::{String, ToString},
    vec::Vec,
};

/// Settings used by the configured scan operations, [`censor()`] and [`placeholder()`].
///
/// [`censor()`]: crate::Trie::censor
/// [`placeholder()`]: crate::Trie::placeholder
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// Character every masked codepoint is overwritten with.
    pub mask: char,
    /// Token spliced in place of matched spans.
    pub placeholder: Placeholder,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mask: '*',
            placeholder: Placeholder::default(),
        }
    }
}

/// A builder for a [`Trie`].
///
/// # Example
/// ```
/// use sensitive_words::TrieBuilder;
///
/// let trie = TrieBuilder::new().words(&["foo", "bar"]).mask('#').build();
///
/// assert_eq!(trie.censor("foo and bar"), "### and ###");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TrieBuilder {
    words: Vec<String>,
    options: Options,
}

impl TrieBuilder {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn word<S>(mut self, word: &S) -> Self
    where
        S: ToString + ?Sized,
    {
        self.words.push(word.to_string());
        self
    }

    #[inline]
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.words.extend(words.into_iter().map(|s| s.to_string()));
        self
    }

    #[inline]
    pub fn mask(mut self, mask: char) -> Self {
        self.options.mask = mask;
        self
    }

    #[inline]
    pub fn placeholder(mut self, placeholder: Placeholder) -> Self {
        self.options.placeholder = placeholder;
        self
    }

    #[inline]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn build(self) -> Trie {
        let mut trie = Trie::with_options(self.options);
        trie.insert(self.words);
        trie
    }
}
