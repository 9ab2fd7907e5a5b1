//! A prefix tree for finding banned phrases within text.
//!
//! A [`Trie`] indexes a dictionary of words by their unicode codepoints. Text can then be scanned
//! against the dictionary in a number of ways:
//!
//! - [`validate()`](Trie::validate) stops at the first banned word.
//! - [`find_all()`](Trie::find_all) lists every distinct banned word.
//! - [`filter()`](Trie::filter) removes banned words from the text.
//! - [`replace()`](Trie::replace) masks banned words codepoint by codepoint.
//! - [`placeholder()`](Trie::placeholder) and
//!   [`placeholder_longest()`](Trie::placeholder_longest) splice a token in place of banned words
//!   and report what was replaced.
//!
//! All scans are read-only and share a single traversal. On a miss, scanning restarts one codepoint
//! after the current window start; no failure links are kept, so the worst case is proportional to
//! the input length times the longest dictionary word.
//!
//! # Example
//! ```
//! use sensitive_words::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert(["foo", "bar"]);
//!
//! assert_eq!(trie.filter("foo, then bar."), ", then .");
//! assert_eq!(trie.replace("foo, then bar.", '*'), "***, then ***.");
//! assert_eq!(trie.find_all("bar foo bar"), vec!["bar", "foo"]);
//! ```
//!
//! # Dictionary mutation
//! Words can be removed with [`soft_delete()`](Trie::soft_delete). This only unmarks the word's
//! terminal node, so longer words sharing it as a prefix remain matchable. The `Trie` has no
//! internal synchronization; callers sharing one across threads must not scan while mutating.

#![no_std]

extern crate alloc;

mod builder;
mod error;
mod node;
mod placeholder;
mod walker;

pub use builder::{Options, TrieBuilder};
pub use error::Error;
pub use node::Node;
pub use placeholder::{Match, Placeholder, Placeholdered, Pos};

use alloc::{string::String, vec::Vec};
use core::iter::FromIterator;
use hashbrown::HashSet;
use log::{debug, trace};
use walker::{Event, Walker};

/// Outcome of [`Trie::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    /// The text contains no dictionary word.
    Valid,
    /// The text contains the given dictionary word. It is the first one found.
    Invalid(String),
}

impl Validation {
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// The first dictionary word found, if any.
    #[inline]
    #[must_use]
    pub fn first_match(&self) -> Option<&str> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(word) => Some(word.as_str()),
        }
    }
}

/// A dictionary of words, indexed by codepoint.
///
/// See the [crate-level documentation](crate) for an overview of the available scans.
#[derive(Debug)]
pub struct Trie {
    root: Node,
    options: Options,
}

impl Trie {
    /// Creates an empty `Trie` with default [`Options`].
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    #[inline]
    #[must_use]
    pub fn with_options(options: Options) -> Self {
        Self {
            root: Node::new_root(),
            options,
        }
    }

    /// The root node of the tree.
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    #[inline]
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Insert every word in `words`.
    ///
    /// Inserting a word that is already present has no effect. Empty words are ignored.
    pub fn insert<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0;
        for word in words {
            if self.root.add_path(word.as_ref()) {
                count += 1;
            }
        }
        debug!("Inserted {} new words.", count);
    }

    /// Soft-delete every word in `words`.
    ///
    /// The words' nodes remain in the tree, so longer words sharing them as a prefix are still
    /// matched. Words that were never inserted are skipped.
    pub fn soft_delete<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut count = 0;
        for word in words {
            if self.root.soft_delete(word.as_ref()) {
                count += 1;
            }
        }
        debug!("Soft-deleted {} words.", count);
    }

    /// Returns whether `word` is currently in the dictionary.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty()
            && self
                .root
                .search(word)
                .map_or(false, |node| node.is_path_end())
    }

    /// Check `text` for dictionary words, stopping at the first one.
    ///
    /// # Example
    /// ```
    /// use sensitive_words::{Trie, Validation};
    ///
    /// let mut trie = Trie::new();
    /// trie.insert(["foo"]);
    ///
    /// assert_eq!(trie.validate("bar"), Validation::Valid);
    /// assert_eq!(trie.validate("foobar").first_match(), Some("foo"));
    /// ```
    #[must_use]
    pub fn validate(&self, text: &str) -> Validation {
        let input = text.chars().collect::<Vec<_>>();
        for event in Walker::new(&self.root, &input) {
            if let Event::Match(pos) = event {
                trace!("Validation failed at {:?}.", pos);
                return Validation::Invalid(slice(&input, pos));
            }
        }
        Validation::Valid
    }

    /// The first dictionary word within `text`, if any.
    #[inline]
    #[must_use]
    pub fn find_in(&self, text: &str) -> Option<String> {
        match self.validate(text) {
            Validation::Valid => None,
            Validation::Invalid(word) => Some(word),
        }
    }

    /// Returns whether `text` contains any dictionary word.
    #[inline]
    #[must_use]
    pub fn check(&self, text: &str) -> bool {
        !self.validate(text).is_valid()
    }

    /// Every distinct dictionary word within `text`, in order of first occurrence.
    ///
    /// At each start position the first word reached is taken, not the longest, and scanning
    /// resumes right after it.
    ///
    /// # Example
    /// ```
    /// use sensitive_words::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert(["ab", "abcd", "x"]);
    ///
    /// assert_eq!(trie.find_all("abcd x ab"), vec!["ab", "x"]);
    /// ```
    #[must_use]
    pub fn find_all(&self, text: &str) -> Vec<String> {
        let input = text.chars().collect::<Vec<_>>();
        let mut walker = Walker::new(&self.root, &input);
        let mut seen = HashSet::new();
        let mut matches = Vec::new();
        while let Some(event) = walker.next() {
            if let Event::Match(pos) = event {
                trace!("Found match at {:?}.", pos);
                let word = slice(&input, pos);
                if seen.insert(word.clone()) {
                    matches.push(word);
                }
                walker.restart_at(pos.end + 1);
            }
        }
        matches
    }

    /// Remove every dictionary word from `text`.
    ///
    /// The result is never longer than `text`.
    #[must_use]
    pub fn filter(&self, text: &str) -> String {
        let input = text.chars().collect::<Vec<_>>();
        let mut walker = Walker::new(&self.root, &input);
        let mut output = String::with_capacity(text.len());
        while let Some(event) = walker.next() {
            match event {
                Event::Miss { left } => output.push(input[left]),
                Event::Match(pos) => {
                    trace!("Filtered match at {:?}.", pos);
                    walker.restart_at(pos.end + 1);
                }
            }
        }
        output.extend(walker.rest());
        output
    }

    /// Overwrite every codepoint of every dictionary word within `text` with `mask`.
    ///
    /// The result has exactly as many codepoints as `text`. Masking happens in place as the scan
    /// proceeds, so a window starting inside an already-masked word reads the mask, not the
    /// original text.
    ///
    /// # Example
    /// ```
    /// use sensitive_words::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert(["abc", "cd"]);
    ///
    /// assert_eq!(trie.replace("abcd", '*'), "***d");
    /// ```
    #[must_use]
    pub fn replace(&self, text: &str, mask: char) -> String {
        let mut walker = Walker::new(&self.root, text.chars().collect::<Vec<_>>());
        while let Some(event) = walker.next() {
            if let Event::Match(pos) = event {
                trace!("Masked match at {:?}.", pos);
                walker.input_mut()[pos.start..=pos.end].fill(mask);
            }
        }
        walker.into_input().into_iter().collect()
    }

    /// [`replace()`](Trie::replace) using the configured mask character.
    #[inline]
    #[must_use]
    pub fn censor(&self, text: &str) -> String {
        self.replace(text, self.options.mask)
    }

    /// Splice a placeholder token in place of each dictionary word within `text`.
    ///
    /// At each start position the first word reached is taken, not the longest. The returned
    /// matches record every replaced word in order, along with its token and span.
    ///
    /// # Example
    /// ```
    /// use sensitive_words::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert(["习近平", "习大大"]);
    ///
    /// let result = trie.placeholder("你好吗 我支持习大大， 他的名字叫做习近平");
    /// assert_eq!(result.text, "你好吗 我支持{{#}}， 他的名字叫做{{#}}");
    /// assert_eq!(result.words().collect::<Vec<_>>(), vec!["习大大", "习近平"]);
    /// ```
    #[must_use]
    pub fn placeholder(&self, text: &str) -> Placeholdered {
        let input = text.chars().collect::<Vec<_>>();
        let mut walker = Walker::new(&self.root, &input);
        let mut result = Placeholdered {
            text: String::with_capacity(text.len()),
            matches: Vec::new(),
        };
        while let Some(event) = walker.next() {
            match event {
                Event::Miss { left } => result.text.push(input[left]),
                Event::Match(pos) => {
                    self.splice(&input, pos, &mut result);
                    walker.restart_at(pos.end + 1);
                }
            }
        }
        result.text.extend(walker.rest());
        result
    }

    /// Splice a placeholder token in place of the longest dictionary word at each position.
    ///
    /// Among words sharing a start position, the longest one wins. Scanning resumes right after
    /// it.
    ///
    /// # Example
    /// ```
    /// use sensitive_words::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert(["我妈", "我妈妈"]);
    ///
    /// let result = trie.placeholder_longest("我妈妈");
    /// assert_eq!(result.text, "{{#}}");
    /// assert_eq!(result.words().collect::<Vec<_>>(), vec!["我妈妈"]);
    /// ```
    #[must_use]
    pub fn placeholder_longest(&self, text: &str) -> Placeholdered {
        let input = text.chars().collect::<Vec<_>>();
        let mut walker = Walker::new(&self.root, &input);
        let mut positions = Vec::new();
        let mut longest: Option<Pos> = None;
        while let Some(event) = walker.next() {
            match event {
                Event::Match(pos) => {
                    if longest.map_or(true, |longest| pos.len() > longest.len()) {
                        longest = Some(pos);
                    }
                }
                Event::Miss { .. } => {
                    // The path died; resume after the longest word it passed through.
                    if let Some(pos) = longest.take() {
                        positions.push(pos);
                        walker.restart_at(pos.end + 1);
                    }
                }
            }
        }
        // Input ended on a path end.
        positions.extend(longest);

        let mut result = Placeholdered {
            text: String::with_capacity(text.len()),
            matches: Vec::with_capacity(positions.len()),
        };
        let mut start = 0;
        for pos in positions {
            result.text.extend(&input[start..pos.start]);
            self.splice(&input, pos, &mut result);
            start = pos.end + 1;
        }
        result.text.extend(&input[start..]);
        result
    }

    /// Append the next placeholder token for the word at `pos` and record the match.
    fn splice(&self, input: &[char], pos: Pos, result: &mut Placeholdered) {
        trace!("Placeholdered match at {:?}.", pos);
        let token = self.options.placeholder.render(result.matches.len());
        result.text.push_str(&token);
        result.matches.push(Match {
            word: slice(input, pos),
            token,
            pos,
        });
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> FromIterator<S> for Trie
where
    S: AsRef<str>,
{
    fn from_iter<I>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut trie = Trie::new();
        trie.insert(words);
        trie
    }
}

#[inline]
fn slice(input: &[char], pos: Pos) -> String {
    input[pos.start..=pos.end].iter().collect()
}

#[cfg(test)]
mod tests {
    use crate::{Placeholder, Pos, Trie, TrieBuilder, Validation};
    use alloc::{borrow::ToOwned, string::String, vec, vec::Vec};

    fn trie(words: &[&str]) -> Trie {
        words.iter().collect()
    }

    #[test]
    fn validate() {
        let trie = trie(&["foo"]);

        assert_eq!(trie.validate("bar"), Validation::Valid);
        assert_eq!(
            trie.validate("a foo b foo"),
            Validation::Invalid("foo".to_owned())
        );
    }

    #[test]
    fn validate_first_word_reached() {
        let trie = trie(&["abc", "ab"]);

        assert_eq!(trie.validate("xabc").first_match(), Some("ab"));
    }

    #[test]
    fn validate_only_partial() {
        let trie = trie(&["foo"]);

        assert!(trie.validate("fo").is_valid());
        assert!(trie.validate("").is_valid());
    }

    #[test]
    fn find_in() {
        let trie = trie(&["foo"]);

        assert_eq!(trie.find_in("xfoo"), Some("foo".to_owned()));
        assert_eq!(trie.find_in("xfo"), None);
    }

    #[test]
    fn check() {
        let trie = trie(&["foo"]);

        assert!(trie.check("foo"));
        assert!(!trie.check("bar"));
    }

    #[test]
    fn contains() {
        let mut trie = trie(&["foo", "foobar"]);
        trie.soft_delete(["foo"]);

        assert!(!trie.contains("foo"));
        assert!(trie.contains("foobar"));
        assert!(!trie.contains("foob"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn insert_empty() {
        let trie = trie(&[""]);

        assert!(trie.root().is_leaf());
        assert!(trie.validate("anything").is_valid());
    }

    #[test]
    fn soft_delete_keeps_longer_words() {
        let mut trie = trie(&["我妈", "我妈妈"]);
        trie.soft_delete(["我妈"]);

        assert!(trie.validate("我妈").is_valid());
        assert_eq!(trie.validate("我妈妈").first_match(), Some("我妈妈"));
    }

    #[test]
    fn soft_delete_absent() {
        let mut trie = trie(&["foo"]);
        trie.soft_delete(["bar", "fo", "fooo", ""]);

        assert!(trie.check("foo"));
    }

    #[test]
    fn find_all() {
        let trie = trie(&["foo", "bar"]);

        assert_eq!(trie.find_all("bar foo bar foo"), vec!["bar", "foo"]);
        assert!(trie.find_all("baz").is_empty());
    }

    #[test]
    fn find_all_first_not_longest() {
        let trie = trie(&["ab", "abc"]);

        assert_eq!(trie.find_all("abc"), vec!["ab"]);
    }

    #[test]
    fn find_all_resumes_after_match() {
        let trie = trie(&["aa"]);

        assert_eq!(trie.find_all("aaa"), vec!["aa"]);
        assert_eq!(trie.find_all("aaaa"), vec!["aa"]);
    }

    #[test]
    fn filter() {
        let trie = trie(&["foo"]);

        assert_eq!(trie.filter("a foo b"), "a  b");
        assert_eq!(trie.filter("fofoo"), "fo");
        assert_eq!(trie.filter(""), "");
    }

    #[test]
    fn filter_non_terminal_tail() {
        let trie = trie(&["foobar"]);

        assert_eq!(trie.filter("xfoob"), "xfoob");
    }

    #[test]
    fn replace() {
        let trie = trie(&["foo"]);

        assert_eq!(trie.replace("a foo b", '*'), "a *** b");
        assert_eq!(trie.replace("fofoo", '#'), "fo###");
    }

    #[test]
    fn replace_extends_past_match() {
        let trie = trie(&["ab", "abcd"]);

        assert_eq!(trie.replace("abcd", '*'), "****");
        assert_eq!(trie.replace("abce", '*'), "**ce");
    }

    #[test]
    fn replace_overlapping() {
        let trie = trie(&["abc", "cd"]);

        assert_eq!(trie.replace("abcd", '*'), "***d");
    }

    #[test]
    fn replace_masked_span_not_rescanned() {
        let trie = trie(&["ab", "bc"]);

        assert_eq!(trie.replace("abc", '*'), "**c");
        assert_eq!(trie.replace("xbc", '*'), "x**");
    }

    #[test]
    fn replace_mask_in_dictionary() {
        let trie = trie(&["ab", "*c"]);

        assert_eq!(trie.replace("abc", '*'), "***");
    }

    #[test]
    fn replace_multibyte() {
        let trie = trie(&["b\u{e3}r"]);

        assert_eq!(trie.replace("x b\u{e3}r", '*'), "x ***");
    }

    #[test]
    fn censor() {
        let trie = TrieBuilder::new().word("foo").build();

        assert_eq!(trie.censor("foo"), "***");
    }

    #[test]
    fn placeholder() {
        let trie = trie(&["习近平", "习大大"]);

        let result = trie.placeholder("你好吗 我支持习大大， 他的名字叫做习近平");
        assert_eq!(result.text, "你好吗 我支持{{#}}， 他的名字叫做{{#}}");
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.matches[0].word, "习大大");
        assert_eq!(result.matches[0].pos, Pos::new(7, 9));
        assert_eq!(result.matches[1].word, "习近平");
        assert_eq!(result.matches[1].pos, Pos::new(18, 20));
        assert_eq!(result.mapping().len(), 1);
        assert_eq!(result.mapping()["{{#}}"], "习近平");
    }

    #[test]
    fn placeholder_first_not_longest() {
        let trie = trie(&["我妈", "我妈妈"]);

        let result = trie.placeholder("我妈妈");
        assert_eq!(result.text, "{{#}}妈");
        assert_eq!(result.words().collect::<Vec<_>>(), vec!["我妈"]);
    }

    #[test]
    fn placeholder_indexed() {
        let trie = TrieBuilder::new()
            .words(&["foo", "bar"])
            .placeholder(Placeholder::indexed("<{}>").unwrap())
            .build();

        let result = trie.placeholder("foo bar foo");
        assert_eq!(result.text, "<0> <1> <2>");
        let mapping = result.mapping();
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping["<0>"], "foo");
        assert_eq!(mapping["<1>"], "bar");
        assert_eq!(mapping["<2>"], "foo");
    }

    #[test]
    fn placeholder_longest() {
        let trie = trie(&["我妈", "我妈妈"]);

        let result = trie.placeholder_longest("我妈妈");
        assert_eq!(result.text, "{{#}}");
        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].word, "我妈妈");
        assert_eq!(result.matches[0].pos, Pos::new(0, 2));
    }

    #[test]
    fn placeholder_longest_path_dies_after_candidate() {
        let trie = trie(&["ab", "abcd"]);

        let result = trie.placeholder_longest("abcx");
        assert_eq!(result.text, "{{#}}cx");
        assert_eq!(result.words().collect::<Vec<_>>(), vec!["ab"]);
    }

    #[test]
    fn placeholder_longest_input_ends_past_candidate() {
        let trie = trie(&["ab", "abcd"]);

        let result = trie.placeholder_longest("xabc");
        assert_eq!(result.text, "x{{#}}c");
        assert_eq!(result.matches[0].pos, Pos::new(1, 2));
    }

    #[test]
    fn placeholder_longest_no_match() {
        let trie = trie(&["foo"]);

        let result = trie.placeholder_longest("fo fo");
        assert_eq!(result.text, "fo fo");
        assert!(result.matches.is_empty());
    }

    #[test]
    fn placeholder_longest_adjacent() {
        let trie = trie(&["a", "ab"]);

        let result = trie.placeholder_longest("abab a");
        assert_eq!(result.text, "{{#}}{{#}} {{#}}");
        assert_eq!(result.words().collect::<Vec<_>>(), vec!["ab", "ab", "a"]);
    }

    #[test]
    fn placeholder_empty() {
        let trie = trie(&["foo"]);

        assert_eq!(trie.placeholder("").text, String::new());
        assert_eq!(trie.placeholder_longest("").text, String::new());
    }
}
