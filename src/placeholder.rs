//! Placeholder tokens and the match records produced alongside placeholdered text.
//!
//! A [`Placeholder`] defines what is spliced into the output in place of a matched span. The
//! default, [`Placeholder::fixed("{{#}}")`](Placeholder::fixed), renders the same literal token for
//! every match. Since every occurrence then has the same token, the token-to-word
//! [`mapping()`](Placeholdered::mapping) collides as soon as more than one word is matched; the
//! ordered [`matches`](Placeholdered::matches) are the authoritative record.
//!
//! An indexed placeholder renders a distinct token per match instead:
//!
//! ```
//! use sensitive_words::{Placeholder, TrieBuilder};
//!
//! let trie = TrieBuilder::new()
//!     .words(&["习近平", "习大大"])
//!     .placeholder(Placeholder::indexed("<<||#|{}|-|=>>").unwrap())
//!     .build();
//!
//! let result = trie.placeholder("你好吗 我支持习大大， 他的名字叫做习近平");
//! assert_eq!(result.text, "你好吗 我支持<<||#|0|-|=>>， 他的名字叫做<<||#|1|-|=>>");
//! assert_eq!(result.mapping().len(), 2);
//! ```

use crate::error::Error;
use alloc::{
    borrow::ToOwned,
    string::{String, ToString},
    vec::Vec,
};
use hashbrown::HashMap;

/// The slot within an indexed template that is replaced by the match index.
const INDEX_SLOT: &str = "{}";

/// An inclusive span of codepoint offsets within a specific input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub start: usize,
    pub end: usize,
}

impl Pos {
    #[inline]
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of codepoints covered by the span.
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.end.saturating_add(1).saturating_sub(self.start)
    }
}

/// How placeholder tokens are rendered.
///
/// Only constructible through [`fixed()`](Placeholder::fixed) and
/// [`indexed()`](Placeholder::indexed), so every `Placeholder` renders a non-empty token. With the
/// `serde` feature, it is deserialized from `{"Fixed": token}` or `{"Indexed": template}` and
/// validated the same way.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Config", into = "Config")
)]
pub struct Placeholder(Kind);

#[derive(Clone, Debug, PartialEq, Eq)]
enum Kind {
    /// The same literal token for every match.
    Fixed(String),
    /// A token per match, built as `prefix`, the zero-based match index, then `suffix`.
    Indexed { prefix: String, suffix: String },
}

impl Placeholder {
    /// Creates a placeholder rendering `token` for every match.
    ///
    /// Returns an error if `token` is empty, since splicing it would silently drop the match.
    pub fn fixed(token: &str) -> Result<Self, Error> {
        if token.is_empty() {
            return Err(Error::EmptyPlaceholder);
        }
        Ok(Self(Kind::Fixed(token.to_owned())))
    }

    /// Creates a placeholder from a template containing exactly one `{}` slot.
    ///
    /// The slot is replaced by the match's index within the text being rewritten.
    pub fn indexed(template: &str) -> Result<Self, Error> {
        let mut parts = template.split(INDEX_SLOT);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(prefix), Some(suffix), None) => Ok(Self(Kind::Indexed {
                prefix: prefix.to_owned(),
                suffix: suffix.to_owned(),
            })),
            _ => Err(Error::InvalidTemplate(template.to_owned())),
        }
    }

    /// Returns whether every match renders the same token.
    #[inline]
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self.0, Kind::Fixed(_))
    }

    /// Render the token for the match at `index`.
    #[must_use]
    pub fn render(&self, index: usize) -> String {
        match &self.0 {
            Kind::Fixed(token) => token.clone(),
            Kind::Indexed { prefix, suffix } => {
                let mut token = prefix.clone();
                token.push_str(&index.to_string());
                token.push_str(suffix);
                token
            }
        }
    }
}

impl Default for Placeholder {
    fn default() -> Self {
        Self(Kind::Fixed("{{#}}".to_owned()))
    }
}

/// Serialized form of a [`Placeholder`]; indexed placeholders are stored as their template.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
enum Config {
    Fixed(String),
    Indexed(String),
}

#[cfg(feature = "serde")]
impl core::convert::TryFrom<Config> for Placeholder {
    type Error = Error;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        match config {
            Config::Fixed(token) => Placeholder::fixed(&token),
            Config::Indexed(template) => Placeholder::indexed(&template),
        }
    }
}

#[cfg(feature = "serde")]
impl From<Placeholder> for Config {
    fn from(placeholder: Placeholder) -> Self {
        match placeholder.0 {
            Kind::Fixed(token) => Config::Fixed(token),
            Kind::Indexed { prefix, suffix } => Config::Indexed(prefix + INDEX_SLOT + &suffix),
        }
    }
}

/// A single matched word within placeholdered text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    /// The matched dictionary word, as it appeared in the input.
    pub word: String,
    /// The token spliced into the output in its place.
    pub token: String,
    /// The span of the word within the input.
    pub pos: Pos,
}

/// Output of the placeholder scans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Placeholdered {
    /// The rewritten text.
    pub text: String,
    /// Every match, in input order.
    pub matches: Vec<Match>,
}

impl Placeholdered {
    /// Matched words, in input order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(|m| m.word.as_str())
    }

    /// Mapping from token to matched word.
    ///
    /// With a fixed placeholder every token is identical, so later matches overwrite earlier ones
    /// and the result holds at most one entry.
    #[must_use]
    pub fn mapping(&self) -> HashMap<String, String> {
        self.matches
            .iter()
            .map(|m| (m.token.clone(), m.word.clone()))
            .collect()
    }
}
