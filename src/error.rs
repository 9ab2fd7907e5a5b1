//! Errors raised while configuring a [`Trie`].
//!
//! Scanning and dictionary mutation never fail; only configuration values are validated.
//!
//! [`Trie`]: crate::Trie

use alloc::string::String;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("placeholder token must not be empty")]
    EmptyPlaceholder,

    #[error("placeholder template '{0}' must contain exactly one '{{}}' slot")]
    InvalidTemplate(String),
}
