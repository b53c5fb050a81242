//! Cache Key Module
//!
//! Builds deterministic keys from request parameters, e.g. `posts:page1`
//! or `favicon:example.com`.

use std::fmt;

/// Separator placed between key segments.
pub const KEY_SEPARATOR: char = ':';

// == Cache Key ==
/// Composite cache key. The same segments always produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Starts a key with a namespace such as `posts` or `oauth_url`.
    pub fn new(namespace: impl AsRef<str>) -> Self {
        Self(namespace.as_ref().to_string())
    }

    /// Appends a segment. Empty segments are kept so that `("a", "")` and
    /// `("a",)` stay distinct.
    pub fn segment(mut self, part: impl fmt::Display) -> Self {
        self.0.push(KEY_SEPARATOR);
        self.0.push_str(&part.to_string());
        self
    }

    /// Builds a key from a namespace and a sequence of parameters.
    pub fn compose<I, T>(namespace: impl AsRef<str>, parts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        parts
            .into_iter()
            .fold(Self::new(namespace), |key, part| key.segment(part))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.0
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
