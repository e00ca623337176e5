//! Scope and selector text.
//!
//! A [`Scope`] names the syntactic context of a piece of text. It is a
//! space-separated path of dotted atoms, outermost first, e.g.
//! `source.python string.quoted.double`. A [`ScopeSelector`] is the pattern a
//! style rule is bound to; how it is matched against scopes is left to a
//! [`ScopeMatcher`](crate::ScopeMatcher).

use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scope(String);

impl Scope {
    pub fn new(scope: impl Into<String>) -> Self {
        Self(scope.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The dotted atoms of this scope, outermost first.
    pub fn atoms(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms().next().is_none()
    }
}

impl From<&str> for Scope {
    fn from(scope: &str) -> Self {
        Self::new(scope)
    }
}

impl From<String> for Scope {
    fn from(scope: String) -> Self {
        Self(scope)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Selector text. The empty selector is the root selector and applies to
/// every scope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScopeSelector(String);

impl ScopeSelector {
    pub fn new(selector: impl Into<String>) -> Self {
        Self(selector.into())
    }

    pub fn root() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for ScopeSelector {
    fn from(selector: &str) -> Self {
        Self::new(selector)
    }
}

impl From<String> for ScopeSelector {
    fn from(selector: String) -> Self {
        Self(selector)
    }
}

impl fmt::Display for ScopeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
