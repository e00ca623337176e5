//! Scope selector matching.
//!
//! The cascade only needs to know *whether* a selector applies to a scope
//! and *how specifically*. That question is answered by a [`ScopeMatcher`];
//! editors usually plug in their full selector engine here.
//!
//! [`PathMatcher`] is a small implementation of the common subset:
//!
//! - A selector is a comma-separated list of alternatives.
//! - Each alternative is a space-separated path of dotted prefixes that must
//!   match scope atoms in order, outermost first (descendant semantics).
//! - A prefix matches an atom when it equals the atom or stops at one of the
//!   atom's dots (`string` matches `string.quoted` but not `strings`).
//! - The empty selector matches every scope with rank `0`.
//!
//! Deeper matches and longer prefixes rank higher.

use crate::scope::{Scope, ScopeSelector};

/// Tests selectors against scopes.
pub trait ScopeMatcher: Send + Sync {
    /// Returns the specificity rank of `selector` for `scope`, or `None`
    /// when the selector does not apply. Higher ranks are more specific.
    fn rank(&self, selector: &ScopeSelector, scope: &Scope) -> Option<f64>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PathMatcher;

impl ScopeMatcher for PathMatcher {
    fn rank(&self, selector: &ScopeSelector, scope: &Scope) -> Option<f64> {
        if selector.is_root() {
            return Some(0.0);
        }

        let atoms: Vec<&str> = scope.atoms().collect();
        selector
            .as_str()
            .split(',')
            .filter_map(|path| rank_path(path, &atoms))
            .max_by(f64::total_cmp)
    }
}

/// Ranks one selector path against the scope atoms.
///
/// Matching runs right to left so that every prefix lands on the deepest
/// atom still available, which both decides the match and maximizes rank.
fn rank_path(path: &str, atoms: &[&str]) -> Option<f64> {
    let mut prefixes = path.split_whitespace().rev().peekable();
    prefixes.peek()?;

    let mut end = atoms.len();
    let mut rank = 0.0;
    for prefix in prefixes {
        let (index, components) = atoms[..end]
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, atom)| prefix_components(prefix, atom).map(|c| (index, c)))?;

        rank += ((index + 1) * 100 + components) as f64;
        end = index;
    }
    Some(rank)
}

/// Number of dotted components `prefix` matches in `atom`, if it matches.
fn prefix_components(prefix: &str, atom: &str) -> Option<usize> {
    let rest = atom.strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with('.') {
        Some(prefix.split('.').count())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(selector: &str, scope: &str) -> Option<f64> {
        PathMatcher.rank(&ScopeSelector::new(selector), &Scope::new(scope))
    }

    #[test]
    fn test_root_matches_everything() {
        assert_eq!(rank("", "source.python"), Some(0.0));
        assert_eq!(rank("   ", "text.plain"), Some(0.0));
    }

    #[test]
    fn test_prefix_on_dot_boundary() {
        assert!(rank("string", "source.python string.quoted").is_some());
        assert!(rank("string.quoted", "source.python string.quoted.double").is_some());
        assert!(rank("str", "source.python string.quoted").is_none());
        assert!(rank("strings", "source.python string.quoted").is_none());
    }

    #[test]
    fn test_longer_prefix_ranks_higher() {
        let short = rank("string", "source string.quoted.double").unwrap();
        let long = rank("string.quoted", "source string.quoted.double").unwrap();
        assert!(long > short);
    }

    #[test]
    fn test_deeper_atom_ranks_higher() {
        let outer = rank("source", "source.python string.quoted").unwrap();
        let inner = rank("string", "source.python string.quoted").unwrap();
        assert!(inner > outer);
    }

    #[test]
    fn test_descendant_path() {
        assert!(rank("source string", "source.python meta.call string.quoted").is_some());
        assert!(rank("string source", "source.python string.quoted").is_none());

        let single = rank("string", "source.python string.quoted").unwrap();
        let path = rank("source string", "source.python string.quoted").unwrap();
        assert!(path > single);
    }

    #[test]
    fn test_alternatives_take_best() {
        let best = rank("comment, string.quoted", "source string.quoted").unwrap();
        assert_eq!(best, rank("string.quoted", "source string.quoted").unwrap());
        assert!(rank("comment, keyword", "source string.quoted").is_none());
    }

    #[test]
    fn test_single_atom_scope() {
        assert!(rank("source.python", "source.python.string").is_some());
        assert!(rank("deco.invisible", "deco.invisible").is_some());
    }
}
