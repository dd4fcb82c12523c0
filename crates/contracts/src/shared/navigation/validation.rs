//! Opt-in structural checks for an authored navigation tree.
//!
//! Derivation never calls these; the shell runs them once at startup and
//! logs what it finds.

use super::types::NavigationEntry;
use std::collections::HashSet;
use thiserror::Error;

/// Maximum nesting: top-level sections plus one level of sub-sections.
pub const MAX_DEPTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("leaf entry '{path}' has neither a component nor a redirect")]
    MissingTarget { path: String },

    #[error("leaf entry '{path}' has both a component and a redirect")]
    AmbiguousTarget { path: String },

    #[error("path '{path}' appears more than once among its siblings")]
    DuplicatePath { path: String },

    #[error("entry '{path}' is nested deeper than {max} levels")]
    TooDeep { path: String, max: usize },

    #[error("path '{path}' is not absolute")]
    RelativePath { path: String },
}

/// Checks every entry of the tree and returns the first violation.
pub fn validate_tree<V>(entries: &[NavigationEntry<V>]) -> Result<(), NavigationError> {
    validate_level(entries, 1)
}

fn validate_level<V>(entries: &[NavigationEntry<V>], depth: usize) -> Result<(), NavigationError> {
    let mut seen = HashSet::new();

    for entry in entries {
        let path = entry.path.clone();

        if !entry.path.starts_with('/') {
            return Err(NavigationError::RelativePath { path });
        }
        if depth > MAX_DEPTH {
            return Err(NavigationError::TooDeep { path, max: MAX_DEPTH });
        }
        if !seen.insert(entry.path.as_str()) {
            return Err(NavigationError::DuplicatePath { path });
        }

        match &entry.children {
            Some(children) => validate_level(children, depth + 1)?,
            None => match (&entry.component, &entry.redirect) {
                (None, None) => return Err(NavigationError::MissingTarget { path }),
                (Some(_), Some(_)) => return Err(NavigationError::AmbiguousTarget { path }),
                _ => {}
            },
        }
    }

    Ok(())
}
