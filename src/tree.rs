//! Translation data as a typed tree.

use serde::Deserialize;
use std::collections::HashMap;

/// A namespace's translation data.
///
/// Bundles arrive as JSON objects nesting string leaves at dotted paths.
/// Anything else in a bundle (arrays, numbers, null) fails deserialization,
/// which the loader treats like any other unusable candidate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TranslationTree {
    /// A translatable string, possibly containing `{{name}}` placeholders.
    Leaf(String),
    /// Nested translations keyed by path segment.
    Node(HashMap<String, TranslationTree>),
}

impl TranslationTree {
    /// Walk a dotted path to a string leaf.
    ///
    /// Returns `None` when a segment is missing, a leaf shows up mid-path,
    /// or the walk ends on a non-leaf node. An empty segment ends the walk
    /// at the current node.
    pub fn resolve(&self, path: &str) -> Option<&str> {
        let mut node = self;

        for segment in path.split('.') {
            if segment.is_empty() {
                break;
            }
            match node {
                TranslationTree::Node(children) => node = children.get(segment)?,
                TranslationTree::Leaf(_) => return None,
            }
        }

        match node {
            TranslationTree::Leaf(text) => Some(text),
            TranslationTree::Node(_) => None,
        }
    }
}
