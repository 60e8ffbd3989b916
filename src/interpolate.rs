//! `{{name}}` placeholder substitution.
//!
//! Used both for resolved translation strings and for building namespace
//! bundle URLs from the configured load path template.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

// Placeholder pattern (cached for performance)
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Values supplied to a lookup or template.
///
/// Mirrors the two call shapes of a translation lookup: a set of named
/// values, or a plain argument list addressed by position (`{{0}}`,
/// `{{1}}`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Args {
    /// No values; every placeholder is left verbatim.
    #[default]
    None,
    /// Values addressed by placeholder name.
    Named(HashMap<String, String>),
    /// Values addressed by decimal position.
    Positional(Vec<String>),
}

impl Args {
    /// No values.
    pub fn none() -> Self {
        Args::None
    }

    /// Build named values from `(name, value)` pairs.
    pub fn named<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Args::Named(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Build positional values addressed as `{{0}}`, `{{1}}`, ...
    pub fn positional<V, I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        Args::Positional(values.into_iter().map(Into::into).collect())
    }

    fn get(&self, name: &str) -> Option<&str> {
        match self {
            Args::None => None,
            Args::Named(values) => values.get(name).map(String::as_str),
            Args::Positional(values) => name
                .parse::<usize>()
                .ok()
                .and_then(|index| values.get(index))
                .map(String::as_str),
        }
    }
}

/// Replace every `{{name}}` placeholder in `template` with its value.
///
/// A placeholder whose name has no value in `args` is left verbatim in the
/// output; there is no error and no blank substitution.
pub fn interpolate(template: &str, args: &Args) -> String {
    let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{\{(\w+)\}\}").unwrap());

    regex
        .replace_all(template, |caps: &Captures<'_>| match args.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}
