//! Language detection and candidate-list derivation.
//!
//! The candidate list is computed once per session from the host's
//! preference sources: an explicit stored choice outranks environment
//! preferences, which outrank the configured fallback.

use crate::config::{LoadMode, Options};
use std::collections::HashMap;
use std::fmt;

/// Read-only view of a persistent key-value preference store.
///
/// The core only ever reads one previously saved language choice; writing
/// it back is the host's concern.
pub trait PreferenceStore: Send + Sync {
    /// Fetch the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory [`PreferenceStore`], mainly useful in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// Language preference sources gathered from the host environment.
///
/// Field order reflects detection priority (after the stored choice):
/// the ordered list first, then the legacy single value, then the current
/// single value.
#[derive(Default)]
pub struct Environment {
    /// Ordered preference list, most preferred first.
    pub preferred: Vec<String>,

    /// Legacy single-value preference, consulted after the list.
    pub user_language: Option<String>,

    /// Current single-value preference, consulted last before the
    /// configured fallback.
    pub language: Option<String>,

    /// Store holding an explicit previously saved choice. Consulted first,
    /// and only when the options name a storage key.
    pub store: Option<Box<dyn PreferenceStore>>,
}

impl Environment {
    /// An environment with no preference sources at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Gather preferences from the process environment.
    ///
    /// `LANGUAGE` is a colon-separated priority list; `LC_ALL` (or
    /// `LC_MESSAGES`) and `LANG` each hold a single POSIX locale. Locales
    /// like `de_CH.UTF-8` are mapped to `de-CH`; `C` and `POSIX` are
    /// ignored.
    pub fn from_system() -> Self {
        let preferred = std::env::var("LANGUAGE")
            .map(|list| list.split(':').filter_map(posix_to_tag).collect())
            .unwrap_or_default();

        let user_language = std::env::var("LC_ALL")
            .or_else(|_| std::env::var("LC_MESSAGES"))
            .ok()
            .as_deref()
            .and_then(posix_to_tag);

        let language = std::env::var("LANG").ok().as_deref().and_then(posix_to_tag);

        Self {
            preferred,
            user_language,
            language,
            store: None,
        }
    }

    /// Attach a preference store.
    pub fn with_store(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }
}

/// Map a POSIX locale string (e.g. `de_CH.UTF-8`) to a language tag
/// (`de-CH`).
fn posix_to_tag(raw: &str) -> Option<String> {
    let trimmed = raw.split('.').next().unwrap_or("").trim();
    if trimmed.is_empty() || trimmed == "C" || trimmed == "POSIX" {
        return None;
    }
    Some(trimmed.replace('_', "-"))
}

fn push_unique(codes: &mut Vec<String>, code: &str) {
    if !codes.iter().any(|existing| existing == code) {
        codes.push(code.to_string());
    }
}

/// Collapse raw language tags into the ordered candidate list.
///
/// Each tag is split on its first `-`. A tag without a region subtag
/// contributes its base code. A tag with one contributes the full code and
/// the base code (full code first) under [`LoadMode::All`], or the base
/// code only under [`LoadMode::LanguageOnly`]. The first occurrence of a
/// code fixes its position. A configured allow-list filters the result
/// last, preserving order; filtering everything out is not an error.
pub fn normalize(raw: &[String], options: &Options) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();

    for code in raw {
        match code.split_once('-') {
            Some((base, region)) if !region.is_empty() => {
                if options.load != LoadMode::LanguageOnly {
                    push_unique(&mut codes, code);
                }
                push_unique(&mut codes, base);
            }
            Some((base, _)) => push_unique(&mut codes, base),
            None => push_unique(&mut codes, code),
        }
    }

    if let Some(allowed) = &options.languages {
        codes.retain(|code| allowed.contains(code));
    }

    codes
}

/// Gather raw tags from every preference source in priority order and
/// normalize them into the candidate list.
pub fn detect(options: &Options, environment: &Environment) -> Vec<String> {
    let mut raw: Vec<String> = Vec::new();

    if let (Some(key), Some(store)) = (&options.storage_key, &environment.store) {
        if let Some(saved) = store.get(key) {
            if !saved.is_empty() {
                raw.push(saved);
            }
        }
    }

    raw.extend(environment.preferred.iter().cloned());

    if let Some(legacy) = &environment.user_language {
        raw.push(legacy.clone());
    }
    if let Some(current) = &environment.language {
        raw.push(current.clone());
    }

    raw.push(options.fallback_lng.clone());

    normalize(&raw, options)
}

/// Horizontal text direction for a resolved language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Ltr,
    Rtl,
}

impl Dir {
    /// CSS-style lowercase name (`"ltr"` / `"rtl"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Dir::Ltr => "ltr",
            Dir::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base subtags written right-to-left.
const RTL_LANGUAGES: &[&str] = &[
    "ar", "arc", "ckb", "dv", "fa", "he", "khw", "ks", "ps", "sd", "ug", "ur", "yi",
];

/// Classify a language code by the direction of its base subtag.
///
/// Unknown codes read left-to-right.
pub fn dir_of(code: &str) -> Dir {
    let base = code.split_once('-').map_or(code, |(base, _)| base);
    if RTL_LANGUAGES.contains(&base) {
        Dir::Rtl
    } else {
        Dir::Ltr
    }
}
