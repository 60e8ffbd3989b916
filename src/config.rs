use serde::{Deserialize, Serialize};

/// Which candidate codes a tag with a region subtag contributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadMode {
    /// Both the full code and its base subtag, full code first.
    #[default]
    All,
    /// The base subtag only.
    LanguageOnly,
}

/// Configuration for a translation session.
///
/// Set once when the session is created and immutable afterwards. The serde
/// names match the camel-cased option object most hosts keep this
/// configuration in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Namespaces to preload in addition to the default one.
    #[serde(default)]
    pub ns: Vec<String>,

    /// Namespace used when a lookup key carries no `namespace:` prefix.
    #[serde(rename = "defaultNS")]
    pub default_ns: String,

    /// Language tried when no other candidate matches.
    pub fallback_lng: String,

    /// Candidate derivation mode.
    #[serde(default)]
    pub load: LoadMode,

    /// URL template for namespace bundles. Must contain the `{{lng}}` and
    /// `{{ns}}` placeholders.
    pub load_path: String,

    /// Key under which an explicit language choice was saved in the host's
    /// preference store.
    #[serde(default, rename = "localStorageKey")]
    pub storage_key: Option<String>,

    /// Allow-list restricting which candidate codes survive detection.
    #[serde(default)]
    pub languages: Option<Vec<String>>,
}
