//! Lazily fetched, namespaced translation bundles with language fallback.
//!
//! Display text lives in per-language JSON bundles ("namespaces") served
//! over HTTP. A session derives an ordered candidate language list from the
//! host's preference sources, fetches each namespace lazily by walking that
//! list, and resolves dotted lookup keys against the loaded data with
//! `{{name}}` placeholder interpolation. Anything that cannot be resolved
//! degrades to the raw key instead of failing — display text must never
//! take the host down.
//!
//! # Architecture
//!
//! - `interpolate`: `{{name}}` substitution for strings and bundle URLs
//! - `tree`: typed translation tree and the dotted-path walk
//! - `language`: preference sources, candidate-list derivation, direction
//! - `loader`: per-language bundle fetching with silent fallback
//! - `session`: the `I18n` session object and namespace state machine
//! - `global`: process-wide facade over a single shared session
//!
//! # Example
//!
//! ```rust,ignore
//! use phrasebook::{Args, Environment, Options};
//!
//! let options: Options = serde_json::from_str(config_json)?;
//! let session = phrasebook::init_with(options, &Environment::from_system());
//!
//! session.load("app").await;
//! let text = session.t("menu.file.open", &Args::none());
//! ```

mod config;
mod error;
mod global;
mod interpolate;
mod language;
mod loader;
mod session;
mod tree;

pub use config::{LoadMode, Options};
pub use error::Error;
pub use global::{dir, init, init_with, language, load, namespace, options, t};
pub use interpolate::{interpolate, Args};
pub use language::{Dir, Environment, MemoryStore, PreferenceStore};
pub use loader::{CandidateFailure, FetchError};
pub use session::{I18n, NamespaceStatus};
pub use tree::TranslationTree;
