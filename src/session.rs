//! The translation session: candidate languages, resolved language, and
//! the per-namespace load state machine.

use crate::config::Options;
use crate::interpolate::{interpolate, Args};
use crate::language::{self, Dir, Environment};
use crate::loader::{self, CandidateFailure};
use crate::tree::TranslationTree;
use futures::future::{BoxFuture, FutureExt, Shared};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use tracing::warn;

type SharedLoad = Shared<BoxFuture<'static, ()>>;

/// Load state of one namespace. Once a namespace leaves the map's "absent"
/// state it only ever moves forward: `Loading` to `Loaded` or `NotFound`,
/// never back.
enum NamespaceState {
    /// A load attempt is running; further callers attach to it.
    Loading(SharedLoad),
    /// The bundle that satisfied the load.
    Loaded(Arc<TranslationTree>),
    /// Every candidate language failed. Terminal; never retried.
    NotFound(Arc<Vec<CandidateFailure>>),
}

/// Observed state of a namespace, as returned by [`I18n::namespace`].
#[derive(Debug, Clone)]
pub enum NamespaceStatus {
    /// A load attempt is still in flight.
    Loading,
    /// Bundle data, in the language that satisfied the load.
    Loaded(Arc<TranslationTree>),
    /// The load exhausted every candidate language; the per-candidate
    /// reasons are kept for diagnostics.
    NotFound(Arc<Vec<CandidateFailure>>),
}

/// A translation session.
///
/// Owns the configuration, the candidate language list computed at
/// construction, the language that most recently satisfied a load, and the
/// namespace cache. Cheap to clone; clones share state. Multiple
/// independent sessions can coexist in one process.
#[derive(Clone)]
pub struct I18n {
    inner: Arc<Inner>,
}

struct Inner {
    options: Options,
    client: reqwest::Client,
    languages: Vec<String>,
    language: RwLock<String>,
    namespaces: Mutex<HashMap<String, NamespaceState>>,
}

impl I18n {
    /// Create a session and start preloading the configured namespaces.
    ///
    /// The candidate language list is computed once, here; the resolved
    /// language starts as the configured fallback. Preloads of the default
    /// namespace and every `ns` entry are spawned, not awaited — call
    /// [`I18n::load`] to wait for a namespace. Must be called from within a
    /// Tokio runtime.
    pub fn new(options: Options, environment: &Environment) -> Self {
        let languages = language::detect(&options, environment);

        let session = I18n {
            inner: Arc::new(Inner {
                language: RwLock::new(options.fallback_lng.clone()),
                client: reqwest::Client::new(),
                languages,
                options,
                namespaces: Mutex::new(HashMap::new()),
            }),
        };

        let preload: Vec<String> = std::iter::once(&session.inner.options.default_ns)
            .chain(session.inner.options.ns.iter())
            .filter(|namespace| !namespace.is_empty())
            .cloned()
            .collect();
        for namespace in preload {
            tokio::spawn(session.load_shared(&namespace));
        }

        session
    }

    /// Load a namespace.
    ///
    /// Idempotent per namespace: callers racing an in-flight attempt attach
    /// to it, and a namespace that already reached a terminal state resolves
    /// immediately. One fetch sequence per namespace per session, ever.
    pub async fn load(&self, namespace: &str) {
        self.load_shared(namespace).await
    }

    fn load_shared(&self, namespace: &str) -> SharedLoad {
        let mut namespaces = self.inner.namespaces.lock().expect("namespace map lock");

        match namespaces.get(namespace) {
            Some(NamespaceState::Loading(pending)) => pending.clone(),
            Some(_) => futures::future::ready(()).boxed().shared(),
            None => {
                let load = Arc::clone(&self.inner)
                    .run_load(namespace.to_string())
                    .boxed()
                    .shared();
                namespaces.insert(
                    namespace.to_string(),
                    NamespaceState::Loading(load.clone()),
                );
                load
            }
        }
    }

    /// Resolve a lookup key to display text.
    ///
    /// Never blocks and never fails. A key that cannot be resolved — its
    /// namespace absent, still loading, or exhausted; a missing path; a
    /// non-leaf landing — comes back verbatim, prefix included.
    pub fn t(&self, key: &str, args: &Args) -> String {
        if key.is_empty() {
            return String::new();
        }

        let (namespace, path) = match key.split_once(':') {
            Some((explicit, rest)) => (explicit, rest),
            None => (self.inner.options.default_ns.as_str(), key),
        };

        let tree = {
            let namespaces = self.inner.namespaces.lock().expect("namespace map lock");
            match namespaces.get(namespace) {
                Some(NamespaceState::Loaded(tree)) => Some(Arc::clone(tree)),
                _ => None,
            }
        };

        match tree.as_deref().and_then(|tree| tree.resolve(path)) {
            Some(template) => interpolate(template, args),
            None => key.to_string(),
        }
    }

    /// The configuration this session was created with.
    pub fn options(&self) -> &Options {
        &self.inner.options
    }

    /// The ordered candidate language list computed at construction.
    pub fn languages(&self) -> &[String] {
        &self.inner.languages
    }

    /// The language that most recently satisfied a load, or the configured
    /// fallback before any load succeeded.
    pub fn language(&self) -> String {
        self.inner.language.read().expect("language lock").clone()
    }

    /// Text direction of the current language's base subtag.
    pub fn dir(&self) -> Dir {
        language::dir_of(&self.language())
    }

    /// Observed state of a namespace, or `None` if it was never requested.
    pub fn namespace(&self, name: &str) -> Option<NamespaceStatus> {
        let namespaces = self.inner.namespaces.lock().expect("namespace map lock");
        namespaces.get(name).map(|state| match state {
            NamespaceState::Loading(_) => NamespaceStatus::Loading,
            NamespaceState::Loaded(tree) => NamespaceStatus::Loaded(Arc::clone(tree)),
            NamespaceState::NotFound(failures) => NamespaceStatus::NotFound(Arc::clone(failures)),
        })
    }
}

impl Inner {
    async fn run_load(self: Arc<Self>, namespace: String) {
        match loader::fetch_namespace(&self.client, &self.options, &self.languages, &namespace)
            .await
        {
            Ok((language, tree)) => {
                let mut namespaces = self.namespaces.lock().expect("namespace map lock");
                namespaces.insert(namespace, NamespaceState::Loaded(Arc::new(tree)));
                *self.language.write().expect("language lock") = language;
            }
            Err(failures) => {
                warn!(
                    "no bundle found for namespace '{}' after trying {} candidate language(s)",
                    namespace,
                    failures.len()
                );
                let mut namespaces = self.namespaces.lock().expect("namespace map lock");
                namespaces.insert(namespace, NamespaceState::NotFound(Arc::new(failures)));
            }
        }
    }
}
