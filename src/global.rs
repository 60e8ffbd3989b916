//! Process-wide session facade.
//!
//! Mirrors the session API as free functions over one shared session, for
//! hosts that want a single process-wide translator. Re-initializing
//! replaces the previous session wholesale; nothing is merged. This module
//! is the only home of [`Error::Uninitialized`] — sessions created
//! directly via [`I18n::new`] cannot be used before they are configured.

use crate::config::Options;
use crate::error::Error;
use crate::interpolate::Args;
use crate::language::{Dir, Environment};
use crate::session::{I18n, NamespaceStatus};
use std::sync::RwLock;

static SESSION: RwLock<Option<I18n>> = RwLock::new(None);

fn current() -> Result<I18n, Error> {
    SESSION
        .read()
        .expect("session lock")
        .clone()
        .ok_or(Error::Uninitialized)
}

/// Create the process-wide session from the system environment.
///
/// Calling this again replaces the previous session. Must be called from
/// within a Tokio runtime. The session is also returned for hosts that
/// want to hold it directly.
pub fn init(options: Options) -> I18n {
    init_with(options, &Environment::from_system())
}

/// Create the process-wide session from explicit preference sources.
pub fn init_with(options: Options, environment: &Environment) -> I18n {
    let session = I18n::new(options, environment);
    *SESSION.write().expect("session lock") = Some(session.clone());
    session
}

/// Load a namespace on the process-wide session.
pub async fn load(namespace: &str) -> Result<(), Error> {
    current()?.load(namespace).await;
    Ok(())
}

/// Resolve a lookup key on the process-wide session.
pub fn t(key: &str, args: &Args) -> Result<String, Error> {
    Ok(current()?.t(key, args))
}

/// Configuration of the process-wide session.
pub fn options() -> Result<Options, Error> {
    Ok(current()?.options().clone())
}

/// Language that most recently satisfied a load on the process-wide
/// session.
pub fn language() -> Result<String, Error> {
    Ok(current()?.language())
}

/// Text direction of the process-wide session's current language.
pub fn dir() -> Result<Dir, Error> {
    Ok(current()?.dir())
}

/// Observed state of a namespace on the process-wide session.
pub fn namespace(name: &str) -> Result<Option<NamespaceStatus>, Error> {
    Ok(current()?.namespace(name))
}
