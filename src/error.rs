use thiserror::Error;

/// Errors surfaced by the process-wide facade.
///
/// Everything else in this crate degrades instead of failing: a lookup that
/// cannot be resolved returns the raw key, and a namespace whose load
/// exhausted every candidate language is recorded as a sentinel, not an
/// error.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation that needs configuration ran before [`init`](crate::init).
    #[error("not initialized")]
    Uninitialized,
}
