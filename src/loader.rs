//! Namespace bundle fetching.
//!
//! One load attempt walks the candidate language list in order and stops at
//! the first language whose bundle fetches and parses. Per-candidate
//! failures are routine and only logged at debug level; the collected
//! reasons travel back to the caller so exhaustion can record them.

use crate::config::Options;
use crate::interpolate::{interpolate, Args};
use crate::tree::TranslationTree;
use thiserror::Error;
use tracing::debug;

/// Why one candidate language failed to produce a bundle.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// The body was not a translation tree.
    #[error("invalid bundle: {0}")]
    Parse(#[source] reqwest::Error),
}

/// A failed attempt for a single candidate language.
#[derive(Debug)]
pub struct CandidateFailure {
    /// The language that was tried.
    pub language: String,
    /// What went wrong for it.
    pub error: FetchError,
}

/// Try each candidate language in order; return the first bundle found
/// together with the language that satisfied it.
///
/// On exhaustion the full failure list is handed back so the caller can
/// keep it with the namespace's terminal state.
pub(crate) async fn fetch_namespace(
    client: &reqwest::Client,
    options: &Options,
    languages: &[String],
    namespace: &str,
) -> Result<(String, TranslationTree), Vec<CandidateFailure>> {
    let mut failures = Vec::new();

    for language in languages {
        let url = interpolate(
            &options.load_path,
            &Args::named([("lng", language.as_str()), ("ns", namespace)]),
        );

        match fetch_bundle(client, &url).await {
            Ok(tree) => return Ok((language.clone(), tree)),
            Err(error) => {
                debug!(
                    "namespace '{}': no bundle for language '{}' ({})",
                    namespace, language, error
                );
                failures.push(CandidateFailure {
                    language: language.clone(),
                    error,
                });
            }
        }
    }

    Err(failures)
}

async fn fetch_bundle(client: &reqwest::Client, url: &str) -> Result<TranslationTree, FetchError> {
    let response = client.get(url).send().await.map_err(FetchError::Request)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    response
        .json::<TranslationTree>()
        .await
        .map_err(FetchError::Parse)
}
