//! Fetches `config.json` from the page origin with a bounded timeout.

use futures::future::{Either, select};
use terraroll_core::{ConfigLoadError, ConfigStore};

use crate::dom;

/// Relative URL of the configuration document.
pub const CONFIG_URL: &str = "config.json";

/// Upper bound on the configuration fetch.
pub const CONFIG_FETCH_TIMEOUT_MS: u32 = 10_000;

/// Map an HTTP status to a load failure; `None` for success statuses.
#[must_use]
pub fn classify_status(url: &str, status: u16, status_text: &str) -> Option<ConfigLoadError> {
    match status {
        200..=299 => None,
        404 => Some(ConfigLoadError::NotFound(url.to_string())),
        _ => Some(ConfigLoadError::Network(format!(
            "HTTP {status}: {status_text}"
        ))),
    }
}

#[allow(clippy::future_not_send)]
async fn fetch_document(url: &str) -> Result<String, ConfigLoadError> {
    let response = dom::fetch_response(url)
        .await
        .map_err(|err| ConfigLoadError::Network(dom::js_error_message(&err)))?;

    if let Some(err) = classify_status(url, response.status(), &response.status_text()) {
        return Err(err);
    }

    dom::response_text(&response)
        .await
        .map_err(|err| ConfigLoadError::Network(dom::js_error_message(&err)))
}

/// Fetch and parse the configuration, failing with
/// [`ConfigLoadError::Timeout`] if it takes longer than `timeout_ms`.
///
/// # Errors
///
/// Returns a [`ConfigLoadError`] for missing documents, transport failures,
/// malformed JSON, or an expired timeout.
#[allow(clippy::future_not_send)]
pub async fn load_config(url: &str, timeout_ms: u32) -> Result<ConfigStore, ConfigLoadError> {
    let fetch = Box::pin(fetch_document(url));
    let timer = Box::pin(dom::sleep_ms(
        i32::try_from(timeout_ms).unwrap_or(i32::MAX),
    ));

    let document = match select(fetch, timer).await {
        Either::Left((document, _)) => document?,
        Either::Right((Ok(()), _)) => return Err(ConfigLoadError::Timeout { millis: timeout_ms }),
        Either::Right((Err(err), fetch)) => {
            log::warn!(
                "config timeout could not be scheduled: {}",
                dom::js_error_message(&err)
            );
            fetch.await?
        }
    };
    ConfigStore::from_json(&document)
}
