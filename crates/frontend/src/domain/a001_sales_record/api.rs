//! HTTP access to `/api/sales`.

use crate::shared::api_utils::with_query;
use crate::shared::config::ApiConfig;
use contracts::domain::a001_sales_record::{SalesPage, SalesQuery};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde_json::Value;
use thiserror::Error;
use web_sys::AbortController;

/// A failed page load. Whatever the cause, the list keeps its previous rows
/// and shows [`FetchError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with HTTP {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("request timed out")]
    Timeout,
}

impl FetchError {
    pub fn user_message(&self) -> String {
        format!("Failed to load data: {}", self)
    }
}

/// Full request URL for one page.
pub fn request_url(config: &ApiConfig, request: &SalesQuery) -> String {
    with_query(&config.sales_url(), &request.query_pairs())
}

/// Loads one page of sales.
///
/// The request is aborted after `config.timeout_ms`; an abort is reported as
/// [`FetchError::Timeout`].
pub async fn fetch_sales(
    config: &ApiConfig,
    request: &SalesQuery,
) -> Result<SalesPage, FetchError> {
    let url = request_url(config, request);
    log::debug!("GET {}", url);

    let controller = AbortController::new().map_err(|e| FetchError::Network(format!("{e:?}")))?;
    let signal = controller.signal();
    // Dropping the handle clears the timer, so it lives until the body is read
    let _deadline = Timeout::new(config.timeout_ms, move || controller.abort());

    let timed_out_or = |fallback: FetchError| {
        if signal.aborted() {
            FetchError::Timeout
        } else {
            fallback
        }
    };

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .abort_signal(Some(&signal))
        .send()
        .await
        .map_err(|e| timed_out_or(FetchError::Network(e.to_string())))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| timed_out_or(FetchError::Malformed(e.to_string())))?;

    SalesPage::from_value(body).map_err(|e| FetchError::Malformed(e.to_string()))
}
