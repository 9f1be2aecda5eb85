//! HTTP adapter for the external scoring/search backend.
//!
//! Uses browser `fetch()` via gloo-net for WASM compatibility. Every
//! request races a fixed timeout so a hung backend cannot leave the UI
//! loading forever.

use async_trait::async_trait;
use futures::future::{select, Either};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;

use companion_core::ports::BackendPort;
use companion_types::{
    analysis::{PapersResponse, ScoreRequest, ScoreResponse},
    CompanionError, Result,
};

/// Fixed backend origin; the original deployment proxies to this address.
pub const DEFAULT_BACKEND_ORIGIN: &str = "http://127.0.0.1:5001";

pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

pub struct HttpBackend {
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn default_origin() -> Self {
        Self::new(DEFAULT_BACKEND_ORIGIN)
    }

    async fn with_timeout<T>(fut: impl Future<Output = Result<T>>) -> Result<T> {
        let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        pin_mut!(fut);
        pin_mut!(timeout);
        match select(fut, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(CompanionError::Timeout(u64::from(REQUEST_TIMEOUT_MS))),
        }
    }
}

/// Map a non-OK response to a `Backend` error carrying the body text.
async fn reject_non_ok(response: &gloo_net::http::Response) -> Result<()> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(CompanionError::Backend { status, message })
}

#[async_trait(?Send)]
impl BackendPort for HttpBackend {
    async fn score_draft(&self, problem: &str, paragraph: &str) -> Result<ScoreResponse> {
        let url = format!("{}/score", self.base_url);
        let body = ScoreRequest {
            problem: problem.to_string(),
            paragraph: paragraph.to_string(),
        };

        Self::with_timeout(async move {
            let response = Request::post(&url)
                .header("Content-Type", "application/json")
                .json(&body)
                .map_err(|e| CompanionError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| CompanionError::Network(e.to_string()))?;

            reject_non_ok(&response).await?;

            response
                .json::<ScoreResponse>()
                .await
                .map_err(|e| CompanionError::Serialization(e.to_string()))
        })
        .await
    }

    async fn search_papers(&self, query: &str) -> Result<PapersResponse> {
        let url = format!("{}/test-papers", self.base_url);
        let query = query.to_string();

        Self::with_timeout(async move {
            let response = Request::get(&url)
                .query([("problem", query.as_str())])
                .send()
                .await
                .map_err(|e| CompanionError::Network(e.to_string()))?;

            reject_non_ok(&response).await?;

            response
                .json::<PapersResponse>()
                .await
                .map_err(|e| CompanionError::Serialization(e.to_string()))
        })
        .await
    }
}
