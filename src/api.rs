//! Homework status API client
//!
//! Thin wrapper over a shared [`reqwest::Client`] that performs the single
//! request this bot ever makes: `GET <endpoint>?from_date=<cursor>` with an
//! `Authorization: OAuth <token>` header. The body is decoded as loose JSON;
//! shape checks live in [`crate::response`] so that a well-formed-but-wrong
//! payload is reported as a schema problem, not a transport one.

use std::time::Duration;

use reqwest::{header, StatusCode};
use serde_json::Value;
use thiserror::Error;
use url::Url;

/// Timeout for a single status request
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connect error, timeout, TLS problem, or a
    /// 200 response whose body is not valid JSON.
    #[error("Сбой при запросе к эндпоинту: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered, but not with 200.
    #[error("Эндпоинт {endpoint} недоступен. Код ответа API: {}", .status.as_u16())]
    UnexpectedStatus { endpoint: String, status: StatusCode },
}

/// Client for the homework status endpoint
pub struct StatusClient {
    http: reqwest::Client,
    endpoint: Url,
    token: String,
}

impl StatusClient {
    /// Builds the client with its own connection pool and request timeout.
    pub fn new(endpoint: Url, token: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            endpoint,
            token: token.to_string(),
        })
    }

    /// Fetches homework statuses changed since `from_date` (Unix seconds).
    ///
    /// Any status other than 200 is an error; the payload of such responses
    /// is not inspected. A 200 body is decoded as JSON and returned verbatim.
    pub async fn fetch(&self, from_date: i64) -> Result<Value, ApiError> {
        log::debug!("Requesting homework statuses from {} (from_date={})", self.endpoint, from_date);

        let response = self
            .http
            .get(self.endpoint.clone())
            .header(header::AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ApiError::UnexpectedStatus {
                endpoint: self.endpoint.to_string(),
                status,
            });
        }

        Ok(response.json().await?)
    }
}
