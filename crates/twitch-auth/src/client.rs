//! HTTP exchange with the provider
//!
//! `OAuthClient` pairs a `reqwest::Client` (with its request timeout) and the
//! provider's `Endpoints`. Every network operation in the crate funnels
//! through `OAuthClient::exchange`, which sends one request and sorts the
//! result into exactly one of four terminal cases:
//!
//! | What happened | Returned |
//! |---|---|
//! | 200, body matches the success shape | `Ok(Outcome::Success)` |
//! | non-200, body matches `FailedRequest` | `Ok(Outcome::Failure)` |
//! | connect/timeout/read failure | `Err(Error::Transport)` |
//! | body doesn't match its status class | `Err(Error::Decode)` |
//!
//! There is no retry. Callers own retry policy.

use std::time::{Duration, Instant};

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::constants::DEFAULT_TIMEOUT;
use crate::endpoints::Endpoints;
use crate::error::{Error, Result};
use crate::metrics::{RequestOutcome, record_request};
use crate::response::{FailedRequest, Outcome};

/// Network operations, used as log and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    ExchangeCode,
    RefreshToken,
    ClientCredentials,
    Validate,
    Revoke,
}

impl Operation {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Operation::ExchangeCode => "exchange_code",
            Operation::RefreshToken => "refresh_token",
            Operation::ClientCredentials => "client_credentials",
            Operation::Validate => "validate",
            Operation::Revoke => "revoke",
        }
    }
}

/// Connection to one provider instance.
///
/// Cheap to clone; clones share the underlying connection pool. Holds no
/// per-call state, so one instance can serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl OAuthClient {
    /// Client for the given endpoints with the default 60 second timeout.
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        Self::with_timeout(endpoints, DEFAULT_TIMEOUT)
    }

    /// Client whose requests are each bounded by `timeout`. A request that
    /// exceeds it fails with `Error::Transport`.
    pub fn with_timeout(endpoints: Endpoints, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(client_setup_error)?;
        Ok(Self { http, endpoints })
    }

    /// Client for the public Twitch identity service.
    pub fn twitch() -> Result<Self> {
        Self::new(Endpoints::twitch()?)
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Form-encoded POST to the token endpoint.
    pub(crate) fn token_request(&self, form: &[(&str, &str)]) -> RequestBuilder {
        self.http.post(self.endpoints.token.clone()).form(form)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Send `request` and classify the response.
    ///
    /// `decode_success` parses a 200 body; non-200 bodies are always parsed
    /// as `FailedRequest`.
    #[instrument(skip_all, fields(operation = operation.as_str()))]
    pub(crate) async fn exchange<T, F>(
        &self,
        operation: Operation,
        request: RequestBuilder,
        decode_success: F,
    ) -> Result<Outcome<T>>
    where
        F: FnOnce(&str) -> serde_json::Result<T>,
    {
        let started = Instant::now();
        let result = send(operation, request, decode_success).await;

        let outcome = match &result {
            Ok(Outcome::Success(_)) => RequestOutcome::Success,
            Ok(Outcome::Failure(_)) => RequestOutcome::ProviderFailure,
            Err(Error::Decode(_)) => RequestOutcome::DecodeError,
            Err(_) => RequestOutcome::TransportError,
        };
        record_request(
            operation.as_str(),
            outcome,
            started.elapsed().as_secs_f64(),
        );

        result
    }
}

async fn send<T, F>(
    operation: Operation,
    request: RequestBuilder,
    decode_success: F,
) -> Result<Outcome<T>>
where
    F: FnOnce(&str) -> serde_json::Result<T>,
{
    let response = request.send().await.map_err(|e| {
        warn!(error = %e, timeout = e.is_timeout(), "request failed");
        Error::Transport(format!("{} request failed: {e}", operation.as_str()))
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        warn!(status = status.as_u16(), error = %e, "failed to read response body");
        Error::Transport(format!(
            "{} response body unreadable: {e}",
            operation.as_str()
        ))
    })?;

    decode_outcome(operation, status, &body, decode_success)
}

/// Sort a received response into success, provider failure, or decode error.
fn decode_outcome<T, F>(
    operation: Operation,
    status: StatusCode,
    body: &str,
    decode_success: F,
) -> Result<Outcome<T>>
where
    F: FnOnce(&str) -> serde_json::Result<T>,
{
    if status == StatusCode::OK {
        return match decode_success(body) {
            Ok(payload) => {
                debug!(status = status.as_u16(), "provider accepted request");
                Ok(Outcome::Success(payload))
            }
            Err(e) => {
                warn!(status = status.as_u16(), error = %e, "success body did not decode");
                Err(Error::Decode(format!(
                    "{} returned {status} with unexpected body: {e}",
                    operation.as_str()
                )))
            }
        };
    }

    match serde_json::from_str::<FailedRequest>(body) {
        Ok(failure) => {
            warn!(
                status = status.as_u16(),
                provider_status = failure.status,
                message = %failure.message,
                "provider rejected request"
            );
            Ok(Outcome::Failure(failure))
        }
        Err(e) => {
            warn!(status = status.as_u16(), error = %e, "failure body did not decode");
            Err(Error::Decode(format!(
                "{} returned {status} with unexpected body: {e}",
                operation.as_str()
            )))
        }
    }
}

fn client_setup_error(e: reqwest::Error) -> Error {
    Error::ClientSetup(format!("building HTTP client: {e}"))
}

/// Parse a 200 body as JSON into `T`.
pub(crate) fn json_body<T: DeserializeOwned>(body: &str) -> serde_json::Result<T> {
    serde_json::from_str(body)
}
