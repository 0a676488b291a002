//! Local stand-in for the identity provider.
//!
//! Binds an axum server to an ephemeral port, answers every request with one
//! canned response, and records what it received so tests can assert on the
//! method, path, headers and form fields the client sent.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::{HeaderMap, HeaderName, Request, StatusCode, header};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::client::OAuthClient;
use crate::endpoints::Endpoints;

/// Canned reply returned for every request.
#[derive(Debug, Clone)]
pub(crate) struct StubResponse {
    status: u16,
    body: String,
}

impl StubResponse {
    pub(crate) fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_owned(),
        }
    }

    pub(crate) fn empty(status: u16) -> Self {
        Self::json(status, "")
    }
}

/// One request as the stub saw it.
#[derive(Debug, Clone)]
pub(crate) struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub form: Vec<(String, String)>,
}

impl CapturedRequest {
    /// Value of a form field, if sent.
    pub(crate) fn field(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.form.iter().map(|(key, _)| key.as_str()).collect();
        names.sort_unstable();
        names
    }
}

pub(crate) struct StubProvider {
    base_url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    server: JoinHandle<()>,
}

impl StubProvider {
    pub(crate) async fn start(response: StubResponse) -> Self {
        Self::start_delayed(response, Duration::ZERO).await
    }

    /// Like `start`, but each reply is held back for `delay` after the
    /// request is recorded.
    pub(crate) async fn start_delayed(response: StubResponse, delay: Duration) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let captured = requests.clone();
        let app = axum::Router::new().fallback(move |request: Request<Body>| {
            let captured = captured.clone();
            let response = response.clone();
            async move {
                let (parts, body) = request.into_parts();
                let authorization = header_string(&parts.headers, header::AUTHORIZATION);
                let content_type = header_string(&parts.headers, header::CONTENT_TYPE);
                let method = parts.method.to_string();
                let path = parts.uri.path().to_owned();
                let query = parts.uri.query().map(str::to_owned);

                let body = axum::body::to_bytes(body, 1024 * 1024).await.unwrap();
                let form = url::form_urlencoded::parse(&body).into_owned().collect();

                captured.lock().unwrap().push(CapturedRequest {
                    method,
                    path,
                    query,
                    authorization,
                    content_type,
                    form,
                });

                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }

                (
                    StatusCode::from_u16(response.status).unwrap(),
                    [(header::CONTENT_TYPE, "application/json")],
                    response.body,
                )
            }
        });

        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/oauth2"),
            requests,
            server,
        }
    }

    pub(crate) fn endpoints(&self) -> Endpoints {
        Endpoints::from_base_url(&self.base_url).unwrap()
    }

    pub(crate) fn client(&self) -> OAuthClient {
        OAuthClient::with_timeout(self.endpoints(), Duration::from_secs(5)).unwrap()
    }

    pub(crate) fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The only request received. Panics if there were zero or several.
    pub(crate) fn single_request(&self) -> CapturedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request: {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

fn header_string(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

impl Drop for StubProvider {
    fn drop(&mut self) {
        self.server.abort();
    }
}
