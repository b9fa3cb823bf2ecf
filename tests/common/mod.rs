#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use axum_test::TestServer;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use url_shortener::application::services::{LinkService, RateLimiter};
use url_shortener::domain::repositories::{CounterError, CounterStore};
use url_shortener::infrastructure::counter::InMemoryCounterStore;
use url_shortener::infrastructure::persistence::InMemoryUrlRepository;
use url_shortener::routes::app_router;
use url_shortener::state::AppState;
use url_shortener::utils::url_cipher::UrlCipher;

pub const TEST_BASE_URL: &str = "http://localhost:8080";
pub const TEST_LIMIT: u64 = 10;

pub fn test_cipher() -> UrlCipher {
    UrlCipher::new(b"12345678901234567890123456789012").unwrap()
}

/// Counter store whose every call fails, as when Redis is down.
pub struct FailingCounterStore;

#[async_trait]
impl CounterStore for FailingCounterStore {
    async fn increment(&self, _key: &str, _window: Duration) -> Result<u64, CounterError> {
        Err(CounterError::Connection("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_state_with_store(store: Arc<dyn CounterStore>, limit: u64) -> AppState {
    build_state(Arc::new(InMemoryUrlRepository::new()), store, limit)
}

pub fn create_test_state_with_repository(repository: Arc<InMemoryUrlRepository>) -> AppState {
    build_state(repository, Arc::new(InMemoryCounterStore::new()), TEST_LIMIT)
}

fn build_state(
    repository: Arc<InMemoryUrlRepository>,
    store: Arc<dyn CounterStore>,
    limit: u64,
) -> AppState {
    let link_service = Arc::new(LinkService::new(repository, test_cipher(), TEST_BASE_URL));
    let rate_limiter = Arc::new(RateLimiter::new(
        store,
        limit,
        Duration::from_secs(60),
        Duration::from_millis(500),
    ));

    AppState::new(link_service, rate_limiter, true)
}

pub fn create_test_state() -> AppState {
    create_test_state_with_store(Arc::new(InMemoryCounterStore::new()), TEST_LIMIT)
}

pub fn test_server(state: AppState) -> TestServer {
    let app = app_router(state).layer(MockConnectInfoLayer);
    TestServer::new(app).unwrap()
}

/// Extracts the code from `The shortened url is: <base>/<code>`.
pub fn code_from_body(body: &str) -> String {
    body.rsplit('/').next().unwrap().to_string()
}

#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
