//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use storefront_api::state::AppState;
use storefront_chat::SupportDesk;
use storefront_core::config::AppConfig;
use storefront_notify::{LogMailer, NotificationGateway};
use storefront_service::{OrderService, SessionRegistry, ShutdownWindow};
use storefront_store::{MemoryBackend, ShopStore};

/// The operator address every test config recognizes.
pub const OPERATOR_EMAIL: &str = "desk@shop.test";

/// Test application context.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// The stock store, for direct inspection.
    pub store: Arc<ShopStore>,
    /// The session registry, for direct inspection.
    pub sessions: Arc<SessionRegistry>,
    /// The shutdown window.
    pub shutdown: Arc<ShutdownWindow>,
}

impl TestApp {
    /// Create a test application over an in-memory store seeded with the
    /// two-item reference catalog.
    pub async fn new() -> Self {
        let doc = serde_json::json!({
            "items": [
                {"id": 1, "name": "Band-Aid", "price": 4.99, "stock": 20},
                {"id": 2, "name": "Heating Pad", "price": 35.0, "stock": 3}
            ],
            "bannedEmails": []
        });
        Self::with_document(doc).await
    }

    /// Create a test application over an arbitrary stock document.
    pub async fn with_document(doc: Value) -> Self {
        let mut config = AppConfig::default();
        config.auth.operator_emails = vec![OPERATOR_EMAIL.to_string()];

        let store = Arc::new(
            ShopStore::open(MemoryBackend::with_document(doc.to_string()))
                .await
                .expect("Failed to open test store"),
        );
        let sessions = Arc::new(SessionRegistry::new(&config.session));
        let desk = Arc::new(SupportDesk::new());
        let shutdown = ShutdownWindow::new();
        let gateway = Arc::new(NotificationGateway::new(
            Arc::new(LogMailer),
            OPERATOR_EMAIL.to_string(),
        ));
        let orders = Arc::new(OrderService::new(
            Arc::clone(&store),
            Arc::clone(&sessions),
            gateway,
        ));

        let state = AppState {
            config: Arc::new(config),
            store: Arc::clone(&store),
            sessions: Arc::clone(&sessions),
            orders,
            desk,
            shutdown: Arc::clone(&shutdown),
            started_at: chrono::Utc::now(),
        };

        Self {
            router: storefront_api::router::build_router(state),
            store,
            sessions,
            shutdown,
        }
    }

    /// Make an HTTP request to the test app.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        let body = match body {
            Some(value) => {
                builder = builder.header("Content-Type", "application/json");
                Body::from(serde_json::to_string(&value).expect("Failed to serialize body"))
            }
            None => Body::empty(),
        };

        let request = builder.body(body).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Current stock level for an item id, straight from the store.
    pub async fn stock_of(&self, id: u32) -> u32 {
        self.store
            .items()
            .await
            .into_iter()
            .find(|item| item.id.as_u32() == id)
            .map(|item| item.stock)
            .expect("item not in catalog")
    }
}

/// Response from a test request.
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body.
    pub body: Value,
}
