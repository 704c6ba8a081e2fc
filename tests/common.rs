#![expect(clippy::unwrap_used)]

use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json,
    Router,
};
use checkout_confirm::{
    backend::{start, utils::config::ConfirmConfigStripe, ConfirmConfig},
    frontend::api::ApiClient,
};
use log::LevelFilter;
use serde_json::json;
use std::{
    ops::Deref,
    sync::{
        atomic::{AtomicI32, Ordering},
        Once,
    },
};
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};

pub const TEST_SECRET_KEY: &str = "sk_test_checkout";

pub struct TestData {
    pub api_client: ApiClient,
    server_handle: JoinHandle<()>,
    stripe_handle: JoinHandle<()>,
}

impl TestData {
    pub async fn start() -> Self {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            env_logger::builder()
                .filter_level(LevelFilter::Warn)
                //.filter_module("checkout_confirm", LevelFilter::Info)
                .init();
        });

        // Run things on different ports to allow parallel tests
        static COUNTER: AtomicI32 = AtomicI32::new(0);
        let current_run = COUNTER.fetch_add(1, Ordering::Relaxed);
        let port = 8200 + current_run;

        let (api_url, stripe_handle) = start_mock_stripe().await;
        let config = ConfirmConfig {
            stripe: ConfirmConfigStripe {
                api_url,
                secret_key: TEST_SECRET_KEY.to_string(),
            },
            ..Default::default()
        };

        let hostname = format!("127.0.0.1:{port}");
        let (tx, rx) = oneshot::channel::<()>();
        let server_handle = tokio::task::spawn(async move {
            let addr = format!("127.0.0.1:{port}");
            start(config, Some(addr.parse().unwrap()), Some(tx))
                .await
                .unwrap();
        });
        // wait for the backend to start
        rx.await.unwrap();

        Self {
            api_client: ApiClient::new(reqwest::Client::new(), Some(hostname)),
            server_handle,
            stripe_handle,
        }
    }

    pub fn stop(self) {
        self.server_handle.abort();
        self.stripe_handle.abort();
    }
}

impl Deref for TestData {
    type Target = ApiClient;

    fn deref(&self) -> &Self::Target {
        &self.api_client
    }
}

/// Minimal stand-in for the Stripe checkout sessions endpoint.
async fn start_mock_stripe() -> (String, JoinHandle<()>) {
    async fn retrieve_session(Path(id): Path<String>, headers: HeaderMap) -> Response {
        let auth = headers.get("authorization").and_then(|h| h.to_str().ok());
        if auth != Some(format!("Bearer {TEST_SECRET_KEY}").as_str()) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        let status = match id.as_str() {
            "sess_123" => "complete",
            "sess_456" => "pending",
            "sess_expired" => "expired",
            _ => {
                return (
                    StatusCode::NOT_FOUND,
                    Json(json!({"error": {"message": format!("No such checkout.session: '{id}'")}})),
                )
                    .into_response()
            }
        };
        Json(json!({"id": id, "object": "checkout.session", "status": status})).into_response()
    }

    let app = Router::new().route("/v1/checkout/sessions/:id", get(retrieve_session));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::task::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), handle)
}
