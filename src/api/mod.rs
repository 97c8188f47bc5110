use crate::api::middleware::{MakeRequestUuid, REQUEST_ID_HEADER};
use crate::config::Config;
use crate::services::account_service::AccountService;
use crate::services::health_service::HealthService;
use crate::services::message_service::MessageService;
use crate::storage::Storage;
use axum::body::Body;
use axum::http::{HeaderName, Request};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub mod accounts;
pub mod extract;
pub mod health;
pub mod messages;
pub mod middleware;
pub mod schemas;

#[derive(Clone, Debug)]
pub struct AppState {
    pub account_service: AccountService,
    pub message_service: MessageService,
}

#[derive(Clone, Debug)]
pub struct MgmtState {
    pub health_service: HealthService,
}

#[derive(Clone, Debug)]
pub struct ServiceContainer {
    pub account_service: AccountService,
    pub message_service: MessageService,
    pub health_service: HealthService,
}

impl ServiceContainer {
    #[must_use]
    pub fn new(config: &Config, storage: Storage) -> Self {
        Self {
            account_service: AccountService::new(Arc::clone(&storage.accounts)),
            message_service: MessageService::new(storage.messages, storage.accounts),
            health_service: HealthService::new(storage.pool, config.health.clone()),
        }
    }
}

/// Configures and returns the public API router.
pub fn app_router(services: ServiceContainer) -> Router {
    let state = AppState { account_service: services.account_service, message_service: services.message_service };

    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        .route("/accounts/{accountId}/messages", get(accounts::list_messages))
        .route("/messages", post(messages::create_message).get(messages::list_messages))
        .route(
            "/messages/{messageId}",
            get(messages::get_message).delete(messages::delete_message).patch(messages::update_message),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestId>()
                        .and_then(|id| id.header_value().to_str().ok())
                        .unwrap_or_default()
                        .to_string();

                    tracing::info_span!(
                        "request",
                        "request_id" = %request_id,
                        "http.request.method" = %request.method(),
                        "url.path" = %request.uri().path(),
                        "http.response.status_code" = tracing::field::Empty,
                        "otel.kind" = "server",
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: std::time::Duration, span: &tracing::Span| {
                        let status = response.status();
                        span.record("http.response.status_code", status.as_u16());

                        tracing::info!(
                            latency_ms = %latency.as_millis(),
                            status = %status.as_u16(),
                            "request completed"
                        );
                    },
                )
                .on_failure(|error, _latency, _span: &tracing::Span| {
                    tracing::error!(error = %error, "request failed");
                }),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}

pub fn mgmt_router(state: MgmtState) -> Router {
    Router::new().route("/livez", get(health::livez)).route("/readyz", get(health::readyz)).with_state(state)
}
