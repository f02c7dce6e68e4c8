use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use axum_server::bind;
use std::{error::Error, future::Future, pin::Pin};
use tower_http::limit::RequestBodyLimitLayer;

use app_state::AppState;
use routes::{decode_token, generate_token, health, issued_tokens, test_token};
use utils::require_admin;

pub mod app_state;
pub mod domain;
pub mod errors;
pub mod routes;
pub mod services;
pub mod utils;
pub mod validation;

/// Largest request body accepted by any route.
pub const MAX_BODY_BYTES: usize = 16 * 1024;

type ServerFuture = Pin<Box<dyn Future<Output = Result<(), std::io::Error>> + Send>>;

pub fn app_router(app_state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/api/token", get(test_token::test_token))
        .route("/api/token/generate", post(generate_token::generate_token))
        .route("/api/token/decode", post(decode_token::decode_token))
        .route("/api/token/issued", get(issued_tokens::list_issued_tokens))
        .route(
            "/api/token/issued/:id",
            delete(issued_tokens::delete_issued_token),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            require_admin,
        ));

    Router::new()
        .route("/health", get(health::health))
        .merge(admin_routes)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .with_state(app_state)
}

// This struct encapsulates our application-related logic.
pub struct Application {
    http_future: ServerFuture,
    // address is exposed as a public field,
    // so we have access to it in tests.
    pub address: String,
}

impl Application {
    pub async fn build(app_state: AppState, address: &str) -> Result<Self, Box<dyn Error>> {
        let router = app_router(app_state);

        let http_future = bind(address.parse()?).serve(router.into_make_service());

        Ok(Self {
            http_future: Box::pin(http_future),
            address: format!("http://{}", address),
        })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        log::info!("listening on {}", &self.address);
        self.http_future.await
    }
}
