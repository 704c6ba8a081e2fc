use crate::backend::CheckoutContext;
use axum::{routing::post, Router};
use checkout::get_session_status;
use std::sync::Arc;

pub mod checkout;

pub fn api_routes(context: Arc<CheckoutContext>) -> Router {
    Router::new()
        .route("/checkout/session_status", post(get_session_status))
        .with_state(context)
}
