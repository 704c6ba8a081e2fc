use crate::{
    backend::{utils::error::BackendResult, CheckoutContext},
    common::checkout::{GetSessionStatusParams, SessionStatusResponse},
};
use axum::{extract::State, Form, Json};
use axum_macros::debug_handler;
use std::sync::Arc;

/// Look up the status of a checkout session with the payment provider. The status is returned
/// as is, it is up to the client to decide what counts as paid.
#[debug_handler]
pub(super) async fn get_session_status(
    State(context): State<Arc<CheckoutContext>>,
    Form(params): Form<GetSessionStatusParams>,
) -> BackendResult<Json<SessionStatusResponse>> {
    let status = context.session_status(&params.session_id).await?;
    Ok(Json(SessionStatusResponse { status }))
}
