use crate::{
    backend::{api::api_routes, utils::error::BackendResult, CheckoutContext},
    frontend::app::{shell, App},
};
use assets::file_and_error_handler;
use axum::Router;
use leptos::config::get_config_from_str;
use leptos_axum::{generate_route_list, LeptosRoutes};
use log::{info, warn};
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, sync::oneshot};
use tower_http::{compression::CompressionLayer, cors::CorsLayer};

mod assets;

pub(super) async fn start_server(
    context: CheckoutContext,
    override_hostname: Option<SocketAddr>,
    notify_start: Option<oneshot::Sender<()>>,
) -> BackendResult<()> {
    let leptos_options = get_config_from_str(include_str!("../../../Cargo.toml"))?;
    let mut addr = leptos_options.site_addr;
    if let Some(override_hostname) = override_hostname {
        addr = override_hostname;
    }
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(file_and_error_handler)
        .with_state(leptos_options)
        .nest("/api/v1", api_routes(Arc::new(context)))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new());

    info!("Listening on {}", &addr);
    let listener = TcpListener::bind(&addr).await?;
    if let Some(notify_start) = notify_start {
        if notify_start.send(()).is_err() {
            warn!("Nobody is waiting for server start");
        }
    }
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
