// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::pages::app::App;
use super::pages::shell::shell;
use super::state::AppState;
use crate::config::ConfigData;
use crate::contact::relay::RelayClient;
use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use leptos::logging::log;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream};
use miette::IntoDiagnostic;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub async fn run_server(config: Arc<ConfigData>) -> miette::Result<()> {
	let leptos_options = get_configuration(None).into_diagnostic()?.leptos_options;
	let relay_client = RelayClient::new(config.relay.endpoint.clone(), config.relay.access_key.clone());
	tracing::info!(endpoint = relay_client.endpoint(), "Relaying contact form submissions");

	let app_state = AppState {
		leptos_options,
		relay_client,
	};
	let app = site_router(app_state);

	let bind_addr = &config.web.bind_addr;
	let listener = TcpListener::bind(bind_addr).await.into_diagnostic()?;
	log!("Listening on http://{}", bind_addr);
	axum::serve(listener, app.into_make_service()).await.into_diagnostic()?;

	Ok(())
}

/// Serves the site's pages, its server functions, and the compiled assets under the site root
fn site_router(app_state: AppState) -> Router {
	let routes = generate_route_list(App);

	Router::new()
		.leptos_routes_with_context(
			&app_state,
			routes,
			{
				let app_state = app_state.clone();
				move || provide_context(app_state.clone())
			},
			{
				let leptos_options = app_state.leptos_options.clone();
				move || shell(leptos_options.clone())
			},
		)
		.fallback(static_file_or_not_found)
		.layer(TraceLayer::new_for_http())
		.with_state(app_state)
}

/// Anything that isn't a page is looked up as a file in the site root; if there's no such file, the app renders its
/// own not found page.
async fn static_file_or_not_found(State(state): State<AppState>, request: Request) -> Response {
	let Ok(file_request) = Request::builder().uri(request.uri().clone()).body(Body::empty()) else {
		return StatusCode::INTERNAL_SERVER_ERROR.into_response();
	};

	let site_root: &str = &state.leptos_options.site_root;
	let file_response = match ServeDir::new(site_root).oneshot(file_request).await {
		Ok(response) => response,
		Err(error) => {
			tracing::error!(source = ?error, "Failed to read a static file");
			return StatusCode::INTERNAL_SERVER_ERROR.into_response();
		}
	};

	if file_response.status() == StatusCode::OK {
		return file_response.into_response();
	}

	let render = render_app_to_stream(App);
	render(request).await.into_response()
}
