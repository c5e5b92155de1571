// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use coach_site::config::parse_config;
	use coach_site::web::server::run_server;
	use std::sync::Arc;

	tracing_subscriber::fmt::init();

	let config_path = std::env::args().nth(1).unwrap_or_else(|| String::from("config.kdl"));
	let config = parse_config(&config_path).await?;
	tracing::debug!(?config.web, "Loaded configuration");

	run_server(Arc::new(config)).await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
	// The site is only served with the ssr feature; the browser side starts from `hydrate` in the library
}
