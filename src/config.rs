// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::contact::relay::DEFAULT_RELAY_ENDPOINT;
use kdl::{KdlDocument, KdlNode};
use miette::{IntoDiagnostic, Result, miette};
use tokio::fs::read_to_string;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	ConfigData::from_kdl(&config_file_contents)
}

#[derive(Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub relay: RelayConfig,
}

#[derive(Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}

/// Where contact form submissions are relayed, and the key the relay knows this site by
#[derive(Debug)]
pub struct RelayConfig {
	pub endpoint: String,
	pub access_key: String,
}

impl ConfigData {
	pub fn from_kdl(contents: &str) -> Result<Self> {
		let document: KdlDocument = contents.parse()?;

		let web = section(&document, "web")?;
		let web = WebConfig {
			bind_addr: required_string(web, "web", "bind-addr")?,
		};

		let relay = section(&document, "relay")?;
		let relay = RelayConfig {
			endpoint: optional_string(relay, "relay", "endpoint")?
				.unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string()),
			access_key: required_string(relay, "relay", "access-key")?,
		};

		Ok(Self { web, relay })
	}
}

fn section<'a>(document: &'a KdlDocument, name: &str) -> Result<&'a KdlDocument> {
	document
		.get(name)
		.and_then(KdlNode::children)
		.ok_or_else(|| miette!("Config is missing the `{}` block", name))
}

fn optional_string(section: &KdlDocument, section_name: &str, name: &str) -> Result<Option<String>> {
	let Some(value) = section.get_arg(name) else {
		return Ok(None);
	};
	match value.as_string() {
		Some(value) => Ok(Some(value.to_string())),
		None => Err(miette!("Config value `{}.{}` must be a string", section_name, name)),
	}
}

fn required_string(section: &KdlDocument, section_name: &str, name: &str) -> Result<String> {
	optional_string(section, section_name, name)?
		.filter(|value| !value.is_empty())
		.ok_or_else(|| miette!("Config is missing `{}.{}`", section_name, name))
}
