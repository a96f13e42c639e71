//! The pairing handshake: trade a device type for a bridge username.
//!
//! The bridge only accepts the request within a short window after its link
//! button was pressed; otherwise it answers with an error entry.

use crate::transport::Transport;
use crate::{Error, Result};

#[derive(Serialize)]
struct RegistrationRequest<'a> {
	devicetype: &'a str,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
enum RegistrationResult {
	Success(Granted),
	Error(Refused),
}

#[derive(Deserialize, Debug)]
struct Granted {
	username: String,
}

#[derive(Deserialize, Debug)]
struct Refused {
	#[serde(rename = "type", default)]
	kind: u32,
	#[serde(default)]
	description: String,
}

/// Picks the issued token out of the bridge's answer.
fn evaluate(results: Vec<RegistrationResult>) -> Result<String> {
	let mut refusal = None;
	for result in results {
		match result {
			RegistrationResult::Success(granted) => return Ok(granted.username),
			RegistrationResult::Error(refused) => {
				if refusal.is_none() {
					refusal = Some(refused);
				}
			}
		}
	}
	match refusal {
		Some(Refused { kind, description }) => Err(Error::Registration { kind, description }),
		None => Err(Error::EmptyRegistrationResponse),
	}
}

pub(crate) fn register(transport: &Transport, app_name: &str) -> Result<String> {
	let results: Vec<RegistrationResult> =
		transport.post("/api", &RegistrationRequest { devicetype: app_name })?;
	match evaluate(results) {
		Ok(token) => {
			log::info!("registered {} with the bridge", app_name);
			Ok(token)
		}
		Err(e) => {
			log::warn!("registration failed: {}", e);
			Err(e)
		}
	}
}
