use std::collections::HashMap;

use serde::Serialize;

use crate::credentials::{CredentialStore, PendingCredential};
use crate::lights::{parse_id, Light, LightGroup};
use crate::registration;
use crate::transport::Transport;
use crate::{Error, Result, APP_NAME};

/// A paired Hue bridge.
///
/// The access token is settled when the handle is built, so a `Bridge` can
/// be cloned and shared between threads freely. Lights fetched from it keep
/// a clone so they can push their own state changes.
#[derive(Debug, Clone)]
pub struct Bridge {
	address: String,
	token: String,
	transport: Transport,
}

impl Bridge {
	/// Connects to the bridge at `address` (a host, or `host:port`).
	///
	/// The token is read from `~/.huelink`; if that file does not exist the
	/// bridge is asked for a new one, which requires its link button to
	/// have been pressed shortly before.
	pub fn connect(address: &str) -> Result<Bridge> {
		let store = CredentialStore::for_app(APP_NAME)?;
		Bridge::connect_with(address, APP_NAME, &store)
	}

	/// Like [`Bridge::connect`], with an explicit device type and token store.
	pub fn connect_with(address: &str, app_name: &str, store: &CredentialStore) -> Result<Bridge> {
		if let Some(token) = store.load()? {
			return Ok(Bridge::with_token(address, &token));
		}
		let mut pending = store.create_empty()?;
		let transport = Transport::new(address);
		let token = match registration::register(&transport, app_name) {
			Ok(token) => token,
			Err(e) => return Err(abandon(pending, e)),
		};
		if let Err(e) = pending.write(&token) {
			return Err(abandon(pending, e));
		}
		Ok(Bridge {
			address: address.to_owned(),
			token,
			transport,
		})
	}

	/// Uses an already issued token without touching any credential file.
	pub fn with_token(address: &str, token: &str) -> Bridge {
		Bridge {
			address: address.to_owned(),
			token: token.to_owned(),
			transport: Transport::new(address),
		}
	}

	pub fn address(&self) -> &str {
		&self.address
	}

	pub fn token(&self) -> &str {
		&self.token
	}

	fn path(&self, resource: &str) -> String {
		format!("/api/{}/{}", self.token, resource)
	}

	pub fn get_light(&self, id: u32) -> Result<Light> {
		let mut light: Light = self.transport.get(&self.path(&format!("lights/{}", id)))?;
		light.attach(id, self);
		Ok(light)
	}

	/// All lights known to the bridge, in no particular order.
	pub fn get_lights(&self) -> Result<Vec<Light>> {
		let lights: HashMap<String, Light> = self.transport.get(&self.path("lights"))?;
		lights
			.into_iter()
			.map(|(key, mut light)| -> Result<Light> {
				light.attach(parse_id(&key)?, self);
				Ok(light)
			})
			.collect()
	}

	/// All light groups, in no particular order.
	pub fn get_light_groups(&self) -> Result<Vec<LightGroup>> {
		let groups: HashMap<String, LightGroup> = self.transport.get(&self.path("groups"))?;
		groups
			.into_iter()
			.map(|(key, mut group)| -> Result<LightGroup> {
				group.id = parse_id(&key)?;
				Ok(group)
			})
			.collect()
	}

	pub(crate) fn put_light_state<B: Serialize>(&self, id: u32, body: &B) -> Result<()> {
		self.transport
			.put(&self.path(&format!("lights/{}/state", id)), body)
	}
}

/// Removes a credential file that never got its token and hands back the
/// error that stopped it. A failed removal is only logged.
fn abandon(pending: PendingCredential, err: Error) -> Error {
	if let Err(e) = pending.discard() {
		log::warn!("could not remove unused credential file: {}", e);
	}
	err
}
