use std::collections::BTreeMap;

use crate::bridge::Bridge;
use crate::{Error, Result};

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
/// Attributes of a light
pub struct Light {
	/// Assigned by the bridge; taken from the request path or listing key.
	#[serde(skip)]
	pub id: u32,
	#[serde(default)]
	pub state: LightState,
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub light_type: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub modelid: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub manufacturername: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub uniqueid: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub swversion: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pointsymbol: Option<BTreeMap<String, String>>,
	#[serde(skip)]
	bridge: Option<Bridge>,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq)]
/// Current state of a light
pub struct LightState {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub on: Option<bool>,
	/// Brightness
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bri: Option<u8>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hue: Option<u16>,
	/// Saturation
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sat: Option<u8>,
	/// CIE color space coordinates
	#[serde(skip_serializing_if = "Option::is_none")]
	pub xy: Option<[f32; 2]>,
	/// Color tone
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ct: Option<u16>,
	/// Alert mode
	#[serde(skip_serializing_if = "Option::is_none")]
	pub alert: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub effect: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub colormode: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub mode: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub reachable: Option<bool>,
	/// State keys this crate does not know about, sent back unchanged
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize)]
struct OnUpdate {
	on: bool,
}

#[derive(Serialize)]
struct BriUpdate {
	bri: u8,
}

#[derive(Serialize)]
struct HueUpdate {
	hue: u16,
}

#[derive(Serialize)]
struct SatUpdate {
	sat: u8,
}

#[derive(Serialize)]
struct CtUpdate {
	ct: u16,
}

#[derive(Serialize)]
struct XyUpdate {
	xy: [f32; 2],
}

#[derive(Serialize)]
struct AlertUpdate<'a> {
	alert: &'a str,
}

#[derive(Serialize)]
struct EffectUpdate<'a> {
	effect: &'a str,
}

impl Light {
	pub fn is_on(&self) -> bool {
		self.state.on.unwrap_or(false)
	}

	/// The bridge this light was fetched from, if any.
	pub fn bridge(&self) -> Option<&Bridge> {
		self.bridge.as_ref()
	}

	pub(crate) fn attach(&mut self, id: u32, bridge: &Bridge) {
		self.id = id;
		self.bridge = Some(bridge.clone());
	}

	fn send_state<B: serde::Serialize>(&self, body: &B) -> Result<()> {
		let bridge = self.bridge.as_ref().ok_or(Error::Detached(self.id))?;
		bridge.put_light_state(self.id, body)
	}

	/// Switches the light on or off.
	///
	/// The local state is updated before the request goes out and stays
	/// updated even if the bridge ignores the change; only a transport
	/// failure is reported.
	pub fn set_on(&mut self, on: bool) -> Result<()> {
		self.state.on = Some(on);
		self.send_state(&OnUpdate { on })
	}

	pub fn set_brightness(&mut self, bri: u8) -> Result<()> {
		self.state.bri = Some(bri);
		self.send_state(&BriUpdate { bri })
	}

	/// Hue on the bridge's 0-65535 color wheel.
	pub fn set_hue(&mut self, hue: u16) -> Result<()> {
		self.state.hue = Some(hue);
		self.send_state(&HueUpdate { hue })
	}

	pub fn set_saturation(&mut self, sat: u8) -> Result<()> {
		self.state.sat = Some(sat);
		self.send_state(&SatUpdate { sat })
	}

	/// Color temperature in mired.
	pub fn set_color_temperature(&mut self, ct: u16) -> Result<()> {
		self.state.ct = Some(ct);
		self.send_state(&CtUpdate { ct })
	}

	pub fn set_xy(&mut self, xy: [f32; 2]) -> Result<()> {
		self.state.xy = Some(xy);
		self.send_state(&XyUpdate { xy })
	}

	pub fn set_alert(&mut self, alert: &str) -> Result<()> {
		self.state.alert = Some(alert.to_owned());
		self.send_state(&AlertUpdate { alert })
	}

	pub fn set_effect(&mut self, effect: &str) -> Result<()> {
		self.state.effect = Some(effect.to_owned());
		self.send_state(&EffectUpdate { effect })
	}

	/// Sends the whole local state in one request, e.g. after changing
	/// several fields of `state` directly.
	pub fn push_full_state(&self) -> Result<()> {
		self.send_state(&self.state)
	}
}

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
/// A group of lights as defined on the bridge
pub struct LightGroup {
	#[serde(skip)]
	pub id: u32,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Member light ids, in the bridge's order
	#[serde(default)]
	pub lights: Vec<String>,
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub group_type: Option<String>,
	/// Last state sent to the whole group
	#[serde(skip_serializing_if = "Option::is_none")]
	pub action: Option<LightState>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub modelid: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub uniqueid: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub class: Option<String>,
}

/// Parses a listing key into a resource id.
pub(crate) fn parse_id(key: &str) -> Result<u32> {
	key.parse().map_err(|_| Error::InvalidId(key.to_owned()))
}
