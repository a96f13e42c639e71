#[macro_use]
extern crate serde_derive;
extern crate reqwest;
extern crate serde;
extern crate serde_json;
pub mod error;
pub use error::{Error, Result};
pub mod credentials;
pub use credentials::{CredentialStore, PendingCredential};
mod transport;
mod registration;
pub mod lights;
pub use lights::{Light, LightGroup, LightState};
pub mod bridge;
pub use bridge::Bridge;

/// Sent as `devicetype` when pairing, and used as the credential dotfile name.
pub const APP_NAME: &str = "huelink";
