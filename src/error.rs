use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while talking to a bridge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The credential file could not be read, created or written.
	#[error("credential file {path:?}: {source}")]
	Io { path: PathBuf, source: io::Error },

	#[error("http request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("json error: {0}")]
	Json(#[from] serde_json::Error),

	/// The credential file parsed, but holds no string `username`.
	#[error("credential file {0:?} has no username")]
	InvalidCredentials(PathBuf),

	#[error("could not determine the home directory")]
	NoHomeDirectory,

	/// The bridge rejected the pairing request, e.g. because the link button was not pressed.
	#[error("bridge refused registration ({kind}): {description}")]
	Registration { kind: u32, description: String },

	#[error("bridge sent an empty registration response")]
	EmptyRegistrationResponse,

	/// A listing key that is not a numeric identifier.
	#[error("invalid resource id {0:?}")]
	InvalidId(String),

	/// A light was mutated without a bridge to send the change to.
	#[error("light {0} is not attached to a bridge")]
	Detached(u32),
}

impl Error {
	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Error::Io {
			path: path.into(),
			source,
		}
	}
}
