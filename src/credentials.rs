//! Local persistence of the access token issued by the bridge.
//!
//! The store is a single JSON file, `~/.<app-name>` by default, holding an
//! object with a `username` key. A missing file means the application has
//! never been paired.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

#[derive(Deserialize)]
struct StoredCredential {
	username: Option<serde_json::Value>,
}

#[derive(Serialize)]
struct NewCredential<'a> {
	username: &'a str,
}

#[derive(Debug, Clone)]
pub struct CredentialStore {
	path: PathBuf,
}

impl CredentialStore {
	/// The dotfile for `app_name` in the user's home directory.
	pub fn for_app(app_name: &str) -> Result<CredentialStore> {
		let home = dirs::home_dir().ok_or(Error::NoHomeDirectory)?;
		Ok(CredentialStore::at(home.join(format!(".{}", app_name))))
	}

	pub fn at(path: impl Into<PathBuf>) -> CredentialStore {
		CredentialStore { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Reads the stored token.
	///
	/// `Ok(None)` means there is no credential file. A file that exists but
	/// is not a JSON object with a string `username` is an error.
	pub fn load(&self) -> Result<Option<String>> {
		let data = match fs::read(&self.path) {
			Ok(data) => data,
			Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
			Err(e) => return Err(Error::io(&self.path, e)),
		};
		let stored: StoredCredential = serde_json::from_slice(&data)?;
		match stored.username {
			Some(serde_json::Value::String(token)) => Ok(Some(token)),
			_ => Err(Error::InvalidCredentials(self.path.clone())),
		}
	}

	/// Creates (or truncates) the credential file so a token can be written
	/// into it once pairing succeeds.
	pub fn create_empty(&self) -> Result<PendingCredential> {
		let file = OpenOptions::new()
			.write(true)
			.create(true)
			.truncate(true)
			.open(&self.path)
			.map_err(|e| Error::io(&self.path, e))?;
		log::info!("created credential file {}", self.path.display());
		Ok(PendingCredential {
			path: self.path.clone(),
			file,
		})
	}
}

/// An empty credential file waiting for its token.
#[derive(Debug)]
pub struct PendingCredential {
	path: PathBuf,
	file: File,
}

impl PendingCredential {
	pub fn write(&mut self, token: &str) -> Result<()> {
		let data = serde_json::to_vec(&NewCredential { username: token })?;
		self.file
			.write_all(&data)
			.and_then(|_| self.file.sync_all())
			.map_err(|e| Error::io(&self.path, e))
	}

	/// Removes the file again, leaving the store unregistered.
	pub fn discard(self) -> Result<()> {
		let PendingCredential { path, file } = self;
		drop(file);
		fs::remove_file(&path).map_err(|e| Error::io(&path, e))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn scratch(name: &str) -> CredentialStore {
		let path = std::env::temp_dir().join(format!(
			"huelink-credentials-{}-{}",
			std::process::id(),
			name
		));
		let _ = fs::remove_file(&path);
		CredentialStore::at(path)
	}

	#[test]
	fn missing_file_is_unregistered() {
		let store = scratch("missing");
		assert_eq!(store.load().unwrap(), None);
	}

	#[test]
	fn reads_username() {
		let store = scratch("reads");
		fs::write(store.path(), r#"{"username":"abc123"}"#).unwrap();
		assert_eq!(store.load().unwrap().as_deref(), Some("abc123"));
		fs::remove_file(store.path()).unwrap();
	}

	#[test]
	fn missing_username_is_an_error() {
		let store = scratch("nouser");
		fs::write(store.path(), r#"{"devicetype":"huelink"}"#).unwrap();
		match store.load() {
			Err(Error::InvalidCredentials(path)) => assert_eq!(path, store.path()),
			other => panic!("unexpected {:?}", other),
		}
		fs::remove_file(store.path()).unwrap();
	}

	#[test]
	fn non_string_username_is_an_error() {
		let store = scratch("numeric");
		fs::write(store.path(), r#"{"username":42}"#).unwrap();
		assert!(matches!(store.load(), Err(Error::InvalidCredentials(_))));
		fs::remove_file(store.path()).unwrap();
	}

	#[test]
	fn garbage_is_a_decode_error() {
		let store = scratch("garbage");
		fs::write(store.path(), "not json").unwrap();
		assert!(matches!(store.load(), Err(Error::Json(_))));
		fs::remove_file(store.path()).unwrap();
	}

	#[test]
	fn pending_credential_write_then_load() {
		let store = scratch("write");
		let mut pending = store.create_empty().unwrap();
		assert!(store.path().exists());
		pending.write("tok-1").unwrap();
		assert_eq!(store.load().unwrap().as_deref(), Some("tok-1"));
		fs::remove_file(store.path()).unwrap();
	}

	#[cfg(target_os = "linux")]
	#[test]
	fn failed_write_can_still_be_discarded() {
		let store = scratch("full");
		std::os::unix::fs::symlink("/dev/full", store.path()).unwrap();
		let mut pending = store.create_empty().unwrap();
		assert!(matches!(pending.write("tok-1"), Err(Error::Io { .. })));
		pending.discard().unwrap();
		assert!(fs::symlink_metadata(store.path()).is_err());
		assert!(Path::new("/dev/full").exists());
	}

	#[test]
	fn discarded_credential_leaves_no_file() {
		let store = scratch("discard");
		store.create_empty().unwrap().discard().unwrap();
		assert!(!store.path().exists());
		assert_eq!(store.load().unwrap(), None);
	}
}
