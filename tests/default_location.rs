mod common;

use std::fs;

use common::scratch_credentials;
use huelink::{Bridge, CredentialStore, APP_NAME};

// Changes HOME for the whole process, so it lives in its own test binary.
#[cfg(unix)]
#[test]
fn credentials_default_to_a_dotfile_in_home() {
	let home = scratch_credentials("home");
	let _ = fs::remove_dir_all(&home);
	fs::create_dir_all(&home).unwrap();
	std::env::set_var("HOME", &home);

	let store = CredentialStore::for_app(APP_NAME).unwrap();
	assert_eq!(store.path(), home.join(".huelink"));
	assert!(store.path().ends_with(".huelink"));

	fs::write(store.path(), r#"{"username":"abc123"}"#).unwrap();
	let bridge = Bridge::connect("127.0.0.1:9").unwrap();
	assert_eq!(bridge.token(), "abc123");
	assert_eq!(bridge.address(), "127.0.0.1:9");

	fs::remove_dir_all(&home).unwrap();
}
