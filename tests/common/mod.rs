#![allow(dead_code)]

use std::path::PathBuf;

pub const JSON: &str = "application/json";

/// A credential file path under the temp dir that does not exist yet.
pub fn scratch_credentials(name: &str) -> PathBuf {
	let path = std::env::temp_dir().join(format!("huelink-it-{}-{}", std::process::id(), name));
	let _ = std::fs::remove_file(&path);
	path
}
