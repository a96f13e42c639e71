use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
	Get,
	Post,
	Put,
}

/// Plain HTTP access to one bridge.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
	client: Client,
	base_url: String,
}

impl Transport {
	pub fn new(address: &str) -> Transport {
		Transport {
			client: Client::new(),
			base_url: format!("http://{}", address),
		}
	}

	fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	/// Sends a request, failing only on transport errors and non-success
	/// status codes. The body is not looked at.
	pub fn request<B: Serialize + ?Sized>(
		&self,
		method: Method,
		path: &str,
		body: Option<&B>,
	) -> Result<Response> {
		let url = self.url(path);
		log::debug!("{:?} {}", method, url);
		let request = match method {
			Method::Get => self.client.get(&url),
			Method::Post => {
				let request = self.client.post(&url);
				match body {
					Some(body) => request.json(body),
					None => request,
				}
			}
			Method::Put => {
				let data = match body {
					Some(body) => serde_json::to_vec(body)?,
					None => Vec::new(),
				};
				self.client
					.request(reqwest::Method::PUT, &url)
					.header(CONTENT_TYPE, "application/json")
					.body(data)
			}
		};
		Ok(request.send()?.error_for_status()?)
	}

	pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
		let response = self.request::<()>(Method::Get, path, None)?;
		Ok(serde_json::from_slice(&response.bytes()?)?)
	}

	pub fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
		let response = self.request(Method::Post, path, Some(body))?;
		Ok(serde_json::from_slice(&response.bytes()?)?)
	}

	/// PUTs `body`; whatever the bridge answers is dropped unread.
	pub fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
		self.request(Method::Put, path, Some(body))?;
		Ok(())
	}
}
