use crate::error::{Error, Result};
use async_trait::async_trait;
use url::Url;

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
	pub status: u16,
	pub status_text: String,
	pub body: String,
}

impl HttpResponse {
	pub fn ok(body: impl Into<String>) -> HttpResponse {
		HttpResponse {
			status: 200,
			status_text: "OK".to_owned(),
			body: body.into(),
		}
	}
}

/// Issues GET requests on behalf of the controllers. Futures are not `Send` because the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait Transport {
	async fn get(&self, url: Url) -> Result<HttpResponse>;
}

/// A [`Transport`] backed by `reqwest`, which uses `fetch` when built for the browser.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
	client: reqwest::Client,
}

impl HttpTransport {
	pub fn new() -> HttpTransport {
		HttpTransport::default()
	}
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
	async fn get(&self, url: Url) -> Result<HttpResponse> {
		let response = self
			.client
			.get(url)
			.send()
			.await
			.map_err(transport_error)?;
		let status = response.status();
		let body = response.text().await.map_err(transport_error)?;
		Ok(HttpResponse {
			status: status.as_u16(),
			status_text: status.canonical_reason().unwrap_or_default().to_owned(),
			body,
		})
	}
}

fn transport_error(error: reqwest::Error) -> Error {
	Error::Transport {
		message: error.to_string(),
	}
}
