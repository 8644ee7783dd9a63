use crate::config::Config;
use crate::error::{Error, Result};
use crate::transport::Transport;
use serde::de::DeserializeOwned;
use url::{form_urlencoded, Url};

/// `api/count_occurrences/{id}/?columns=a,b`. Each name is form-encoded on its own so the separating commas stay literal.
pub fn count_occurrences_url(config: &Config, columns: &[String]) -> Result<Url> {
	let mut url = config
		.api_url
		.join(&format!("api/count_occurrences/{}/", config.dataset_id))?;
	let columns = columns
		.iter()
		.map(|column| form_urlencoded::byte_serialize(column.as_bytes()).collect::<String>())
		.collect::<Vec<_>>()
		.join(",");
	url.set_query(Some(&format!("columns={}", columns)));
	Ok(url)
}

/// `api/fetch_data/{id}/?rows=n`.
pub fn fetch_data_url(config: &Config, rows: u32) -> Result<Url> {
	let mut url = config
		.api_url
		.join(&format!("api/fetch_data/{}/", config.dataset_id))?;
	url.query_pairs_mut().append_pair("rows", &rows.to_string());
	Ok(url)
}

/// Fetches `url` and decodes its body as JSON. Any status other than 200 is an error.
pub async fn get_json<T, R>(transport: &R, url: Url) -> Result<T>
where
	T: DeserializeOwned,
	R: Transport + ?Sized,
{
	log::debug!("GET {}", url);
	let response = transport.get(url).await?;
	if response.status != 200 {
		return Err(Error::Status {
			status: response.status,
			status_text: response.status_text,
		});
	}
	let value = serde_json::from_str(&response.body)?;
	Ok(value)
}

#[cfg(test)]
fn config() -> Config {
	Config::new(
		crate::config::DatasetId(3),
		Url::parse("http://localhost:8000/").unwrap(),
	)
}

#[test]
fn test_count_occurrences_url() {
	let columns = vec!["gender".to_owned(), "eye color".to_owned(), "a,b".to_owned()];
	let url = count_occurrences_url(&config(), &columns).unwrap();
	assert_eq!(
		url.as_str(),
		"http://localhost:8000/api/count_occurrences/3/?columns=gender,eye+color,a%2Cb"
	);
	let url = count_occurrences_url(&config(), &[]).unwrap();
	assert_eq!(
		url.as_str(),
		"http://localhost:8000/api/count_occurrences/3/?columns="
	);
}

#[test]
fn test_fetch_data_url() {
	let url = fetch_data_url(&config(), 0).unwrap();
	assert_eq!(url.as_str(), "http://localhost:8000/api/fetch_data/3/?rows=0");
	let config = Config::new(
		crate::config::DatasetId(9),
		Url::parse("https://example.com/viewer").unwrap(),
	);
	let url = fetch_data_url(&config, 20).unwrap();
	assert_eq!(url.as_str(), "https://example.com/viewer/api/fetch_data/9/?rows=20");
}

#[test]
fn test_get_json_status_and_decode() {
	use crate::test_support::{failure, StubTransport};
	use crate::transport::HttpResponse;
	use futures::executor::block_on;

	let transport = StubTransport::new();
	let url = fetch_data_url(&config(), 0).unwrap();

	transport.respond(failure(500, "Internal Server Error"));
	let result: Result<Vec<serde_json::Value>> = block_on(get_json(&transport, url.clone()));
	match result {
		Err(Error::Status {
			status,
			status_text,
		}) => {
			assert_eq!(status, 500);
			assert_eq!(status_text, "Internal Server Error");
		}
		other => panic!("unexpected result {:?}", other),
	}

	transport.respond(HttpResponse::ok("<html></html>"));
	let result: Result<Vec<serde_json::Value>> = block_on(get_json(&transport, url.clone()));
	assert!(matches!(result, Err(Error::Decode { .. })));

	transport.respond(HttpResponse::ok("[1, 2]"));
	let result: Vec<u32> = block_on(get_json(&transport, url)).unwrap();
	assert_eq!(result, vec![1, 2]);
	assert_eq!(transport.requests().len(), 3);
}
