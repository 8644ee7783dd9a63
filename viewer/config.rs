use crate::error::{Error, Result};
use std::{fmt, str::FromStr};
use url::Url;

/// The integer id the server routes datasets by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct DatasetId(pub u64);

impl DatasetId {
	/// Accepts a JavaScript number, which must be a non-negative integer.
	pub fn from_f64(value: f64) -> Result<DatasetId> {
		if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
			Ok(DatasetId(value as u64))
		} else {
			Err(Error::config(format!("invalid dataset id {}", value)))
		}
	}
}

impl fmt::Display for DatasetId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for DatasetId {
	type Err = Error;
	fn from_str(value: &str) -> Result<DatasetId> {
		value
			.trim()
			.parse()
			.map(DatasetId)
			.map_err(|_| Error::config(format!("invalid dataset id {:?}", value)))
	}
}

/// The configuration a host page embeds as JSON in its `data-props` attribute.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ClientProps {
	pub dataset_id: DatasetId,
	#[serde(default)]
	pub api_url: Option<String>,
}

impl ClientProps {
	pub fn from_json(json: &str) -> Result<ClientProps> {
		serde_json::from_str(json).map_err(|error| Error::config(error.to_string()))
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	pub dataset_id: DatasetId,
	/// Base url the `api/...` paths are joined onto. Always ends in `/`.
	pub api_url: Url,
}

impl Config {
	pub fn new(dataset_id: DatasetId, mut api_url: Url) -> Config {
		if !api_url.path().ends_with('/') {
			let path = format!("{}/", api_url.path());
			api_url.set_path(&path);
		}
		Config {
			dataset_id,
			api_url,
		}
	}

	/// Resolves the props against the page origin, which is used when the props carry no `api_url`.
	pub fn from_props(props: ClientProps, origin: &str) -> Result<Config> {
		let api_url = props.api_url.as_deref().unwrap_or(origin);
		let api_url = Url::parse(api_url)
			.map_err(|error| Error::config(format!("invalid api url {:?}: {}", api_url, error)))?;
		Ok(Config::new(props.dataset_id, api_url))
	}
}

#[test]
fn test_dataset_id() {
	assert_eq!("12".parse::<DatasetId>().unwrap(), DatasetId(12));
	assert_eq!(" 7 ".parse::<DatasetId>().unwrap(), DatasetId(7));
	assert!("seven".parse::<DatasetId>().is_err());
	assert_eq!(DatasetId::from_f64(3.0).unwrap(), DatasetId(3));
	assert!(DatasetId::from_f64(3.5).is_err());
	assert!(DatasetId::from_f64(-1.0).is_err());
	assert!(DatasetId::from_f64(f64::NAN).is_err());
}

#[test]
fn test_config_from_props() {
	let props = ClientProps::from_json(r#"{"dataset_id": 4}"#).unwrap();
	let config = Config::from_props(props, "http://localhost:8000").unwrap();
	assert_eq!(config.dataset_id, DatasetId(4));
	assert_eq!(config.api_url.as_str(), "http://localhost:8000/");

	let props =
		ClientProps::from_json(r#"{"dataset_id": 4, "api_url": "https://data.example.com/swapi"}"#)
			.unwrap();
	let config = Config::from_props(props, "http://localhost:8000").unwrap();
	assert_eq!(config.api_url.as_str(), "https://data.example.com/swapi/");

	assert!(ClientProps::from_json(r#"{"api_url": "x"}"#).is_err());
	let props = ClientProps::from_json(r#"{"dataset_id": 4, "api_url": "not a url"}"#).unwrap();
	assert!(Config::from_props(props, "http://localhost:8000").is_err());
}
