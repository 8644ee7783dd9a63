use derive_more::{Display, Error};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Display, Error)]
pub enum Error {
	/// The request did not complete.
	#[display(fmt = "request error: {}", message)]
	Transport { message: String },
	/// The server answered with a status other than 200.
	#[display(fmt = "error fetching data: {} {}", status, status_text)]
	Status { status: u16, status_text: String },
	#[display(fmt = "malformed response: {}", message)]
	Decode { message: String },
	#[display(fmt = "invalid request url: {}", message)]
	Url { message: String },
	#[display(fmt = "invalid configuration: {}", message)]
	Config { message: String },
}

impl Error {
	pub fn config(message: impl Into<String>) -> Error {
		Error::Config {
			message: message.into(),
		}
	}
}

impl From<serde_json::Error> for Error {
	fn from(error: serde_json::Error) -> Error {
		Error::Decode {
			message: error.to_string(),
		}
	}
}

impl From<url::ParseError> for Error {
	fn from(error: url::ParseError) -> Error {
		Error::Url {
			message: error.to_string(),
		}
	}
}

#[test]
fn test_error_display() {
	let error = Error::Status {
		status: 404,
		status_text: "Not Found".to_owned(),
	};
	assert_eq!(error.to_string(), "error fetching data: 404 Not Found");
	let error: Error = serde_json::from_str::<Vec<u8>>("<html>").unwrap_err().into();
	assert!(matches!(error, Error::Decode { .. }));
}
