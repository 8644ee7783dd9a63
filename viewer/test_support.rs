use crate::error::{Error, Result};
use crate::transport::{HttpResponse, Transport};
use async_trait::async_trait;
use std::{cell::RefCell, collections::VecDeque, rc::Rc};
use url::Url;

pub fn failure(status: u16, status_text: &str) -> HttpResponse {
	HttpResponse {
		status,
		status_text: status_text.to_owned(),
		body: String::new(),
	}
}

/// Answers requests from a queue of canned responses and records every url it was asked for.
#[derive(Clone, Default)]
pub struct StubTransport {
	responses: Rc<RefCell<VecDeque<Result<HttpResponse>>>>,
	requests: Rc<RefCell<Vec<Url>>>,
}

impl StubTransport {
	pub fn new() -> StubTransport {
		StubTransport::default()
	}

	pub fn respond(&self, response: HttpResponse) {
		self.responses.borrow_mut().push_back(Ok(response));
	}

	pub fn fail(&self, message: &str) {
		self.responses.borrow_mut().push_back(Err(Error::Transport {
			message: message.to_owned(),
		}));
	}

	pub fn requests(&self) -> Vec<Url> {
		self.requests.borrow().clone()
	}
}

#[async_trait(?Send)]
impl Transport for StubTransport {
	async fn get(&self, url: Url) -> Result<HttpResponse> {
		self.requests.borrow_mut().push(url);
		self.responses
			.borrow_mut()
			.pop_front()
			.unwrap_or_else(|| Ok(failure(404, "Not Found")))
	}
}
