use crate::api::{fetch_data_url, get_json};
use crate::config::Config;
use crate::cursor::FetchCursor;
use crate::error::Result;
use crate::rows::{render_head_row, row_cells, row_headers, RowCell, RowRecord};
use crate::transport::Transport;
use std::{cell::Cell, future::Future, rc::Rc};
use url::Url;

/// The page surface the row viewer writes to.
pub trait RowsView {
	/// Replaces the contents of the table head.
	fn set_head_html(&self, html: &str);
	/// Appends one row to the table body.
	fn append_row(&self, cells: &[RowCell]);
}

/// Fetches dataset rows and appends them to a table, requesting more on each "fetch again".
pub struct RowViewer<V, T> {
	config: Config,
	view: V,
	transport: T,
	cursor: Cell<FetchCursor>,
}

impl<V, T> RowViewer<V, T>
where
	V: RowsView + 'static,
	T: Transport + 'static,
{
	pub fn new(config: Config, view: V, transport: T) -> Rc<RowViewer<V, T>> {
		Rc::new(RowViewer {
			config,
			view,
			transport,
			cursor: Cell::new(FetchCursor::new()),
		})
	}

	pub fn cursor(&self) -> FetchCursor {
		self.cursor.get()
	}

	/// Requests rows at the current cursor. Resolves to the number of rows appended.
	pub fn fetch_data(self: &Rc<Self>) -> impl Future<Output = Result<usize>> + 'static {
		let this = Rc::clone(self);
		let url = fetch_data_url(&self.config, self.cursor.get().rows());
		async move {
			let result = this.show_rows(url).await;
			if let Err(error) = &result {
				log::error!("error fetching rows: {}", error);
			}
			result
		}
	}

	/// Advances the cursor, then fetches. The advance happens before this returns.
	pub fn load_more(self: &Rc<Self>) -> impl Future<Output = Result<usize>> + 'static {
		let mut cursor = self.cursor.get();
		cursor.advance();
		self.cursor.set(cursor);
		self.fetch_data()
	}

	async fn show_rows(&self, url: Result<Url>) -> Result<usize> {
		let records: Vec<RowRecord> = get_json(&self.transport, url?).await?;
		let headers = match row_headers(&records) {
			Some(headers) => headers,
			None => return Ok(0),
		};
		self.view.set_head_html(&render_head_row(&headers));
		for record in records.iter() {
			self.view.append_row(&row_cells(&headers, record));
		}
		Ok(records.len())
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::config::DatasetId;
	use crate::test_support::{failure, StubTransport};
	use crate::transport::HttpResponse;
	use futures::executor::block_on;
	use std::cell::RefCell;

	#[derive(Clone, Default)]
	struct TestView {
		head: Rc<RefCell<String>>,
		body: Rc<RefCell<Vec<Vec<RowCell>>>>,
	}

	impl RowsView for TestView {
		fn set_head_html(&self, html: &str) {
			*self.head.borrow_mut() = html.to_owned();
		}

		fn append_row(&self, cells: &[RowCell]) {
			self.body.borrow_mut().push(cells.to_vec());
		}
	}

	fn setup() -> (Rc<RowViewer<TestView, StubTransport>>, TestView, StubTransport) {
		let config = Config::new(DatasetId(2), Url::parse("http://localhost/").unwrap());
		let view = TestView::default();
		let transport = StubTransport::new();
		let viewer = RowViewer::new(config, view.clone(), transport.clone());
		(viewer, view, transport)
	}

	fn texts(view: &TestView) -> Vec<Vec<String>> {
		view.body
			.borrow()
			.iter()
			.map(|row| row.iter().map(|cell| cell.text.clone()).collect())
			.collect()
	}

	const PEOPLE: &str = r#"[
		{"name": "Luke Skywalker", "height": "172", "homeworld": "Tatooine"},
		{"name": "Leia Organa", "height": "150", "homeworld": "Alderaan"}
	]"#;

	#[test]
	fn test_fetch_data_renders_rows() {
		let (viewer, view, transport) = setup();
		transport.respond(HttpResponse::ok(PEOPLE));
		assert_eq!(block_on(viewer.fetch_data()).unwrap(), 2);
		assert_eq!(
			transport.requests()[0].as_str(),
			"http://localhost/api/fetch_data/2/?rows=0"
		);
		assert_eq!(
			*view.head.borrow(),
			"<tr><th>Name</th><th>Height</th><th>Homeworld</th></tr>"
		);
		assert_eq!(
			texts(&view),
			vec![
				vec!["Luke Skywalker", "172", "Tatooine"],
				vec!["Leia Organa", "150", "Alderaan"],
			]
		);
		assert_eq!(view.body.borrow()[0][2].class, "homeworld");
	}

	#[test]
	fn test_empty_batch_leaves_table_untouched() {
		let (viewer, view, transport) = setup();
		*view.head.borrow_mut() = "<tr><th>Old</th></tr>".to_owned();
		transport.respond(HttpResponse::ok("[]"));
		assert_eq!(block_on(viewer.fetch_data()).unwrap(), 0);
		assert_eq!(*view.head.borrow(), "<tr><th>Old</th></tr>");
		assert!(view.body.borrow().is_empty());
	}

	#[test]
	fn test_load_more_advances_cursor_in_order() {
		let (viewer, _, transport) = setup();
		let requests = vec![viewer.load_more(), viewer.load_more(), viewer.load_more()];
		assert_eq!(viewer.cursor().rows(), 30);
		for request in requests.into_iter().rev() {
			transport.respond(HttpResponse::ok("[]"));
			block_on(request).unwrap();
		}
		let rows = transport
			.requests()
			.iter()
			.map(|url| url.query().unwrap_or_default().to_owned())
			.collect::<Vec<_>>();
		assert_eq!(rows, ["rows=30", "rows=20", "rows=10"]);
	}

	#[test]
	fn test_load_more_sequence() {
		let (viewer, _, transport) = setup();
		for _ in 0..3 {
			transport.respond(HttpResponse::ok("[]"));
			block_on(viewer.load_more()).unwrap();
		}
		let rows = transport
			.requests()
			.iter()
			.map(|url| url.query().unwrap_or_default().to_owned())
			.collect::<Vec<_>>();
		assert_eq!(rows, ["rows=10", "rows=20", "rows=30"]);
	}

	#[test]
	fn test_load_more_appends() {
		let (viewer, view, transport) = setup();
		transport.respond(HttpResponse::ok(PEOPLE));
		block_on(viewer.fetch_data()).unwrap();
		transport.respond(HttpResponse::ok(
			r#"[{"name": "Han Solo", "height": "180"}, {"name": "Chewbacca", "height": "228"}]"#,
		));
		block_on(viewer.load_more()).unwrap();
		assert_eq!(*view.head.borrow(), "<tr><th>Name</th><th>Height</th></tr>");
		assert_eq!(view.body.borrow().len(), 4);
		assert_eq!(texts(&view)[3], vec!["Chewbacca", "228"]);
	}

	#[test]
	fn test_failures_leave_table_untouched() {
		let (viewer, view, transport) = setup();
		transport.respond(HttpResponse::ok(PEOPLE));
		block_on(viewer.fetch_data()).unwrap();
		let head = view.head.borrow().clone();

		transport.respond(failure(503, "Service Unavailable"));
		assert!(block_on(viewer.load_more()).is_err());
		transport.fail("network down");
		assert!(block_on(viewer.load_more()).is_err());
		transport.respond(HttpResponse::ok(r#"{"detail": "not a list"}"#));
		assert!(block_on(viewer.load_more()).is_err());

		assert_eq!(*view.head.borrow(), head);
		assert_eq!(view.body.borrow().len(), 2);
		assert_eq!(viewer.cursor().rows(), 30);
	}
}
