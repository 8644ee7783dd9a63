use crate::api::{count_occurrences_url, get_json};
use crate::config::Config;
use crate::error::Result;
use crate::occurrences::{render_occurrences, OccurrenceRecord};
use crate::selection::ColumnSelection;
use crate::transport::Transport;
use std::{cell::RefCell, future::Future, rc::Rc};
use url::Url;

/// The page surface the column selector writes to.
pub trait OccurrencesView {
	/// Adds or removes the `selected` class on the button for `column`.
	fn set_column_selected(&self, column: &str, selected: bool);
	/// Replaces the contents of the result container.
	fn set_result_html(&self, html: &str);
}

/// Tracks the selected columns and renders occurrence counts for them.
pub struct ColumnSelector<V, T> {
	config: Config,
	view: V,
	transport: T,
	selection: RefCell<ColumnSelection>,
}

impl<V, T> ColumnSelector<V, T>
where
	V: OccurrencesView + 'static,
	T: Transport + 'static,
{
	pub fn new(config: Config, view: V, transport: T) -> Rc<ColumnSelector<V, T>> {
		Rc::new(ColumnSelector {
			config,
			view,
			transport,
			selection: RefCell::new(ColumnSelection::new()),
		})
	}

	pub fn toggle(&self, column: &str) {
		let selected = self.selection.borrow_mut().toggle(column);
		self.view.set_column_selected(column, selected);
	}

	pub fn selection(&self) -> ColumnSelection {
		self.selection.borrow().clone()
	}

	/// Requests counts for the current selection. The selection and url are captured before this returns, so toggles made while the request is in flight do not affect its table. Resolves to the number of records rendered.
	pub fn request_counts(self: &Rc<Self>) -> impl Future<Output = Result<usize>> + 'static {
		let this = Rc::clone(self);
		let columns = self.selection.borrow().columns().to_vec();
		let url = count_occurrences_url(&self.config, &columns);
		async move {
			let result = this.show_counts(&columns, url).await;
			if let Err(error) = &result {
				log::error!("error fetching occurrence counts: {}", error);
			}
			result
		}
	}

	async fn show_counts(&self, columns: &[String], url: Result<Url>) -> Result<usize> {
		let records: Vec<OccurrenceRecord> = get_json(&self.transport, url?).await?;
		self.view.set_result_html(&render_occurrences(columns, &records));
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
	use std::collections::BTreeSet;

	#[derive(Clone, Default)]
	struct TestView {
		selected: Rc<RefCell<BTreeSet<String>>>,
		result: Rc<RefCell<String>>,
	}

	impl OccurrencesView for TestView {
		fn set_column_selected(&self, column: &str, selected: bool) {
			let mut classes = self.selected.borrow_mut();
			if selected {
				classes.insert(column.to_owned());
			} else {
				classes.remove(column);
			}
		}

		fn set_result_html(&self, html: &str) {
			*self.result.borrow_mut() = html.to_owned();
		}
	}

	fn setup() -> (
		Rc<ColumnSelector<TestView, StubTransport>>,
		TestView,
		StubTransport,
	) {
		let config = Config::new(DatasetId(1), Url::parse("http://localhost/").unwrap());
		let view = TestView::default();
		let transport = StubTransport::new();
		let selector = ColumnSelector::new(config, view.clone(), transport.clone());
		(selector, view, transport)
	}

	#[test]
	fn test_toggle_updates_buttons() {
		let (selector, view, _) = setup();
		selector.toggle("age");
		selector.toggle("city");
		assert!(view.selected.borrow().contains("age"));
		assert!(view.selected.borrow().contains("city"));
		selector.toggle("age");
		assert!(!view.selected.borrow().contains("age"));
		selector.toggle("age");
		assert_eq!(selector.selection().columns(), ["city", "age"]);
		assert!(view.selected.borrow().contains("age"));
	}

	#[test]
	fn test_toggle_twice_is_identity() {
		let (selector, view, _) = setup();
		selector.toggle("name");
		let selection = selector.selection();
		let selected = view.selected.borrow().clone();
		selector.toggle("mass");
		selector.toggle("mass");
		assert_eq!(selector.selection(), selection);
		assert_eq!(*view.selected.borrow(), selected);
	}

	#[test]
	fn test_request_counts_renders_table() {
		let (selector, view, transport) = setup();
		selector.toggle("age");
		selector.toggle("city");
		transport.respond(HttpResponse::ok(r#"[{"age": 30, "city": "NYC", "count": 5}]"#));
		assert_eq!(block_on(selector.request_counts()).unwrap(), 1);
		assert_eq!(
			transport.requests()[0].as_str(),
			"http://localhost/api/count_occurrences/1/?columns=age,city"
		);
		let html = view.result.borrow().clone();
		assert!(html.starts_with("<h2>Occurrences</h2>"));
		assert!(html.contains("<thead><tr><th>age</th><th>city</th><th>Count</th></tr></thead>"));
		assert!(html.contains("<tbody><tr><td>30</td><td>NYC</td><td>5</td></tr></tbody>"));
		assert_eq!(selector.selection().columns(), ["age", "city"]);
	}

	#[test]
	fn test_request_counts_with_empty_selection() {
		let (selector, view, transport) = setup();
		transport.respond(HttpResponse::ok(r#"[{"count": 87}]"#));
		block_on(selector.request_counts()).unwrap();
		assert_eq!(transport.requests()[0].query(), Some("columns="));
		assert!(view
			.result
			.borrow()
			.contains("<thead><tr><th>Count</th></tr></thead><tbody><tr><td>87</td></tr></tbody>"));
	}

	#[test]
	fn test_header_uses_selection_at_request_time() {
		let (selector, view, transport) = setup();
		selector.toggle("gender");
		transport.respond(HttpResponse::ok(r#"[{"gender": "male", "count": 2}]"#));
		let request = selector.request_counts();
		selector.toggle("height");
		block_on(request).unwrap();
		assert!(view.result.borrow().contains("<tr><th>gender</th><th>Count</th></tr>"));
	}

	#[test]
	fn test_failures_leave_result_untouched() {
		let (selector, view, transport) = setup();
		selector.toggle("age");
		*view.result.borrow_mut() = "<p>previous</p>".to_owned();

		transport.respond(failure(500, "Internal Server Error"));
		assert!(block_on(selector.request_counts()).is_err());
		assert_eq!(*view.result.borrow(), "<p>previous</p>");

		transport.fail("connection refused");
		assert!(block_on(selector.request_counts()).is_err());
		assert_eq!(*view.result.borrow(), "<p>previous</p>");

		transport.respond(HttpResponse::ok("not json"));
		assert!(block_on(selector.request_counts()).is_err());
		assert_eq!(*view.result.borrow(), "<p>previous</p>");

		assert_eq!(transport.requests().len(), 3);
		assert_eq!(selector.selection().columns(), ["age"]);
	}
}
