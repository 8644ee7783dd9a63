use crate::value::interpolated_text;
use html::{html, Node};
use serde_json::{Map, Value};

pub const COUNT_FIELD: &str = "count";

/// One group returned by the count endpoint: a value per requested column plus its `count`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct OccurrenceRecord(pub Map<String, Value>);

impl OccurrenceRecord {
	pub fn get(&self, column: &str) -> Option<&Value> {
		self.0.get(column)
	}

	pub fn count(&self) -> Option<&Value> {
		self.0.get(COUNT_FIELD)
	}
}

pub fn occurrences_table(columns: &[String], records: &[OccurrenceRecord]) -> Node {
	let header_cells = columns
		.iter()
		.map(|column| html! { <th>{column.clone()}</th> })
		.collect::<Vec<_>>();
	let rows = records
		.iter()
		.map(|record| {
			let cells = columns
				.iter()
				.map(|column| html! { <td>{interpolated_text(record.get(column))}</td> })
				.collect::<Vec<_>>();
			html! {
				<tr>
					{cells}
					<td>{interpolated_text(record.count())}</td>
				</tr>
			}
		})
		.collect::<Vec<_>>();
	html! {
		<table class="table table-striped">
			<thead>
				<tr>
					{header_cells}
					<th>"Count"</th>
				</tr>
			</thead>
			<tbody>{rows}</tbody>
		</table>
	}
}

/// The markup placed in the result container: a heading followed by the counts table.
pub fn render_occurrences(columns: &[String], records: &[OccurrenceRecord]) -> String {
	let section = html! {
		<>
			<h2>"Occurrences"</h2>
			{occurrences_table(columns, records)}
		</>
	};
	section.render_to_string()
}

#[cfg(test)]
fn records(json: &str) -> Vec<OccurrenceRecord> {
	serde_json::from_str(json).unwrap()
}

#[test]
fn test_render_occurrences() {
	let columns = vec!["age".to_owned(), "city".to_owned()];
	let html = render_occurrences(&columns, &records(r#"[{"age": 30, "city": "NYC", "count": 5}]"#));
	insta::assert_snapshot!(html, @r###"<h2>Occurrences</h2><table class="table table-striped"><thead><tr><th>age</th><th>city</th><th>Count</th></tr></thead><tbody><tr><td>30</td><td>NYC</td><td>5</td></tr></tbody></table>"###);
}

#[test]
fn test_empty_selection_has_only_count_header() {
	let html = occurrences_table(&[], &records(r#"[{"count": 87}]"#)).render_to_string();
	assert_eq!(
		html,
		r#"<table class="table table-striped"><thead><tr><th>Count</th></tr></thead><tbody><tr><td>87</td></tr></tbody></table>"#
	);
}

#[test]
fn test_rows_follow_selection_order() {
	let columns = vec!["gender".to_owned(), "eye_color".to_owned()];
	let html = occurrences_table(
		&columns,
		&records(
			r#"[
				{"eye_color": "blue", "gender": "male", "count": 12},
				{"eye_color": "brown", "gender": "female", "count": 4},
				{"gender": "n/a", "count": 3}
			]"#,
		),
	)
	.render_to_string();
	assert!(html.contains("<tr><th>gender</th><th>eye_color</th><th>Count</th></tr>"));
	assert!(html.contains("<tr><td>male</td><td>blue</td><td>12</td></tr>"));
	assert!(html.contains("<tr><td>female</td><td>brown</td><td>4</td></tr>"));
	assert!(html.contains("<tr><td>n/a</td><td>undefined</td><td>3</td></tr>"));
	let first = html.find("male").unwrap();
	let second = html.find("female").unwrap();
	assert!(first < second);
}

#[test]
fn test_values_are_escaped() {
	let columns = vec!["<name>".to_owned()];
	let html = occurrences_table(&columns, &records(r#"[{"<name>": "R2 & D2", "count": 1}]"#))
		.render_to_string();
	assert!(html.contains("<th>&lt;name&gt;</th>"));
	assert!(html.contains("<td>R2 &amp; D2</td>"));
}
