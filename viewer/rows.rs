use crate::value::text_content;
use html::html;
use serde_json::{Map, Value};

/// One dataset row. Field order follows the JSON object the server sent.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RowRecord(pub Map<String, Value>);

impl RowRecord {
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.0.get(key)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct RowCell {
	pub class: String,
	pub text: String,
}

/// The keys of the first record, or `None` for an empty batch.
pub fn row_headers(records: &[RowRecord]) -> Option<Vec<String>> {
	records
		.first()
		.map(|record| record.0.keys().cloned().collect())
}

pub fn header_label(key: &str) -> String {
	let mut chars = key.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

pub fn render_head_row(headers: &[String]) -> String {
	let cells = headers
		.iter()
		.map(|header| html! { <th>{header_label(header)}</th> })
		.collect::<Vec<_>>();
	let row = html! { <tr>{cells}</tr> };
	row.render_to_string()
}

pub fn row_cells(headers: &[String], record: &RowRecord) -> Vec<RowCell> {
	headers
		.iter()
		.map(|header| RowCell {
			class: header.clone(),
			text: text_content(record.get(header)),
		})
		.collect()
}

#[test]
fn test_header_label() {
	assert_eq!(header_label("name"), "Name");
	assert_eq!(header_label("birth_year"), "Birth_year");
	assert_eq!(header_label("Mass"), "Mass");
	assert_eq!(header_label("ßkin"), "SSkin");
	assert_eq!(header_label(""), "");
}

#[test]
fn test_headers_follow_first_record() {
	let records: Vec<RowRecord> = serde_json::from_str(
		r#"[
			{"name": "Luke Skywalker", "height": "172", "homeworld": "Tatooine"},
			{"height": "167", "name": "C-3PO", "skin_color": "gold"}
		]"#,
	)
	.unwrap();
	let headers = row_headers(&records).unwrap();
	assert_eq!(headers, ["name", "height", "homeworld"]);
	assert_eq!(
		render_head_row(&headers),
		"<tr><th>Name</th><th>Height</th><th>Homeworld</th></tr>"
	);
	let cells = row_cells(&headers, &records[1]);
	assert_eq!(
		cells,
		vec![
			RowCell {
				class: "name".to_owned(),
				text: "C-3PO".to_owned(),
			},
			RowCell {
				class: "height".to_owned(),
				text: "167".to_owned(),
			},
			RowCell {
				class: "homeworld".to_owned(),
				text: String::new(),
			},
		]
	);
	assert_eq!(row_headers(&[]), None);
}
