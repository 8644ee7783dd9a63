use serde_json::Value;

/// Text for a value interpolated into markup. A missing value reads `undefined`.
pub fn interpolated_text(value: Option<&Value>) -> String {
	match value {
		Some(value) => value_text(value),
		None => "undefined".to_owned(),
	}
}

/// Text for a value assigned as an element's text content. Missing and null values read as empty.
pub fn text_content(value: Option<&Value>) -> String {
	match value {
		None | Some(Value::Null) => String::new(),
		Some(value) => value_text(value),
	}
}

fn value_text(value: &Value) -> String {
	match value {
		Value::Null => "null".to_owned(),
		Value::Bool(value) => value.to_string(),
		Value::Number(number) => {
			if let Some(number) = number.as_i64() {
				number.to_string()
			} else if let Some(number) = number.as_u64() {
				number.to_string()
			} else {
				number.as_f64().map(|number| number.to_string()).unwrap_or_default()
			}
		}
		Value::String(value) => value.clone(),
		Value::Array(items) => items
			.iter()
			.map(|item| match item {
				Value::Null => String::new(),
				item => value_text(item),
			})
			.collect::<Vec<_>>()
			.join(","),
		Value::Object(_) => "[object Object]".to_owned(),
	}
}

#[test]
fn test_value_text() {
	use serde_json::json;
	assert_eq!(interpolated_text(Some(&json!("NYC"))), "NYC");
	assert_eq!(interpolated_text(Some(&json!(30))), "30");
	assert_eq!(interpolated_text(Some(&json!(-2))), "-2");
	assert_eq!(interpolated_text(Some(&json!(1.5))), "1.5");
	assert_eq!(interpolated_text(Some(&json!(2.0))), "2");
	assert_eq!(interpolated_text(Some(&json!(true))), "true");
	assert_eq!(interpolated_text(Some(&json!(null))), "null");
	assert_eq!(interpolated_text(None), "undefined");
	assert_eq!(interpolated_text(Some(&json!(["a", null, 3]))), "a,,3");
	assert_eq!(interpolated_text(Some(&json!({"a": 1}))), "[object Object]");
	assert_eq!(text_content(None), "");
	assert_eq!(text_content(Some(&json!(null))), "");
	assert_eq!(text_content(Some(&json!("Tatooine"))), "Tatooine");
}
