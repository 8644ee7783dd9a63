/// The columns a user has picked, in the order they were picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnSelection {
	columns: Vec<String>,
}

impl ColumnSelection {
	pub fn new() -> ColumnSelection {
		ColumnSelection::default()
	}

	/// Removes the column if it is selected and appends it otherwise. Returns whether the column is selected afterwards.
	pub fn toggle(&mut self, column: &str) -> bool {
		match self.columns.iter().position(|selected| selected == column) {
			Some(index) => {
				self.columns.remove(index);
				false
			}
			None => {
				self.columns.push(column.to_owned());
				true
			}
		}
	}

	pub fn contains(&self, column: &str) -> bool {
		self.columns.iter().any(|selected| selected == column)
	}

	pub fn columns(&self) -> &[String] {
		&self.columns
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}
}

#[test]
fn test_toggle_preserves_insertion_order() {
	let mut selection = ColumnSelection::new();
	assert!(selection.toggle("name"));
	assert!(selection.toggle("height"));
	assert!(selection.toggle("homeworld"));
	assert!(!selection.toggle("height"));
	assert!(selection.toggle("height"));
	assert_eq!(selection.columns(), ["name", "homeworld", "height"]);
	assert!(selection.contains("homeworld"));
	assert!(!selection.contains("mass"));
}

#[test]
fn test_toggle_twice_restores_selection() {
	let mut selection = ColumnSelection::new();
	selection.toggle("age");
	selection.toggle("city");
	let before = selection.clone();
	selection.toggle("gender");
	selection.toggle("gender");
	assert_eq!(selection, before);
	selection.toggle("age");
	selection.toggle("age");
	assert_eq!(selection.columns(), ["city", "age"]);
	assert_eq!(selection.len(), 2);
}
