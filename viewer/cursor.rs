/// How far each "fetch more" moves the cursor.
pub const ROWS_STEP: u32 = 10;

/// The row count requested from the fetch endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchCursor {
	rows: u32,
}

impl FetchCursor {
	pub fn new() -> FetchCursor {
		FetchCursor::default()
	}

	pub fn rows(self) -> u32 {
		self.rows
	}

	pub fn advance(&mut self) -> u32 {
		self.rows = self.rows.saturating_add(ROWS_STEP);
		self.rows
	}
}

#[test]
fn test_advance() {
	let mut cursor = FetchCursor::new();
	assert_eq!(cursor.rows(), 0);
	assert_eq!(cursor.advance(), 10);
	assert_eq!(cursor.advance(), 20);
	assert_eq!(cursor.rows(), 20);
}
