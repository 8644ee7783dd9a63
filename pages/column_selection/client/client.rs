use dataset_viewer_core::{ColumnSelector, HttpTransport, OccurrencesView};
use dataset_viewer_ui as ui;
use wasm_bindgen::prelude::*;
use web_sys::Element;

struct ColumnSelectionView {
	buttons: Vec<(String, Element)>,
	result: Element,
}

impl OccurrencesView for ColumnSelectionView {
	fn set_column_selected(&self, column: &str, selected: bool) {
		let button = self
			.buttons
			.iter()
			.find(|(button_column, _)| button_column == column);
		match button {
			Some((_, button)) => {
				if let Err(error) = ui::set_class(button, "selected", selected) {
					log::warn!("failed to update the button for {}: {:?}", column, error);
				}
			}
			None => log::warn!("no button for column {}", column),
		}
	}

	fn set_result_html(&self, html: &str) {
		self.result.set_inner_html(html);
	}
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	let (document, config) = ui::boot("column-selection-page")?;
	let buttons = ui::elements_by_selector(&document, ".column-btn")?
		.into_iter()
		.filter_map(|button| {
			let column = button.get_attribute("data-column")?;
			Some((column, button))
		})
		.collect::<Vec<_>>();
	let view = ColumnSelectionView {
		buttons: buttons.clone(),
		result: ui::element_by_id(&document, "result")?,
	};
	let selector = ColumnSelector::new(config, view, HttpTransport::new());
	for (column, button) in buttons {
		let selector = selector.clone();
		ui::on_click(&button, move || selector.toggle(&column))?;
	}
	let count_button = ui::element_by_id(&document, "countBtn")?;
	ui::on_click(&count_button, move || ui::spawn(selector.request_counts()))?;
	Ok(())
}
