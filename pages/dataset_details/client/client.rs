use dataset_viewer_core::{HttpTransport, RowCell, RowViewer, RowsView};
use dataset_viewer_ui as ui;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

struct DatasetDetailsView {
	document: Document,
	head: Element,
	body: Element,
}

impl DatasetDetailsView {
	fn build_row(&self, cells: &[RowCell]) -> Result<Element, JsValue> {
		let row = self.document.create_element("tr")?;
		for cell in cells {
			let td = self.document.create_element("td")?;
			td.set_class_name(&cell.class);
			td.set_text_content(Some(&cell.text));
			row.append_child(&td)?;
		}
		Ok(row)
	}
}

impl RowsView for DatasetDetailsView {
	fn set_head_html(&self, html: &str) {
		self.head.set_inner_html(html);
	}

	fn append_row(&self, cells: &[RowCell]) {
		let result = self
			.build_row(cells)
			.and_then(|row| self.body.append_child(&row));
		if let Err(error) = result {
			log::error!("failed to append a row: {:?}", error);
		}
	}
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	let (document, config) = ui::boot("dataset-details-page")?;
	let view = DatasetDetailsView {
		head: ui::element_by_id(&document, "peopleTableHead")?,
		body: ui::element_by_id(&document, "peopleTableBody")?,
		document: document.clone(),
	};
	let viewer = RowViewer::new(config, view, HttpTransport::new());
	ui::spawn(viewer.fetch_data());
	let fetch_again = ui::element_by_id(&document, "fetchAgain")?;
	ui::on_click(&fetch_again, move || ui::spawn(viewer.load_more()))?;
	Ok(())
}
