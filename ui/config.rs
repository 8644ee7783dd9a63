use dataset_viewer_core::{ClientProps, Config, DatasetId, Error, Result};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

/// The global a host page may define instead of embedding props.
const DATASET_ID_GLOBAL: &str = "datasetId";

/// Reads the page configuration from the `data-props` attribute of the page root, falling back to the `datasetId` global.
pub fn load_config(window: &Window, document: &Document, page_id: &str) -> Result<Config> {
	let origin = window
		.location()
		.origin()
		.map_err(|_| Error::config("the page origin is unavailable"))?;
	let props = document
		.get_element_by_id(page_id)
		.and_then(|page| page.get_attribute("data-props"));
	let props = match props {
		Some(props) => ClientProps::from_json(&props)?,
		None => ClientProps {
			dataset_id: dataset_id_global(window)?,
			api_url: None,
		},
	};
	Config::from_props(props, &origin)
}

fn dataset_id_global(window: &Window) -> Result<DatasetId> {
	let value = js_sys::Reflect::get(window, &JsValue::from_str(DATASET_ID_GLOBAL))
		.map_err(|_| Error::config("the datasetId global is unreadable"))?;
	if let Some(value) = value.as_f64() {
		DatasetId::from_f64(value)
	} else if let Some(value) = value.as_string() {
		value.parse()
	} else {
		Err(Error::config(format!(
			"the page defines neither data-props nor a {} global",
			DATASET_ID_GLOBAL
		)))
	}
}
