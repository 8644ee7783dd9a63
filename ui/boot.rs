use crate::{config::load_config, console::init_console_logger, dom::document};
use dataset_viewer_core::Config;
use log::LevelFilter;
use wasm_bindgen::JsValue;
use web_sys::Document;

/// Installs the panic hook and console logger, then loads the page configuration.
pub fn boot(page_id: &str) -> Result<(Document, Config), JsValue> {
	console_error_panic_hook::set_once();
	init_console_logger(LevelFilter::Info);
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let document = document()?;
	let config = load_config(&window, &document, page_id).map_err(|error| {
		log::error!("{}", error);
		JsValue::from_str(&error.to_string())
	})?;
	log::debug!("booted {} for dataset {}", page_id, config.dataset_id);
	Ok((document, config))
}
