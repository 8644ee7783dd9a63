use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Forwards `log` records to the browser console at the matching severity.
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Installs the console logger. Later calls leave the first logger in place.
pub fn init_console_logger(level: LevelFilter) {
	if log::set_logger(&LOGGER).is_ok() {
		log::set_max_level(level);
	}
}

impl Log for ConsoleLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= log::max_level()
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let message = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
		match record.level() {
			Level::Error => console::error_1(&message),
			Level::Warn => console::warn_1(&message),
			Level::Info => console::info_1(&message),
			Level::Debug | Level::Trace => console::debug_1(&message),
		}
	}

	fn flush(&self) {}
}
