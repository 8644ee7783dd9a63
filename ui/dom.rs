use dataset_viewer_core::Result;
use std::future::Future;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Document, Element, EventTarget};

pub fn document() -> Result<Document, JsValue> {
	web_sys::window()
		.and_then(|window| window.document())
		.ok_or_else(|| JsValue::from_str("no document"))
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
	document
		.get_element_by_id(id)
		.ok_or_else(|| JsValue::from_str(&format!("missing element #{}", id)))
}

pub fn elements_by_selector(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
	let nodes = document.query_selector_all(selector)?;
	let elements = (0..nodes.length())
		.filter_map(|index| nodes.item(index))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect();
	Ok(elements)
}

pub fn set_class(element: &Element, class: &str, present: bool) -> Result<(), JsValue> {
	let class_list = element.class_list();
	if present {
		class_list.add_1(class)
	} else {
		class_list.remove_1(class)
	}
}

/// Calls `handler` on every click of `target` for the lifetime of the page.
pub fn on_click(target: &EventTarget, handler: impl Fn() + 'static) -> Result<(), JsValue> {
	let callback_fn = Closure::<dyn Fn(_)>::wrap(Box::new(move |_: web_sys::Event| handler()));
	target.add_event_listener_with_callback("click", callback_fn.as_ref().unchecked_ref())?;
	callback_fn.forget();
	Ok(())
}

/// Runs a controller operation in the background. The operation logs its own failure.
pub fn spawn<F>(future: F)
where
	F: Future<Output = Result<usize>> + 'static,
{
	wasm_bindgen_futures::spawn_local(async move {
		future.await.ok();
	});
}
