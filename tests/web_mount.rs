#![cfg(target_arch = "wasm32")]

use mount_dom::{
	load::load_element,
	web::{mount, mount_by_id, WebDocument},
	ElementDescription, HostError, RenderError,
};
use std::sync::Once;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{window, HtmlBodyElement};

wasm_bindgen_test_configure!(run_in_browser);

static LOG_INITIALIZED: Once = Once::new();

fn fresh_container() -> web_sys::Element {
	LOG_INITIALIZED.call_once(tracing_wasm::set_as_global_default);

	let document = window().unwrap().document().unwrap();
	let body = document.body().unwrap().dyn_into::<HtmlBodyElement>().unwrap();
	let container = document.create_element("div").unwrap();
	body.append_child(&container).unwrap();
	container
}

fn link() -> ElementDescription {
	ElementDescription::new("a")
		.attribute("href", "https://example.com")
		.attribute("target", "_blank")
		.markup("Click me")
}

#[wasm_bindgen_test]
fn link_example() {
	let container = fresh_container();

	mount(&link(), &container).unwrap();

	assert_eq!(container.child_element_count(), 1);
	let a = container.first_element_child().unwrap();
	assert_eq!(a.tag_name(), "A");
	assert_eq!(a.get_attribute("href").as_deref(), Some("https://example.com"));
	assert_eq!(a.get_attribute("target").as_deref(), Some("_blank"));
	assert_eq!(a.attributes().length(), 2);
	assert_eq!(a.inner_html(), "Click me");
}

#[wasm_bindgen_test]
fn rendering_twice_creates_siblings() {
	let container = fresh_container();

	mount(&link(), &container).unwrap();
	mount(&link(), &container).unwrap();

	assert_eq!(container.child_element_count(), 2);
}

#[wasm_bindgen_test]
fn reserved_children_key_is_skipped() {
	let container = fresh_container();

	mount(&ElementDescription::new("span").attribute("children", "nope").markup("<b>bold</b>"), &container).unwrap();

	let span = container.first_element_child().unwrap();
	assert!(!span.has_attribute("children"));
	assert_eq!(span.inner_html(), "<b>bold</b>");
}

#[wasm_bindgen_test]
fn invalid_tag() {
	let container = fresh_container();

	let error = mount(&ElementDescription::new(""), &container).unwrap_err();

	assert!(matches!(error, RenderError::UnsupportedTag { ref source, .. } if source.name == HostError::INVALID_CHARACTER));
	assert_eq!(container.child_nodes().length(), 0);
}

#[wasm_bindgen_test]
fn invalid_attribute() {
	let container = fresh_container();

	let error = mount(&link().attribute("not valid", "x"), &container).unwrap_err();

	assert!(matches!(error, RenderError::InvalidAttribute { ref name, .. } if name == "not valid"));
	assert_eq!(container.child_nodes().length(), 0);
}

#[wasm_bindgen_test]
fn nested_and_loaded_back() {
	let container = fresh_container();
	let list = ElementDescription::new("ul")
		.attribute("id", "list")
		.child(ElementDescription::new("li").markup("one"))
		.child(ElementDescription::new("li").markup("two"));

	mount(&list, &container).unwrap();

	assert_eq!(container.inner_html(), r#"<ul id="list"><li>one</li><li>two</li></ul>"#);
	let document = WebDocument::for_container(&container).unwrap();
	assert_eq!(load_element(&document, &container.first_element_child().unwrap()), list);
}

#[wasm_bindgen_test]
fn by_id() {
	let container = fresh_container();
	container.set_id("mount-dom-root");
	let document = window().unwrap().document().unwrap();

	mount_by_id(&document, "mount-dom-root", &link()).unwrap();
	assert_eq!(container.child_element_count(), 1);

	assert_eq!(
		mount_by_id(&document, "mount-dom-missing", &link()),
		Err(RenderError::ContainerNotFound {
			id: "mount-dom-missing".to_owned()
		})
	);
}
