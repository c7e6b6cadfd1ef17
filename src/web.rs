//! The browser host, over [`web_sys`].

use crate::{
	element::ElementDescription,
	error::RenderError,
	host::{Host, HostError, HostRead},
	render::ElementRenderer,
};
use tracing::{error, instrument};
use wasm_bindgen::{JsCast, JsValue};

/// Creates and mounts elements through a [***Document***](https://developer.mozilla.org/en-US/docs/Web/API/Document).
#[derive(Debug, Clone)]
pub struct WebDocument {
	document: web_sys::Document,
}

impl WebDocument {
	#[must_use]
	pub fn new(document: web_sys::Document) -> Self {
		Self { document }
	}

	/// Uses the [***ownerDocument***](https://developer.mozilla.org/en-US/docs/Web/API/Node/ownerDocument) of `container`.
	#[must_use]
	pub fn for_container(container: &web_sys::Element) -> Option<Self> {
		container.owner_document().map(Self::new)
	}

	#[must_use]
	pub fn document(&self) -> &web_sys::Document {
		&self.document
	}
}

impl From<web_sys::Document> for WebDocument {
	fn from(document: web_sys::Document) -> Self {
		Self::new(document)
	}
}

fn host_error(value: &JsValue) -> HostError {
	match value.dyn_ref::<web_sys::DomException>() {
		Some(exception) => HostError::new(exception.name(), exception.message()),
		None => HostError::new("Error", value.as_string().unwrap_or_else(|| format!("{:?}", value))),
	}
}

impl Host for WebDocument {
	type Element = web_sys::Element;

	fn create_element(&self, tag: &str) -> Result<web_sys::Element, HostError> {
		self.document.create_element(tag).map_err(|error| host_error(&error))
	}

	fn set_inner_html(&self, element: &web_sys::Element, markup: &str) {
		element.set_inner_html(markup)
	}

	fn set_attribute(&self, element: &web_sys::Element, name: &str, value: &str) -> Result<(), HostError> {
		element.set_attribute(name, value).map_err(|error| host_error(&error))
	}

	fn append_child(&self, parent: &web_sys::Element, child: &web_sys::Element) -> Result<(), HostError> {
		parent.append_child(child).map(drop).map_err(|error| host_error(&error))
	}
}

impl HostRead for WebDocument {
	fn tag_name(&self, element: &web_sys::Element) -> String {
		element.local_name()
	}

	fn attributes(&self, element: &web_sys::Element) -> Vec<(String, String)> {
		let attributes = element.attributes();
		(0..attributes.length())
			.filter_map(|i| attributes.item(i))
			.map(|attribute| (attribute.name(), attribute.value()))
			.collect()
	}

	fn inner_html(&self, element: &web_sys::Element) -> String {
		element.inner_html()
	}

	fn child_elements(&self, element: &web_sys::Element) -> Option<Vec<web_sys::Element>> {
		if element.child_nodes().length() != element.child_element_count() {
			return None;
		}
		let children = element.children();
		Some((0..children.length()).filter_map(|i| children.item(i)).collect())
	}

	fn child_count(&self, element: &web_sys::Element) -> usize {
		element.child_nodes().length() as usize
	}
}

/// Renders `description` into `container`, creating elements through `container`'s owner document.
///
/// # Errors
///
/// See [`ElementRenderer::render`].
#[instrument(skip_all, fields(tag = description.tag.as_str()))]
pub fn mount(description: &ElementDescription, container: &web_sys::Element) -> Result<(), RenderError> {
	let document = WebDocument::for_container(container).ok_or_else(|| {
		error!("Container has no owner document.");
		RenderError::AppendRejected {
			tag: description.tag.clone(),
			source: HostError::new(HostError::HIERARCHY_REQUEST, "The container has no owner document."),
		}
	})?;
	ElementRenderer::new(document).render(description, container)
}

/// Renders `description` into the element with the [***id***](https://developer.mozilla.org/en-US/docs/Web/API/Element/id) `id`.
///
/// # Errors
///
/// [`RenderError::ContainerNotFound`] iff there's no such element, otherwise see [`ElementRenderer::render`].
#[instrument(skip(document, description))]
pub fn mount_by_id(document: &web_sys::Document, id: &str, description: &ElementDescription) -> Result<(), RenderError> {
	let container = document.get_element_by_id(id).ok_or_else(|| {
		error!("No element with id {:?} found.", id);
		RenderError::ContainerNotFound { id: id.to_owned() }
	})?;
	ElementRenderer::new(WebDocument::new(document.clone())).render(description, &container)
}
