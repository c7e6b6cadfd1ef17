//! Reads [`ElementDescription`]s back out of a live tree.

use crate::{
	element::{Children, ElementDescription},
	host::HostRead,
};
use indexmap::IndexMap;
use tracing::{instrument, trace};

/// Describes `element`, including its content.
///
/// If the content consists only of elements (or is empty), they are loaded recursively as [`Children::Nodes`].
/// Otherwise, the content is captured as [`Children::Markup`] through the host's inner markup serialization.
#[instrument(skip_all)]
pub fn load_element<H: HostRead>(host: &H, element: &H::Element) -> ElementDescription {
	ElementDescription {
		tag: host.tag_name(element),
		attributes: load_attributes(host, element),
		children: load_children(host, element),
	}
}

/// Attributes in the host's order.
pub fn load_attributes<H: HostRead>(host: &H, element: &H::Element) -> IndexMap<String, String> {
	host.attributes(element).into_iter().collect()
}

pub fn load_children<H: HostRead>(host: &H, element: &H::Element) -> Children {
	if host.child_count(element) == 0 {
		return Children::default();
	}
	match host.child_elements(element) {
		Some(child_elements) => {
			trace!("Loading {} child element(s).", child_elements.len());
			Children::Nodes(child_elements.iter().map(|child| load_element(host, child)).collect())
		}
		None => Children::Markup(host.inner_html(element)),
	}
}
