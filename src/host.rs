//! The seam between the renderer and the tree it mounts into.

use thiserror::Error;

/// A failure reported by the host tree, shaped like a [***DOMException***](https://developer.mozilla.org/en-US/docs/Web/API/DOMException).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{name}{}", message_suffix(.message))]
pub struct HostError {
	/// The exception name, like `"InvalidCharacterError"`.
	pub name: String,
	pub message: String,
}

impl HostError {
	pub const INVALID_CHARACTER: &'static str = "InvalidCharacterError";
	pub const HIERARCHY_REQUEST: &'static str = "HierarchyRequestError";
	pub const NOT_SUPPORTED: &'static str = "NotSupportedError";

	#[must_use]
	pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			message: message.into(),
		}
	}
}

fn message_suffix(message: &str) -> String {
	if message.is_empty() {
		String::new()
	} else {
		format!(": {}", message)
	}
}

/// The four operations the renderer needs from a live element tree.
///
/// Implementations are handle-based: [`Host::Element`] is cheap to clone and refers to a node owned by the tree.
pub trait Host {
	type Element: Clone;

	/// Creates a new, detached element.
	///
	/// # Errors
	///
	/// Iff the host can't construct an element named `tag`.
	fn create_element(&self, tag: &str) -> Result<Self::Element, HostError>;

	/// Replaces `element`'s content with raw markup.
	fn set_inner_html(&self, element: &Self::Element, markup: &str);

	/// # Errors
	///
	/// Iff `name` is not a legal attribute name on `element`, or `value` is rejected.
	fn set_attribute(&self, element: &Self::Element, name: &str, value: &str) -> Result<(), HostError>;

	/// Appends `child` as last child of `parent`.
	///
	/// # Errors
	///
	/// Iff the host refuses the insertion, e.g. because it would create a cycle.
	fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<(), HostError>;
}

/// Read access to a host tree, used to [load](`crate::load`) descriptions back out of it.
pub trait HostRead: Host {
	fn tag_name(&self, element: &Self::Element) -> String;

	/// Attributes in the host's order.
	fn attributes(&self, element: &Self::Element) -> Vec<(String, String)>;

	fn inner_html(&self, element: &Self::Element) -> String;

	/// The child elements, or [`None`] if `element` has any content that isn't an element (text, markup, comments…).
	fn child_elements(&self, element: &Self::Element) -> Option<Vec<Self::Element>>;

	fn child_count(&self, element: &Self::Element) -> usize;
}

impl<H: Host + ?Sized> Host for &H {
	type Element = H::Element;

	fn create_element(&self, tag: &str) -> Result<Self::Element, HostError> {
		(**self).create_element(tag)
	}

	fn set_inner_html(&self, element: &Self::Element, markup: &str) {
		(**self).set_inner_html(element, markup)
	}

	fn set_attribute(&self, element: &Self::Element, name: &str, value: &str) -> Result<(), HostError> {
		(**self).set_attribute(element, name, value)
	}

	fn append_child(&self, parent: &Self::Element, child: &Self::Element) -> Result<(), HostError> {
		(**self).append_child(parent, child)
	}
}

impl<H: HostRead + ?Sized> HostRead for &H {
	fn tag_name(&self, element: &Self::Element) -> String {
		(**self).tag_name(element)
	}

	fn attributes(&self, element: &Self::Element) -> Vec<(String, String)> {
		(**self).attributes(element)
	}

	fn inner_html(&self, element: &Self::Element) -> String {
		(**self).inner_html(element)
	}

	fn child_elements(&self, element: &Self::Element) -> Option<Vec<Self::Element>> {
		(**self).child_elements(element)
	}

	fn child_count(&self, element: &Self::Element) -> usize {
		(**self).child_count(element)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display() {
		assert_eq!(HostError::new(HostError::INVALID_CHARACTER, "").to_string(), "InvalidCharacterError");
		assert_eq!(
			HostError::new(HostError::HIERARCHY_REQUEST, "cycle").to_string(),
			"HierarchyRequestError: cycle"
		);
	}
}
