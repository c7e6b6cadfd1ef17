//! A detached, in-memory element tree with HTML document naming rules.
//!
//! This is what the renderer mounts into outside of a browser.
//! Markup assigned through [`Host::set_inner_html`] is stored verbatim as a single run and **not parsed**.

use crate::host::{Host, HostError, HostRead};
use core::fmt::{self, Debug, Formatter};
use hashbrown::HashSet;
use std::{
	cell::RefCell,
	rc::{Rc, Weak},
};
use tracing::{instrument, trace};

/// Creates [`MemoryElement`]s.
///
/// By default, any element with a [valid name](`is_valid_name`) can be created.
/// [`MemoryDocument::with_known_tags`] makes a strict document that refuses unknown element types.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
	known_tags: Option<HashSet<String>>,
}

impl MemoryDocument {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a document that can only create the listed element types (compared ASCII-case-insensitively).
	#[must_use]
	pub fn with_known_tags<T: AsRef<str>>(known_tags: impl IntoIterator<Item = T>) -> Self {
		Self {
			known_tags: Some(known_tags.into_iter().map(|tag| tag.as_ref().to_ascii_lowercase()).collect()),
		}
	}
}

/// A handle to an element in a [`MemoryDocument`] tree.
///
/// Clones refer to the same element. Equality is identity.
#[derive(Clone)]
pub struct MemoryElement(Rc<ElementData>);

struct ElementData {
	tag: String,
	attributes: RefCell<Vec<(String, String)>>,
	children: RefCell<Vec<MemoryNode>>,
	parent: RefCell<Weak<ElementData>>,
}

/// A child of a [`MemoryElement`].
#[derive(Debug, Clone, PartialEq)]
pub enum MemoryNode {
	Element(MemoryElement),
	/// A verbatim run of inner markup.
	Markup(String),
}

impl PartialEq for MemoryElement {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}
impl Eq for MemoryElement {}

impl Debug for MemoryElement {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryElement")
			.field("tag", &self.0.tag)
			.field("attributes", &self.0.attributes.borrow())
			.field("children", &self.0.children.borrow())
			.finish()
	}
}

impl MemoryElement {
	fn new(tag: String) -> Self {
		Self(Rc::new(ElementData {
			tag,
			attributes: RefCell::default(),
			children: RefCell::default(),
			parent: RefCell::default(),
		}))
	}

	/// The lowercase local name.
	#[must_use]
	pub fn tag(&self) -> &str {
		&self.0.tag
	}

	#[must_use]
	pub fn attribute(&self, name: &str) -> Option<String> {
		let name = name.to_ascii_lowercase();
		self.0.attributes.borrow().iter().find(|(n, _)| *n == name).map(|(_, value)| value.clone())
	}

	/// Attributes in insertion order.
	#[must_use]
	pub fn attributes(&self) -> Vec<(String, String)> {
		self.0.attributes.borrow().clone()
	}

	#[must_use]
	pub fn children(&self) -> Vec<MemoryNode> {
		self.0.children.borrow().clone()
	}

	#[must_use]
	pub fn child_count(&self) -> usize {
		self.0.children.borrow().len()
	}

	#[must_use]
	pub fn last_child(&self) -> Option<MemoryNode> {
		self.0.children.borrow().last().cloned()
	}

	/// Child elements only, skipping markup runs.
	#[must_use]
	pub fn element_children(&self) -> Vec<MemoryElement> {
		self.0
			.children
			.borrow()
			.iter()
			.filter_map(|child| match child {
				MemoryNode::Element(element) => Some(element.clone()),
				MemoryNode::Markup(_) => None,
			})
			.collect()
	}

	#[must_use]
	pub fn parent(&self) -> Option<MemoryElement> {
		self.0.parent.borrow().upgrade().map(MemoryElement)
	}

	fn is_inclusive_ancestor_of(&self, other: &MemoryElement) -> bool {
		let mut current = Some(other.clone());
		while let Some(element) = current {
			if element == *self {
				return true;
			}
			current = element.parent();
		}
		false
	}

	fn detach(&self) {
		if let Some(parent) = self.parent() {
			parent.0.children.borrow_mut().retain(|child| !matches!(child, MemoryNode::Element(element) if element == self));
		}
		*self.0.parent.borrow_mut() = Weak::new();
	}

	/// Serializes the content: markup runs verbatim, elements through [`outer_html`](`MemoryElement::outer_html`).
	#[must_use]
	pub fn inner_html(&self) -> String {
		let mut html = String::new();
		self.write_inner_html(&mut html);
		html
	}

	#[must_use]
	pub fn outer_html(&self) -> String {
		let mut html = String::new();
		self.write_outer_html(&mut html);
		html
	}

	fn write_inner_html(&self, html: &mut String) {
		for child in self.0.children.borrow().iter() {
			match child {
				MemoryNode::Element(element) => element.write_outer_html(html),
				MemoryNode::Markup(markup) => html.push_str(markup),
			}
		}
	}

	fn write_outer_html(&self, html: &mut String) {
		html.push('<');
		html.push_str(&self.0.tag);
		for (name, value) in self.0.attributes.borrow().iter() {
			html.push(' ');
			html.push_str(name);
			html.push_str("=\"");
			escape_attribute_value(value, html);
			html.push('"');
		}
		html.push('>');
		self.write_inner_html(html);
		html.push_str("</");
		html.push_str(&self.0.tag);
		html.push('>');
	}
}

fn escape_attribute_value(value: &str, html: &mut String) {
	for c in value.chars() {
		match c {
			'&' => html.push_str("&amp;"),
			'"' => html.push_str("&quot;"),
			c => html.push(c),
		}
	}
}

/// Whether `name` matches the XML [`Name`](https://www.w3.org/TR/xml/#NT-Name) production,
/// which is what the DOM requires of element and attribute names.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(first) if is_name_start_char(first) => chars.all(is_name_char),
		_ => false,
	}
}

fn is_name_start_char(c: char) -> bool {
	matches!(c,
		':' | 'A'..='Z' | '_' | 'a'..='z'
		| '\u{C0}'..='\u{D6}'
		| '\u{D8}'..='\u{F6}'
		| '\u{F8}'..='\u{2FF}'
		| '\u{370}'..='\u{37D}'
		| '\u{37F}'..='\u{1FFF}'
		| '\u{200C}'..='\u{200D}'
		| '\u{2070}'..='\u{218F}'
		| '\u{2C00}'..='\u{2FEF}'
		| '\u{3001}'..='\u{D7FF}'
		| '\u{F900}'..='\u{FDCF}'
		| '\u{FDF0}'..='\u{FFFD}'
		| '\u{10000}'..='\u{EFFFF}'
	)
}

fn is_name_char(c: char) -> bool {
	is_name_start_char(c) || matches!(c, '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}

impl Host for MemoryDocument {
	type Element = MemoryElement;

	#[instrument]
	fn create_element(&self, tag: &str) -> Result<MemoryElement, HostError> {
		if !is_valid_name(tag) {
			return Err(HostError::new(HostError::INVALID_CHARACTER, format!("{:?} is not a valid element name", tag)));
		}
		let tag = tag.to_ascii_lowercase();
		if let Some(known_tags) = &self.known_tags {
			if !known_tags.contains(&tag) {
				return Err(HostError::new(HostError::NOT_SUPPORTED, format!("Unknown element type <{}>", tag)));
			}
		}
		Ok(MemoryElement::new(tag))
	}

	fn set_inner_html(&self, element: &MemoryElement, markup: &str) {
		for child in element.element_children() {
			child.detach();
		}
		let mut children = element.0.children.borrow_mut();
		children.clear();
		if !markup.is_empty() {
			children.push(MemoryNode::Markup(markup.to_owned()));
		}
	}

	fn set_attribute(&self, element: &MemoryElement, name: &str, value: &str) -> Result<(), HostError> {
		if !is_valid_name(name) {
			return Err(HostError::new(HostError::INVALID_CHARACTER, format!("{:?} is not a valid attribute name", name)));
		}
		let name = name.to_ascii_lowercase();
		let mut attributes = element.0.attributes.borrow_mut();
		match attributes.iter_mut().find(|(n, _)| *n == name) {
			Some((_, existing)) => *existing = value.to_owned(),
			None => attributes.push((name, value.to_owned())),
		}
		Ok(())
	}

	fn append_child(&self, parent: &MemoryElement, child: &MemoryElement) -> Result<(), HostError> {
		if child.is_inclusive_ancestor_of(parent) {
			return Err(HostError::new(
				HostError::HIERARCHY_REQUEST,
				format!("<{}> can't be appended to itself or one of its descendants", child.tag()),
			));
		}
		if child.parent().is_some() {
			trace!("Moving <{}> to a new parent.", child.tag());
			child.detach();
		}
		*child.0.parent.borrow_mut() = Rc::downgrade(&parent.0);
		parent.0.children.borrow_mut().push(MemoryNode::Element(child.clone()));
		Ok(())
	}
}

impl HostRead for MemoryDocument {
	fn tag_name(&self, element: &MemoryElement) -> String {
		element.tag().to_owned()
	}

	fn attributes(&self, element: &MemoryElement) -> Vec<(String, String)> {
		element.attributes()
	}

	fn inner_html(&self, element: &MemoryElement) -> String {
		element.inner_html()
	}

	fn child_elements(&self, element: &MemoryElement) -> Option<Vec<MemoryElement>> {
		element
			.children()
			.into_iter()
			.map(|child| match child {
				MemoryNode::Element(element) => Some(element),
				MemoryNode::Markup(_) => None,
			})
			.collect()
	}

	fn child_count(&self, element: &MemoryElement) -> usize {
		element.child_count()
	}
}
