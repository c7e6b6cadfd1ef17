//! The immutable input model: one [`ElementDescription`] per node to create.

use indexmap::IndexMap;

/// The attribute key that older property bags used to smuggle content through.
///
/// It is never applied as an attribute, in any ASCII case.
pub const RESERVED_CHILDREN_KEY: &str = "children";

/// Whether `name` is [`RESERVED_CHILDREN_KEY`] once hosts fold it to lowercase.
#[must_use]
pub fn is_reserved_key(name: &str) -> bool {
	name.eq_ignore_ascii_case(RESERVED_CHILDREN_KEY)
}

/// Describes one element to create, with its attributes and content.
///
/// Attributes and children are separate fields, so child data can't end up in the attribute map by accident.
/// (An explicit `"children"` entry in [`attributes`](`ElementDescription::attributes`) is still skipped when rendering.)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementDescription {
	/// The element name, like `"a"` or `"div"`.
	pub tag: String,
	/// Applied in insertion order.
	#[cfg_attr(feature = "serde", serde(default))]
	pub attributes: IndexMap<String, String>,
	#[cfg_attr(feature = "serde", serde(default))]
	pub children: Children,
}

/// Content of an [`ElementDescription`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Children {
	/// Raw inner markup, assigned verbatim.
	///
	/// **This is not escaped.** Callers are responsible for any sanitization they need.
	Markup(String),
	/// Nested elements, rendered in order.
	Nodes(Vec<ElementDescription>),
}

impl Default for Children {
	fn default() -> Self {
		Self::Markup(String::new())
	}
}

impl From<&str> for Children {
	fn from(markup: &str) -> Self {
		Self::Markup(markup.to_owned())
	}
}

impl From<String> for Children {
	fn from(markup: String) -> Self {
		Self::Markup(markup)
	}
}

impl From<Vec<ElementDescription>> for Children {
	fn from(nodes: Vec<ElementDescription>) -> Self {
		Self::Nodes(nodes)
	}
}

impl ElementDescription {
	#[must_use]
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			tag: tag.into(),
			attributes: IndexMap::new(),
			children: Children::default(),
		}
	}

	/// Builds a description from a loose property bag.
	///
	/// A [`"children"`](`RESERVED_CHILDREN_KEY`) property is dropped, since content is passed separately.
	#[must_use]
	pub fn from_props<K, V>(tag: impl Into<String>, props: impl IntoIterator<Item = (K, V)>, children: impl Into<Children>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		Self {
			tag: tag.into(),
			attributes: props
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.filter(|(k, _)| !is_reserved_key(k))
				.collect(),
			children: children.into(),
		}
	}

	/// Adds or replaces an attribute.
	#[must_use]
	pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(name.into(), value.into());
		self
	}

	/// Replaces the content with raw markup.
	#[must_use]
	pub fn markup(mut self, markup: impl Into<String>) -> Self {
		self.children = Children::Markup(markup.into());
		self
	}

	/// Appends a nested element.
	///
	/// Markup content set before is discarded.
	#[must_use]
	pub fn child(mut self, child: ElementDescription) -> Self {
		match &mut self.children {
			Children::Nodes(nodes) => nodes.push(child),
			Children::Markup(_) => self.children = Children::Nodes(vec![child]),
		}
		self
	}

	/// Iterates over the attributes that will actually be applied, in order and without the reserved `"children"` key.
	pub fn applied_attributes(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attributes
			.iter()
			.filter(|(name, _)| !is_reserved_key(name))
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}
}
