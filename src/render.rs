//! One-shot materialization of an [`ElementDescription`] into a [`Host`] tree.

use crate::{
	element::{is_reserved_key, Children, ElementDescription},
	error::RenderError,
	host::Host,
};
use tracing::{debug, error, field, instrument, trace, trace_span};

/// Tuning for an [`ElementRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
	depth_limit: usize,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self::new()
	}
}

impl RenderOptions {
	pub const DEFAULT_DEPTH_LIMIT: usize = 64;

	#[must_use]
	pub const fn new() -> Self {
		Self {
			depth_limit: Self::DEFAULT_DEPTH_LIMIT,
		}
	}

	/// Sets how many levels of elements a single render call may create.
	///
	/// `1` allows only the root element.
	#[must_use]
	pub const fn with_depth_limit(self, depth_limit: usize) -> Self {
		Self { depth_limit }
	}

	#[must_use]
	pub const fn depth_limit(self) -> usize {
		self.depth_limit
	}
}

/// Materializes [`ElementDescription`]s into fresh elements and appends them to a container.
///
/// There is no reconciliation: every [`render`](`ElementRenderer::render`) call creates new elements,
/// so rendering the same description twice into the same container results in two siblings.
///
/// # All-or-nothing
///
/// The new subtree is built completely while detached.
/// Only once content, attributes and nested elements were all applied successfully is it appended to the container,
/// which is the single visible mutation of a successful call.
/// On error, the detached subtree is dropped and the container stays unchanged.
#[derive(Debug, Clone)]
pub struct ElementRenderer<H: Host> {
	host: H,
	options: RenderOptions,
}

impl<H: Host> ElementRenderer<H> {
	#[must_use]
	pub fn new(host: H) -> Self {
		Self::with_options(host, RenderOptions::new())
	}

	#[must_use]
	pub fn with_options(host: H, options: RenderOptions) -> Self {
		Self { host, options }
	}

	/// Creates a new element from `description` and appends it to `container` as last child.
	///
	/// # Errors
	///
	/// - [`RenderError::UnsupportedTag`] iff the host can't create one of the described elements,
	/// - [`RenderError::InvalidAttribute`] iff the host rejects an attribute (the remaining ones aren't tried),
	/// - [`RenderError::DepthLimitExceeded`] iff the description nests deeper than [`RenderOptions::depth_limit`],
	/// - [`RenderError::AppendRejected`] iff the host refuses an insertion.
	///
	/// In all of these cases, `container` is not modified.
	#[instrument(skip_all, fields(tag = description.tag.as_str()))]
	pub fn render(&self, description: &ElementDescription, container: &H::Element) -> Result<(), RenderError> {
		let element = self.build(description, self.options.depth_limit())?;

		if let Err(source) = self.host.append_child(container, &element) {
			error!("Failed to mount <{}>: {}", description.tag, source);
			return Err(RenderError::AppendRejected {
				tag: description.tag.clone(),
				source,
			});
		}

		trace!("Mounted <{}>.", description.tag);
		Ok(())
	}

	/// Builds a detached element for `description`, including its content and attributes.
	fn build(&self, description: &ElementDescription, depth_limit: usize) -> Result<H::Element, RenderError> {
		let ElementDescription { tag, attributes, children } = description;

		if depth_limit == 0 {
			error!("Depth limit reached at <{}>", tag);
			return Err(RenderError::DepthLimitExceeded {
				tag: tag.clone(),
				limit: self.options.depth_limit(),
			});
		}

		let span = trace_span!("Creating element", tag = tag.as_str(), "attributes.len()" = attributes.len());
		let _enter = span.enter();

		let element = self.host.create_element(tag).map_err(|source| {
			error!("Failed to create element <{}>: {}", tag, source);
			RenderError::UnsupportedTag { tag: tag.clone(), source }
		})?;

		match children {
			Children::Markup(markup) => {
				let span = trace_span!("Setting inner markup", "markup.len()" = markup.len(), markup = field::Empty);
				if cfg!(feature = "dangerous-logging") {
					span.record("markup", &markup.as_str());
				}
				let _enter = span.enter();
				self.host.set_inner_html(&element, markup);
			}

			Children::Nodes(nodes) => {
				let span = trace_span!("Creating nested elements", "nodes.len()" = nodes.len());
				let _enter = span.enter();
				for node in nodes {
					let child = self.build(node, depth_limit - 1)?;
					self.host.append_child(&element, &child).map_err(|source| {
						error!("Failed to append <{}> to <{}>: {}", node.tag, tag, source);
						RenderError::AppendRejected {
							tag: node.tag.clone(),
							source,
						}
					})?;
				}
			}
		}

		for name in attributes.keys().filter(|name| is_reserved_key(name)) {
			debug!("Skipping reserved key {:?} in attributes of <{}>.", name, tag);
		}

		for (name, value) in description.applied_attributes() {
			let span = trace_span!("Setting attribute", name, value = field::Empty);
			if cfg!(feature = "dangerous-logging") {
				span.record("value", &value);
			}
			let _enter = span.enter();

			self.host.set_attribute(&element, name, value).map_err(|source| {
				error!("Failed to set attribute {:?} on <{}>: {}", name, tag, source);
				RenderError::InvalidAttribute {
					tag: tag.clone(),
					name: name.to_owned(),
					source,
				}
			})?;
		}

		Ok(element)
	}
}

/// Renders `description` into `container` with default [`RenderOptions`].
///
/// # Errors
///
/// See [`ElementRenderer::render`].
pub fn render<H: Host>(host: &H, description: &ElementDescription, container: &H::Element) -> Result<(), RenderError> {
	ElementRenderer::new(host).render(description, container)
}
