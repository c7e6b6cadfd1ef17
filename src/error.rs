use crate::host::HostError;
use thiserror::Error;

/// Why a render call failed.
///
/// Every variant is fatal for its call, and the container is left exactly as it was.
/// Attribute values are deliberately absent from these messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
	#[error("Cannot create element <{tag}>: {source}")]
	UnsupportedTag { tag: String, source: HostError },

	#[error("Cannot set attribute {name:?} on <{tag}>: {source}")]
	InvalidAttribute { tag: String, name: String, source: HostError },

	#[error("Depth limit ({limit}) exceeded at <{tag}>")]
	DepthLimitExceeded { tag: String, limit: usize },

	#[error("Cannot append <{tag}>: {source}")]
	AppendRejected { tag: String, source: HostError },

	#[error("No container element with id {id:?}")]
	ContainerNotFound { id: String },
}
