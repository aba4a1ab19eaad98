use thiserror::Error;

use super::types::NodeId;

/// User-visible rejections raised by the editor command surface.
///
/// Best-effort paths (matrix import) never produce one of these; only
/// commands whose rejection a UI should surface to the user do.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
	#[error("'{0}' is not a valid node id")]
	InvalidNodeId(String),
	#[error("node {0} does not exist")]
	UnknownNode(NodeId),
	#[error("select two nodes to create a link")]
	LinkSelection,
}
