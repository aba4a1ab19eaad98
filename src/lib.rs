//! Interactive graph-editor core.
//!
//! An owned node/link store, a bidirectional adjacency-matrix text codec,
//! random graph generators, and a command surface that keeps a pluggable
//! view/physics collaborator in sync with the store. Rendering and input
//! handling live in the host; [`ForceLayout`] is a provided headless
//! collaborator backed by a force-directed simulation.

// Modules
pub mod editor;

pub use editor::{
	DEFAULT_GRAVITY, Editor, EditorError, ForceLayout, GraphData, GraphLink, GraphNode,
	GraphState, GraphView, LinkId, NodeId, matrix, random_graph, random_links,
	random_node_count,
};
