use super::types::{GraphData, GraphLink, GraphNode, LinkId, NodeId};

/// Rendering-layer collaborator.
///
/// The editor owns the canonical [`GraphState`](crate::editor::GraphState)
/// and mirrors every mutation into a view. Any front end (canvas, TUI,
/// test double) implements this; [`ForceLayout`](crate::editor::ForceLayout)
/// is the provided headless implementation.
pub trait GraphView {
	/// Mirror a newly created node.
	fn insert_node(&mut self, node: &GraphNode);
	/// Mirror a newly created link.
	fn insert_link(&mut self, link: &GraphLink);
	/// Drop the given nodes from the view.
	fn remove_nodes(&mut self, ids: &[NodeId]);
	/// Drop the given links from the view.
	fn remove_links(&mut self, ids: &[LinkId]);
	/// Replace the whole mirrored graph (bulk import, initial seed).
	fn replace(&mut self, data: &GraphData);

	/// Nodes currently selected in the view, if any.
	fn selected_nodes(&self) -> Vec<NodeId>;
	/// Links currently selected in the view, if any.
	fn selected_links(&self) -> Vec<LinkId>;

	/// Show the current adjacency-matrix text (the read-only widget).
	fn display_matrix(&mut self, text: &str);
	/// Surface a user-visible rejection message.
	fn notify(&mut self, message: &str);

	/// Toggle the physics simulation.
	fn set_physics(&mut self, enabled: bool);
	/// Adjust the layout engine's gravitational constant.
	fn set_gravity(&mut self, gravity: f64);
	/// Halt the layout engine ahead of a bulk replacement.
	fn stop_layout(&mut self);
	/// Settle the layout, bounded by an iteration budget.
	fn stabilize(&mut self, max_iterations: u32);
	/// Resume the layout engine after a bulk replacement.
	fn start_layout(&mut self);
}
