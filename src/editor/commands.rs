use log::{debug, info};
use rand::Rng;

use super::error::EditorError;
use super::matrix;
use super::random;
use super::state::GraphState;
use super::types::{LinkId, NodeId};
use super::view::GraphView;

/// Iteration budget handed to the layout engine when an import replaces
/// the whole graph.
const IMPORT_STABILIZE_ITERATIONS: u32 = 100_000;

/// Editor command surface.
///
/// One method per toolbox widget, callable from any UI layer. The editor
/// owns the graph store as the single source of truth;
/// the view is a mirror that also supplies the current selection. Every
/// mutation ends by refreshing the matrix widget, and hosts additionally
/// call [`Editor::on_redraw`] from their redraw/settle event.
pub struct Editor<V> {
	state: GraphState,
	view: V,
}

impl<V: GraphView> Editor<V> {
	pub fn new(view: V) -> Self {
		Self {
			state: GraphState::new(),
			view,
		}
	}

	/// Replace the graph with a fresh random population (5 to 9 nodes,
	/// each pair linked with probability 1/2).
	pub fn seed_random(&mut self, rng: &mut impl Rng) {
		let data = random::random_graph(random::random_node_count(rng), rng);
		info!("seeding {} nodes, {} links", data.nodes.len(), data.links.len());
		self.state.replace(data);
		self.view.replace(&self.state.snapshot());
		self.refresh_matrix();
	}

	/// Add a node, linked to every node selected when the command fired.
	pub fn add_node(&mut self) -> NodeId {
		let selected = self.view.selected_nodes();
		let id = self.state.add_node();
		if let Some(node) = self.state.node(id) {
			self.view.insert_node(node);
		}
		for &from in selected.iter().rev() {
			// A stale selection may name a node that is already gone
			if let Ok(link_id) = self.state.add_link(from, id) {
				if let Some(link) = self.state.link(link_id) {
					self.view.insert_link(link);
				}
			}
		}
		self.refresh_matrix();
		id
	}

	/// Remove the selected nodes along with their links, freeing their
	/// IDs for reuse. Returns how many nodes were removed.
	pub fn remove_selected_nodes(&mut self) -> usize {
		let selected = self.view.selected_nodes();
		if selected.is_empty() {
			return 0;
		}
		let incident = self.state.incident_links(&selected);
		self.state.remove_nodes(&selected);
		self.view.remove_nodes(&selected);
		self.view.remove_links(&incident);
		self.refresh_matrix();
		selected.len()
	}

	/// Link the two currently selected nodes.
	pub fn add_link(&mut self) -> Result<LinkId, EditorError> {
		let selected = self.view.selected_nodes();
		let &[from, to] = selected.as_slice() else {
			return Err(self.reject(EditorError::LinkSelection));
		};
		self.link(from, to)
	}

	/// Link two nodes given as text IDs (the manual link inputs).
	pub fn create_link(&mut self, from: &str, to: &str) -> Result<LinkId, EditorError> {
		let from = self.parse_node_id(from)?;
		let to = self.parse_node_id(to)?;
		self.link(from, to)
	}

	/// Remove the selected links. Returns how many were removed.
	pub fn remove_selected_links(&mut self) -> usize {
		let selected = self.view.selected_links();
		if selected.is_empty() {
			return 0;
		}
		self.state.remove_links(&selected);
		self.view.remove_links(&selected);
		self.refresh_matrix();
		selected.len()
	}

	/// Keep the node set, replace every link with a random set of
	/// `k * (k - 1) / 4` links over the live nodes.
	pub fn randomize(&mut self, rng: &mut impl Rng) {
		let old: Vec<LinkId> = self.state.links().iter().map(|l| l.id).collect();
		let pairs = random::random_links(self.state.nodes(), rng);
		self.state.clear_links();
		self.view.remove_links(&old);
		for (from, to) in pairs {
			// Endpoints are live by construction
			if let Ok(link_id) = self.state.add_link(from, to) {
				if let Some(link) = self.state.link(link_id) {
					self.view.insert_link(link);
				}
			}
		}
		info!("randomized to {} links", self.state.link_count());
		self.refresh_matrix();
	}

	pub fn set_physics(&mut self, enabled: bool) {
		debug!("physics {}", if enabled { "on" } else { "off" });
		self.view.set_physics(enabled);
	}

	pub fn set_gravity(&mut self, gravity: f64) {
		self.view.set_gravity(gravity);
	}

	/// Parse a pasted matrix and replace the whole graph with it, then
	/// restart the layout engine (stop, stabilize, start). Blank input
	/// is a no-op; malformed cells count as "no edge" and never error.
	pub fn import_matrix(&mut self, text: &str) {
		let trimmed = text.trim();
		if trimmed.is_empty() {
			return;
		}
		let data = matrix::parse(trimmed);
		info!("imported {} nodes, {} links", data.nodes.len(), data.links.len());
		self.state.replace(data);
		self.view.replace(&self.state.snapshot());
		self.view.stop_layout();
		self.view.stabilize(IMPORT_STABILIZE_ITERATIONS);
		self.view.start_layout();
		self.refresh_matrix();
	}

	/// Current adjacency-matrix projection of the graph.
	pub fn matrix_text(&self) -> String {
		matrix::serialize(self.state.nodes(), self.state.links())
	}

	/// Redraw/settle hook: push the current matrix text to the view.
	pub fn on_redraw(&mut self) {
		self.refresh_matrix();
	}

	pub fn state(&self) -> &GraphState {
		&self.state
	}

	pub fn view(&self) -> &V {
		&self.view
	}

	pub fn view_mut(&mut self) -> &mut V {
		&mut self.view
	}

	fn link(&mut self, from: NodeId, to: NodeId) -> Result<LinkId, EditorError> {
		let link_id = match self.state.add_link(from, to) {
			Ok(id) => id,
			Err(err) => return Err(self.reject(err)),
		};
		if let Some(link) = self.state.link(link_id) {
			self.view.insert_link(link);
		}
		self.refresh_matrix();
		Ok(link_id)
	}

	fn parse_node_id(&mut self, text: &str) -> Result<NodeId, EditorError> {
		text.trim()
			.parse::<NodeId>()
			.map_err(|_| self.reject(EditorError::InvalidNodeId(text.to_string())))
	}

	fn refresh_matrix(&mut self) {
		let text = self.matrix_text();
		self.view.display_matrix(&text);
	}

	fn reject(&mut self, err: EditorError) -> EditorError {
		self.view.notify(&err.to_string());
		err
	}
}
