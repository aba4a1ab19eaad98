use log::debug;

use super::error::EditorError;
use super::types::{GraphData, GraphLink, GraphNode, LinkId, NodeId};

/// Owned graph store: live nodes, links and the free-ID pool.
///
/// Every mutation goes through a method here so the matrix projection can
/// always be recomputed from a consistent snapshot.
pub struct GraphState {
	nodes: Vec<GraphNode>,
	links: Vec<GraphLink>,
	free_ids: Vec<NodeId>,
	next_link_id: LinkId,
}

impl Default for GraphState {
	fn default() -> Self {
		Self::new()
	}
}

impl GraphState {
	pub fn new() -> Self {
		Self {
			nodes: Vec::new(),
			links: Vec::new(),
			free_ids: Vec::new(),
			next_link_id: 1,
		}
	}

	/// Add a node under a freshly allocated ID, labelled `"N {id}"`.
	pub fn add_node(&mut self) -> NodeId {
		let id = self.alloc_id();
		self.nodes.push(GraphNode::new(id));
		debug!("added node {}", id);
		id
	}

	/// Remove the given nodes and every link touching them. Removed IDs
	/// go onto the free pool in argument order, so the last one removed
	/// is the first to be reused.
	pub fn remove_nodes(&mut self, ids: &[NodeId]) {
		for &id in ids {
			if let Some(pos) = self.nodes.iter().position(|n| n.id == id) {
				self.nodes.remove(pos);
				self.free_ids.push(id);
			}
		}
		self.links
			.retain(|l| !ids.contains(&l.from) && !ids.contains(&l.to));
		debug!("removed nodes {:?}", ids);
	}

	/// Add a link between two live nodes. Self-loops and duplicates are
	/// accepted; unknown endpoints are not.
	pub fn add_link(&mut self, from: NodeId, to: NodeId) -> Result<LinkId, EditorError> {
		if !self.has_node(from) {
			return Err(EditorError::UnknownNode(from));
		}
		if !self.has_node(to) {
			return Err(EditorError::UnknownNode(to));
		}
		let id = self.next_link_id;
		self.next_link_id += 1;
		self.links.push(GraphLink { id, from, to });
		debug!("added link {} ({} -> {})", id, from, to);
		Ok(id)
	}

	pub fn remove_links(&mut self, ids: &[LinkId]) {
		self.links.retain(|l| !ids.contains(&l.id));
	}

	pub fn clear_links(&mut self) {
		self.links.clear();
	}

	/// Replace the whole graph (matrix import). Never a merge.
	pub fn replace(&mut self, data: GraphData) {
		// Stale pool entries could collide with the imported IDs.
		self.free_ids.clear();
		self.next_link_id = data.links.iter().map(|l| l.id).max().unwrap_or(0) + 1;
		self.nodes = data.nodes;
		self.links = data.links;
	}

	/// IDs of every link touching one of the given nodes.
	pub fn incident_links(&self, ids: &[NodeId]) -> Vec<LinkId> {
		self.links
			.iter()
			.filter(|l| ids.contains(&l.from) || ids.contains(&l.to))
			.map(|l| l.id)
			.collect()
	}

	pub fn nodes(&self) -> &[GraphNode] {
		&self.nodes
	}

	pub fn links(&self) -> &[GraphLink] {
		&self.links
	}

	pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn link(&self, id: LinkId) -> Option<&GraphLink> {
		self.links.iter().find(|l| l.id == id)
	}

	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	pub fn link_count(&self) -> usize {
		self.links.len()
	}

	pub fn has_node(&self, id: NodeId) -> bool {
		self.nodes.iter().any(|n| n.id == id)
	}

	pub fn snapshot(&self) -> GraphData {
		GraphData {
			nodes: self.nodes.clone(),
			links: self.links.clone(),
		}
	}

	fn alloc_id(&mut self) -> NodeId {
		if let Some(id) = self.free_ids.pop() {
			return id;
		}
		// Imported graphs may leave gaps in the live ID set, so the
		// count-based candidate has to skip over live IDs.
		let mut id = self.nodes.len() as NodeId + 1;
		while self.has_node(id) {
			id += 1;
		}
		id
	}
}
