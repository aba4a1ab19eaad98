/// Node identifier: integer >= 1, unique among live nodes.
pub type NodeId = u32;

/// Link identifier assigned by the graph store, unique for its lifetime.
pub type LinkId = u64;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphNode {
	pub id: NodeId,
	pub label: String,
}

impl GraphNode {
	pub fn new(id: NodeId) -> Self {
		Self {
			id,
			label: format!("N {}", id),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphLink {
	pub id: LinkId,
	pub from: NodeId,
	pub to: NodeId,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}
