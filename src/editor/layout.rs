use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::debug;

use super::types::{GraphData, GraphLink, GraphNode, LinkId, NodeId};
use super::view::GraphView;

/// Gravitational constant the gravity control starts from.
pub const DEFAULT_GRAVITY: f64 = -2000.0;

// Gravity arrives in the vis-style [-5000, 0] range; scale it so the
// default constant lands on the default repulsion charge of 150.
const CHARGE_PER_GRAVITY: f64 = 150.0 / 2000.0;

const FIXED_STEP: f32 = 1.0 / 60.0;
const STABILIZE_CAP: u32 = 100_000;

/// Headless [`GraphView`] backed by a force-directed simulation.
///
/// Keeps a canonical snapshot alongside the simulation; bulk mutations
/// and parameter changes rebuild the simulation from the snapshot,
/// carrying over the settled position of every surviving node. A host
/// drives it with [`ForceLayout::tick`] and feeds pointer-derived
/// selection through the setters.
pub struct ForceLayout {
	graph: ForceGraph<GraphNode, ()>,
	id_to_idx: HashMap<NodeId, DefaultNodeIdx>,
	data: GraphData,
	force_charge: f32,
	running: bool,
	width: f64,
	height: f64,
	selected_nodes: Vec<NodeId>,
	selected_links: Vec<LinkId>,
	matrix_text: String,
	last_notice: Option<String>,
}

impl ForceLayout {
	pub fn new(width: f64, height: f64) -> Self {
		let force_charge = gravity_to_charge(DEFAULT_GRAVITY);
		Self {
			graph: ForceGraph::new(parameters(force_charge)),
			id_to_idx: HashMap::new(),
			data: GraphData::default(),
			force_charge,
			running: true,
			width,
			height,
			selected_nodes: Vec::new(),
			selected_links: Vec::new(),
			matrix_text: String::new(),
			last_notice: None,
		}
	}

	/// Advance the simulation by one frame while physics is on.
	pub fn tick(&mut self, dt: f32) {
		if self.running {
			self.graph.update(dt);
		}
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	pub fn select_nodes(&mut self, ids: Vec<NodeId>) {
		self.selected_nodes = ids;
	}

	pub fn select_links(&mut self, ids: Vec<LinkId>) {
		self.selected_links = ids;
	}

	/// Last matrix text pushed by the editor (the read-only widget).
	pub fn matrix_text(&self) -> &str {
		&self.matrix_text
	}

	/// Last rejection message pushed by the editor, if any.
	pub fn last_notice(&self) -> Option<&str> {
		self.last_notice.as_deref()
	}

	pub fn node_count(&self) -> usize {
		self.data.nodes.len()
	}

	pub fn link_count(&self) -> usize {
		self.data.links.len()
	}

	/// Current node positions, for a renderer.
	pub fn node_positions(&self) -> Vec<(NodeId, f32, f32)> {
		let mut out = Vec::new();
		self.graph.visit_nodes(|node| {
			out.push((node.data.user_data.id, node.x(), node.y()));
		});
		out
	}

	/// Current link segments as endpoint coordinates, for a renderer.
	pub fn link_segments(&self) -> Vec<((f32, f32), (f32, f32))> {
		let mut out = Vec::new();
		self.graph.visit_edges(|n1, n2, _| {
			out.push(((n1.x(), n1.y()), (n2.x(), n2.y())));
		});
		out
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	fn circle_position(&self, i: usize, n: usize) -> (f32, f32) {
		let angle = (i as f64) * 2.0 * PI / (n.max(1) as f64);
		(
			(self.width / 2.0 + 100.0 * angle.cos()) as f32,
			(self.height / 2.0 + 100.0 * angle.sin()) as f32,
		)
	}

	fn rebuild(&mut self) {
		// Carry settled positions over; only genuinely new nodes get a
		// seed position on the circle.
		let mut positions: HashMap<NodeId, (f32, f32)> = HashMap::new();
		self.graph.visit_nodes(|node| {
			positions.insert(node.data.user_data.id, (node.x(), node.y()));
		});

		let mut graph = ForceGraph::new(parameters(self.force_charge));
		let mut id_to_idx = HashMap::new();
		let n = self.data.nodes.len();
		for (i, node) in self.data.nodes.iter().enumerate() {
			let (x, y) = positions
				.get(&node.id)
				.copied()
				.unwrap_or_else(|| self.circle_position(i, n));
			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: node.clone(),
			});
			id_to_idx.insert(node.id, idx);
		}
		for link in &self.data.links {
			if let (Some(&src), Some(&tgt)) = (id_to_idx.get(&link.from), id_to_idx.get(&link.to))
			{
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}
		self.graph = graph;
		self.id_to_idx = id_to_idx;
	}
}

impl GraphView for ForceLayout {
	fn insert_node(&mut self, node: &GraphNode) {
		let (x, y) = self.circle_position(self.data.nodes.len(), self.data.nodes.len() + 1);
		let idx = self.graph.add_node(NodeData {
			x,
			y,
			mass: 10.0,
			is_anchor: false,
			user_data: node.clone(),
		});
		self.id_to_idx.insert(node.id, idx);
		self.data.nodes.push(node.clone());
	}

	fn insert_link(&mut self, link: &GraphLink) {
		if let (Some(&src), Some(&tgt)) =
			(self.id_to_idx.get(&link.from), self.id_to_idx.get(&link.to))
		{
			self.graph.add_edge(src, tgt, EdgeData::default());
		}
		self.data.links.push(link.clone());
	}

	fn remove_nodes(&mut self, ids: &[NodeId]) {
		self.data.nodes.retain(|n| !ids.contains(&n.id));
		self.data
			.links
			.retain(|l| !ids.contains(&l.from) && !ids.contains(&l.to));
		self.selected_nodes.retain(|id| !ids.contains(id));
		self.rebuild();
	}

	fn remove_links(&mut self, ids: &[LinkId]) {
		self.data.links.retain(|l| !ids.contains(&l.id));
		self.selected_links.retain(|id| !ids.contains(id));
		self.rebuild();
	}

	fn replace(&mut self, data: &GraphData) {
		self.data = data.clone();
		self.selected_nodes.clear();
		self.selected_links.clear();
		self.rebuild();
	}

	fn selected_nodes(&self) -> Vec<NodeId> {
		self.selected_nodes.clone()
	}

	fn selected_links(&self) -> Vec<LinkId> {
		self.selected_links.clone()
	}

	fn display_matrix(&mut self, text: &str) {
		self.matrix_text = text.to_string();
	}

	fn notify(&mut self, message: &str) {
		debug!("notice: {}", message);
		self.last_notice = Some(message.to_string());
	}

	fn set_physics(&mut self, enabled: bool) {
		self.running = enabled;
	}

	fn set_gravity(&mut self, gravity: f64) {
		self.force_charge = gravity_to_charge(gravity);
		// Parameters only apply at construction
		self.rebuild();
	}

	fn stop_layout(&mut self) {
		self.running = false;
	}

	fn stabilize(&mut self, max_iterations: u32) {
		for _ in 0..max_iterations.min(STABILIZE_CAP) {
			self.graph.update(FIXED_STEP);
		}
	}

	fn start_layout(&mut self) {
		self.running = true;
	}
}

fn gravity_to_charge(gravity: f64) -> f32 {
	(-gravity * CHARGE_PER_GRAVITY).max(0.0) as f32
}

fn parameters(force_charge: f32) -> SimulationParameters {
	SimulationParameters {
		force_charge,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	}
}
