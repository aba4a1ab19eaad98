use std::collections::HashSet;

use matrix_graph_editor::{
	Editor, EditorError, ForceLayout, GraphData, GraphLink, GraphNode, GraphState, GraphView,
	LinkId, NodeId, matrix,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Recording view double: mirrors the store and logs layout calls.
#[derive(Default)]
struct MockView {
	nodes: Vec<NodeId>,
	links: Vec<LinkId>,
	selected_nodes: Vec<NodeId>,
	selected_links: Vec<LinkId>,
	matrix: String,
	notices: Vec<String>,
	events: Vec<String>,
	physics: Option<bool>,
	gravity: Option<f64>,
}

impl GraphView for MockView {
	fn insert_node(&mut self, node: &GraphNode) {
		self.nodes.push(node.id);
	}

	fn insert_link(&mut self, link: &GraphLink) {
		self.links.push(link.id);
	}

	fn remove_nodes(&mut self, ids: &[NodeId]) {
		self.nodes.retain(|id| !ids.contains(id));
	}

	fn remove_links(&mut self, ids: &[LinkId]) {
		self.links.retain(|id| !ids.contains(id));
	}

	fn replace(&mut self, data: &GraphData) {
		self.nodes = data.nodes.iter().map(|n| n.id).collect();
		self.links = data.links.iter().map(|l| l.id).collect();
		self.events.push("replace".into());
	}

	fn selected_nodes(&self) -> Vec<NodeId> {
		self.selected_nodes.clone()
	}

	fn selected_links(&self) -> Vec<LinkId> {
		self.selected_links.clone()
	}

	fn display_matrix(&mut self, text: &str) {
		self.matrix = text.to_string();
	}

	fn notify(&mut self, message: &str) {
		self.notices.push(message.to_string());
	}

	fn set_physics(&mut self, enabled: bool) {
		self.physics = Some(enabled);
	}

	fn set_gravity(&mut self, gravity: f64) {
		self.gravity = Some(gravity);
	}

	fn stop_layout(&mut self) {
		self.events.push("stop".into());
	}

	fn stabilize(&mut self, max_iterations: u32) {
		self.events.push(format!("stabilize({})", max_iterations));
	}

	fn start_layout(&mut self) {
		self.events.push("start".into());
	}
}

fn pairs(state: &GraphState) -> HashSet<(NodeId, NodeId)> {
	state
		.links()
		.iter()
		.map(|l| {
			if l.from < l.to {
				(l.from, l.to)
			} else {
				(l.to, l.from)
			}
		})
		.collect()
}

#[test]
fn freed_ids_are_reused_lifo() {
	let mut state = GraphState::new();
	assert_eq!(state.add_node(), 1);
	assert_eq!(state.add_node(), 2);
	assert_eq!(state.add_node(), 3);

	state.remove_nodes(&[3]);
	assert_eq!(state.add_node(), 3);

	state.remove_nodes(&[2, 3]);
	assert_eq!(state.add_node(), 3);
	assert_eq!(state.add_node(), 2);
	assert_eq!(state.add_node(), 4);
}

#[test]
fn allocator_skips_live_ids_after_import() {
	let mut state = GraphState::new();
	// Matrix with an isolated middle index: imported IDs are {1, 3}
	state.replace(matrix::parse("0 0 1\n0 0 0\n1 0 0"));
	assert!(state.has_node(1) && state.has_node(3) && !state.has_node(2));
	// count+1 would collide with live node 3
	assert_eq!(state.add_node(), 4);
}

#[test]
fn replace_clears_the_free_pool() {
	let mut state = GraphState::new();
	state.add_node();
	state.add_node();
	state.add_node();
	state.remove_nodes(&[2]);
	state.replace(matrix::parse("0 1\n1 0"));
	// A stale pooled 2 would collide with the imported node 2
	assert_eq!(state.add_node(), 3);
}

#[test]
fn removing_a_node_drops_incident_links() {
	let mut state = GraphState::new();
	let a = state.add_node();
	let b = state.add_node();
	let c = state.add_node();
	state.add_link(a, b).unwrap();
	state.add_link(b, c).unwrap();
	state.add_link(a, c).unwrap();

	state.remove_nodes(&[b]);
	assert_eq!(state.node_count(), 2);
	assert_eq!(pairs(&state), HashSet::from([(a, c)]));
}

#[test]
fn links_require_live_endpoints() {
	let mut state = GraphState::new();
	state.add_node();
	assert_eq!(state.add_link(1, 9), Err(EditorError::UnknownNode(9)));
	assert_eq!(state.add_link(7, 1), Err(EditorError::UnknownNode(7)));
	assert_eq!(state.link_count(), 0);
}

#[test]
fn add_node_links_to_every_selected_node() {
	let mut editor = Editor::new(MockView::default());
	editor.add_node();
	editor.add_node();
	editor.add_node();
	assert_eq!(editor.state().link_count(), 0);

	editor.view_mut().selected_nodes = vec![1, 3];
	let id = editor.add_node();
	assert_eq!(id, 4);
	assert_eq!(pairs(editor.state()), HashSet::from([(1, 4), (3, 4)]));
	assert_eq!(editor.view().links.len(), 2);
	assert_eq!(editor.view().matrix, "0 0 1\n0 0 1\n1 1 0");
}

#[test]
fn remove_selected_nodes_updates_view_and_matrix() {
	let mut editor = Editor::new(MockView::default());
	editor.add_node();
	editor.add_node();
	editor.add_node();
	editor.create_link("1", "2").unwrap();
	editor.create_link("2", "3").unwrap();

	editor.view_mut().selected_nodes = vec![2];
	assert_eq!(editor.remove_selected_nodes(), 1);
	assert_eq!(editor.state().node_count(), 2);
	assert_eq!(editor.state().link_count(), 0);
	assert_eq!(editor.view().nodes, vec![1, 3]);
	assert!(editor.view().links.is_empty());
	assert_eq!(editor.view().matrix, "");

	// Nothing selected: a quiet no-op
	editor.view_mut().selected_nodes.clear();
	assert_eq!(editor.remove_selected_nodes(), 0);
}

#[test]
fn add_link_needs_exactly_two_selected() {
	let mut editor = Editor::new(MockView::default());
	editor.add_node();
	editor.add_node();
	editor.add_node();

	editor.view_mut().selected_nodes = vec![1];
	assert_eq!(editor.add_link(), Err(EditorError::LinkSelection));
	editor.view_mut().selected_nodes = vec![1, 2, 3];
	assert_eq!(editor.add_link(), Err(EditorError::LinkSelection));
	assert_eq!(editor.view().notices.len(), 2);
	assert_eq!(editor.state().link_count(), 0);

	editor.view_mut().selected_nodes = vec![1, 3];
	editor.add_link().unwrap();
	assert_eq!(pairs(editor.state()), HashSet::from([(1, 3)]));
}

#[test]
fn create_link_rejects_bad_input() {
	let mut editor = Editor::new(MockView::default());
	editor.add_node();
	editor.add_node();

	let err = editor.create_link("abc", "2").unwrap_err();
	assert_eq!(err, EditorError::InvalidNodeId("abc".into()));
	assert_eq!(editor.create_link("1", "9"), Err(EditorError::UnknownNode(9)));
	assert_eq!(editor.view().notices.len(), 2);
	assert_eq!(editor.state().link_count(), 0);

	editor.create_link(" 1 ", "2").unwrap();
	assert_eq!(editor.state().link_count(), 1);
}

#[test]
fn remove_selected_links_only_touches_links() {
	let mut editor = Editor::new(MockView::default());
	editor.add_node();
	editor.add_node();
	let id = editor.create_link("1", "2").unwrap();

	editor.view_mut().selected_links = vec![id];
	assert_eq!(editor.remove_selected_links(), 1);
	assert_eq!(editor.state().node_count(), 2);
	assert_eq!(editor.state().link_count(), 0);
	assert_eq!(editor.view().matrix, "");
}

#[test]
fn randomize_keeps_nodes_and_hits_the_target_count() {
	let mut editor = Editor::new(MockView::default());
	for _ in 0..8 {
		editor.add_node();
	}
	let mut rng = StdRng::seed_from_u64(3);
	editor.randomize(&mut rng);

	// target = floor(8 * 7 / 4)
	assert_eq!(editor.state().node_count(), 8);
	assert_eq!(editor.state().link_count(), 14);
	let set = pairs(editor.state());
	assert_eq!(set.len(), 14);
	for (a, b) in set {
		assert_ne!(a, b);
		assert!(editor.state().has_node(a) && editor.state().has_node(b));
	}
	assert_eq!(editor.view().links.len(), 14);
}

#[test]
fn randomize_with_one_node_yields_no_links() {
	let mut editor = Editor::new(MockView::default());
	editor.add_node();
	let mut rng = StdRng::seed_from_u64(9);
	editor.randomize(&mut rng);
	assert_eq!(editor.state().link_count(), 0);
}

#[test]
fn seed_random_builds_a_small_population() {
	let mut editor = Editor::new(MockView::default());
	let mut rng = StdRng::seed_from_u64(11);
	editor.seed_random(&mut rng);

	let n = editor.state().node_count();
	assert!((5..=9).contains(&n), "population was {}", n);
	assert_eq!(editor.view().nodes.len(), n);
	assert_eq!(editor.view().links.len(), editor.state().link_count());
	for link in editor.state().links() {
		assert!(editor.state().has_node(link.from));
		assert!(editor.state().has_node(link.to));
		assert_ne!(link.from, link.to);
	}
}

#[test]
fn import_replaces_graph_and_restarts_layout_in_order() {
	let mut editor = Editor::new(MockView::default());
	editor.add_node();
	editor.add_node();
	editor.create_link("1", "2").unwrap();

	editor.import_matrix("0 1 0\n1 0 1\n0 1 0");
	assert_eq!(editor.state().node_count(), 3);
	assert_eq!(pairs(editor.state()), HashSet::from([(1, 2), (2, 3)]));
	assert_eq!(
		editor.view().events,
		vec!["replace", "stop", "stabilize(100000)", "start"]
	);
	assert_eq!(editor.view().matrix, "0 1 0\n1 0 1\n0 1 0");
}

#[test]
fn blank_import_is_a_no_op() {
	let mut editor = Editor::new(MockView::default());
	editor.add_node();
	editor.add_node();
	editor.create_link("1", "2").unwrap();

	editor.import_matrix("   \n\t\n");
	assert_eq!(editor.state().node_count(), 2);
	assert_eq!(editor.state().link_count(), 1);
	assert!(editor.view().events.is_empty());
}

#[test]
fn physics_and_gravity_are_forwarded() {
	let mut editor = Editor::new(MockView::default());
	editor.set_physics(false);
	editor.set_gravity(-1200.0);
	assert_eq!(editor.view().physics, Some(false));
	assert_eq!(editor.view().gravity, Some(-1200.0));
}

#[test]
fn redraw_hook_pushes_the_matrix_text() {
	let mut editor = Editor::new(MockView::default());
	editor.add_node();
	editor.add_node();
	editor.create_link("1", "2").unwrap();

	editor.view_mut().matrix.clear();
	editor.on_redraw();
	assert_eq!(editor.view().matrix, "0 1\n1 0");
	assert_eq!(editor.matrix_text(), "0 1\n1 0");
}

#[test]
fn force_layout_mirrors_commands() {
	let mut editor = Editor::new(ForceLayout::new(800.0, 600.0));
	let a = editor.add_node();
	let b = editor.add_node();
	editor.create_link(&a.to_string(), &b.to_string()).unwrap();

	assert_eq!(editor.view().node_count(), 2);
	assert_eq!(editor.view().link_count(), 1);
	assert_eq!(editor.view().matrix_text(), "0 1\n1 0");
	assert_eq!(editor.view().node_positions().len(), 2);
	assert_eq!(editor.view().link_segments().len(), 1);
}

#[test]
fn force_layout_selection_drives_removal() {
	let mut editor = Editor::new(ForceLayout::new(640.0, 480.0));
	let a = editor.add_node();
	let b = editor.add_node();
	editor.create_link(&a.to_string(), &b.to_string()).unwrap();

	editor.view_mut().select_nodes(vec![b]);
	assert_eq!(editor.remove_selected_nodes(), 1);
	assert_eq!(editor.view().node_count(), 1);
	assert_eq!(editor.view().link_count(), 0);
	assert_eq!(editor.view().matrix_text(), "");
	// The freed ID comes back on the next add
	assert_eq!(editor.add_node(), b);
}

#[test]
fn force_layout_physics_toggle_freezes_positions() {
	let mut editor = Editor::new(ForceLayout::new(800.0, 600.0));
	editor.add_node();
	editor.add_node();
	editor.create_link("1", "2").unwrap();

	editor.set_physics(false);
	assert!(!editor.view().is_running());
	let before = editor.view().node_positions();
	editor.view_mut().tick(0.016);
	assert_eq!(before, editor.view().node_positions());

	editor.set_physics(true);
	for _ in 0..30 {
		editor.view_mut().tick(0.016);
	}
	assert_eq!(editor.view().node_positions().len(), 2);
}
