use std::collections::HashSet;

use rand::Rng;

use super::types::{GraphData, GraphLink, GraphNode, LinkId, NodeId};

/// Node count for a fresh random population.
pub fn random_node_count(rng: &mut impl Rng) -> usize {
	rng.gen_range(5..10)
}

/// Random graph over nodes `1..=node_count`: each unordered pair becomes
/// a link independently with probability 1/2. No self-loops, no
/// duplicates, by construction.
pub fn random_graph(node_count: usize, rng: &mut impl Rng) -> GraphData {
	let nodes: Vec<GraphNode> = (1..=node_count as NodeId).map(GraphNode::new).collect();
	let mut links = Vec::new();
	for i in 0..node_count {
		for j in (i + 1)..node_count {
			if rng.gen_bool(0.5) {
				links.push(GraphLink {
					id: links.len() as LinkId + 1,
					from: nodes[i].id,
					to: nodes[j].id,
				});
			}
		}
	}
	GraphData { nodes, links }
}

/// Rejection-sample unordered pairs of live nodes until `k * (k - 1) / 4`
/// distinct links are collected. Pairs are drawn by position, so a
/// non-contiguous ID set (e.g. after a matrix import) is fine. Fewer
/// than two nodes yield no links.
pub fn random_links(nodes: &[GraphNode], rng: &mut impl Rng) -> Vec<(NodeId, NodeId)> {
	let k = nodes.len();
	if k < 2 {
		return Vec::new();
	}
	// Always below the k(k-1)/2 maximum, so the sampling loop terminates
	let target = k * (k - 1) / 4;
	let mut pairs: HashSet<(NodeId, NodeId)> = HashSet::new();
	while pairs.len() < target {
		let a = nodes[rng.gen_range(0..k)].id;
		let b = nodes[rng.gen_range(0..k)].id;
		if a == b {
			continue;
		}
		pairs.insert(if a < b { (a, b) } else { (b, a) });
	}
	// Set order is arbitrary; sort so downstream link IDs are stable
	let mut out: Vec<_> = pairs.into_iter().collect();
	out.sort_unstable();
	out
}
