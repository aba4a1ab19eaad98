//! Adjacency-matrix text codec.
//!
//! Export walks the live graph into a pruned, symmetric 0/1 matrix over
//! the compacted node-ID space; import parses such a matrix back into a
//! replacement node/link set. The two directions are deliberately
//! asymmetric for degree-0 nodes: export keeps them in the graph but out
//! of the text, import cannot represent them at all.

use std::collections::HashMap;

use log::warn;

use super::types::{GraphData, GraphLink, GraphNode, LinkId, NodeId};

/// Serialize the graph as whitespace/newline-delimited 0/1 rows.
///
/// Node IDs are sorted ascending and mapped to compact indices; each link
/// sets both `(i, j)` and `(j, i)`; rows and columns whose node has
/// degree 0 are pruned before printing. An empty pruned matrix serializes
/// as an empty string. Output is deterministic for a given snapshot.
///
/// Links referencing an ID with no live node are skipped (the command
/// surface never produces one, but an externally built snapshot can).
pub fn serialize(nodes: &[GraphNode], links: &[GraphLink]) -> String {
	// Map node IDs to a compact index [0..N-1]
	let mut ids: Vec<NodeId> = nodes.iter().map(|n| n.id).collect();
	ids.sort_unstable();
	let id_to_idx: HashMap<NodeId, usize> =
		ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

	let n = ids.len();
	let mut mat = vec![vec![0u8; n]; n];
	for link in links {
		if let (Some(&i), Some(&j)) = (id_to_idx.get(&link.from), id_to_idx.get(&link.to)) {
			mat[i][j] = 1;
			mat[j][i] = 1;
		} else {
			warn!("link {} -> {} references a missing node, skipped", link.from, link.to);
		}
	}

	// Rows (and by symmetry, columns) with at least one '1' survive pruning
	let keep: Vec<usize> = (0..n).filter(|&i| mat[i].iter().any(|&v| v != 0)).collect();

	keep.iter()
		.map(|&i| {
			keep.iter()
				.map(|&j| mat[i][j].to_string())
				.collect::<Vec<_>>()
				.join(" ")
		})
		.collect::<Vec<_>>()
		.join("\n")
}

/// Parse an adjacency matrix into a replacement node/link set.
///
/// Line `i` and token `j` (0-based) stand for the 1-based node IDs `i+1`
/// and `j+1`; the input is taken as unpruned and anchored at ID 1. Only
/// the strict upper triangle is consulted. A token parsing to exactly `1`
/// becomes a link and its endpoints become nodes on first encounter;
/// every other token (including ragged or non-numeric rows) counts as
/// "no edge". Best-effort by design: malformed input never errors.
pub fn parse(text: &str) -> GraphData {
	let mut nodes: Vec<GraphNode> = Vec::new();
	let mut links: Vec<GraphLink> = Vec::new();

	for (i, line) in text.lines().filter(|l| !l.trim().is_empty()).enumerate() {
		for (j, token) in line.split_whitespace().enumerate() {
			if i >= j {
				continue;
			}
			if !matches!(token.parse::<u32>(), Ok(1)) {
				continue;
			}
			let (from, to) = (i as NodeId + 1, j as NodeId + 1);
			links.push(GraphLink {
				id: links.len() as LinkId + 1,
				from,
				to,
			});
			ensure_node(&mut nodes, from);
			ensure_node(&mut nodes, to);
		}
	}

	GraphData { nodes, links }
}

fn ensure_node(nodes: &mut Vec<GraphNode>, id: NodeId) {
	if !nodes.iter().any(|n| n.id == id) {
		nodes.push(GraphNode::new(id));
	}
}
