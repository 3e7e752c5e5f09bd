use std::collections::BTreeSet;

use crate::brain::{BrainNetwork, NodeId};

pub const ACTIVE_COLOR: &str = "#1f77b4";
pub const INACTIVE_COLOR: &str = "#d3d3d3";

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: NodeId,
	pub label: Option<String>,
	pub color: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: NodeId,
	pub target: NodeId,
	pub weight: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// Canvas data for `network`, with `activated` neurons highlighted.
	pub fn from_network(network: &BrainNetwork, activated: &BTreeSet<NodeId>) -> Self {
		let nodes = network
			.nodes()
			.map(|id| GraphNode {
				id,
				label: Some(id.to_string()),
				color: if activated.contains(&id) {
					ACTIVE_COLOR
				} else {
					INACTIVE_COLOR
				}
				.into(),
			})
			.collect();
		let links = network
			.edges()
			.map(|edge| GraphLink {
				source: edge.source,
				target: edge.target,
				weight: edge.weight,
			})
			.collect();
		GraphData { nodes, links }
	}

	/// True when both hold the same neurons and connections, ignoring colors.
	pub fn same_topology(&self, other: &GraphData) -> bool {
		self.links == other.links
			&& self.nodes.len() == other.nodes.len()
			&& self
				.nodes
				.iter()
				.zip(&other.nodes)
				.all(|(a, b)| a.id == b.id)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn network() -> BrainNetwork {
		let mut net = BrainNetwork::new();
		net.add_edge(0, 3, 0.9);
		net.add_edge(3, 7, 0.71);
		net
	}

	#[test]
	fn colors_follow_activation() {
		let data = GraphData::from_network(&network(), &BTreeSet::from([0, 3]));
		let colors: Vec<_> = data.nodes.iter().map(|n| (n.id, n.color.as_str())).collect();
		assert_eq!(
			colors,
			vec![(0, ACTIVE_COLOR), (3, ACTIVE_COLOR), (7, INACTIVE_COLOR)]
		);
		assert_eq!(data.links[1].weight, 0.71);
	}

	#[test]
	fn recoloring_keeps_topology() {
		let net = network();
		let a = GraphData::from_network(&net, &BTreeSet::new());
		let b = GraphData::from_network(&net, &BTreeSet::from([7]));
		assert_ne!(a, b);
		assert!(a.same_topology(&b));
		assert!(!a.same_topology(&GraphData::default()));
	}
}
