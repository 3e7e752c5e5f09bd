use std::collections::BTreeSet;

use super::error::{BrainError, Result};
use super::network::{BrainNetwork, NodeId};

/// Focal neuron plus its direct neighbors. Activation spreads a single hop.
pub fn activation_set(network: &BrainNetwork, focal: NodeId) -> Result<BTreeSet<NodeId>> {
	let neighbors = network
		.neighbors(focal)
		.ok_or(BrainError::NodeNotFound(focal))?;
	let mut activated = neighbors.clone();
	activated.insert(focal);
	Ok(activated)
}

/// Sorted direct neighbors of `focal`.
pub fn neighbors_of(network: &BrainNetwork, focal: NodeId) -> Result<Vec<NodeId>> {
	network
		.neighbors(focal)
		.map(|set| set.iter().copied().collect())
		.ok_or(BrainError::NodeNotFound(focal))
}

/// Info line shown under the neuron selector.
pub fn connection_message(network: &BrainNetwork, focal: NodeId) -> Result<String> {
	let neighbors = neighbors_of(network, focal)?;
	Ok(format!("Neuron {focal} is connected to: {neighbors:?}"))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn star() -> BrainNetwork {
		let mut net = BrainNetwork::with_nodes(6);
		net.add_edge(0, 1, 0.9);
		net.add_edge(0, 2, 0.8);
		net.add_edge(0, 3, 0.75);
		net.add_edge(3, 4, 0.7);
		net
	}

	#[test]
	fn hub_activates_direct_neighbors_only() {
		let net = star();
		let set = activation_set(&net, 0).unwrap();
		assert_eq!(set, BTreeSet::from([0, 1, 2, 3]));
		assert!(!set.contains(&4));
	}

	#[test]
	fn size_is_one_plus_degree() {
		let net = star();
		for id in net.nodes() {
			let set = activation_set(&net, id).unwrap();
			assert_eq!(set.len(), 1 + net.degree(id).unwrap());
			assert!(set.contains(&id));
		}
	}

	#[test]
	fn isolated_node_activates_itself() {
		let net = star();
		assert_eq!(activation_set(&net, 5).unwrap(), BTreeSet::from([5]));
	}

	#[test]
	fn missing_node_is_an_error() {
		let net = star();
		assert_eq!(activation_set(&net, 9), Err(BrainError::NodeNotFound(9)));
		assert_eq!(neighbors_of(&net, 9), Err(BrainError::NodeNotFound(9)));
	}

	#[test]
	fn connection_message_lists_neighbors() {
		let net = star();
		assert_eq!(
			connection_message(&net, 3).unwrap(),
			"Neuron 3 is connected to: [0, 4]"
		);
		assert_eq!(
			connection_message(&net, 5).unwrap(),
			"Neuron 5 is connected to: []"
		);
	}
}
