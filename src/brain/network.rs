use std::collections::{BTreeMap, BTreeSet};

/// Neuron identifier. Stable across pruning: surviving neurons keep the
/// label they were drawn with.
pub type NodeId = usize;

/// Undirected edge key, smaller endpoint first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeKey(NodeId, NodeId);

impl EdgeKey {
	/// Returns `None` for self-loops.
	pub fn new(a: NodeId, b: NodeId) -> Option<Self> {
		match a.cmp(&b) {
			std::cmp::Ordering::Less => Some(EdgeKey(a, b)),
			std::cmp::Ordering::Greater => Some(EdgeKey(b, a)),
			std::cmp::Ordering::Equal => None,
		}
	}

	/// `(smaller, larger)` endpoint pair.
	pub fn endpoints(self) -> (NodeId, NodeId) {
		(self.0, self.1)
	}
}

/// A weighted connection as yielded by [`BrainNetwork::edges`].
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	/// Smaller endpoint.
	pub source: NodeId,
	/// Larger endpoint.
	pub target: NodeId,
	/// Connection strength in `(0, 1]`.
	pub weight: f64,
}

/// Undirected graph of neurons. Every connection carries a weight in
/// `(0, 1]` from the moment it is inserted.
///
/// Nodes and edges iterate in ascending order, so identical construction
/// sequences yield identical iteration sequences.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrainNetwork {
	adjacency: BTreeMap<NodeId, BTreeSet<NodeId>>,
	edges: BTreeMap<EdgeKey, f64>,
}

impl BrainNetwork {
	/// Network without neurons.
	pub fn new() -> Self {
		Self::default()
	}

	/// Network with nodes `0..n` and no edges.
	pub fn with_nodes(n: usize) -> Self {
		Self {
			adjacency: (0..n).map(|id| (id, BTreeSet::new())).collect(),
			edges: BTreeMap::new(),
		}
	}

	/// Adds a weighted edge, creating missing endpoints. Returns `false` and
	/// leaves the network untouched for self-loops, edges already present and
	/// weights outside `(0, 1]`.
	pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> bool {
		let Some(key) = EdgeKey::new(a, b) else {
			return false;
		};
		if !(weight > 0.0 && weight <= 1.0) || self.edges.contains_key(&key) {
			return false;
		}
		self.edges.insert(key, weight);
		self.adjacency.entry(a).or_default().insert(b);
		self.adjacency.entry(b).or_default().insert(a);
		true
	}

	/// Weight of the connection between `a` and `b`, in either order.
	pub fn weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
		EdgeKey::new(a, b).and_then(|key| self.edges.get(&key).copied())
	}

	/// Removes every node with no incident edge and returns them.
	pub fn remove_isolates(&mut self) -> Vec<NodeId> {
		let isolates: Vec<NodeId> = self.isolates().collect();
		for id in &isolates {
			self.adjacency.remove(id);
		}
		isolates
	}

	/// Nodes of degree 0, ascending.
	pub fn isolates(&self) -> impl Iterator<Item = NodeId> + '_ {
		self.adjacency
			.iter()
			.filter(|(_, neighbors)| neighbors.is_empty())
			.map(|(&id, _)| id)
	}

	/// Whether `id` is part of the network.
	pub fn contains_node(&self, id: NodeId) -> bool {
		self.adjacency.contains_key(&id)
	}

	/// Direct neighbors of `id`, or `None` if it is absent.
	pub fn neighbors(&self, id: NodeId) -> Option<&BTreeSet<NodeId>> {
		self.adjacency.get(&id)
	}

	/// Number of incident edges, or `None` if `id` is absent.
	pub fn degree(&self, id: NodeId) -> Option<usize> {
		self.adjacency.get(&id).map(BTreeSet::len)
	}

	/// Neuron ids, ascending.
	pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
		self.adjacency.keys().copied()
	}

	/// Connections, ascending by endpoint pair.
	pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
		self.edges.iter().map(|(key, &weight)| {
			let (source, target) = key.endpoints();
			Edge {
				source,
				target,
				weight,
			}
		})
	}

	/// Edge weights in edge order.
	pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
		self.edges.values().copied()
	}

	/// Number of neurons.
	pub fn node_count(&self) -> usize {
		self.adjacency.len()
	}

	/// Number of connections.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// True when no neuron is left.
	pub fn is_empty(&self) -> bool {
		self.adjacency.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn edges_are_undirected_and_unique() {
		let mut net = BrainNetwork::with_nodes(3);
		assert!(net.add_edge(2, 0, 0.5));
		assert!(!net.add_edge(0, 2, 0.9));
		assert!(!net.add_edge(1, 1, 0.5));
		assert_eq!(net.edge_count(), 1);

		let edge = net.edges().next().unwrap();
		assert_eq!((edge.source, edge.target, edge.weight), (0, 2, 0.5));
		assert!(net.neighbors(0).unwrap().contains(&2));
		assert!(net.neighbors(2).unwrap().contains(&0));
	}

	#[test]
	fn weights_are_shared_by_both_directions() {
		let mut net = BrainNetwork::new();
		net.add_edge(4, 1, 0.42);
		assert_eq!(net.weight(1, 4), Some(0.42));
		assert_eq!(net.weight(4, 1), Some(0.42));
		assert_eq!(net.weight(0, 1), None);
	}

	#[test]
	fn out_of_range_weights_are_rejected() {
		let mut net = BrainNetwork::with_nodes(2);
		for weight in [0.0, -0.2, 1.01, f64::NAN] {
			assert!(!net.add_edge(0, 1, weight), "weight {weight}");
		}
		assert_eq!(net.edge_count(), 0);
		assert_eq!(net.isolates().count(), 2);
		assert!(net.add_edge(0, 1, 1.0));
		assert_eq!(net.weights().collect::<Vec<_>>(), vec![1.0]);
	}

	#[test]
	fn pruning_keeps_node_labels() {
		let mut net = BrainNetwork::with_nodes(6);
		net.add_edge(1, 4, 0.8);
		net.add_edge(4, 5, 0.8);

		let removed = net.remove_isolates();
		assert_eq!(removed, vec![0, 2, 3]);
		assert_eq!(net.nodes().collect::<Vec<_>>(), vec![1, 4, 5]);
		assert_eq!(net.degree(4), Some(2));
	}

	#[test]
	fn edgeless_network_prunes_to_empty() {
		let mut net = BrainNetwork::with_nodes(4);
		assert_eq!(net.remove_isolates().len(), 4);
		assert!(net.is_empty());
		assert_eq!(net.degree(0), None);
	}
}
