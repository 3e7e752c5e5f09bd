//! Random network generation and state-dependent degradation.

use std::collections::BTreeSet;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use super::error::{BrainError, Result};
use super::network::{BrainNetwork, EdgeKey};
use super::state::BrainState;

/// Neurons drawn when no count is given.
pub const DEFAULT_NODES: usize = 10;
/// Pair inclusion probability when none is given.
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.5;
/// Largest accepted neuron count. The draw visits every pair on the UI
/// thread, so this bounds one render at about 125k coin flips.
pub const MAX_NODES: usize = 500;

/// Inputs for one generation pass.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationParams {
	/// Degradation preset.
	pub state: BrainState,
	/// Neurons drawn before pruning, labelled `0..nodes`.
	pub nodes: usize,
	/// Independent inclusion probability of each neuron pair.
	pub edge_probability: f64,
}

impl Default for GenerationParams {
	fn default() -> Self {
		Self::new(BrainState::default())
	}
}

impl GenerationParams {
	/// Default node count and edge probability for `state`.
	pub fn new(state: BrainState) -> Self {
		Self {
			state,
			nodes: DEFAULT_NODES,
			edge_probability: DEFAULT_EDGE_PROBABILITY,
		}
	}

	/// Replaces the node count.
	pub fn with_nodes(mut self, nodes: usize) -> Self {
		self.nodes = nodes;
		self
	}

	/// Replaces the edge probability.
	pub fn with_edge_probability(mut self, p: f64) -> Self {
		self.edge_probability = p;
		self
	}

	/// Checks every parameter before any entropy is consumed.
	pub fn validate(&self) -> Result<()> {
		check_node_count(self.nodes)?;
		check_edge_probability(self.edge_probability)
	}

	/// Converts a signed node count, e.g. from a number input.
	pub fn node_count_from(value: i64) -> Result<usize> {
		let nodes = usize::try_from(value).map_err(|_| {
			BrainError::InvalidParameter(format!("node count {value} must not be negative"))
		})?;
		check_node_count(nodes)?;
		Ok(nodes)
	}

	/// Parses and checks a node count from text.
	pub fn parse_node_count(s: &str) -> Result<usize> {
		let value: i64 = s.trim().parse().map_err(|_| {
			BrainError::InvalidParameter(format!("node count {s:?} is not an integer"))
		})?;
		Self::node_count_from(value)
	}

	/// Parses and checks an edge probability from text.
	pub fn parse_edge_probability(s: &str) -> Result<f64> {
		let p: f64 = s.trim().parse().map_err(|_| {
			BrainError::InvalidParameter(format!("edge probability {s:?} is not a number"))
		})?;
		check_edge_probability(p)?;
		Ok(p)
	}
}

fn check_node_count(nodes: usize) -> Result<()> {
	if nodes > MAX_NODES {
		return Err(BrainError::InvalidParameter(format!(
			"node count {nodes} exceeds {MAX_NODES}"
		)));
	}
	Ok(())
}

fn check_edge_probability(p: f64) -> Result<()> {
	if !(0.0..=1.0).contains(&p) {
		return Err(BrainError::InvalidParameter(format!(
			"edge probability {p} is outside [0, 1]"
		)));
	}
	Ok(())
}

/// Erdős–Rényi draw over `0..n`: every pair is kept independently with
/// probability `p`. Pairs are visited and returned in ascending order.
pub fn erdos_renyi<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> Vec<EdgeKey> {
	let mut pairs = Vec::new();
	for u in 0..n {
		for v in (u + 1)..n {
			if rng.gen_bool(p) {
				pairs.extend(EdgeKey::new(u, v));
			}
		}
	}
	pairs
}

/// Removes the state's fraction of `pairs` and weights the survivors, which
/// keep their ascending order.
pub fn degrade<R: Rng + ?Sized>(pairs: &[EdgeKey], state: BrainState, rng: &mut R) -> Vec<(EdgeKey, f64)> {
	let to_remove = state.removal_count(pairs.len());
	let doomed: BTreeSet<EdgeKey> = if to_remove > 0 {
		pairs.choose_multiple(rng, to_remove).copied().collect()
	} else {
		BTreeSet::new()
	};

	let range = state.weight_range();
	pairs
		.iter()
		.filter(|key| !doomed.contains(*key))
		.map(|&key| (key, round2(rng.gen_range(range.clone()))))
		.collect()
}

/// Draws and degrades a network without pruning isolated neurons.
pub fn generate_unpruned<R: Rng + ?Sized>(params: &GenerationParams, rng: &mut R) -> Result<BrainNetwork> {
	params.validate()?;
	let pairs = erdos_renyi(params.nodes, params.edge_probability, rng);
	let survivors = degrade(&pairs, params.state, rng);

	let mut network = BrainNetwork::with_nodes(params.nodes);
	for &(key, weight) in &survivors {
		let (a, b) = key.endpoints();
		network.add_edge(a, b, weight);
	}
	debug!(
		"generated {} network: {} neurons, {} edges drawn, {} removed",
		params.state,
		params.nodes,
		pairs.len(),
		pairs.len() - survivors.len()
	);
	Ok(network)
}

/// Draws, degrades and prunes a network. The result may be empty.
pub fn generate<R: Rng + ?Sized>(params: &GenerationParams, rng: &mut R) -> Result<BrainNetwork> {
	let mut network = generate_unpruned(params, rng)?;
	let pruned = network.remove_isolates();
	if !pruned.is_empty() {
		debug!("pruned isolated neurons {:?}", pruned);
	}
	Ok(network)
}

fn round2(value: f64) -> f64 {
	(value * 100.0).round() / 100.0
}
