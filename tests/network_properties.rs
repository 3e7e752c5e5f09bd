//! End-to-end checks of generation and activation over many seeds.

use std::collections::BTreeSet;

use brain_network_sim::brain::{
	BrainError, BrainNetwork, BrainState, GenerationParams, NetworkSummary, activation_set,
	erdos_renyi, generate, generate_unpruned,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SEEDS: std::ops::Range<u64> = 0..200;

fn edge_set(network: &BrainNetwork) -> Vec<(usize, usize, f64)> {
	network
		.edges()
		.map(|e| (e.source, e.target, e.weight))
		.collect()
}

#[test]
fn weights_stay_inside_state_range() {
	for state in BrainState::ALL {
		let range = state.weight_range();
		for seed in SEEDS {
			let network = generate(&GenerationParams::new(state), &mut StdRng::seed_from_u64(seed)).unwrap();
			for edge in network.edges() {
				let w = edge.weight;
				assert!(range.contains(&w), "{state} seed {seed}: weight {w}");
				assert!(w > 0.0 && w <= 1.0);
				assert_eq!((w * 100.0).round() / 100.0, w);
			}
		}
	}
}

#[test]
fn removal_count_matches_fraction_of_drawn_edges() {
	for state in BrainState::ALL {
		for seed in SEEDS {
			// The drawing step consumes the same entropy as generation's first phase.
			let drawn = erdos_renyi(10, 0.5, &mut StdRng::seed_from_u64(seed)).len();
			let network =
				generate_unpruned(&GenerationParams::new(state), &mut StdRng::seed_from_u64(seed)).unwrap();
			let expected_removed = match state {
				BrainState::Healthy => 0,
				BrainState::EarlyAlzheimer => drawn * 3 / 10,
				BrainState::AdvancedAlzheimer => drawn * 6 / 10,
			};
			assert_eq!(network.edge_count(), drawn - expected_removed, "{state} seed {seed}");
		}
	}
}

#[test]
fn no_isolates_survive_pruning() {
	for state in BrainState::ALL {
		for p in [0.05, 0.2, 0.5, 0.9] {
			for seed in 0..50 {
				let params = GenerationParams::new(state).with_nodes(15).with_edge_probability(p);
				let network = generate(&params, &mut StdRng::seed_from_u64(seed)).unwrap();
				for id in network.nodes() {
					assert!(network.degree(id).unwrap() >= 1, "{state} p={p} seed {seed}: isolate {id}");
				}
			}
		}
	}
}

#[test]
fn pruning_preserves_node_labels() {
	for seed in SEEDS {
		let params = GenerationParams::new(BrainState::AdvancedAlzheimer);
		let unpruned = generate_unpruned(&params, &mut StdRng::seed_from_u64(seed)).unwrap();
		let pruned = generate(&params, &mut StdRng::seed_from_u64(seed)).unwrap();

		let expected: Vec<usize> = unpruned
			.nodes()
			.filter(|&id| unpruned.degree(id) != Some(0))
			.collect();
		assert_eq!(pruned.nodes().collect::<Vec<_>>(), expected);
		assert_eq!(edge_set(&pruned), edge_set(&unpruned));
		assert!(pruned.nodes().all(|id| id < 10));
	}
}

#[test]
fn seeded_generation_is_reproducible() {
	let params = GenerationParams::new(BrainState::Healthy);
	let a = generate(&params, &mut StdRng::seed_from_u64(42)).unwrap();
	let b = generate(&params, &mut StdRng::seed_from_u64(42)).unwrap();
	assert_eq!(a, b);
	assert_eq!(edge_set(&a), edge_set(&b));

	let differing = (43..53)
		.map(|seed| generate(&params, &mut StdRng::seed_from_u64(seed)).unwrap())
		.filter(|other| edge_set(other) != edge_set(&a))
		.count();
	assert!(differing > 0);
}

#[test]
fn healthy_keeps_every_drawn_edge() {
	for seed in SEEDS {
		let drawn = erdos_renyi(10, 0.5, &mut StdRng::seed_from_u64(seed)).len();
		let network =
			generate(&GenerationParams::new(BrainState::Healthy), &mut StdRng::seed_from_u64(seed)).unwrap();
		assert_eq!(network.edge_count(), drawn);
	}
}

#[test]
fn zero_nodes_and_zero_probability_are_valid() {
	let mut rng = StdRng::seed_from_u64(1);
	let empty = generate(&GenerationParams::default().with_nodes(0), &mut rng).unwrap();
	assert!(empty.is_empty());

	let sparse = generate(&GenerationParams::default().with_edge_probability(0.0), &mut rng).unwrap();
	assert!(sparse.is_empty());
	let summary = NetworkSummary::of(&sparse);
	assert_eq!((summary.neurons, summary.connections), (0, 0));
	assert_eq!(summary.average_weight_display().to_string(), "N/A");
}

#[test]
fn invalid_parameters_fail_before_generation() {
	let mut rng = StdRng::seed_from_u64(1);
	let err = generate(&GenerationParams::default().with_edge_probability(1.2), &mut rng).unwrap_err();
	assert!(matches!(err, BrainError::InvalidParameter(_)));
	assert!(matches!(
		"Mild Alzheimer".parse::<BrainState>(),
		Err(BrainError::InvalidParameter(_))
	));
	assert!(matches!(
		GenerationParams::node_count_from(-1),
		Err(BrainError::InvalidParameter(_))
	));
}

#[test]
fn activation_covers_focal_and_neighbors() {
	for seed in 0..50 {
		let network = generate(
			&GenerationParams::new(BrainState::EarlyAlzheimer),
			&mut StdRng::seed_from_u64(seed),
		)
		.unwrap();
		for focal in network.nodes() {
			let activated = activation_set(&network, focal).unwrap();
			assert!(activated.contains(&focal));
			assert_eq!(activated.len(), 1 + network.degree(focal).unwrap());
			let neighbors: BTreeSet<_> = network.neighbors(focal).unwrap().clone();
			assert!(activated.iter().filter(|&&id| id != focal).all(|id| neighbors.contains(id)));
		}
	}
}

#[test]
fn stale_selection_is_not_found() {
	for seed in SEEDS {
		let params = GenerationParams::new(BrainState::AdvancedAlzheimer);
		let network = generate(&params, &mut StdRng::seed_from_u64(seed)).unwrap();
		if let Some(missing) = (0..10).find(|id| !network.contains_node(*id)) {
			assert_eq!(
				activation_set(&network, missing),
				Err(BrainError::NodeNotFound(missing))
			);
			return;
		}
	}
	panic!("advanced degradation never pruned a neuron in 200 seeds");
}
