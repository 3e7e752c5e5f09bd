//! Simulation settings read from the page's query string.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::brain::{BrainError, BrainState, GenerationParams, Result};

/// Settings for the home page, e.g. `/?seed=42&nodes=12&p=0.4&state=Healthy`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationConfig {
	/// Generation inputs; the state is only the page's initial selection.
	pub params: GenerationParams,
	/// Fixed seed; `None` draws fresh entropy per generation.
	pub seed: Option<u64>,
}

impl SimulationConfig {
	/// Builds the config from a query lookup. Missing keys keep their defaults.
	pub fn from_query<F>(get: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut params = GenerationParams::default();
		if let Some(state) = get("state") {
			params.state = state.parse::<BrainState>()?;
		}
		if let Some(nodes) = get("nodes") {
			params.nodes = GenerationParams::parse_node_count(&nodes)?;
		}
		if let Some(p) = get("p") {
			params.edge_probability = GenerationParams::parse_edge_probability(&p)?;
		}
		let seed = get("seed").map(|s| parse_seed(&s)).transpose()?;
		Ok(Self { params, seed })
	}

	/// Random source for the `generation`-th draw. With a fixed seed,
	/// generation 0 uses the seed itself and later regenerations offset it.
	pub fn rng(&self, generation: u64, entropy: impl FnOnce() -> u64) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(generation)),
			None => StdRng::seed_from_u64(entropy()),
		}
	}
}

fn parse_seed(s: &str) -> Result<u64> {
	s.trim()
		.parse()
		.map_err(|_| BrainError::InvalidParameter(format!("seed {s:?} is not an unsigned integer")))
}
