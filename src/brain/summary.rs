use std::fmt;

use super::network::BrainNetwork;

/// Display-only network statistics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetworkSummary {
	/// Surviving neurons.
	pub neurons: usize,
	/// Surviving connections.
	pub connections: usize,
	/// `None` when no connection survived.
	pub average_weight: Option<f64>,
}

impl NetworkSummary {
	/// Summarises `network`.
	pub fn of(network: &BrainNetwork) -> Self {
		let (sum, count) = network
			.weights()
			.fold((0.0, 0usize), |(sum, count), w| (sum + w, count + 1));
		Self {
			neurons: network.node_count(),
			connections: network.edge_count(),
			average_weight: (count > 0).then(|| sum / count as f64),
		}
	}

	/// Displayable average weight.
	pub fn average_weight_display(&self) -> AverageWeight {
		AverageWeight(self.average_weight)
	}
}

/// Formats as two decimals, or "N/A" without edges.
#[derive(Clone, Copy, Debug)]
pub struct AverageWeight(Option<f64>);

impl fmt::Display for AverageWeight {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.0 {
			Some(avg) => write!(f, "{avg:.2}"),
			None => f.write_str("N/A"),
		}
	}
}
