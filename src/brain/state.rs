use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use super::error::BrainError;

/// Degradation preset applied to a freshly drawn network.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BrainState {
	/// All connections kept, strong weights.
	#[default]
	Healthy,
	/// 30% of connections lost, moderate weights.
	EarlyAlzheimer,
	/// 60% of connections lost, weak weights.
	AdvancedAlzheimer,
}

/// How the UI should frame the explanation banner for a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
	/// Healthy network.
	Success,
	/// Partial degradation.
	Warning,
	/// Severe breakdown.
	Error,
}

impl Severity {
	/// CSS class suffix for the banner.
	pub fn class(self) -> &'static str {
		match self {
			Severity::Success => "success",
			Severity::Warning => "warning",
			Severity::Error => "error",
		}
	}
}

impl BrainState {
	/// Every state, in the order the UI lists them.
	pub const ALL: [BrainState; 3] = [
		BrainState::Healthy,
		BrainState::EarlyAlzheimer,
		BrainState::AdvancedAlzheimer,
	];

	/// Fraction of the drawn edges removed before weighting.
	pub fn removal_fraction(self) -> f64 {
		match self {
			BrainState::Healthy => 0.0,
			BrainState::EarlyAlzheimer => 0.3,
			BrainState::AdvancedAlzheimer => 0.6,
		}
	}

	/// Closed range surviving edge weights are drawn from.
	pub fn weight_range(self) -> RangeInclusive<f64> {
		match self {
			BrainState::Healthy => 0.7..=1.0,
			BrainState::EarlyAlzheimer => 0.3..=0.6,
			BrainState::AdvancedAlzheimer => 0.1..=0.3,
		}
	}

	/// Number of edges to remove out of `edge_count`, rounded down.
	pub fn removal_count(self, edge_count: usize) -> usize {
		(self.removal_fraction() * edge_count as f64).floor() as usize
	}

	/// Display label, e.g. "Early Alzheimer".
	pub fn label(self) -> &'static str {
		match self {
			BrainState::Healthy => "Healthy",
			BrainState::EarlyAlzheimer => "Early Alzheimer",
			BrainState::AdvancedAlzheimer => "Advanced Alzheimer",
		}
	}

	/// One-sentence description of what the state does to the network.
	pub fn explanation(self) -> &'static str {
		match self {
			BrainState::Healthy => {
				"Healthy brain: strong and dense connections support efficient signal propagation."
			}
			BrainState::EarlyAlzheimer => {
				"Early Alzheimer: some neurons lose connections; signal propagation is less effective."
			}
			BrainState::AdvancedAlzheimer => {
				"Advanced Alzheimer: disconnected neurons disappear, simulating severe network breakdown."
			}
		}
	}

	/// Banner framing for the explanation.
	pub fn severity(self) -> Severity {
		match self {
			BrainState::Healthy => Severity::Success,
			BrainState::EarlyAlzheimer => Severity::Warning,
			BrainState::AdvancedAlzheimer => Severity::Error,
		}
	}

	fn variant_name(self) -> &'static str {
		match self {
			BrainState::Healthy => "Healthy",
			BrainState::EarlyAlzheimer => "EarlyAlzheimer",
			BrainState::AdvancedAlzheimer => "AdvancedAlzheimer",
		}
	}
}

impl fmt::Display for BrainState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

impl FromStr for BrainState {
	type Err = BrainError;

	/// Accepts either the display label or the variant name, case-insensitively.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		BrainState::ALL
			.into_iter()
			.find(|state| {
				state.label().eq_ignore_ascii_case(s) || state.variant_name().eq_ignore_ascii_case(s)
			})
			.ok_or_else(|| BrainError::InvalidParameter(format!("unrecognized brain state {s:?}")))
	}
}
