use thiserror::Error;

use super::network::NodeId;

/// Errors raised by network generation and activation lookup.
///
/// Degenerate networks (no edges, no neurons) are valid outputs and never
/// show up here.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum BrainError {
	/// A generation parameter is out of its domain.
	#[error("invalid parameter: {0}")]
	InvalidParameter(String),

	/// The focal neuron is not part of the current network.
	#[error("neuron {0} not found in network")]
	NodeNotFound(NodeId),
}

/// Result alias for the `brain` module.
pub type Result<T> = std::result::Result<T, BrainError>;
