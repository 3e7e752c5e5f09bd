//! Brain network core: generation, degradation, activation and stats.
//!
//! Nothing in here touches the DOM; the UI calls [`generate`] once per
//! render and [`activation_set`] whenever the selected neuron changes.

mod activation;
mod error;
mod generator;
mod network;
mod state;
mod summary;

pub use activation::{activation_set, connection_message, neighbors_of};
pub use error::{BrainError, Result};
pub use generator::{
	DEFAULT_EDGE_PROBABILITY, DEFAULT_NODES, GenerationParams, MAX_NODES, degrade, erdos_renyi, generate,
	generate_unpruned,
};
pub use network::{BrainNetwork, Edge, EdgeKey, NodeId};
pub use state::{BrainState, Severity};
pub use summary::{AverageWeight, NetworkSummary};
