use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use log::{info, warn};

use crate::brain::{
	BrainError, BrainNetwork, BrainState, NetworkSummary, NodeId, activation_set,
	connection_message, generate,
};
use crate::components::force_graph::{ForceGraphCanvas, GraphData};
use crate::config::SimulationConfig;

/// Trunk copies `public/` as a directory, so assets keep the prefix.
const BACKGROUND_IMAGE: &str = "public/brain_background.png";

/// Seed for runs without a fixed `seed` query parameter.
fn entropy_seed() -> u64 {
	let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
	let lo = js_sys::Date::now() as u64;
	(hi << 32) ^ lo
}

/// Simulation page: state picker, regenerate button, neuron selector,
/// network canvas and stats.
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let config = Memo::new(move |_| {
		query.with(|q| SimulationConfig::from_query(|key| q.get(key)))
	});

	let initial_state = config
		.get_untracked()
		.map(|c| c.params.state)
		.unwrap_or_default();
	let (brain_state, set_brain_state) = signal(initial_state);
	let (generation, set_generation) = signal(0u64);
	let (selected, set_selected) = signal(None::<NodeId>);

	let network = Memo::new(move |_| -> Result<BrainNetwork, BrainError> {
		let config = config.get()?;
		let mut params = config.params.clone();
		params.state = brain_state.get();
		let mut rng = config.rng(generation.get(), entropy_seed);
		let network = generate(&params, &mut rng);
		match &network {
			Ok(net) => info!(
				"{} network with {} neurons and {} connections",
				params.state,
				net.node_count(),
				net.edge_count()
			),
			Err(err) => warn!("network generation failed: {err}"),
		}
		network
	});

	// Stale selections fall back to the lowest surviving neuron.
	let focal = Memo::new(move |_| {
		network.with(|net| {
			let net = net.as_ref().ok()?;
			match selected.get() {
				Some(id) if net.contains_node(id) => Some(id),
				_ => net.nodes().next(),
			}
		})
	});

	let graph_data = Signal::derive(move || {
		network.with(|net| match net {
			Ok(net) => {
				let activated = focal
					.get()
					.and_then(|f| activation_set(net, f).ok())
					.unwrap_or_default();
				GraphData::from_network(net, &activated)
			}
			Err(_) => GraphData::default(),
		})
	});

	let neuron_options = move || {
		network.with(|net| {
			net.as_ref()
				.map(|net| net.nodes().collect::<Vec<_>>())
				.unwrap_or_default()
		})
	};

	let connections = move || {
		network.with(|net| {
			let net = net.as_ref().ok()?;
			connection_message(net, focal.get()?).ok()
		})
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="simulation">
				<h1>"🧠 Alzheimer's Disease Neural Network Simulation"</h1>

				<fieldset class="brain-state">
					<legend>"Select Brain State:"</legend>
					{BrainState::ALL
						.into_iter()
						.map(|state| {
							view! {
								<label>
									<input
										type="radio"
										name="brain-state"
										value=state.label()
										prop:checked=move || brain_state.get() == state
										on:change=move |_| {
											info!("brain state set to {}", state);
											set_brain_state.set(state);
										}
									/>
									{state.label()}
								</label>
							}
						})
						.collect_view()}
				</fieldset>

				<button
					class="regenerate"
					on:click=move |_| {
						info!("regenerating network");
						set_generation.update(|g| *g += 1);
					}
				>
					"🔁 Regenerate Network"
				</button>

				{move || {
					let nodes = neuron_options();
					(!nodes.is_empty())
						.then(|| {
							view! {
								<label class="neuron-select">
									"🔎 Select a neuron "
									<select
										prop:value=move || {
											focal.get().map(|f| f.to_string()).unwrap_or_default()
										}
										on:change=move |ev| {
											if let Ok(id) = event_target_value(&ev).parse::<NodeId>() {
												set_selected.set(Some(id));
											}
										}
									>
										{nodes
											.into_iter()
											.map(|id| view! { <option value=id.to_string()>{id}</option> })
											.collect_view()}
									</select>
								</label>
							}
						})
				}}
				<p class="info">{connections}</p>

				<div class="graph-frame">
					<ForceGraphCanvas
						data=graph_data
						select=Some(set_selected)
						background=Some(BACKGROUND_IMAGE.to_string())
					/>
				</div>

				<div class=move || format!("banner {}", brain_state.get().severity().class())>
					{move || brain_state.get().explanation()}
				</div>

				<h3>"🧠 Network Stats"</h3>
				{move || {
					network
						.get()
						.map(|net| {
							let summary = NetworkSummary::of(&net);
							view! {
								<dl class="stats">
									<dt>"Number of Neurons"</dt>
									<dd>{summary.neurons}</dd>
									<dt>"Number of Connections"</dt>
									<dd>{summary.connections}</dd>
									<dt>"Average Weight"</dt>
									<dd>{summary.average_weight_display().to_string()}</dd>
								</dl>
							}
						})
				}}
			</div>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn background_is_served_from_copied_public_dir() {
		let index = include_str!("../../index.html");
		assert!(index.contains(r#"rel="copy-dir" href="public""#));
		let file = BACKGROUND_IMAGE.strip_prefix("public/").unwrap();
		assert!(!file.contains('/'));
		assert!(include_str!("../../public/README.md").contains(file));
	}
}
