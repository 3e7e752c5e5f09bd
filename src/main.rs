//! Browser entry point: mounts the simulation app.

use brain_network_sim::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
