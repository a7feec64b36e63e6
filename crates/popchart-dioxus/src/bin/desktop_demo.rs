// File: crates/popchart-dioxus/src/bin/desktop_demo.rs
// Summary: Desktop launcher for the population bar chart; reads an optional TOML config path
// from the first argument.

use popchart_core::Config;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("loading {}: {e}", path.to_string_lossy());
                std::process::exit(2);
            }
        },
        None => Config::default(),
    };

    #[cfg(feature = "desktop")]
    let result = popchart_dioxus::ui::run_demo_ui(config);
    #[cfg(not(feature = "desktop"))]
    let result = popchart_dioxus::run_demo_ui(config);

    if let Err(e) = result {
        tracing::error!("popchart desktop error: {e}");
    }
}
