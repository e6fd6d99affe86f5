use std::time::Instant;

use anyhow::{Context, Result};
use socialgraph_core::SocialGraph;

use crate::config::Settings;
use crate::generation;
use crate::state::GraphState;

/// Load the configured source file into a fresh [`GraphState`].
pub fn load_graph(settings: &Settings) -> Result<GraphState> {
    let start = Instant::now();
    // Taken before reading so a write during the load shows up as stale.
    let generation = generation::fetch_generation(&settings.source);

    let graph = SocialGraph::load_with(&settings.source, &settings.load_options())
        .with_context(|| format!("failed to load '{}'", settings.source.display()))?;

    let load_time_ms = start.elapsed().as_secs_f64() * 1000.0;
    tracing::info!(
        source = %settings.source.display(),
        representation = %settings.representation,
        load_time_ms,
        "graph ready"
    );

    Ok(GraphState {
        graph,
        source: settings.source.clone(),
        load_time_ms,
        loaded_at: Instant::now(),
        loaded_generation: generation,
    })
}
