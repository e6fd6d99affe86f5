use std::path::PathBuf;
use std::time::{Instant, SystemTime};

use anyhow::{anyhow, Result};
use socialgraph_core::SocialGraph;

/// Metadata about the loaded graph state.
pub struct GraphState {
    pub graph: SocialGraph,
    pub source: PathBuf,
    pub load_time_ms: f64,
    pub loaded_at: Instant,
    /// Modification time of the source file when it was loaded.
    pub loaded_generation: Option<SystemTime>,
}

/// Holds at most one loaded graph for the lifetime of the process.
#[derive(Default)]
pub struct GraphSlot {
    state: Option<GraphState>,
}

impl GraphSlot {
    /// Execute a closure with a read reference to the loaded graph.
    pub fn with_graph<R, F: FnOnce(&GraphState) -> Result<R>>(&self, f: F) -> Result<R> {
        let state = self
            .state
            .as_ref()
            .ok_or_else(|| anyhow!("no graph loaded, run `reload` first"))?;
        f(state)
    }

    pub fn get(&self) -> Option<&GraphState> {
        self.state.as_ref()
    }

    /// Replace the loaded graph state. The previous graph is dropped.
    pub fn set_graph(&mut self, state: GraphState) {
        self.state = Some(state);
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_some()
    }
}
