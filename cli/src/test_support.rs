//! Graph fixtures shared by the command tests.

use std::path::Path;
use std::time::Instant;

use socialgraph_core::{Algorithm, Representation, SocialGraph};

use crate::config::Settings;
use crate::state::GraphState;

pub fn settings_for(path: &Path) -> Settings {
    Settings {
        source: path.to_path_buf(),
        representation: Representation::List,
        algorithm: Algorithm::Bfs,
        max_memory_mb: 64,
        auto_reload: false,
        reload_debounce_sec: 5,
        json: false,
    }
}

pub fn state_with(text: &str, representation: Representation) -> GraphState {
    GraphState {
        graph: SocialGraph::parse(text, representation).unwrap(),
        source: "<memory>".into(),
        load_time_ms: 0.0,
        loaded_at: Instant::now(),
        loaded_generation: None,
    }
}

pub fn state_from(text: &str) -> GraphState {
    state_with(text, Representation::List)
}
