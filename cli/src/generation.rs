//! Staleness tracking for the loaded graph.
//!
//! The source file's modification time acts as a generation counter: the
//! value seen at load time is kept with the graph, and query commands compare
//! it against the file's current value. When the file moved on and
//! `auto_reload` is set, the graph is reloaded inline before the query runs,
//! at most once per `reload_debounce_sec`.

use std::path::Path;
use std::time::SystemTime;

use anyhow::Result;

use crate::config::Settings;
use crate::load;
use crate::state::{GraphSlot, GraphState};

/// Current generation of the source file, or `None` if it cannot be read.
pub fn fetch_generation(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Whether the source file changed after `state` was loaded.
pub fn is_stale(state: &GraphState) -> bool {
    match (state.loaded_generation, fetch_generation(&state.source)) {
        (Some(loaded), Some(current)) => current > loaded,
        _ => false,
    }
}

/// Reload the graph if it is stale, auto-reload is enabled and the debounce
/// window has passed. Returns true when a reload happened.
pub fn ensure_fresh(slot: &mut GraphSlot, settings: &Settings) -> Result<bool> {
    if !settings.auto_reload {
        return Ok(false);
    }
    let Some(state) = slot.get() else {
        return Ok(false);
    };
    if !is_stale(state) {
        return Ok(false);
    }
    let since_load = state.loaded_at.elapsed().as_secs();
    if since_load < settings.reload_debounce_sec {
        tracing::debug!(
            since_load,
            debounce = settings.reload_debounce_sec,
            "source changed, reload debounced"
        );
        return Ok(false);
    }

    tracing::info!(source = %state.source.display(), "source file changed, reloading");
    let fresh = load::load_graph(settings)?;
    slot.set_graph(fresh);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::Duration;

    use super::*;
    use crate::test_support::settings_for;

    fn reloading(path: &Path) -> Settings {
        Settings {
            auto_reload: true,
            reload_debounce_sec: 0,
            ..settings_for(path)
        }
    }

    #[test]
    fn test_fresh_graph_is_not_stale() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "2 2\n0 1\n1 0\n").unwrap();
        let settings = reloading(file.path());
        let state = load::load_graph(&settings).unwrap();
        assert!(state.loaded_generation.is_some());
        assert!(!is_stale(&state));
    }

    #[test]
    fn test_stale_graph_reloads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "2 0\n").unwrap();
        let settings = reloading(file.path());

        let mut slot = GraphSlot::default();
        let mut state = load::load_graph(&settings).unwrap();
        // Pretend the graph was loaded from an older version of the file.
        state.loaded_generation = state
            .loaded_generation
            .map(|t| t - Duration::from_secs(60));
        slot.set_graph(state);

        std::fs::write(file.path(), "2 2\n0 1\n1 0\n").unwrap();

        assert!(ensure_fresh(&mut slot, &settings).unwrap());
        let reloaded = slot.get().unwrap();
        assert!(reloaded.graph.has_edge(0, 1).unwrap());
        assert!(!ensure_fresh(&mut slot, &settings).unwrap());
    }

    #[test]
    fn test_auto_reload_disabled() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "1 0\n").unwrap();
        let settings = settings_for(file.path());
        let mut slot = GraphSlot::default();
        slot.set_graph(load::load_graph(&settings).unwrap());
        assert!(!ensure_fresh(&mut slot, &settings).unwrap());
    }
}
