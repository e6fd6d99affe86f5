use std::io::Write;

use anyhow::Result;
use serde_json::json;

use crate::generation;
use crate::state::GraphState;

/// Print a summary of the loaded graph and whether its source file moved on.
pub fn run(gs: &GraphState, as_json: bool, out: &mut impl Write) -> Result<()> {
    let stats = gs.graph.stats()?;
    let is_stale = generation::is_stale(gs);
    let status = if is_stale { "stale" } else { "loaded" };

    if as_json {
        let value = json!({
            "source": gs.source.display().to_string(),
            "status": status,
            "representation": stats.representation.as_str(),
            "vertex_count": stats.vertex_count,
            "declared_edges": stats.declared_edges,
            "pairs_read": stats.pairs_read,
            "stored_arcs": stats.stored_arcs,
            "mutual_edges": stats.mutual_edges,
            "one_directional_arcs": stats.one_directional_arcs,
            "memory_bytes": stats.memory_bytes,
            "load_time_ms": gs.load_time_ms,
            "loaded_secs_ago": gs.loaded_at.elapsed().as_secs(),
            "is_stale": is_stale,
        });
        writeln!(out, "{value}")?;
        return Ok(());
    }

    writeln!(out, "source:               {}", gs.source.display())?;
    writeln!(out, "status:               {status}")?;
    writeln!(out, "representation:       {}", stats.representation)?;
    writeln!(out, "vertices:             {}", stats.vertex_count)?;
    writeln!(
        out,
        "edges (header/read):  {}/{}",
        stats.declared_edges, stats.pairs_read
    )?;
    writeln!(out, "stored arcs:          {}", stats.stored_arcs)?;
    writeln!(out, "mutual edges:         {}", stats.mutual_edges)?;
    writeln!(out, "one-directional arcs: {}", stats.one_directional_arcs)?;
    writeln!(out, "memory bytes:         {}", stats.memory_bytes)?;
    writeln!(out, "load time ms:         {:.3}", gs.load_time_ms)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::state_from;

    #[test]
    fn test_status_json() {
        let gs = state_from("3 3\n0 1\n1 0\n1 2\n");
        let mut out = Vec::new();
        run(&gs, true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["status"], "loaded");
        assert_eq!(value["representation"], "list");
        assert_eq!(value["vertex_count"], 3);
        assert_eq!(value["mutual_edges"], 1);
        assert_eq!(value["one_directional_arcs"], 1);
        assert_eq!(value["is_stale"], false);
    }

    #[test]
    fn test_status_text() {
        let gs = state_from("2 2\n0 1\n1 0\n");
        let mut out = Vec::new();
        run(&gs, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("status:               loaded"));
        assert!(text.contains("edges (header/read):  2/2"));
    }
}
