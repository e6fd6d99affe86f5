use std::io::Write;

use anyhow::Result;
use serde_json::json;

use crate::state::GraphState;

/// Print the `top_n` vertices with the most friends (0 prints all).
pub fn run(gs: &GraphState, top_n: usize, as_json: bool, out: &mut impl Write) -> Result<()> {
    let ranked = gs.graph.most_connected(top_n)?;

    if as_json {
        let rows: Vec<_> = ranked
            .iter()
            .map(|d| json!({ "id": d.id, "friend_count": d.friend_count }))
            .collect();
        writeln!(out, "{}", serde_json::Value::Array(rows))?;
        return Ok(());
    }

    writeln!(out, "{:>8}  {:>8}", "id", "friends")?;
    for d in &ranked {
        writeln!(out, "{:>8}  {:>8}", d.id, d.friend_count)?;
    }
    Ok(())
}
