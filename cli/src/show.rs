use std::io::Write;

use anyhow::Result;
use serde_json::json;
use socialgraph_core::{GraphStore, Store, VertexId};

use crate::state::GraphState;

/// Print the loaded storage as it is held: one neighbor row per vertex for
/// the list, a 0/1 grid for the matrix.
pub fn run(gs: &GraphState, as_json: bool, out: &mut impl Write) -> Result<()> {
    let store = gs.graph.store()?;

    if as_json {
        let rows: Vec<Vec<VertexId>> = (0..store.vertex_count())
            .map(|id| match store {
                Store::List(list) => list
                    .list(id)
                    .map(|seq| seq.iter().copied().collect())
                    .unwrap_or_default(),
                Store::Matrix(matrix) => matrix.arc_targets(id),
            })
            .collect();
        let value = json!({
            "representation": store.representation().as_str(),
            "arcs": rows,
        });
        writeln!(out, "{value}")?;
        return Ok(());
    }

    match store {
        Store::List(list) => {
            for id in 0..list.vertex_count() {
                write!(out, "{id}:")?;
                if let Some(seq) = list.list(id) {
                    for target in seq.iter() {
                        write!(out, " {target}")?;
                    }
                }
                writeln!(out)?;
            }
        }
        Store::Matrix(matrix) => {
            for id in 0..matrix.vertex_count() {
                let Some(row) = matrix.row(id) else { continue };
                let cells: Vec<&str> = row
                    .iter()
                    .map(|&set| if set { "1" } else { "0" })
                    .collect();
                writeln!(out, "{}", cells.join(" "))?;
            }
        }
    }
    Ok(())
}
