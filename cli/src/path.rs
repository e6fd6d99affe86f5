use std::io::Write;

use anyhow::Result;
use serde_json::json;
use socialgraph_core::{Algorithm, GraphError, VertexId};

use crate::state::GraphState;

/// Search for a connection from `from` to `to` and print each hop.
///
/// An exhausted search is a normal outcome and is printed, not returned as
/// an error.
pub fn run(
    gs: &GraphState,
    from: VertexId,
    to: VertexId,
    algorithm: Algorithm,
    as_json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let path = match gs.graph.find_path(from, to, algorithm) {
        Ok(path) => Some(path),
        Err(GraphError::NotFound { .. }) => None,
        Err(e) => return Err(e.into()),
    };

    if as_json {
        let value = json!({
            "from": from,
            "to": to,
            "algorithm": algorithm.as_str(),
            "found": path.is_some(),
            "path": path.as_ref().map(|p| p.vertices().to_vec()),
            "hops": path.as_ref().map(|p| p.hops()),
        });
        writeln!(out, "{value}")?;
        return Ok(());
    }

    match path {
        Some(path) => {
            writeln!(out, "A connection from IDs {from} to {to} EXISTS!")?;
            for (a, b) in path.links() {
                writeln!(out, "{a} is friends with {b}.")?;
            }
        }
        None => writeln!(out, "No connection from IDs {from} to {to}.")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::state_from;

    const CHAIN: &str = "4 6\n0 1\n1 0\n1 2\n2 1\n2 3\n3 2\n";

    #[test]
    fn test_connection_text() {
        let gs = state_from(CHAIN);
        let mut out = Vec::new();
        run(&gs, 0, 3, Algorithm::Dfs, false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "A connection from IDs 0 to 3 EXISTS!\n\
             0 is friends with 1.\n\
             1 is friends with 2.\n\
             2 is friends with 3.\n"
        );
    }

    #[test]
    fn test_no_connection_is_not_an_error() {
        let gs = state_from("3 1\n0 1\n");
        let mut out = Vec::new();
        run(&gs, 0, 1, Algorithm::Bfs, false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "No connection from IDs 0 to 1.\n"
        );
    }

    #[test]
    fn test_connection_json() {
        let gs = state_from(CHAIN);
        let mut out = Vec::new();
        run(&gs, 3, 1, Algorithm::Bfs, true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["found"], true);
        assert_eq!(value["path"], json!([3, 2, 1]));
        assert_eq!(value["hops"], 2);
        assert_eq!(value["algorithm"], "bfs");
    }

    #[test]
    fn test_same_or_invalid_id_is_error() {
        let gs = state_from(CHAIN);
        let mut out = Vec::new();
        assert!(run(&gs, 2, 2, Algorithm::Bfs, false, &mut out).is_err());
        assert!(run(&gs, 0, 4, Algorithm::Bfs, false, &mut out).is_err());
        assert!(out.is_empty());
    }
}
