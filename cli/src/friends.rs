use std::io::Write;

use anyhow::Result;
use serde_json::json;
use socialgraph_core::VertexId;

use crate::state::GraphState;

/// Print the friend list of `id` followed by its friend count.
pub fn run(gs: &GraphState, id: VertexId, as_json: bool, out: &mut impl Write) -> Result<()> {
    let friends = gs.graph.list_neighbors(id)?;

    if as_json {
        let value = json!({
            "id": id,
            "friends": friends,
            "friend_count": friends.len(),
        });
        writeln!(out, "{value}")?;
        return Ok(());
    }

    writeln!(out, "=== {id}'s FRIEND LIST ===")?;
    for friend in &friends {
        writeln!(out, "{friend}")?;
    }
    writeln!(out, "{id}'s friend count: {}", friends.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::state_from;

    #[test]
    fn test_friend_list_text() {
        let gs = state_from("4 4\n0 1\n1 0\n0 3\n3 0\n");
        let mut out = Vec::new();
        run(&gs, 0, false, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "=== 0's FRIEND LIST ===\n1\n3\n0's friend count: 2\n"
        );
    }

    #[test]
    fn test_friend_list_json() {
        let gs = state_from("3 2\n2 1\n1 2\n");
        let mut out = Vec::new();
        run(&gs, 2, true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["friends"], json!([1]));
        assert_eq!(value["friend_count"], 1);
    }

    #[test]
    fn test_no_friends() {
        let gs = state_from("2 0\n");
        let mut out = Vec::new();
        run(&gs, 1, false, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("1's friend count: 0\n"));
    }

    #[test]
    fn test_invalid_id() {
        let gs = state_from("2 0\n");
        let mut out = Vec::new();
        let err = run(&gs, 7, false, &mut out).unwrap_err();
        assert!(err.to_string().contains("invalid vertex 7"));
        assert!(out.is_empty());
    }
}
