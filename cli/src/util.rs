use socialgraph_core::{Algorithm, Representation, VertexId};

/// Parse a representation name into a [`Representation`].
///
/// Accepts: "list", "matrix" and their short forms (case-insensitive).
pub fn parse_representation(s: &str) -> Result<Representation, String> {
    match s.to_lowercase().as_str() {
        "list" | "adjacency-list" | "l" | "1" => Ok(Representation::List),
        "matrix" | "adjacency-matrix" | "m" | "2" => Ok(Representation::Matrix),
        other => Err(format!(
            "invalid representation '{}' — use 'list' or 'matrix'",
            other
        )),
    }
}

/// Parse a search name into an [`Algorithm`].
pub fn parse_algorithm(s: &str) -> Result<Algorithm, String> {
    match s.to_lowercase().as_str() {
        "bfs" | "breadth" | "1" => Ok(Algorithm::Bfs),
        "dfs" | "depth" | "2" => Ok(Algorithm::Dfs),
        other => Err(format!("invalid algorithm '{}' — use 'bfs' or 'dfs'", other)),
    }
}

/// Validate that a vertex ID is a non-negative integer.
pub fn parse_vertex(s: &str) -> Result<VertexId, String> {
    match s.parse::<i64>() {
        Ok(v) if v >= 0 => Ok(v as VertexId),
        Ok(v) => Err(format!("vertex ID must be non-negative, got {}", v)),
        Err(_) => Err(format!("vertex ID must be an integer, got '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_representation() {
        assert_eq!(parse_representation("LIST"), Ok(Representation::List));
        assert_eq!(parse_representation("m"), Ok(Representation::Matrix));
        assert!(parse_representation("tree").is_err());
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!(parse_algorithm("bfs"), Ok(Algorithm::Bfs));
        assert_eq!(parse_algorithm("Depth"), Ok(Algorithm::Dfs));
        assert!(parse_algorithm("astar").is_err());
    }

    #[test]
    fn test_parse_vertex() {
        assert_eq!(parse_vertex("12"), Ok(12));
        assert!(parse_vertex("-1").unwrap_err().contains("non-negative"));
        assert!(parse_vertex("abc").unwrap_err().contains("integer"));
    }
}
