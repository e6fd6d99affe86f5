//! Edge-list loader.
//!
//! Input is plain text, whitespace-separated integers:
//!
//! ```text
//! <numVertices> <numEdges>
//! <ID1> <ID2>
//! ...
//! ```
//!
//! Pairs are read until two integers can no longer be read, so both surplus
//! and missing edge lines relative to `numEdges` are tolerated. Every pair is
//! stored as the single arc `ID1 -> ID2`.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;

use crate::error::{GraphError, Result};
use crate::graph::{GraphStore, Representation, Store, VertexId};

/// Settings for a load. Each has a default; callers override what they need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub representation: Representation,
    /// Refuse graphs whose base storage would exceed this many MiB.
    pub max_memory_mb: Option<usize>,
}

impl LoadOptions {
    pub fn new(representation: Representation) -> Self {
        Self {
            representation,
            max_memory_mb: None,
        }
    }

    pub fn max_memory_mb(mut self, limit: usize) -> Self {
        self.max_memory_mb = Some(limit);
        self
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new(Representation::List)
    }
}

/// A parsed edge-list file.
#[derive(Debug)]
pub struct Loaded {
    pub store: Store,
    /// `numEdges` as written in the header, not the number of pairs read.
    pub declared_edges: usize,
    /// Number of pairs actually read.
    pub pairs_read: usize,
}

/// Read and parse the edge-list file at `path`.
pub fn load_file(path: &Path, options: &LoadOptions) -> Result<Loaded> {
    let mut file = File::open(path).map_err(|e| io_error(path, e))?;
    let mut text = String::new();
    file.read_to_string(&mut text).map_err(|e| io_error(path, e))?;
    parse(&text, options)
}

/// Parse edge-list text from any reader.
pub fn load_reader<R: Read>(mut reader: R, options: &LoadOptions) -> Result<Loaded> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| io_error(Path::new("<reader>"), e))?;
    parse(&text, options)
}

fn io_error(path: &Path, err: io::Error) -> GraphError {
    if err.kind() == io::ErrorKind::NotFound {
        GraphError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        GraphError::Io {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

/// Parse edge-list text into the representation named by `options`.
pub fn parse(text: &str, options: &LoadOptions) -> Result<Loaded> {
    let start = Instant::now();
    let mut tokens = text.split_whitespace();

    let vertex_count = header_field(tokens.next(), "numVertices")?;
    let declared_edges = header_field(tokens.next(), "numEdges")?;

    tracing::debug!(
        vertex_count,
        declared_edges,
        representation = %options.representation,
        "loading edge list"
    );

    check_memory_budget(options, vertex_count)?;
    let mut store = Store::with_vertices(options.representation, vertex_count)?;

    let mut pairs_read = 0usize;
    loop {
        let Some(from) = edge_id(tokens.next()) else {
            break;
        };
        let Some(to) = edge_id(tokens.next()) else {
            break;
        };
        pairs_read += 1;
        let (a, b) = validate_edge(pairs_read, from, to, vertex_count)?;
        store.insert_arc(a, b)?;
    }

    if pairs_read != declared_edges {
        tracing::debug!(
            declared_edges,
            pairs_read,
            "edge count in header differs from edges read"
        );
    }

    let unpaired = store.one_directional_arcs();
    if unpaired > 0 {
        tracing::warn!(
            unpaired,
            "arcs without a reverse entry were loaded; they are ignored by edge queries"
        );
    }

    tracing::info!(
        vertex_count,
        arcs = store.arc_count(),
        representation = %options.representation,
        load_time_ms = start.elapsed().as_secs_f64() * 1000.0,
        "graph loaded"
    );

    Ok(Loaded {
        store,
        declared_edges,
        pairs_read,
    })
}

fn header_field(token: Option<&str>, name: &str) -> Result<usize> {
    let token = token.ok_or_else(|| GraphError::MalformedHeader(format!("missing {name}")))?;
    let value: i64 = token.parse().map_err(|_| {
        GraphError::MalformedHeader(format!("{name} is not an integer: '{token}'"))
    })?;
    usize::try_from(value)
        .map_err(|_| GraphError::MalformedHeader(format!("{name} out of range: {value}")))
}

/// An edge endpoint token. `None` for anything that is not an optionally
/// signed digit run, which ends the edge list. Digit runs beyond `i64`
/// saturate so they are rejected as out of range.
fn edge_id(token: Option<&str>) -> Option<i64> {
    let token = token?;
    let digits = token.strip_prefix(&['-', '+'][..]).unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(token.parse().unwrap_or(if token.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

fn validate_edge(
    index: usize,
    from: i64,
    to: i64,
    vertex_count: usize,
) -> Result<(VertexId, VertexId)> {
    let in_range = |v: i64| usize::try_from(v).ok().filter(|&v| v < vertex_count);
    match (in_range(from), in_range(to)) {
        (Some(a), Some(b)) if a == b => Err(GraphError::MalformedEdge {
            index,
            from,
            to,
            reason: "self-loop",
        }),
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(GraphError::MalformedEdge {
            index,
            from,
            to,
            reason: "vertex out of range",
        }),
    }
}

fn check_memory_budget(options: &LoadOptions, vertex_count: usize) -> Result<()> {
    let Some(estimate) = Store::estimated_size(options.representation, vertex_count) else {
        return Err(GraphError::alloc(vertex_count, "storage size overflows usize"));
    };
    if let Some(max_mb) = options.max_memory_mb {
        let needed_mb = estimate / (1024 * 1024);
        if needed_mb > max_mb {
            return Err(GraphError::alloc(
                vertex_count,
                format!("needs {needed_mb}MB, exceeds max_memory_mb={max_mb}MB"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> LoadOptions {
        LoadOptions::new(Representation::List)
    }

    fn matrix() -> LoadOptions {
        LoadOptions::new(Representation::Matrix)
    }

    #[test]
    fn test_parse_both_directions() {
        for opts in [list(), matrix()] {
            let loaded = parse("3 2\n0 1\n1 0\n", &opts).unwrap();
            assert_eq!(loaded.store.vertex_count(), 3);
            assert_eq!(loaded.declared_edges, 2);
            assert_eq!(loaded.pairs_read, 2);
            assert!(loaded.store.has_edge(0, 1));
        }
    }

    #[test]
    fn test_parse_single_direction_has_no_edge() {
        for opts in [list(), matrix()] {
            let loaded = parse("3 1\n0 1\n", &opts).unwrap();
            assert!(loaded.store.has_arc(0, 1));
            assert!(!loaded.store.has_edge(0, 1));
        }
    }

    #[test]
    fn test_extra_and_missing_lines_tolerated() {
        let loaded = parse("3 1\n0 1\n1 0\n1 2\n2 1\n", &list()).unwrap();
        assert_eq!(loaded.pairs_read, 4);
        assert!(loaded.store.has_edge(1, 2));

        let loaded = parse("3 10\n0 1\n", &list()).unwrap();
        assert_eq!(loaded.pairs_read, 1);
        assert_eq!(loaded.declared_edges, 10);
    }

    #[test]
    fn test_stops_at_incomplete_pair_or_garbage() {
        let loaded = parse("3 2\n0 1\n1", &list()).unwrap();
        assert_eq!(loaded.pairs_read, 1);

        let loaded = parse("3 2\n0 1\nx y\n1 0\n", &list()).unwrap();
        assert_eq!(loaded.pairs_read, 1);
        assert!(!loaded.store.has_edge(0, 1));
    }

    #[test]
    fn test_any_whitespace_layout() {
        let loaded = parse("  3\t2 0 1\r\n1\n0", &matrix()).unwrap();
        assert!(loaded.store.has_edge(0, 1));
    }

    #[test]
    fn test_out_of_range_edge_is_malformed() {
        let err = parse("2 1\n0 2\n", &list()).unwrap_err();
        assert!(matches!(
            err,
            GraphError::MalformedEdge { index: 1, from: 0, to: 2, .. }
        ));

        let err = parse("2 1\n0 1\n-1 0\n", &matrix()).unwrap_err();
        assert!(matches!(err, GraphError::MalformedEdge { index: 2, .. }));
    }

    #[test]
    fn test_huge_id_is_malformed() {
        let text = "3 3\n0 1\n1 0\n1 99999999999999999999\n2 1\n";
        for opts in [list(), matrix()] {
            let err = parse(text, &opts).unwrap_err();
            assert!(matches!(
                err,
                GraphError::MalformedEdge { index: 3, from: 1, to: i64::MAX, .. }
            ));
        }

        let err = parse("3 1\n-99999999999999999999 0\n", &list()).unwrap_err();
        assert!(matches!(
            err,
            GraphError::MalformedEdge { index: 1, from: i64::MIN, .. }
        ));
    }

    #[test]
    fn test_edge_id_tokens() {
        assert_eq!(edge_id(Some("42")), Some(42));
        assert_eq!(edge_id(Some("+7")), Some(7));
        assert_eq!(edge_id(Some("-3")), Some(-3));
        assert_eq!(edge_id(Some("123456789012345678901")), Some(i64::MAX));
        assert_eq!(edge_id(Some("-")), None);
        assert_eq!(edge_id(Some("1x")), None);
        assert_eq!(edge_id(Some("--1")), None);
        assert_eq!(edge_id(None), None);
    }

    #[test]
    fn test_self_loop_is_malformed() {
        let err = parse("2 1\n1 1\n", &list()).unwrap_err();
        assert!(matches!(
            err,
            GraphError::MalformedEdge { reason: "self-loop", .. }
        ));
    }

    #[test]
    fn test_bad_header() {
        assert!(matches!(parse("", &list()), Err(GraphError::MalformedHeader(_))));
        assert!(matches!(parse("5", &list()), Err(GraphError::MalformedHeader(_))));
        assert!(matches!(parse("a 1", &list()), Err(GraphError::MalformedHeader(_))));
        assert!(matches!(parse("-3 1", &list()), Err(GraphError::MalformedHeader(_))));
    }

    #[test]
    fn test_memory_cap() {
        // 4096 x 4096 matrix = 16MB of cells
        let err = parse("4096 0\n", &matrix().max_memory_mb(8)).unwrap_err();
        assert!(matches!(err, GraphError::AllocationFailure { vertex_count: 4096, .. }));
        assert!(parse("4096 0\n", &list().max_memory_mb(8)).is_ok());
    }

    #[test]
    fn test_huge_matrix_is_allocation_failure() {
        let text = format!("{} 0\n", 1u64 << 33);
        let err = parse(&text, &matrix()).unwrap_err();
        assert!(matches!(err, GraphError::AllocationFailure { .. }));
    }

    #[test]
    fn test_load_reader() {
        let loaded = load_reader("2 2\n0 1\n1 0\n".as_bytes(), &list()).unwrap();
        assert!(loaded.store.has_edge(1, 0));
    }

    #[test]
    fn test_missing_file() {
        let err = load_file(Path::new("/definitely/not/here.txt"), &list()).unwrap_err();
        assert!(matches!(err, GraphError::FileNotFound { .. }));
    }
}
