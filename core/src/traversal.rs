use std::fmt;

use crate::alloc::try_filled;
use crate::error::Result;
use crate::graph::{GraphStore, VertexId};
use crate::queue::PriorityQueue;
use crate::stack::Stack;

/// Search strategy for connection queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Breadth-first over the ascending priority queue.
    #[default]
    Bfs,
    /// Depth-first over the stack.
    Dfs,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A connection from source to destination, both endpoints included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    vertices: Vec<VertexId>,
}

impl Path {
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn into_vec(self) -> Vec<VertexId> {
        self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn destination(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    /// Consecutive `(a, b)` pairs along the path: "a is friends with b".
    pub fn links(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.vertices.windows(2).map(|w| (w[0], w[1]))
    }
}

impl PartialEq<[VertexId]> for Path {
    fn eq(&self, other: &[VertexId]) -> bool {
        self.vertices == other
    }
}

impl<const N: usize> PartialEq<[VertexId; N]> for Path {
    fn eq(&self, other: &[VertexId; N]) -> bool {
        self.vertices == other
    }
}

/// Work list of discovered-but-unexpanded vertices. The choice of container
/// is the only difference between BFS and DFS.
trait Frontier {
    fn with_capacity(capacity: usize) -> Self;
    fn put(&mut self, v: VertexId);
    fn take(&mut self) -> Result<VertexId>;
    fn is_empty(&self) -> bool;
}

impl Frontier for PriorityQueue<VertexId> {
    fn with_capacity(capacity: usize) -> Self {
        PriorityQueue::with_capacity(capacity)
    }
    fn put(&mut self, v: VertexId) {
        self.enqueue(v);
    }
    fn take(&mut self) -> Result<VertexId> {
        self.dequeue()
    }
    fn is_empty(&self) -> bool {
        PriorityQueue::is_empty(self)
    }
}

impl Frontier for Stack<VertexId> {
    fn with_capacity(capacity: usize) -> Self {
        Stack::with_capacity(capacity)
    }
    fn put(&mut self, v: VertexId) {
        self.push(v);
    }
    fn take(&mut self) -> Result<VertexId> {
        self.pop()
    }
    fn is_empty(&self) -> bool {
        Stack::is_empty(self)
    }
}

/// Find a connection from `src` to `dst` with breadth-first search.
///
/// The frontier is an ascending priority queue, so among discovered vertices
/// the smallest ID is expanded first. Returns `Ok(None)` when either ID is out
/// of range, when `src == dst`, or when `dst` is unreachable.
pub fn find_path_bfs<G: GraphStore + ?Sized>(
    graph: &G,
    src: VertexId,
    dst: VertexId,
) -> Result<Option<Path>> {
    search::<G, PriorityQueue<VertexId>>(graph, src, dst, Algorithm::Bfs)
}

/// Find a connection from `src` to `dst` with depth-first search.
///
/// Same contract as [`find_path_bfs`]; the path found is valid but not
/// necessarily the shortest.
pub fn find_path_dfs<G: GraphStore + ?Sized>(
    graph: &G,
    src: VertexId,
    dst: VertexId,
) -> Result<Option<Path>> {
    search::<G, Stack<VertexId>>(graph, src, dst, Algorithm::Dfs)
}

/// Dispatch on `algorithm`.
pub fn find_path<G: GraphStore + ?Sized>(
    graph: &G,
    src: VertexId,
    dst: VertexId,
    algorithm: Algorithm,
) -> Result<Option<Path>> {
    match algorithm {
        Algorithm::Bfs => find_path_bfs(graph, src, dst),
        Algorithm::Dfs => find_path_dfs(graph, src, dst),
    }
}

fn search<G: GraphStore + ?Sized, F: Frontier>(
    graph: &G,
    src: VertexId,
    dst: VertexId,
    algorithm: Algorithm,
) -> Result<Option<Path>> {
    let n = graph.vertex_count();
    if src >= n || dst >= n || src == dst {
        return Ok(None);
    }

    let mut parent: Vec<Option<VertexId>> = try_filled(n, None)?;
    let mut visited: Vec<bool> = try_filled(n, false)?;
    // Vertices are marked on insertion, so the frontier never holds more than n.
    let mut frontier = F::with_capacity(n);

    visited[src] = true;
    frontier.put(src);
    let mut nodes_visited = 1usize;
    let mut found = false;

    while !frontier.is_empty() {
        let current = frontier.take()?;
        if current == dst {
            found = true;
            break;
        }

        // Argument order is (candidate, current).
        for i in 0..n {
            if graph.has_edge(i, current) && !visited[i] {
                visited[i] = true;
                parent[i] = Some(current);
                frontier.put(i);
                nodes_visited += 1;
            }
        }
    }

    tracing::debug!(%algorithm, src, dst, nodes_visited, found, "path search finished");

    if !found {
        return Ok(None);
    }
    reconstruct_path(&parent, src, dst).map(Some)
}

/// Walk parent pointers from `dst` back to `src`: count first, then fill the
/// path back-to-front.
fn reconstruct_path(parent: &[Option<VertexId>], src: VertexId, dst: VertexId) -> Result<Path> {
    let mut len = 1;
    let mut current = dst;
    while let Some(p) = parent[current] {
        len += 1;
        current = p;
    }

    let mut vertices = try_filled(len, src)?;
    let mut current = dst;
    for slot in vertices.iter_mut().rev() {
        *slot = current;
        if let Some(p) = parent[current] {
            current = p;
        }
    }
    Ok(Path { vertices })
}
