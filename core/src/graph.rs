use std::fmt;
use std::mem::size_of;

use crate::alloc::{reserve_failed, try_filled};
use crate::error::{GraphError, Result};
use crate::sequence::OrderedSeq;

/// Dense vertex identifier in `[0, vertex_count)`.
pub type VertexId = usize;

/// Which storage layout a graph was loaded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Representation {
    #[default]
    List,
    Matrix,
}

impl Representation {
    pub fn as_str(self) -> &'static str {
        match self {
            Representation::List => "list",
            Representation::Matrix => "matrix",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Read-only capability shared by both representations.
///
/// Storage is directional: `has_arc(a, b)` reports exactly what the loader
/// recorded. `has_edge` is the query-level notion of friendship and holds
/// only when the arc was recorded in both directions.
pub trait GraphStore {
    fn vertex_count(&self) -> usize;

    /// Whether the arc `from -> to` was stored. Both IDs must be in range.
    fn has_arc(&self, from: VertexId, to: VertexId) -> bool;

    /// Distinct stored targets of `from`, ascending.
    fn arc_targets(&self, from: VertexId) -> Vec<VertexId>;

    /// Neighbors as reported to callers. `id` must be in range.
    fn neighbors(&self, id: VertexId) -> Vec<VertexId>;

    /// Number of stored arcs, duplicates included.
    fn arc_count(&self) -> usize;

    /// Approximate memory usage in bytes.
    fn memory_usage(&self) -> usize;

    fn representation(&self) -> Representation;

    fn contains(&self, id: VertexId) -> bool {
        id < self.vertex_count()
    }

    /// Symmetric edge test: false for out-of-range IDs and for `a == b`,
    /// otherwise both `a -> b` and `b -> a` must have been stored.
    fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        if !self.contains(a) || !self.contains(b) || a == b {
            return false;
        }
        self.has_arc(a, b) && self.has_arc(b, a)
    }
}

/// One ascending neighbor sequence per vertex.
#[derive(Debug, Clone)]
pub struct AdjacencyList {
    lists: Vec<OrderedSeq<VertexId>>,
    arcs: usize,
}

impl AdjacencyList {
    pub fn with_vertices(vertex_count: usize) -> Result<Self> {
        Ok(Self {
            lists: try_filled(vertex_count, OrderedSeq::new())?,
            arcs: 0,
        })
    }

    /// Record the directed arc `from -> to`. Only `from`'s sequence changes.
    pub fn insert_arc(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        let vertex_count = self.lists.len();
        let list = self.lists.get_mut(from).ok_or(GraphError::InvalidVertex {
            id: from,
            vertex_count,
        })?;
        list.try_insert_sorted(to).map_err(|e| reserve_failed(vertex_count, e))?;
        self.arcs += 1;
        Ok(())
    }

    /// The stored sequence for `id`, duplicates included.
    pub fn list(&self, id: VertexId) -> Option<&OrderedSeq<VertexId>> {
        self.lists.get(id)
    }
}

impl GraphStore for AdjacencyList {
    fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    fn has_arc(&self, from: VertexId, to: VertexId) -> bool {
        self.lists[from].contains(&to)
    }

    fn arc_targets(&self, from: VertexId) -> Vec<VertexId> {
        let mut targets: Vec<VertexId> = self.lists[from].iter().copied().collect();
        targets.dedup();
        targets
    }

    fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.lists[id].iter().copied().collect()
    }

    fn arc_count(&self) -> usize {
        self.arcs
    }

    fn memory_usage(&self) -> usize {
        let slots = self.lists.capacity() * size_of::<OrderedSeq<VertexId>>();
        let entries: usize = self.lists.iter().map(OrderedSeq::heap_size).sum();
        slots + entries
    }

    fn representation(&self) -> Representation {
        Representation::List
    }
}

/// Square boolean grid, one row allocation per vertex.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<bool>>,
    arcs: usize,
}

impl AdjacencyMatrix {
    pub fn with_vertices(vertex_count: usize) -> Result<Self> {
        if vertex_count.checked_mul(vertex_count).is_none() {
            return Err(GraphError::alloc(vertex_count, "matrix size overflows usize"));
        }
        let mut rows = Vec::new();
        rows.try_reserve_exact(vertex_count).map_err(|e| reserve_failed(vertex_count, e))?;
        for _ in 0..vertex_count {
            rows.push(try_filled(vertex_count, false)?);
        }
        Ok(Self { rows, arcs: 0 })
    }

    /// Set `matrix[from][to]`. Only that one cell changes.
    pub fn insert_arc(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        let vertex_count = self.rows.len();
        let cell = self
            .rows
            .get_mut(from)
            .and_then(|row| row.get_mut(to))
            .ok_or(GraphError::InvalidVertex {
                id: from.max(to),
                vertex_count,
            })?;
        if !*cell {
            *cell = true;
            self.arcs += 1;
        }
        Ok(())
    }

    pub fn row(&self, id: VertexId) -> Option<&[bool]> {
        self.rows.get(id).map(Vec::as_slice)
    }
}

impl GraphStore for AdjacencyMatrix {
    fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    fn has_arc(&self, from: VertexId, to: VertexId) -> bool {
        self.rows[from][to]
    }

    fn arc_targets(&self, from: VertexId) -> Vec<VertexId> {
        self.rows[from]
            .iter()
            .enumerate()
            .filter_map(|(j, &set)| set.then_some(j))
            .collect()
    }

    fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        (0..self.vertex_count())
            .filter(|&j| self.has_edge(id, j))
            .collect()
    }

    fn arc_count(&self) -> usize {
        self.arcs
    }

    fn memory_usage(&self) -> usize {
        let slots = self.rows.capacity() * size_of::<Vec<bool>>();
        let cells: usize = self.rows.iter().map(Vec::capacity).sum();
        slots + cells
    }

    fn representation(&self) -> Representation {
        Representation::Matrix
    }
}

/// A loaded graph in either representation.
#[derive(Debug, Clone)]
pub enum Store {
    List(AdjacencyList),
    Matrix(AdjacencyMatrix),
}

impl Store {
    /// Empty store with `vertex_count` vertices in the requested layout.
    pub fn with_vertices(representation: Representation, vertex_count: usize) -> Result<Self> {
        Ok(match representation {
            Representation::List => Store::List(AdjacencyList::with_vertices(vertex_count)?),
            Representation::Matrix => Store::Matrix(AdjacencyMatrix::with_vertices(vertex_count)?),
        })
    }

    pub fn insert_arc(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        match self {
            Store::List(g) => g.insert_arc(from, to),
            Store::Matrix(g) => g.insert_arc(from, to),
        }
    }

    /// Bytes a freshly created store of this shape would need, before any arcs.
    pub fn estimated_size(representation: Representation, vertex_count: usize) -> Option<usize> {
        match representation {
            Representation::List => vertex_count.checked_mul(size_of::<OrderedSeq<VertexId>>()),
            Representation::Matrix => {
                let cells = vertex_count.checked_mul(vertex_count)?;
                let rows = vertex_count.checked_mul(size_of::<Vec<bool>>())?;
                cells.checked_add(rows)
            }
        }
    }

    /// Count stored arcs whose reverse arc was never stored. Such arcs are
    /// invisible to every query.
    pub fn one_directional_arcs(&self) -> usize {
        (0..self.vertex_count())
            .map(|from| {
                self.arc_targets(from)
                    .into_iter()
                    .filter(|&to| !self.has_arc(to, from))
                    .count()
            })
            .sum()
    }

    /// Count unordered pairs `{a, b}` for which `has_edge(a, b)` holds.
    pub fn mutual_edges(&self) -> usize {
        (0..self.vertex_count())
            .map(|a| {
                self.arc_targets(a)
                    .into_iter()
                    .filter(|&b| a < b && self.has_arc(b, a))
                    .count()
            })
            .sum()
    }
}

impl GraphStore for Store {
    fn vertex_count(&self) -> usize {
        match self {
            Store::List(g) => g.vertex_count(),
            Store::Matrix(g) => g.vertex_count(),
        }
    }

    fn has_arc(&self, from: VertexId, to: VertexId) -> bool {
        match self {
            Store::List(g) => g.has_arc(from, to),
            Store::Matrix(g) => g.has_arc(from, to),
        }
    }

    fn arc_targets(&self, from: VertexId) -> Vec<VertexId> {
        match self {
            Store::List(g) => g.arc_targets(from),
            Store::Matrix(g) => g.arc_targets(from),
        }
    }

    fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        match self {
            Store::List(g) => g.neighbors(id),
            Store::Matrix(g) => g.neighbors(id),
        }
    }

    fn arc_count(&self) -> usize {
        match self {
            Store::List(g) => g.arc_count(),
            Store::Matrix(g) => g.arc_count(),
        }
    }

    fn memory_usage(&self) -> usize {
        match self {
            Store::List(g) => g.memory_usage(),
            Store::Matrix(g) => g.memory_usage(),
        }
    }

    fn representation(&self) -> Representation {
        match self {
            Store::List(_) => Representation::List,
            Store::Matrix(_) => Representation::Matrix,
        }
    }
}
