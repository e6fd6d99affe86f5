use std::io::Read;
use std::path::Path as FsPath;

use crate::error::{GraphError, Result};
use crate::graph::{GraphStore, Representation, Store, VertexId};
use crate::load::{self, LoadOptions, Loaded};
use crate::traversal::{self, Algorithm, Path};

/// Friend count for a single vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeResult {
    pub id: VertexId,
    pub friend_count: usize,
}

/// Summary of a loaded graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStats {
    pub representation: Representation,
    pub vertex_count: usize,
    /// `numEdges` from the file header.
    pub declared_edges: usize,
    /// Edge lines actually read.
    pub pairs_read: usize,
    /// Arcs held by the store.
    pub stored_arcs: usize,
    /// Unordered pairs stored in both directions, i.e. visible to queries.
    pub mutual_edges: usize,
    /// Stored arcs whose reverse is missing.
    pub one_directional_arcs: usize,
    pub memory_bytes: usize,
}

/// The query surface handed to callers: a loaded, read-only social graph.
///
/// Once [`release`](Self::release) is called every query fails with
/// [`GraphError::Released`].
#[derive(Debug)]
pub struct SocialGraph {
    store: Option<Store>,
    declared_edges: usize,
    pairs_read: usize,
}

impl SocialGraph {
    /// Load the edge-list file at `path` into `representation`.
    pub fn load(path: impl AsRef<FsPath>, representation: Representation) -> Result<Self> {
        Self::load_with(path, &LoadOptions::new(representation))
    }

    pub fn load_with(path: impl AsRef<FsPath>, options: &LoadOptions) -> Result<Self> {
        load::load_file(path.as_ref(), options).map(Self::from_loaded)
    }

    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self> {
        load::load_reader(reader, options).map(Self::from_loaded)
    }

    /// Parse edge-list text directly.
    pub fn parse(text: &str, representation: Representation) -> Result<Self> {
        load::parse(text, &LoadOptions::new(representation)).map(Self::from_loaded)
    }

    fn from_loaded(loaded: Loaded) -> Self {
        Self {
            store: Some(loaded.store),
            declared_edges: loaded.declared_edges,
            pairs_read: loaded.pairs_read,
        }
    }

    /// The underlying store, for callers that need representation details.
    pub fn store(&self) -> Result<&Store> {
        self.store.as_ref().ok_or(GraphError::Released)
    }

    pub fn representation(&self) -> Result<Representation> {
        Ok(self.store()?.representation())
    }

    pub fn vertex_count(&self) -> Result<usize> {
        Ok(self.store()?.vertex_count())
    }

    pub fn declared_edges(&self) -> usize {
        self.declared_edges
    }

    pub fn is_released(&self) -> bool {
        self.store.is_none()
    }

    fn checked(&self, id: VertexId) -> Result<&Store> {
        let store = self.store()?;
        if !store.contains(id) {
            return Err(GraphError::InvalidVertex {
                id,
                vertex_count: store.vertex_count(),
            });
        }
        Ok(store)
    }

    /// Symmetric edge test. Out-of-range IDs and `a == b` give `false`.
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> Result<bool> {
        Ok(self.store()?.has_edge(a, b))
    }

    /// Direct neighbors of `id`.
    ///
    /// The list store returns its neighbor sequence as loaded (directional,
    /// duplicates kept); the matrix store returns every vertex sharing an
    /// edge with `id`.
    pub fn list_neighbors(&self, id: VertexId) -> Result<Vec<VertexId>> {
        Ok(self.checked(id)?.neighbors(id))
    }

    pub fn friend_count(&self, id: VertexId) -> Result<usize> {
        self.list_neighbors(id).map(|n| n.len())
    }

    /// Connection from `src` to `dst`.
    ///
    /// Invalid IDs give `InvalidVertex`, equal IDs `SameVertex`, and an
    /// exhausted search `NotFound`.
    pub fn find_path(&self, src: VertexId, dst: VertexId, algorithm: Algorithm) -> Result<Path> {
        let store = self.checked(src)?;
        self.checked(dst)?;
        if src == dst {
            return Err(GraphError::SameVertex(src));
        }
        traversal::find_path(store, src, dst, algorithm)?
            .ok_or(GraphError::NotFound { src, dst })
    }

    /// Vertices ranked by friend count, highest first, ties by ID.
    /// `top_n == 0` returns every vertex.
    pub fn most_connected(&self, top_n: usize) -> Result<Vec<DegreeResult>> {
        let store = self.store()?;
        let mut results: Vec<DegreeResult> = (0..store.vertex_count())
            .map(|id| DegreeResult {
                id,
                friend_count: store.neighbors(id).len(),
            })
            .collect();

        results.sort_by(|a, b| b.friend_count.cmp(&a.friend_count).then(a.id.cmp(&b.id)));

        if top_n > 0 && top_n < results.len() {
            results.truncate(top_n);
        }
        Ok(results)
    }

    pub fn stats(&self) -> Result<GraphStats> {
        let store = self.store()?;
        Ok(GraphStats {
            representation: store.representation(),
            vertex_count: store.vertex_count(),
            declared_edges: self.declared_edges,
            pairs_read: self.pairs_read,
            stored_arcs: store.arc_count(),
            mutual_edges: store.mutual_edges(),
            one_directional_arcs: store.one_directional_arcs(),
            memory_bytes: store.memory_usage(),
        })
    }

    /// Drop the store. A second release fails with `Released`.
    pub fn release(&mut self) -> Result<()> {
        match self.store.take() {
            Some(store) => {
                tracing::debug!(vertex_count = store.vertex_count(), "graph released");
                Ok(())
            }
            None => Err(GraphError::Released),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPRS: [Representation; 2] = [Representation::List, Representation::Matrix];

    fn friends() -> &'static str {
        // 0-1, 1-2, 0-2 triangle, 3-4 pair, plus a one-way 0->4
        "5 7\n0 1\n1 0\n1 2\n2 1\n0 2\n2 0\n3 4\n4 3\n0 4\n"
    }

    #[test]
    fn test_scenario_both_directions() {
        for repr in REPRS {
            let g = SocialGraph::parse("3 2\n0 1\n1 0\n", repr).unwrap();
            assert!(g.has_edge(0, 1).unwrap());
            assert_eq!(g.find_path(0, 1, Algorithm::Bfs).unwrap(), [0, 1]);
        }
    }

    #[test]
    fn test_scenario_one_direction() {
        for repr in REPRS {
            let g = SocialGraph::parse("3 1\n0 1\n", repr).unwrap();
            assert!(!g.has_edge(0, 1).unwrap());
            assert!(matches!(
                g.find_path(0, 1, Algorithm::Bfs),
                Err(GraphError::NotFound { src: 0, dst: 1 })
            ));
        }
    }

    #[test]
    fn test_scenario_three_hop() {
        for repr in REPRS {
            let g = SocialGraph::parse("4 3\n0 1\n1 0\n1 2\n2 1\n", repr).unwrap();
            assert_eq!(g.find_path(0, 2, Algorithm::Bfs).unwrap(), [0, 1, 2]);
            assert_eq!(g.find_path(0, 2, Algorithm::Dfs).unwrap(), [0, 1, 2]);
        }
    }

    #[test]
    fn test_list_neighbors_by_representation() {
        let list = SocialGraph::parse(friends(), Representation::List).unwrap();
        assert_eq!(list.list_neighbors(0).unwrap(), vec![1, 2, 4]);
        assert_eq!(list.friend_count(0).unwrap(), 3);

        let matrix = SocialGraph::parse(friends(), Representation::Matrix).unwrap();
        assert_eq!(matrix.list_neighbors(0).unwrap(), vec![1, 2]);
        assert_eq!(matrix.list_neighbors(4).unwrap(), vec![3]);
        assert_eq!(matrix.friend_count(0).unwrap(), 2);
    }

    #[test]
    fn test_invalid_vertex() {
        for repr in REPRS {
            let g = SocialGraph::parse(friends(), repr).unwrap();
            assert!(matches!(
                g.list_neighbors(5),
                Err(GraphError::InvalidVertex { id: 5, vertex_count: 5 })
            ));
            assert!(matches!(
                g.find_path(0, 9, Algorithm::Dfs),
                Err(GraphError::InvalidVertex { id: 9, .. })
            ));
            assert!(matches!(
                g.find_path(2, 2, Algorithm::Bfs),
                Err(GraphError::SameVertex(2))
            ));
            assert!(!g.has_edge(0, 99).unwrap());
        }
    }

    #[test]
    fn test_disconnected_is_not_found() {
        for repr in REPRS {
            let g = SocialGraph::parse(friends(), repr).unwrap();
            for algo in [Algorithm::Bfs, Algorithm::Dfs] {
                assert!(matches!(
                    g.find_path(0, 3, algo),
                    Err(GraphError::NotFound { src: 0, dst: 3 })
                ));
            }
        }
    }

    #[test]
    fn test_most_connected() {
        let g = SocialGraph::parse(friends(), Representation::Matrix).unwrap();
        let top = g.most_connected(3).unwrap();
        let ids: Vec<_> = top.iter().map(|d| (d.id, d.friend_count)).collect();
        assert_eq!(ids, vec![(0, 2), (1, 2), (2, 2)]);
        assert_eq!(g.most_connected(0).unwrap().len(), 5);
    }

    #[test]
    fn test_stats() {
        let g = SocialGraph::parse(friends(), Representation::List).unwrap();
        let stats = g.stats().unwrap();
        assert_eq!(stats.vertex_count, 5);
        assert_eq!(stats.declared_edges, 7);
        assert_eq!(stats.pairs_read, 9);
        assert_eq!(stats.stored_arcs, 9);
        assert_eq!(stats.mutual_edges, 4);
        assert_eq!(stats.one_directional_arcs, 1);
        assert!(stats.memory_bytes > 0);
    }

    #[test]
    fn test_release_twice_and_query_after_release() {
        for repr in REPRS {
            let mut g = SocialGraph::parse(friends(), repr).unwrap();
            assert!(!g.is_released());
            g.release().unwrap();
            assert!(g.is_released());
            assert!(matches!(g.release(), Err(GraphError::Released)));
            assert!(matches!(g.list_neighbors(0), Err(GraphError::Released)));
            assert!(matches!(
                g.find_path(0, 1, Algorithm::Bfs),
                Err(GraphError::Released)
            ));
            assert!(matches!(g.has_edge(0, 1), Err(GraphError::Released)));
            assert!(matches!(g.stats(), Err(GraphError::Released)));
        }
    }
}
