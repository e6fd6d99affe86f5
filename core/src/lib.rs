//! socialgraph-core: social graph store and connection search.
//!
//! Loads a friendship graph from a plain-text edge list into either an
//! adjacency list or an adjacency matrix, then answers two queries: who are
//! a vertex's friends, and how two vertices are connected (BFS or DFS).
//!
//! Arcs are stored exactly as read. Two vertices count as friends only when
//! the file lists the pair in both directions.

mod alloc;
mod error;
mod graph;
mod load;
mod queue;
mod sequence;
mod social;
mod stack;
mod traversal;

pub use error::{GraphError, Result};
pub use graph::{AdjacencyList, AdjacencyMatrix, GraphStore, Representation, Store, VertexId};
pub use load::{load_file, load_reader, parse, LoadOptions, Loaded};
pub use queue::PriorityQueue;
pub use sequence::OrderedSeq;
pub use social::{DegreeResult, GraphStats, SocialGraph};
pub use stack::Stack;
pub use traversal::{find_path, find_path_bfs, find_path_dfs, Algorithm, Path};
