use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use socialgraph_core::{Algorithm, LoadOptions, Representation, VertexId};

use crate::util::{parse_algorithm, parse_representation, parse_vertex};

/// Explore a social graph: friend lists and connections between people.
#[derive(Parser, Debug)]
#[command(name = "socialgraph")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Edge-list file: "<numVertices> <numEdges>" followed by "<ID1> <ID2>" pairs
    pub file: PathBuf,

    /// Storage layout to load the graph into
    #[arg(short, long, default_value = "list", value_parser = parse_representation)]
    pub representation: Representation,

    /// Default search for connection queries
    #[arg(short, long, default_value = "bfs", value_parser = parse_algorithm)]
    pub algorithm: Algorithm,

    /// Refuse to load graphs whose storage would exceed this many MB
    #[arg(long, default_value_t = 4096, value_parser = clap::value_parser!(u32).range(64..=131072))]
    pub max_memory_mb: u32,

    /// Reload before a query when the source file changed since it was loaded
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub auto_reload: bool,

    /// Minimum seconds between automatic reloads (0 disables debouncing)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(0..=3600))]
    pub reload_debounce_sec: u64,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Run a single query instead of the interactive session
    #[command(subcommand)]
    pub query: Option<Query>,
}

/// Queries shared by one-shot mode and the interactive session.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// List a person's friends and friend count
    Friends {
        #[arg(value_parser = parse_vertex)]
        id: VertexId,
    },
    /// Find a connection between two people
    Path {
        #[arg(value_parser = parse_vertex)]
        from: VertexId,
        #[arg(value_parser = parse_vertex)]
        to: VertexId,
        /// Search to use; defaults to --algorithm
        #[arg(value_parser = parse_algorithm)]
        algorithm: Option<Algorithm>,
    },
    /// Print the loaded adjacency list or matrix
    Show,
    /// Summary of the loaded graph
    Status,
    /// People with the most friends
    Top {
        #[arg(default_value_t = 10)]
        n: usize,
    },
}

/// Resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source: PathBuf,
    pub representation: Representation,
    pub algorithm: Algorithm,
    pub max_memory_mb: usize,
    pub auto_reload: bool,
    pub reload_debounce_sec: u64,
    pub json: bool,
}

impl Settings {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::new(self.representation).max_memory_mb(self.max_memory_mb)
    }
}

impl From<&Args> for Settings {
    fn from(args: &Args) -> Self {
        Self {
            source: args.file.clone(),
            representation: args.representation,
            algorithm: args.algorithm,
            max_memory_mb: args.max_memory_mb as usize,
            auto_reload: args.auto_reload,
            reload_debounce_sec: args.reload_debounce_sec,
            json: args.json,
        }
    }
}
