use std::time::Instant;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use socialgraph_core::{find_path, Algorithm, GraphStore, Representation, Store, VertexId};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Time socialgraph storage and connection search on synthetic graphs.
#[derive(Parser, Debug)]
#[command(name = "socialgraph-bench", version, about)]
struct Args {
    /// Graph shape to generate
    #[arg(value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Number of people in the generated graph
    #[arg(default_value_t = 2_000)]
    node_count: usize,

    /// Skip representations whose storage would exceed this many MB
    #[arg(long, default_value_t = 1024)]
    max_memory_mb: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Run every generator
    All,
    /// Branching tree (deep paths)
    Tree,
    /// Watts-Strogatz ring lattice plus shortcuts
    SmallWorld,
    /// Erdos-Renyi uniform random friendships
    Random,
    /// Two dense clusters joined by a thin bridge
    Barbell,
}

type Generator = fn(usize) -> EdgeList;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    anyhow::ensure!(args.node_count >= 2, "node_count must be at least 2");

    println!("socialgraph-bench");
    println!("=================");
    println!();

    let generators: Vec<(&str, Generator)> = match args.mode {
        Mode::Tree => vec![("Branching tree", gen_tree)],
        Mode::SmallWorld => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        Mode::Random => vec![("Erdos-Renyi random", gen_random)],
        Mode::Barbell => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        Mode::All => vec![
            ("Branching tree", gen_tree as Generator),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
        ],
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, &args)?;
    }
    Ok(())
}

fn run_benchmark(name: &str, generator: Generator, args: &Args) -> Result<()> {
    println!("--- {} ---", name);
    println!("Target: {} people", args.node_count);

    let t = Instant::now();
    let edges = generator(args.node_count);
    println!(
        "Generated in {:.2}s: {} friendships ({} arcs)",
        t.elapsed().as_secs_f64(),
        edges.pairs.len(),
        edges.pairs.len() * 2
    );
    println!();
    println!(
        "{:>8} {:>10} {:>10} {:>10} {:>12} {:>12}",
        "repr", "build", "MB", "neighbors", "bfs", "dfs"
    );
    println!(
        "{:->8} {:->10} {:->10} {:->10} {:->12} {:->12}",
        "", "", "", "", "", ""
    );

    for representation in [Representation::List, Representation::Matrix] {
        let estimate = Store::estimated_size(representation, edges.vertex_count);
        let over_cap = estimate.map_or(true, |bytes| bytes / 1_048_576 > args.max_memory_mb);
        if over_cap {
            tracing::warn!(
                %representation,
                vertex_count = edges.vertex_count,
                max_memory_mb = args.max_memory_mb,
                "skipping representation over the memory cap"
            );
            println!("{:>8} (skipped: over {}MB)", representation, args.max_memory_mb);
            continue;
        }

        let t = Instant::now();
        let store = edges.build(representation)?;
        let build_ms = t.elapsed().as_secs_f64() * 1000.0;

        let t = Instant::now();
        let listed: usize = (0..store.vertex_count())
            .map(|id| store.neighbors(id).len())
            .sum();
        let neighbors_ms = t.elapsed().as_secs_f64() * 1000.0;
        tracing::debug!(%representation, listed, "neighbor listing done");

        let far = store.vertex_count() - 1;
        let bfs = time_search(&store, far, Algorithm::Bfs)?;
        let dfs = time_search(&store, far, Algorithm::Dfs)?;

        println!(
            "{:>8} {:>8.1}ms {:>10.1} {:>8.1}ms {:>12} {:>12}",
            representation,
            build_ms,
            store.memory_usage() as f64 / 1_048_576.0,
            neighbors_ms,
            bfs,
            dfs
        );
    }
    println!();
    Ok(())
}

/// Search from vertex 0 to `far` and format "<hops>h/<ms>ms".
fn time_search(store: &Store, far: VertexId, algorithm: Algorithm) -> Result<String> {
    let t = Instant::now();
    let path = find_path(store, 0, far, algorithm)?;
    let ms = t.elapsed().as_secs_f64() * 1000.0;
    Ok(match path {
        Some(p) => format!("{}h/{:.1}ms", p.hops(), ms),
        None => format!("none/{:.1}ms", ms),
    })
}

// ---------------------------------------------------------------------------
// Generators: O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Undirected friendships; each pair is stored as two arcs.
struct EdgeList {
    vertex_count: usize,
    pairs: Vec<(VertexId, VertexId)>,
}

impl EdgeList {
    fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            pairs: Vec::new(),
        }
    }

    fn befriend(&mut self, a: VertexId, b: VertexId) {
        if a != b {
            self.pairs.push((a, b));
        }
    }

    fn build(&self, representation: Representation) -> Result<Store> {
        let mut store = Store::with_vertices(representation, self.vertex_count)?;
        for &(a, b) in &self.pairs {
            store.insert_arc(a, b)?;
            store.insert_arc(b, a)?;
        }
        Ok(store)
    }
}

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % max as u64) as usize
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Each person befriends three newcomers, level by level. The last vertex
/// sits at the deepest level, so searches from 0 walk the full depth.
fn gen_tree(node_count: usize) -> EdgeList {
    let branching = 3;
    let mut edges = EdgeList::new(node_count);
    let mut next_id = 1;
    let mut frontier = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                edges.befriend(parent, next_id);
                next_frontier.push(next_id);
                next_id += 1;
            }
        }
        frontier = next_frontier;
    }
    edges
}

/// Ring lattice with `k` friends on each side, each rewired with probability
/// `p`. High clustering with short paths.
fn gen_small_world(node_count: usize) -> EdgeList {
    let k = 5;
    let p = 0.05;
    let mut edges = EdgeList::new(node_count);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;
            if rng.next_f64() < p {
                edges.befriend(i, rng.next(node_count));
            } else {
                edges.befriend(i, neighbor);
            }
        }
    }
    edges
}

/// About five uniform random friendships per person.
fn gen_random(node_count: usize) -> EdgeList {
    let mut edges = EdgeList::new(node_count);
    let mut rng = FastRng::new(54321);
    for _ in 0..node_count * 5 {
        let a = rng.next(node_count);
        let b = rng.next(node_count);
        edges.befriend(a, b);
    }
    edges
}

/// Two dense clusters joined by a chain of bridge people. Searches from 0
/// to the last vertex must cross the bridge.
fn gen_barbell(node_count: usize) -> EdgeList {
    let bridge_len = 10.min(node_count / 2);
    let cluster = (node_count - bridge_len) / 2;
    let mut edges = EdgeList::new(node_count);
    let mut rng = FastRng::new(99999);

    let mut densify = |edges: &mut EdgeList, start: usize, len: usize| {
        if len < 2 {
            return;
        }
        for i in 0..len {
            for _ in 0..10.min(len - 1) {
                edges.befriend(start + i, start + rng.next(len));
            }
        }
    };

    densify(&mut edges, 0, cluster);

    // Chain from the last member of the first cluster through the bridge
    // to the first member of the second.
    let b_start = cluster + bridge_len;
    for id in cluster..=b_start.min(node_count - 1) {
        if id > 0 {
            edges.befriend(id - 1, id);
        }
    }

    densify(&mut edges, b_start, node_count - b_start);
    edges
}
