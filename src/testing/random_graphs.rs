use crate::graph::WeightedGraph;
use crate::types::Weight;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

const MAX_WEIGHT: Weight = 50;

/// Random connected graph: a random spanning tree plus `m - (n - 1)` extra random edges.
pub fn random_graph(n: usize, m: usize, seed: usize) -> WeightedGraph {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = WeightedGraph::new(n);

    for i in 1..n {
        let j = rng.random_range(0..i);
        graph.insert_edge(i, j, rng.random_range(0..=MAX_WEIGHT));
    }

    for _ in n.saturating_sub(1)..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        graph.insert_edge(s, t, rng.random_range(0..=MAX_WEIGHT));
    }

    graph
}

/// Random textual input with `n` lines, so `n` vertices.
///
/// Lines may be empty, may list a neighbor twice, may list the vertex itself
/// and may end with a dangling token.
pub fn random_input(n: usize, seed: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut lines = vec![n.to_string()];

    for _ in 1..n {
        let pairs = rng.random_range(0..=n.min(4));
        let mut tokens = Vec::with_capacity(pairs * 2 + 1);
        for _ in 0..pairs {
            tokens.push(rng.random_range(0..n).to_string());
            tokens.push(rng.random_range(0..=MAX_WEIGHT).to_string());
        }
        if rng.random_bool(0.2) {
            tokens.push(rng.random_range(0..n).to_string());
        }
        lines.push(tokens.join(" "));
    }

    lines
}
