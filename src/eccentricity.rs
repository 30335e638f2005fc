use crate::graph::WeightedGraph;
use crate::types::{Distance, Vertex};
use fixedbitset::FixedBitSet;
use log::debug;
use petgraph::algo::dijkstra;
use petgraph::graph::NodeIndex;

/// Value every vertex starts with before any traversal: the smallest possible distance.
pub const UNSET_ECCENTRICITY: Distance = Distance::MIN;

/// One frame of the explicit DFS stack.
struct Frame {
    vertex: Vertex,
    distance: Distance,
    // next neighbor index to look at
    cursor: Vertex,
}

/// Depth-first path lengths from `start`.
///
/// Neighbors are tried in ascending order and a neighbor is entered only if it is unvisited
/// at the moment it is tried, so the result is the length of the path to each vertex in
/// that particular DFS tree. This is not a shortest path whenever there are several routes.
///
/// `None` means the vertex was not reached from `start`.
pub fn dfs_distances(graph: &WeightedGraph, start: Vertex) -> Vec<Option<Distance>> {
    let n = graph.vertex_count();
    let mut distances = vec![None; n];
    if start >= n {
        return distances;
    }

    let mut visited = FixedBitSet::with_capacity(n);
    let mut stack = Vec::with_capacity(n);

    visited.insert(start);
    distances[start] = Some(0);
    stack.push(Frame {
        vertex: start,
        distance: 0,
        cursor: 0,
    });

    while let Some(top) = stack.last_mut() {
        let u = top.vertex;
        let next = (top.cursor..n)
            .filter(|&v| v != u && !visited.contains(v))
            .find_map(|v| graph.weight(u, v).map(|w| (v, w)));

        match next {
            Some((v, w)) => {
                top.cursor = v + 1;
                let distance = top.distance.saturating_add(Distance::from(w));
                visited.insert(v);
                distances[v] = Some(distance);
                stack.push(Frame {
                    vertex: v,
                    distance,
                    cursor: 0,
                });
            }
            None => {
                stack.pop();
            }
        }
    }

    distances
}

/// Computes the traversal-based eccentricity of every vertex.
///
/// One [`dfs_distances`] pass is run from every vertex and the results are max-reduced into a
/// single accumulator that starts at [`UNSET_ECCENTRICITY`]. So `result[v]` is the longest DFS
/// path length to `v` over all starting vertices.
///
/// A vertex without edges is only reached by its own pass, at distance 0, and keeps the initial value.
pub fn dfs_eccentricities(graph: &WeightedGraph) -> Vec<Distance> {
    let n = graph.vertex_count();
    let mut eccentricity = vec![UNSET_ECCENTRICITY; n];

    for start in 0..n {
        let pass = dfs_distances(graph, start);
        debug!(
            "dfs pass from vertex {start}: reached {} of {n} vertices, farthest at {}",
            pass.iter().flatten().count(),
            pass.iter().flatten().max().copied().unwrap_or_default()
        );
        max_reduce(&mut eccentricity, &pass);
    }

    eccentricity
}

fn max_reduce(accumulator: &mut [Distance], pass: &[Option<Distance>]) {
    for (acc, distance) in accumulator.iter_mut().zip(pass) {
        if let Some(d) = distance {
            *acc = (*acc).max(*d);
        }
    }
}

/// Graph-theoretic eccentricity: longest shortest path from each vertex to any vertex it can reach.
///
/// Uses petgraph's Dijkstra on every vertex. Unreachable vertices are ignored,
/// so a vertex without edges has eccentricity 0 here as well.
pub fn shortest_path_eccentricities(graph: &WeightedGraph) -> Vec<Distance> {
    let pg = graph.to_petgraph();
    pg.node_indices()
        .map(|start| {
            dijkstra(&pg, start, None, |e| Distance::from(*e.weight()))
                .into_values()
                .max()
                .unwrap_or(UNSET_ECCENTRICITY)
        })
        .collect()
}

/// Returns the vertex with the smallest eccentricity, the first one wins ties.
///
/// Returns `None` only for an empty slice.
pub fn best_vertex(eccentricity: &[Distance]) -> Option<Vertex> {
    let mut best: Option<(Vertex, Distance)> = None;
    for (v, &e) in eccentricity.iter().enumerate() {
        match best {
            Some((_, best_e)) if e >= best_e => {}
            _ => best = Some((v, e)),
        }
    }
    best.map(|(v, _)| v)
}

/// Shortest path length between two vertices, used to compare against the DFS metric.
pub fn shortest_distance(graph: &WeightedGraph, from: Vertex, to: Vertex) -> Option<Distance> {
    if from >= graph.vertex_count() || to >= graph.vertex_count() {
        return None;
    }
    let pg = graph.to_petgraph();
    let target = NodeIndex::new(to);
    dijkstra(&pg, NodeIndex::new(from), Some(target), |e| {
        Distance::from(*e.weight())
    })
    .get(&target)
    .copied()
}
