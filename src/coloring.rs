use crate::graph::WeightedGraph;
use crate::types::{Color, Vertex};
use fixedbitset::FixedBitSet;

/// Greedy vertex coloring in ascending vertex order.
///
/// Each vertex gets the smallest color not used by an already colored neighbor,
/// so at most `max_degree + 1` colors are used. The result is proper but not necessarily minimal.
pub fn greedy_coloring(graph: &WeightedGraph) -> Vec<Color> {
    let n = graph.vertex_count();
    let mut colors: Vec<Option<Color>> = vec![None; n];
    let mut used = FixedBitSet::with_capacity(n);

    for u in 0..n {
        used.clear();
        for (v, _) in graph.neighbors(u) {
            if let Some(c) = colors[v] {
                used.insert(c);
            }
        }

        // at most n - 1 neighbors, so a free color below n always exists
        let mut color = 0;
        while used.contains(color) {
            color += 1;
        }
        colors[u] = Some(color);
    }

    colors.into_iter().flatten().collect()
}

/// Number of distinct colors, assuming colors are `0..k` as produced by [`greedy_coloring`].
pub fn color_count(colors: &[Color]) -> usize {
    colors.iter().max().map_or(0, |&c| c + 1)
}

/// Groups vertices by color: `zones[c]` lists the vertices colored `c`, in ascending order.
pub fn zones(colors: &[Color]) -> Vec<Vec<Vertex>> {
    let mut zones = vec![Vec::new(); color_count(colors)];
    for (v, &c) in colors.iter().enumerate() {
        zones[c].push(v);
    }
    zones
}

/// Checks that no edge joins two vertices of the same color.
pub fn is_proper(graph: &WeightedGraph, colors: &[Color]) -> bool {
    colors.len() == graph.vertex_count()
        && graph.edges().all(|(u, v, _)| colors[u] != colors[v])
}
