use crate::types::{UnGraph, Vertex, Weight};
use petgraph::graph::NodeIndex;

/// Dense, symmetric weighted adjacency matrix of a set of locations.
///
/// Absence of an edge is `None`, never a magic weight, so no distance is ever computed from it.
/// The diagonal always holds `Some(0)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph {
    vertex_count: usize,
    // row-major, vertex_count * vertex_count
    matrix: Vec<Option<Weight>>,
}

impl WeightedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        let mut matrix = vec![None; vertex_count * vertex_count];
        for v in 0..vertex_count {
            matrix[v * vertex_count + v] = Some(0);
        }
        Self {
            vertex_count,
            matrix,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Weight stored for the pair `(u, v)`.
    ///
    /// `Some(0)` on the diagonal, `None` when there is no edge or when either index is out of range.
    pub fn weight(&self, u: Vertex, v: Vertex) -> Option<Weight> {
        if u >= self.vertex_count || v >= self.vertex_count {
            return None;
        }
        self.matrix[u * self.vertex_count + v]
    }

    /// Returns true if there is a real edge between two distinct vertices.
    pub fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        u != v && self.weight(u, v).is_some()
    }

    /// Neighbors of `u` with edge weights, in ascending vertex order.
    pub fn neighbors(&self, u: Vertex) -> impl Iterator<Item = (Vertex, Weight)> + '_ {
        (0..self.vertex_count)
            .filter(move |&v| v != u)
            .filter_map(move |v| self.weight(u, v).map(|w| (v, w)))
    }

    pub fn degree(&self, u: Vertex) -> usize {
        self.neighbors(u).count()
    }

    /// Largest degree in the graph, 0 for an edgeless graph.
    pub fn max_degree(&self) -> usize {
        (0..self.vertex_count)
            .map(|u| self.degree(u))
            .max()
            .unwrap_or(0)
    }

    /// All edges as `(u, v, weight)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex, Weight)> + '_ {
        (0..self.vertex_count).flat_map(move |u| {
            self.neighbors(u)
                .filter(move |&(v, _)| u < v)
                .map(move |(v, w)| (u, v, w))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Sets the weight of `(u, v)` in both directions; later writes win.
    ///
    /// Self-loops are dropped so that the diagonal stays 0.
    pub(crate) fn insert_edge(&mut self, u: Vertex, v: Vertex, w: Weight) {
        if u == v {
            return;
        }
        let n = self.vertex_count;
        self.matrix[u * n + v] = Some(w);
        self.matrix[v * n + u] = Some(w);
    }

    /// Converts the matrix into petgraph's undirected graph.
    ///
    /// Node `i` carries label `i`, so petgraph indices can be used as vertex ids directly.
    pub fn to_petgraph(&self) -> UnGraph {
        let mut graph = UnGraph::with_capacity(self.vertex_count, self.edge_count());
        for v in 0..self.vertex_count {
            graph.add_node(v);
        }
        for (u, v, w) in self.edges() {
            graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), w);
        }
        graph
    }
}
