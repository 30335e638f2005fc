/// Index of a location in the graph, from 0 to |V|-1.
pub type Vertex = usize;

/// Weight of a direct connection between two locations.
pub type Weight = u32;

/// Accumulated length of a traversal path.
///
/// Wider than [`Weight`] so that summing weights along a path of at most |V|-1 edges cannot overflow.
pub type Distance = u64;

/// Zone label assigned by the greedy coloring.
pub type Color = usize;

/// Wrapper for petgraph's graph type.
///
/// Node weights are the vertex ids, so node index and label always agree.
pub type UnGraph = petgraph::graph::UnGraph<Vertex, Weight>;
