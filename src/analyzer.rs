use crate::coloring::{color_count, greedy_coloring, zones};
use crate::eccentricity::{best_vertex, dfs_eccentricities, shortest_path_eccentricities};
use crate::graph::WeightedGraph;
use crate::types::{Color, Distance, Vertex};
use log::{debug, info};

/// Which distance metric is used to rank candidate locations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EccentricityMode {
    /// Longest depth-first path length over all traversal starts.
    #[default]
    DepthFirst,
    /// Standard eccentricity, longest shortest path within the connected component.
    ShortestPath,
}

impl std::fmt::Display for EccentricityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EccentricityMode::DepthFirst => write!(f, "depth-first"),
            EccentricityMode::ShortestPath => write!(f, "shortest-path"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub mode: EccentricityMode,
}

/// Result of one analysis pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationReport {
    /// Vertex with the smallest eccentricity, lowest index on ties.
    pub best_vertex: Vertex,
    pub eccentricity: Vec<Distance>,
    /// Zone of every vertex.
    pub colors: Vec<Color>,
}

impl LocationReport {
    pub fn zone_of(&self, v: Vertex) -> Option<Color> {
        self.colors.get(v).copied()
    }

    pub fn zone_count(&self) -> usize {
        color_count(&self.colors)
    }

    pub fn zones(&self) -> Vec<Vec<Vertex>> {
        zones(&self.colors)
    }
}

/// Picks the facility location and splits the graph into zones.
#[derive(Clone, Debug, Default)]
pub struct LocationAnalyzer {
    config: AnalyzerConfig,
}

impl LocationAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Runs eccentricity, best vertex selection and greedy coloring on `graph`.
    ///
    /// A graph always has at least one vertex (see [`crate::input::build`]),
    /// so a best vertex always exists.
    pub fn analyze(&self, graph: &WeightedGraph) -> LocationReport {
        debug!(
            "analyzing graph with {} vertices and {} edges ({} metric)",
            graph.vertex_count(),
            graph.edge_count(),
            self.config.mode
        );

        let eccentricity = match self.config().mode {
            EccentricityMode::DepthFirst => dfs_eccentricities(graph),
            EccentricityMode::ShortestPath => shortest_path_eccentricities(graph),
        };
        debug!("eccentricity: {eccentricity:?}");

        let best_vertex = best_vertex(&eccentricity).unwrap_or_default();
        if graph.degree(best_vertex) == 0 && graph.edge_count() > 0 {
            debug!("vertex {best_vertex} has no edges and still wins with the minimal eccentricity");
        }

        let colors = greedy_coloring(graph);
        info!(
            "best location is vertex {best_vertex} (eccentricity {}), {} zones",
            eccentricity.get(best_vertex).copied().unwrap_or_default(),
            color_count(&colors)
        );

        LocationReport {
            best_vertex,
            eccentricity,
            colors,
        }
    }
}

/// Shorthand for [`LocationAnalyzer::analyze`] with the default configuration.
pub fn analyze(graph: &WeightedGraph) -> LocationReport {
    LocationAnalyzer::default().analyze(graph)
}
