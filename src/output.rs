use crate::analyzer::LocationReport;
use crate::graph::WeightedGraph;
use crate::types::{Color, Vertex};

/// Fill colors for zones, reused cyclically when there are more zones than entries.
const ZONE_PALETTE: [&str; 8] = [
    "lightblue",
    "lightgreen",
    "gold",
    "lightpink",
    "orange",
    "plum",
    "lightcyan",
    "tan",
];

/// Returns the adjacency matrix as a table.
///
/// Columns are 3 characters wide, missing edges are printed as `-`.
///
/// ```text
///    0  1  2
///   ---------
///  0|  0  5  -
///  1|  5  0  3
///  2|  -  3  0
/// ```
pub fn draw_matrix(graph: &WeightedGraph) -> String {
    let n = graph.vertex_count();
    let mut output = String::from("  ");
    for v in 0..n {
        output.push_str(&format!("{v:2} "));
    }
    output.push('\n');

    output.push_str("  ");
    output.push_str(&"---".repeat(n));
    output.push('\n');

    for u in 0..n {
        output.push_str(&format!("{u:2}|"));
        for v in 0..n {
            match graph.weight(u, v) {
                Some(w) => output.push_str(&format!("{w:3}")),
                None => output.push_str("  -"),
            }
        }
        output.push('\n');
    }
    output
}

/// Lists the zone of every vertex, one `vertex: color` per line.
pub fn draw_coloring(colors: &[Color]) -> String {
    let mut output = String::from("Graph coloring:\n\n");
    for (v, c) in colors.iter().enumerate() {
        output.push_str(&format!("{v}: {c}\n"));
    }
    output
}

pub fn draw_best_vertex(v: Vertex) -> String {
    format!("The best location for the hospital is vertex {v}.")
}

/// Full console report: matrix, coloring and chosen location.
pub fn draw_report(graph: &WeightedGraph, report: &LocationReport) -> String {
    format!(
        "{}\n{}\n{}\n",
        draw_matrix(graph),
        draw_coloring(&report.colors),
        draw_best_vertex(report.best_vertex)
    )
}

/// Returns the zone map in DOT format.
///
/// Every vertex is filled with the color of its zone, the chosen location is a double circle.
/// Edges are labelled with their weight.
///
/// Intended to be used with `neato`.
pub fn to_dot_str(graph: &WeightedGraph, report: &LocationReport) -> String {
    let mut output = String::from("graph {\n");
    output.push_str("  mode=sgd;\n");
    output.push_str("  maxiter=1000;\n");
    output.push_str("  node [shape=circle, style=filled];\n");

    for v in 0..graph.vertex_count() {
        let zone = report.zone_of(v).unwrap_or_default();
        let fill = ZONE_PALETTE[zone % ZONE_PALETTE.len()];
        let shape = if v == report.best_vertex {
            ", shape=doublecircle, penwidth=2"
        } else {
            ""
        };
        output.push_str(&format!(
            "  {v} [label=\"{v}\\nzone {zone}\", fillcolor={fill}{shape}];\n"
        ));
    }

    for (u, v, w) in graph.edges() {
        output.push_str(&format!("  {u} -- {v} [label=\"{w}\"];\n"));
    }
    output.push_str("}\n");
    output
}
