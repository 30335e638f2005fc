use crate::error::{GraphError, ParseErrorKind, Result};
use crate::graph::WeightedGraph;
use crate::types::{Vertex, Weight};

/// Builds a graph from the lines of an adjacency description.
///
/// Input format:
/// - the first line is a header, it is not parsed but it counts as a vertex,
///   so the graph has as many vertices as there are lines,
/// - line `i` (for `i >= 1`) lists the neighbors of vertex `i - 1`
///   as whitespace separated `neighbor weight` pairs.
///
/// <div class="warning">
///
/// > The last vertex has no line of its own, it can only get edges listed by other vertices.
/// > A dangling token at the end of a line (odd count) is dropped.
/// > Every edge is stored in both directions; if an edge is listed twice, the last weight wins.
///
/// </div>
///
/// Example input:
/// ```text
/// 4
/// 1 5
/// 0 5 2 3
/// 1 3
/// ```
///
/// Errors are reported with 1-based line and token numbers; no partial graph is returned.
pub fn build<S: AsRef<str>>(lines: &[S]) -> Result<WeightedGraph> {
    if lines.is_empty() {
        return Err(GraphError::InvalidInput);
    }

    let vertex_count = lines.len();
    let mut graph = WeightedGraph::new(vertex_count);

    for (index, line) in lines.iter().enumerate().skip(1) {
        let u = index - 1;
        let tokens: Vec<&str> = line.as_ref().split_whitespace().collect();
        for (pair, chunk) in tokens.chunks_exact(2).enumerate() {
            let line_number = index + 1;
            let v = parse_vertex(chunk[0], vertex_count, line_number, pair * 2 + 1)?;
            let w = parse_weight(chunk[1], line_number, pair * 2 + 2)?;
            graph.insert_edge(u, v, w);
        }
    }

    Ok(graph)
}

/// This is equivalent to [`build`], but takes the whole text as an input.
pub fn from_str(input: &str) -> Result<WeightedGraph> {
    let lines: Vec<&str> = input.lines().collect();
    build(&lines)
}

fn parse_vertex(text: &str, vertex_count: usize, line: usize, token: usize) -> Result<Vertex> {
    let vertex: Vertex = text
        .parse()
        .map_err(|_| parse_error(text, line, token, ParseErrorKind::InvalidVertex))?;
    if vertex >= vertex_count {
        return Err(parse_error(
            text,
            line,
            token,
            ParseErrorKind::VertexOutOfRange {
                vertex,
                vertex_count,
            },
        ));
    }
    Ok(vertex)
}

fn parse_weight(text: &str, line: usize, token: usize) -> Result<Weight> {
    text.parse()
        .map_err(|_| parse_error(text, line, token, ParseErrorKind::InvalidWeight))
}

fn parse_error(text: &str, line: usize, token: usize, kind: ParseErrorKind) -> GraphError {
    GraphError::Parse {
        line,
        token,
        text: text.to_string(),
        kind,
    }
}
