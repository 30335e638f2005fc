use thiserror::Error;

/// Errors reported while turning text into a [`WeightedGraph`](crate::graph::WeightedGraph).
///
/// No partial graph is ever returned together with an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The input sequence had no lines at all, so not even the header is there.
    #[error("invalid input: expected at least a header line, got nothing")]
    InvalidInput,

    /// A token could not be decoded. `line` and `token` are 1-based.
    #[error("parse error at line {line}, token {token} (`{text}`): {kind}")]
    Parse {
        line: usize,
        token: usize,
        text: String,
        kind: ParseErrorKind,
    },
}

/// What exactly was wrong with a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("vertex index should be a non-negative number")]
    InvalidVertex,

    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("edge weight should be a non-negative 32-bit number")]
    InvalidWeight,
}

pub type Result<T> = std::result::Result<T, GraphError>;
