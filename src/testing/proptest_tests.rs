use crate::coloring::{greedy_coloring, is_proper};
use crate::eccentricity::{best_vertex, dfs_eccentricities};
use crate::error::{GraphError, ParseErrorKind};
use crate::input::build;
use crate::types::{Vertex, Weight};
use proptest::prelude::*;
use std::collections::HashMap;

/// Vertex count and, for every vertex but the last, its `(neighbor, weight)` listing.
fn adjacency_lists() -> impl Strategy<Value = (usize, Vec<Vec<(Vertex, Weight)>>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec(prop::collection::vec((0..n, 0..100u32), 0..5), n - 1),
        )
    })
}

fn to_lines(n: usize, lists: &[Vec<(Vertex, Weight)>]) -> Vec<String> {
    let mut lines = vec![n.to_string()];
    for list in lists {
        let tokens: Vec<String> = list.iter().map(|(v, w)| format!("{v} {w}")).collect();
        lines.push(tokens.join(" "));
    }
    lines
}

proptest! {
    #[test]
    fn proptest_matrix_symmetric_with_zero_diagonal((n, lists) in adjacency_lists()) {
        let graph = build(&to_lines(n, &lists)).unwrap();
        prop_assert_eq!(graph.vertex_count(), n);
        for u in 0..n {
            prop_assert_eq!(graph.weight(u, u), Some(0));
            for v in 0..n {
                prop_assert_eq!(graph.weight(u, v), graph.weight(v, u));
            }
        }
    }

    #[test]
    fn proptest_listed_edges_reproduced((n, lists) in adjacency_lists()) {
        let graph = build(&to_lines(n, &lists)).unwrap();

        // later listings overwrite earlier ones, in both directions
        let mut expected = HashMap::new();
        for (u, list) in lists.iter().enumerate() {
            for &(v, w) in list {
                if u != v {
                    expected.insert((u.min(v), u.max(v)), w);
                }
            }
        }

        for u in 0..n {
            for v in (u + 1)..n {
                prop_assert_eq!(graph.weight(u, v), expected.get(&(u, v)).copied());
            }
        }
        prop_assert_eq!(graph.edge_count(), expected.len());
    }

    #[test]
    fn proptest_coloring_proper_and_deterministic((n, lists) in adjacency_lists()) {
        let graph = build(&to_lines(n, &lists)).unwrap();
        let colors = greedy_coloring(&graph);
        prop_assert!(is_proper(&graph, &colors));
        prop_assert_eq!(colors, greedy_coloring(&graph));
    }

    #[test]
    fn proptest_best_vertex_is_first_minimum((n, lists) in adjacency_lists()) {
        let graph = build(&to_lines(n, &lists)).unwrap();
        let ecc = dfs_eccentricities(&graph);
        let best = best_vertex(&ecc).unwrap();
        prop_assert!(ecc.iter().all(|&e| e >= ecc[best]));
        prop_assert!(ecc[..best].iter().all(|&e| e > ecc[best]));
    }

    #[test]
    fn proptest_out_of_range_neighbor_rejected(n in 2usize..12, extra in 0usize..100) {
        let bad = n + extra;
        let mut lines = vec![n.to_string(), format!("{bad} 1")];
        lines.resize(n, String::new());
        let err = build(&lines).unwrap_err();
        prop_assert_eq!(
            err,
            GraphError::Parse {
                line: 2,
                token: 1,
                text: bad.to_string(),
                kind: ParseErrorKind::VertexOutOfRange { vertex: bad, vertex_count: n },
            }
        );
    }
}
