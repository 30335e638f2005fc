use crate::graph::WeightedGraph;

/// Enumerates every simple graph on `n` vertices, one per edge mask.
///
/// Edge `k` (in `(0,1), (0,2), .., (n-2,n-1)` order) gets weight `k + 1` when present.
pub(crate) struct GraphEnumeratorState {
    pub n: usize,
    pub mask: usize,
    pub last_mask: usize,
}

impl GraphEnumeratorState {
    pub fn new(n: usize) -> Self {
        let pairs = n * n.saturating_sub(1) / 2;
        Self {
            n,
            mask: 0,
            last_mask: 1 << pairs,
        }
    }
}

impl Iterator for GraphEnumeratorState {
    type Item = WeightedGraph;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut graph = WeightedGraph::new(self.n);

        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    graph.insert_edge(i, j, check as u32 + 1);
                }
                check += 1;
            }
        }

        self.mask += 1;
        Some(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerates_all_masks() {
        assert_eq!(GraphEnumeratorState::new(4).count(), 64);
        assert_eq!(GraphEnumeratorState::new(1).count(), 1);
    }

    #[test]
    fn test_last_graph_is_complete() {
        let last = GraphEnumeratorState::new(4).last().unwrap();
        assert_eq!(last.edge_count(), 6);
    }
}
