//! Minimum spanning tree (Prim).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::multi_graph::VertexId;
use crate::graph::MultiGraph;
use crate::types::{GraphError, GraphResult, Label};

impl<T: Label> MultiGraph<T> {
    /// Minimum spanning tree of an undirected graph.
    ///
    /// Every vertex appears in the result. A disconnected graph yields a
    /// minimum spanning forest with one tree per component.
    pub fn minimum_spanning_tree(&self) -> GraphResult<MultiGraph<T>, T> {
        if self.is_directed() {
            return Err(GraphError::NotUndirected);
        }

        let mut tree = self.empty_like();
        let mut visited = vec![false; self.slot_count()];
        let mut frontier = BinaryHeap::new();

        for root in self.ids() {
            if visited[root.0] {
                continue;
            }
            visited[root.0] = true;
            self.extend_frontier(root, &visited, &mut frontier);

            while let Some(Reverse((cost, from, to))) = frontier.pop() {
                if visited[to.0] {
                    continue;
                }
                visited[to.0] = true;
                tree.connect(from, to, cost);
                self.extend_frontier(to, &visited, &mut frontier);
            }
        }

        Ok(tree)
    }

    /// Sum of all edge costs, each undirected edge counted once.
    pub fn total_cost(&self) -> i64 {
        self.edges().iter().map(|edge| edge.cost).sum()
    }

    fn extend_frontier(
        &self,
        id: VertexId,
        visited: &[bool],
        frontier: &mut BinaryHeap<Reverse<(i64, VertexId, VertexId)>>,
    ) {
        for &(target, cost) in self.neighbors(id) {
            if !visited[target.0] {
                frontier.push(Reverse((cost, id, target)));
            }
        }
    }
}
