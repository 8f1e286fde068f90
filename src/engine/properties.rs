//! Structural properties: weights, simplicity, connectivity, acyclicity, matrices.

use crate::graph::multi_graph::VertexId;
use crate::graph::traversal::dfs_ids;
use crate::graph::{MultiGraph, TraversalDirection};
use crate::index::DisjointSet;
use crate::types::{Distance, GraphError, GraphResult, Label, LabeledMatrix, DEFAULT_EDGE_COST};

impl<T: Label> MultiGraph<T> {
    /// True iff some edge has a cost other than the default of 1.
    pub fn is_weighted(&self) -> bool {
        self.ids().any(|id| {
            self.neighbors(id)
                .iter()
                .any(|&(_, cost)| cost != DEFAULT_EDGE_COST)
        })
    }

    /// True iff some edge has a negative cost.
    pub fn has_negative_edge(&self) -> bool {
        self.ids()
            .any(|id| self.neighbors(id).iter().any(|&(_, cost)| cost < 0))
    }

    /// True iff there are no self-loops and no parallel edges.
    pub fn is_simple(&self) -> bool {
        for id in self.ids() {
            let mut targets: Vec<VertexId> =
                self.neighbors(id).iter().map(|&(target, _)| target).collect();
            if targets.contains(&id) {
                return false;
            }
            targets.sort_unstable();
            if targets.windows(2).any(|pair| pair[0] == pair[1]) {
                return false;
            }
        }
        true
    }

    /// Connectivity; strong connectivity for directed graphs.
    ///
    /// Graphs with at most one vertex are connected.
    pub fn is_connected(&self) -> bool {
        let Some(first) = self.ids().next() else {
            return true;
        };
        if self.vertex_count() == 1 {
            return true;
        }

        if self.is_directed() {
            return self
                .reachability_matrix()
                .cells
                .iter()
                .all(|row| row.iter().all(|&reachable| reachable));
        }

        let mut visited = vec![false; self.slot_count()];
        dfs_ids(self, first, TraversalDirection::Forward, &mut visited).len()
            == self.vertex_count()
    }

    /// True iff the graph has no cycle (self-loops count as cycles).
    pub fn is_acyclic(&self) -> bool {
        if self.vertex_count() == 0 {
            return true;
        }
        if self.is_directed() {
            return self.topological_sort().is_ok();
        }

        // A forest on n vertices has at most n - 1 edges
        if self.edge_count() > self.vertex_count() - 1 {
            return false;
        }

        // Consume a copy's edges, joining endpoints as we go
        let mut scratch = self.clone();
        let mut sets: DisjointSet<VertexId> = DisjointSet::new();
        for id in scratch.ids() {
            sets.create(id);
        }
        let ids: Vec<VertexId> = scratch.ids().collect();
        for id in ids {
            let adjacency = scratch.neighbors(id).to_vec();
            for (target, cost) in adjacency {
                if sets.connected(&id, &target).unwrap_or(true) {
                    return false;
                }
                let _ = sets.join(&id, &target);
                scratch.unlink(id, target, Some(cost));
                scratch.unlink(target, id, Some(cost));
            }
        }
        true
    }

    /// Edge costs as a matrix: 0 on the diagonal, `Infinite` where no edge exists.
    ///
    /// Only defined for simple graphs.
    pub fn adjacency_matrix(&self) -> GraphResult<LabeledMatrix<T, Distance>, T> {
        if !self.is_simple() {
            return Err(GraphError::InvalidOperation(
                "adjacency matrix requires a simple graph".to_string(),
            ));
        }

        let (ids, position) = self.positions();
        let n = ids.len();
        let mut cells = vec![vec![Distance::Infinite; n]; n];
        for (i, &id) in ids.iter().enumerate() {
            cells[i][i] = Distance::ZERO;
            for &(target, cost) in self.neighbors(id) {
                cells[i][position[target.0]] = Distance::Finite(cost);
            }
        }

        Ok(LabeledMatrix {
            labels: self.labels_of(&ids),
            cells,
        })
    }

    /// `cells[i][j]` is true iff `i == j` or an edge `i -> j` exists.
    pub fn connectivity_matrix(&self) -> LabeledMatrix<T, bool> {
        let (ids, position) = self.positions();
        let n = ids.len();
        let mut cells = vec![vec![false; n]; n];
        for (i, &id) in ids.iter().enumerate() {
            cells[i][i] = true;
            for &(target, _) in self.neighbors(id) {
                cells[i][position[target.0]] = true;
            }
        }

        LabeledMatrix {
            labels: self.labels_of(&ids),
            cells,
        }
    }

    /// Transitive closure of the connectivity matrix.
    pub fn reachability_matrix(&self) -> LabeledMatrix<T, bool> {
        let mut matrix = self.connectivity_matrix();
        let n = matrix.size();
        let cells = &mut matrix.cells;
        for k in 0..n {
            for i in 0..n {
                if !cells[i][k] {
                    continue;
                }
                for j in 0..n {
                    if cells[k][j] {
                        cells[i][j] = true;
                    }
                }
            }
        }
        matrix
    }

    /// Live handles in label order, and a slot -> row position table.
    pub(crate) fn positions(&self) -> (Vec<VertexId>, Vec<usize>) {
        let ids: Vec<VertexId> = self.ids().collect();
        let mut position = vec![usize::MAX; self.slot_count()];
        for (i, id) in ids.iter().enumerate() {
            position[id.0] = i;
        }
        (ids, position)
    }
}
