//! Topological sort, connected and strongly connected components.

use std::collections::VecDeque;

use crate::graph::multi_graph::VertexId;
use crate::graph::traversal::dfs_ids;
use crate::graph::{MultiGraph, TraversalDirection};
use crate::types::{GraphError, GraphResult, Label};

impl<T: Label> MultiGraph<T> {
    /// Kahn's algorithm. Every edge `u -> v` puts `u` before `v`.
    ///
    /// Zero-indegree vertices are dequeued in label order. Fails with
    /// `NotDirected` on undirected graphs and `NotAcyclic` when a cycle exists.
    pub fn topological_sort(&self) -> GraphResult<Vec<T>, T> {
        let order = self.topological_ids()?;
        Ok(self.labels_of(&order))
    }

    pub(crate) fn topological_ids(&self) -> GraphResult<Vec<VertexId>, T> {
        if !self.is_directed() {
            return Err(GraphError::NotDirected);
        }

        let mut indegree = vec![0usize; self.slot_count()];
        for id in self.ids() {
            indegree[id.0] = self.sources(id).len();
        }

        let mut queue: VecDeque<VertexId> = self.ids().filter(|id| indegree[id.0] == 0).collect();
        let mut order = Vec::with_capacity(self.vertex_count());

        while let Some(current) = queue.pop_front() {
            order.push(current);
            for &(target, _) in self.neighbors(current) {
                indegree[target.0] -= 1;
                if indegree[target.0] == 0 {
                    queue.push_back(target);
                }
            }
        }

        if order.len() != self.vertex_count() {
            return Err(GraphError::NotAcyclic);
        }
        Ok(order)
    }

    /// Vertex labels grouped by component, each group sorted.
    ///
    /// Undirected graphs yield connected components; directed graphs yield
    /// strongly connected components (Kosaraju).
    pub fn vertices_componentwise(&self) -> Vec<Vec<T>> {
        self.component_ids()
            .iter()
            .map(|group| {
                let mut labels = self.labels_of(group);
                labels.sort();
                labels
            })
            .collect()
    }

    /// One independent subgraph per component, keeping every edge inside it.
    pub fn connected_components(&self) -> Vec<MultiGraph<T>> {
        let groups = self.component_ids();
        let mut owner = vec![usize::MAX; self.slot_count()];
        for (index, group) in groups.iter().enumerate() {
            for id in group {
                owner[id.0] = index;
            }
        }

        groups
            .iter()
            .enumerate()
            .map(|(index, group)| {
                let mut part = self.empty_like();
                for &id in group {
                    for &(target, cost) in self.neighbors(id) {
                        if owner[target.0] == index {
                            part.link(id, target, cost);
                        }
                    }
                }
                let outside: Vec<VertexId> =
                    self.ids().filter(|id| owner[id.0] != index).collect();
                for id in outside {
                    part.detach(id);
                }
                part
            })
            .collect()
    }

    /// The transposed graph: every edge `u -> v` becomes `v -> u`.
    ///
    /// Undirected graphs are returned unchanged.
    pub fn reversed(&self) -> MultiGraph<T> {
        if !self.is_directed() {
            return self.clone();
        }
        let mut transposed = self.empty_like();
        for id in self.ids() {
            for &(target, cost) in self.neighbors(id) {
                transposed.link(target, id, cost);
            }
        }
        transposed
    }

    fn component_ids(&self) -> Vec<Vec<VertexId>> {
        let mut visited = vec![false; self.slot_count()];
        let mut groups = Vec::new();

        if !self.is_directed() {
            for root in self.ids() {
                if !visited[root.0] {
                    groups.push(dfs_ids(self, root, TraversalDirection::Forward, &mut visited));
                }
            }
            return groups;
        }

        // Second Kosaraju pass walks the reverse adjacency
        let finished = self.finish_order();
        for &root in finished.iter().rev() {
            if !visited[root.0] {
                groups.push(dfs_ids(self, root, TraversalDirection::Backward, &mut visited));
            }
        }
        groups
    }

    /// Vertices in order of DFS completion over the whole graph.
    fn finish_order(&self) -> Vec<VertexId> {
        let mut visited = vec![false; self.slot_count()];
        let mut order = Vec::with_capacity(self.vertex_count());

        for root in self.ids() {
            if visited[root.0] {
                continue;
            }
            visited[root.0] = true;
            let mut stack = vec![(root, 0usize)];

            while let Some(frame) = stack.last_mut() {
                let (current, cursor) = *frame;
                match self.neighbors(current).get(cursor) {
                    Some(&(target, _)) => {
                        frame.1 += 1;
                        if !visited[target.0] {
                            visited[target.0] = true;
                            stack.push((target, 0));
                        }
                    }
                    None => {
                        order.push(current);
                        stack.pop();
                    }
                }
            }
        }

        order
    }
}
