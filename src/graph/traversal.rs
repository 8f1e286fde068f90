//! Graph traversal algorithms (DFS, BFS, hop distance).

use std::collections::{BTreeMap, VecDeque};

use crate::types::{GraphResult, Label};

use super::multi_graph::VertexId;
use super::MultiGraph;

/// Direction for graph traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalDirection {
    /// Follow outgoing edges (source -> target).
    Forward,
    /// Follow incoming edges (target <- source).
    Backward,
    /// Follow edges in both directions.
    Both,
}

/// Visiting discipline for a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// Explicit stack; neighbors are explored in adjacency order.
    DepthFirst,
    /// FIFO queue.
    BreadthFirst,
}

/// Handles adjacent to `id` in the requested direction, in adjacency order.
pub(crate) fn step<T: Label>(
    graph: &MultiGraph<T>,
    id: VertexId,
    direction: TraversalDirection,
) -> Vec<VertexId> {
    let mut next = Vec::new();
    if direction != TraversalDirection::Backward {
        next.extend(graph.neighbors(id).iter().map(|&(target, _)| target));
    }
    if direction != TraversalDirection::Forward {
        next.extend(graph.sources(id).iter().copied());
    }
    next
}

/// Depth-first visit order from `start`, skipping and marking entries of `visited`.
pub(crate) fn dfs_ids<T: Label>(
    graph: &MultiGraph<T>,
    start: VertexId,
    direction: TraversalDirection,
    visited: &mut [bool],
) -> Vec<VertexId> {
    let mut order = Vec::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if visited[current.0] {
            continue;
        }
        visited[current.0] = true;
        order.push(current);

        // Reversed so the first neighbor is popped first
        for next in step(graph, current, direction).into_iter().rev() {
            if !visited[next.0] {
                stack.push(next);
            }
        }
    }

    order
}

/// Breadth-first visit order from `start`, with the hop count of each vertex.
pub(crate) fn bfs_ids<T: Label>(
    graph: &MultiGraph<T>,
    start: VertexId,
    direction: TraversalDirection,
    visited: &mut [bool],
) -> Vec<(VertexId, usize)> {
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[start.0] = true;
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        order.push((current, depth));
        for next in step(graph, current, direction) {
            if !visited[next.0] {
                visited[next.0] = true;
                queue.push_back((next, depth + 1));
            }
        }
    }

    order
}

impl<T: Label> MultiGraph<T> {
    /// Traverse from `start` in the given order and direction.
    pub fn traverse(
        &self,
        start: &T,
        order: TraversalOrder,
        direction: TraversalDirection,
    ) -> GraphResult<Vec<T>, T> {
        let start = self.require(start)?;
        let mut visited = vec![false; self.slot_count()];
        let ids = match order {
            TraversalOrder::DepthFirst => dfs_ids(self, start, direction, &mut visited),
            TraversalOrder::BreadthFirst => bfs_ids(self, start, direction, &mut visited)
                .into_iter()
                .map(|(id, _)| id)
                .collect(),
        };
        Ok(self.labels_of(&ids))
    }

    /// Depth-first order from the smallest label. Empty for an empty graph.
    pub fn dfs(&self) -> Vec<T> {
        match self.vertices().next() {
            Some(first) => self.dfs_from(first),
            None => Vec::new(),
        }
    }

    /// Depth-first order from `start`. Empty if `start` is absent.
    pub fn dfs_from(&self, start: &T) -> Vec<T> {
        self.traverse(start, TraversalOrder::DepthFirst, TraversalDirection::Forward)
            .unwrap_or_default()
    }

    /// Breadth-first order from the smallest label. Empty for an empty graph.
    pub fn bfs(&self) -> Vec<T> {
        match self.vertices().next() {
            Some(first) => self.bfs_from(first),
            None => Vec::new(),
        }
    }

    /// Breadth-first order from `start`. Empty if `start` is absent.
    pub fn bfs_from(&self, start: &T) -> Vec<T> {
        self.traverse(start, TraversalOrder::BreadthFirst, TraversalDirection::Forward)
            .unwrap_or_default()
    }

    /// Number of edges on a shortest path from `from` to each reachable vertex.
    ///
    /// Costs are ignored. Unreachable vertices are absent from the map, as is
    /// everything when `from` itself is absent.
    pub fn hop_distance(&self, from: &T) -> BTreeMap<T, usize> {
        let Some(start) = self.id_of(from) else {
            return BTreeMap::new();
        };
        let mut visited = vec![false; self.slot_count()];
        bfs_ids(self, start, TraversalDirection::Forward, &mut visited)
            .into_iter()
            .map(|(id, hops)| (self.label(id).clone(), hops))
            .collect()
    }

    /// Whether `to` is reachable from `from`. False if either is absent.
    pub fn path_exists(&self, from: &T, to: &T) -> bool {
        let (Some(start), Some(end)) = (self.id_of(from), self.id_of(to)) else {
            return false;
        };
        let mut visited = vec![false; self.slot_count()];
        dfs_ids(self, start, TraversalDirection::Forward, &mut visited);
        visited[end.0]
    }

    pub(crate) fn labels_of(&self, ids: &[VertexId]) -> Vec<T> {
        ids.iter().map(|&id| self.label(id).clone()).collect()
    }
}
