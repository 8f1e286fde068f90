//! Shortest paths: BFS, DAG relaxation, Dijkstra, Bellman-Ford and all pairs.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap, VecDeque};
use std::fmt;

use serde::Serialize;

use crate::graph::multi_graph::VertexId;
use crate::graph::MultiGraph;
use crate::types::{Distance, GraphError, GraphResult, Label, LabeledMatrix};

/// The algorithm that produced a single-source result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PathAlgorithm {
    /// Breadth-first layering; all costs are 1.
    Bfs,
    /// Relaxation in topological order; directed acyclic graphs.
    DagRelaxation,
    /// Binary-heap Dijkstra; no negative costs.
    Dijkstra,
    /// Bellman-Ford; any costs, detects negative cycles.
    BellmanFord,
}

impl PathAlgorithm {
    /// Return a human-readable name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::DagRelaxation => "dag",
            Self::Dijkstra => "dijkstra",
            Self::BellmanFord => "bellman-ford",
        }
    }
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Best known way to reach one vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry<T> {
    /// Previous vertex on the path; the vertex itself for the source and for unreachable vertices.
    pub predecessor: T,
    /// Total cost from the source.
    pub distance: Distance,
}

/// Single-source result: one entry per vertex of the graph.
///
/// Unreachable vertices are present with `Distance::Infinite`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<T> {
    source: T,
    algorithm: PathAlgorithm,
    entries: BTreeMap<T, PathEntry<T>>,
}

impl<T: Label> ShortestPaths<T> {
    /// The vertex distances are measured from.
    pub fn source(&self) -> &T {
        &self.source
    }

    /// The algorithm that computed this result.
    pub fn algorithm(&self) -> PathAlgorithm {
        self.algorithm
    }

    /// Entry for a vertex.
    pub fn get(&self, label: &T) -> Option<&PathEntry<T>> {
        self.entries.get(label)
    }

    /// Distance to a vertex.
    pub fn distance(&self, label: &T) -> Option<Distance> {
        self.entries.get(label).map(|entry| entry.distance)
    }

    /// Predecessor of a vertex.
    pub fn predecessor(&self, label: &T) -> Option<&T> {
        self.entries.get(label).map(|entry| &entry.predecessor)
    }

    /// Vertices from the source to `target`, both included. `None` if unreachable.
    pub fn path_to(&self, target: &T) -> Option<Vec<T>> {
        let entry = self.entries.get(target)?;
        if !entry.distance.is_finite() {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        // Bounded walk; a well-formed predecessor chain is never longer
        for _ in 0..self.entries.len() {
            let previous = &self.entries.get(current)?.predecessor;
            if previous == current {
                break;
            }
            path.push(previous.clone());
            current = previous;
        }
        path.reverse();
        Some(path)
    }

    /// All entries in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, &PathEntry<T>)> + '_ {
        self.entries.iter()
    }

    /// Number of entries (the vertex count of the graph).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the result has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All-pairs result from Floyd-Warshall.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsPaths<T> {
    labels: Vec<T>,
    distances: Vec<Vec<Distance>>,
    /// Highest intermediate vertex of the best path, `None` for a direct edge.
    via: Vec<Vec<Option<usize>>>,
}

impl<T: Label> AllPairsPaths<T> {
    /// Labels in row/column order.
    pub fn labels(&self) -> &[T] {
        &self.labels
    }

    /// Distance from `from` to `to`.
    pub fn distance(&self, from: &T, to: &T) -> Option<Distance> {
        let (i, j) = self.positions(from, to)?;
        Some(self.distances[i][j])
    }

    /// Intermediate vertex recorded for the pair, if the best path is not a direct edge.
    pub fn intermediate(&self, from: &T, to: &T) -> Option<&T> {
        let (i, j) = self.positions(from, to)?;
        self.via[i][j].map(|k| &self.labels[k])
    }

    /// Vertices from `from` to `to`, both included. `None` if unreachable.
    pub fn path(&self, from: &T, to: &T) -> Option<Vec<T>> {
        let (i, j) = self.positions(from, to)?;
        if !self.distances[i][j].is_finite() {
            return None;
        }
        let mut steps = vec![i];
        if i != j {
            self.unfold(i, j, &mut steps);
        }
        Some(steps.into_iter().map(|k| self.labels[k].clone()).collect())
    }

    /// The distance matrix.
    pub fn distance_matrix(&self) -> LabeledMatrix<T, Distance> {
        LabeledMatrix {
            labels: self.labels.clone(),
            cells: self.distances.clone(),
        }
    }

    fn positions(&self, from: &T, to: &T) -> Option<(usize, usize)> {
        let i = self.labels.binary_search(from).ok()?;
        let j = self.labels.binary_search(to).ok()?;
        Some((i, j))
    }

    /// Append the vertices after `i` up to and including `j`.
    fn unfold(&self, i: usize, j: usize, steps: &mut Vec<usize>) {
        match self.via[i][j] {
            Some(k) => {
                self.unfold(i, k, steps);
                self.unfold(k, j, steps);
            }
            None => steps.push(j),
        }
    }
}

/// Per-slot tables shared by the single-source algorithms.
struct Relaxation {
    distance: Vec<Distance>,
    predecessor: Vec<VertexId>,
}

impl Relaxation {
    fn new(slots: usize, source: VertexId) -> Self {
        let mut distance = vec![Distance::Infinite; slots];
        distance[source.0] = Distance::ZERO;
        Self {
            distance,
            predecessor: (0..slots).map(VertexId).collect(),
        }
    }

    /// Try to improve `target` through `source`. Returns true on improvement.
    fn relax(&mut self, source: VertexId, target: VertexId, cost: i64) -> bool {
        let through = self.distance[source.0];
        if !through.is_finite() {
            return false;
        }
        let candidate = through.extend(cost);
        if candidate < self.distance[target.0] {
            self.distance[target.0] = candidate;
            self.predecessor[target.0] = source;
            return true;
        }
        false
    }

    fn finish<T: Label>(
        self,
        graph: &MultiGraph<T>,
        source: VertexId,
        algorithm: PathAlgorithm,
    ) -> ShortestPaths<T> {
        let entries = graph
            .ids()
            .map(|id| {
                let entry = PathEntry {
                    predecessor: graph.label(self.predecessor[id.0]).clone(),
                    distance: self.distance[id.0],
                };
                (graph.label(id).clone(), entry)
            })
            .collect();
        ShortestPaths {
            source: graph.label(source).clone(),
            algorithm,
            entries,
        }
    }
}

impl<T: Label> MultiGraph<T> {
    /// Single-source shortest paths using the cheapest applicable exact algorithm.
    ///
    /// In order: BFS for undirected unweighted graphs, topological relaxation
    /// for directed acyclic graphs, Dijkstra when no cost is negative, and
    /// Bellman-Ford otherwise.
    pub fn shortest_path(&self, source: &T) -> GraphResult<ShortestPaths<T>, T> {
        self.require(source)?;

        let algorithm = if !self.is_directed() && !self.is_weighted() {
            PathAlgorithm::Bfs
        } else if self.is_directed() && self.is_acyclic() {
            PathAlgorithm::DagRelaxation
        } else if !self.has_negative_edge() {
            PathAlgorithm::Dijkstra
        } else {
            PathAlgorithm::BellmanFord
        };
        log::debug!("Shortest paths from {:?} using {}", source, algorithm);

        match algorithm {
            PathAlgorithm::Bfs => self.bfs_shortest_path(source),
            PathAlgorithm::DagRelaxation => self.dag_shortest_path(source),
            PathAlgorithm::Dijkstra => self.dijkstra_shortest_path(source),
            PathAlgorithm::BellmanFord => self.bellman_ford_shortest_path(source),
        }
    }

    /// Shortest paths by edge count. Requires every cost to be 1.
    pub fn bfs_shortest_path(&self, source: &T) -> GraphResult<ShortestPaths<T>, T> {
        let start = self.require(source)?;
        if self.is_weighted() {
            return Err(GraphError::InvalidOperation(
                "breadth-first shortest paths require an unweighted graph".to_string(),
            ));
        }

        let mut state = Relaxation::new(self.slot_count(), start);
        let mut queue = VecDeque::new();
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for &(target, cost) in self.neighbors(current) {
                if !state.distance[target.0].is_finite() && state.relax(current, target, cost) {
                    queue.push_back(target);
                }
            }
        }

        Ok(state.finish(self, start, PathAlgorithm::Bfs))
    }

    /// Shortest paths by relaxing edges in topological order.
    pub fn dag_shortest_path(&self, source: &T) -> GraphResult<ShortestPaths<T>, T> {
        let start = self.require(source)?;
        let order = self.topological_ids()?;

        let mut state = Relaxation::new(self.slot_count(), start);
        let from = order.iter().position(|&id| id == start).unwrap_or(order.len());
        for &current in &order[from..] {
            for &(target, cost) in self.neighbors(current) {
                state.relax(current, target, cost);
            }
        }

        Ok(state.finish(self, start, PathAlgorithm::DagRelaxation))
    }

    /// Dijkstra's algorithm with a binary heap. Rejects negative costs.
    pub fn dijkstra_shortest_path(&self, source: &T) -> GraphResult<ShortestPaths<T>, T> {
        let start = self.require(source)?;
        if self.has_negative_edge() {
            return Err(GraphError::InvalidOperation(
                "Dijkstra requires non-negative edge costs".to_string(),
            ));
        }

        let mut state = Relaxation::new(self.slot_count(), start);
        let mut settled = vec![false; self.slot_count()];
        let mut heap = BinaryHeap::new();
        heap.push(Reverse((0i64, start)));

        while let Some(Reverse((_, current))) = heap.pop() {
            if settled[current.0] {
                continue;
            }
            settled[current.0] = true;

            for &(target, cost) in self.neighbors(current) {
                if !settled[target.0] && state.relax(current, target, cost) {
                    if let Some(d) = state.distance[target.0].value() {
                        heap.push(Reverse((d, target)));
                    }
                }
            }
        }

        Ok(state.finish(self, start, PathAlgorithm::Dijkstra))
    }

    /// Bellman-Ford. Fails with `NegativeCycle` if one is reachable from `source`.
    pub fn bellman_ford_shortest_path(&self, source: &T) -> GraphResult<ShortestPaths<T>, T> {
        let start = self.require(source)?;
        let ids: Vec<VertexId> = self.ids().collect();

        let mut state = Relaxation::new(self.slot_count(), start);
        for _ in 1..ids.len() {
            let mut changed = false;
            for &current in &ids {
                for &(target, cost) in self.neighbors(current) {
                    changed |= state.relax(current, target, cost);
                }
            }
            if !changed {
                break;
            }
        }

        for &current in &ids {
            for &(target, cost) in self.neighbors(current) {
                let through = state.distance[current.0];
                if through.is_finite() && through.extend(cost) < state.distance[target.0] {
                    log::warn!("Negative cycle reachable from {:?}", source);
                    return Err(GraphError::NegativeCycle);
                }
            }
        }

        Ok(state.finish(self, start, PathAlgorithm::BellmanFord))
    }

    /// All-pairs shortest paths (Floyd-Warshall). Only defined for simple graphs.
    pub fn all_pairs_shortest_paths(&self) -> GraphResult<AllPairsPaths<T>, T> {
        let matrix = self.adjacency_matrix()?;
        let n = matrix.size();
        let mut distances = matrix.cells;
        let mut via = vec![vec![None; n]; n];

        for k in 0..n {
            for i in 0..n {
                if !distances[i][k].is_finite() {
                    continue;
                }
                for j in 0..n {
                    let candidate = distances[i][k].join(distances[k][j]);
                    if candidate < distances[i][j] {
                        distances[i][j] = candidate;
                        via[i][j] = Some(k);
                    }
                }
            }
        }

        if (0..n).any(|i| distances[i][i] < Distance::ZERO) {
            log::warn!("Negative cycle found by all-pairs relaxation");
            return Err(GraphError::NegativeCycle);
        }

        Ok(AllPairsPaths {
            labels: matrix.labels,
            distances,
            via,
        })
    }
}
