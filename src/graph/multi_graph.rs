//! Core graph structure: an arena of vertices with forward and reverse adjacency.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::{Edge, GraphError, GraphResult, Label};

/// Handle to a vertex slot. Only meaningful inside the graph that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct VertexId(pub(crate) usize);

/// A vertex and its incident edges.
#[derive(Debug, Clone)]
pub(crate) struct Vertex<T> {
    pub(crate) label: T,
    /// Outgoing edges as (target, cost), in insertion order.
    pub(crate) adjacency: Vec<(VertexId, i64)>,
    /// One back-reference per incoming edge, self-loops included.
    pub(crate) reverse: Vec<VertexId>,
}

impl<T> Vertex<T> {
    fn new(label: T) -> Self {
        Self {
            label,
            adjacency: Vec::new(),
            reverse: Vec::new(),
        }
    }
}

/// A directed or undirected multigraph keyed by vertex label.
///
/// Parallel edges and self-loops are allowed. In undirected mode every edge
/// `u - v` is stored as the two entries `u -> v` and `v -> u` with the same
/// cost, except self-loops which are stored once. `Clone` produces a fully
/// independent copy.
#[derive(Debug, Clone)]
pub struct MultiGraph<T> {
    /// Vertex arena. `None` marks a slot freed by vertex removal.
    slots: Vec<Option<Vertex<T>>>,
    /// Freed slots available for reuse.
    free: Vec<usize>,
    /// Label -> slot, iterated in label order.
    index: BTreeMap<T, VertexId>,
    directed: bool,
}

impl<T: Label> MultiGraph<T> {
    /// Create a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            index: BTreeMap::new(),
            directed,
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Create from a vertex list and an edge list.
    ///
    /// Fails on duplicate vertices or on edges naming unknown vertices.
    pub fn from_parts<V, E>(directed: bool, vertices: V, edges: E) -> GraphResult<Self, T>
    where
        V: IntoIterator<Item = T>,
        E: IntoIterator<Item = Edge<T>>,
    {
        let mut graph = Self::new(directed);
        for label in vertices {
            graph.add_vertex(label)?;
        }
        for edge in edges {
            graph.add_edge(&edge.source, &edge.target, edge.cost)?;
        }
        Ok(graph)
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Number of edges. Undirected edges and self-loops count once.
    pub fn edge_count(&self) -> usize {
        let mut entries = 0;
        let mut loops = 0;
        for id in self.ids() {
            let adjacency = &self.vertex(id).adjacency;
            entries += adjacency.len();
            loops += adjacency.iter().filter(|&&(target, _)| target == id).count();
        }
        if self.directed {
            entries
        } else {
            (entries - loops) / 2 + loops
        }
    }

    /// Whether a vertex with this label exists.
    pub fn contains_vertex(&self, label: &T) -> bool {
        self.index.contains_key(label)
    }

    /// All vertex labels in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &T> + '_ {
        self.index.keys()
    }

    /// All edges, grouped by source in label order.
    ///
    /// An undirected edge is reported once, from its lower-labelled endpoint.
    pub fn edges(&self) -> Vec<Edge<T>> {
        let mut result = Vec::new();
        for (label, &id) in &self.index {
            for &(target, cost) in &self.vertex(id).adjacency {
                let target_label = self.label(target);
                if self.directed || label <= target_label {
                    result.push(Edge::new(label.clone(), target_label.clone(), cost));
                }
            }
        }
        result
    }

    /// Outgoing (neighbor, cost) entries of a vertex in insertion order.
    pub fn adjacent(&self, label: &T) -> Option<Vec<(T, i64)>> {
        let id = self.id_of(label)?;
        Some(
            self.vertex(id)
                .adjacency
                .iter()
                .map(|&(target, cost)| (self.label(target).clone(), cost))
                .collect(),
        )
    }

    /// Sources of incoming edges, one per edge.
    pub fn predecessors(&self, label: &T) -> Option<Vec<T>> {
        let id = self.id_of(label)?;
        Some(
            self.vertex(id)
                .reverse
                .iter()
                .map(|&source| self.label(source).clone())
                .collect(),
        )
    }

    /// Add an isolated vertex.
    pub fn add_vertex(&mut self, label: T) -> GraphResult<(), T> {
        if self.index.contains_key(&label) {
            return Err(GraphError::VertexAlreadyExists(label));
        }
        let vertex = Vertex::new(label.clone());
        let id = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(vertex);
                VertexId(slot)
            }
            None => {
                self.slots.push(Some(vertex));
                VertexId(self.slots.len() - 1)
            }
        };
        self.index.insert(label, id);
        Ok(())
    }

    /// Remove a vertex and every edge incident on it.
    pub fn remove_vertex(&mut self, label: &T) -> GraphResult<(), T> {
        let id = self.require(label)?;
        self.detach(id);
        Ok(())
    }

    /// Give a vertex a new label, keeping all of its edges.
    pub fn rename_vertex(&mut self, old_label: &T, new_label: T) -> GraphResult<(), T> {
        let id = self.require(old_label)?;
        if *old_label == new_label {
            return Ok(());
        }
        if self.index.contains_key(&new_label) {
            return Err(GraphError::VertexAlreadyExists(new_label));
        }
        self.relabel(id, new_label);
        Ok(())
    }

    /// Add an edge. Undirected graphs also get the mirrored entry, except for self-loops.
    pub fn add_edge(&mut self, from: &T, to: &T, cost: i64) -> GraphResult<(), T> {
        let (source, target) = self.endpoints(from, to)?;
        self.connect(source, target, cost);
        Ok(())
    }

    /// Remove one edge `from -> to` with exactly this cost.
    pub fn remove_edge(&mut self, from: &T, to: &T, cost: i64) -> GraphResult<(), T> {
        let (source, target) = self.endpoints(from, to)?;
        if self.unlink(source, target, Some(cost)).is_none() {
            return Err(GraphError::EdgeNotFound {
                from: from.clone(),
                to: to.clone(),
            });
        }
        if !self.directed && source != target {
            self.unlink(target, source, Some(cost));
        }
        Ok(())
    }

    /// Remove the first edge `from -> to` regardless of cost, returning its cost.
    pub fn remove_any_edge(&mut self, from: &T, to: &T) -> GraphResult<i64, T> {
        let (source, target) = self.endpoints(from, to)?;
        let cost = self
            .unlink(source, target, None)
            .ok_or_else(|| GraphError::EdgeNotFound {
                from: from.clone(),
                to: to.clone(),
            })?;
        if !self.directed && source != target {
            self.unlink(target, source, Some(cost));
        }
        Ok(cost)
    }

    /// Whether at least one edge `from -> to` exists.
    pub fn edge_exists(&self, from: &T, to: &T) -> bool {
        self.count_edges(from, to).is_some_and(|count| count > 0)
    }

    /// Whether an edge `from -> to` with this cost exists.
    pub fn edge_exists_with_cost(&self, from: &T, to: &T, cost: i64) -> bool {
        self.count_edges_with_cost(from, to, cost)
            .is_some_and(|count| count > 0)
    }

    /// Number of parallel edges `from -> to`, or `None` if an endpoint is missing.
    pub fn count_edges(&self, from: &T, to: &T) -> Option<usize> {
        let source = self.id_of(from)?;
        let target = self.id_of(to)?;
        Some(
            self.vertex(source)
                .adjacency
                .iter()
                .filter(|&&(t, _)| t == target)
                .count(),
        )
    }

    /// Number of parallel edges `from -> to` with this cost.
    pub fn count_edges_with_cost(&self, from: &T, to: &T, cost: i64) -> Option<usize> {
        let source = self.id_of(from)?;
        let target = self.id_of(to)?;
        Some(
            self.vertex(source)
                .adjacency
                .iter()
                .filter(|&&(t, c)| t == target && c == cost)
                .count(),
        )
    }

    /// Costs of all parallel edges `from -> to`. Empty if none or an endpoint is missing.
    pub fn edge_costs(&self, from: &T, to: &T) -> Vec<i64> {
        match (self.id_of(from), self.id_of(to)) {
            (Some(source), Some(target)) => self
                .vertex(source)
                .adjacency
                .iter()
                .filter(|&&(t, _)| t == target)
                .map(|&(_, cost)| cost)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Number of incoming edge entries, or `None` if the vertex is missing.
    pub fn indegree(&self, label: &T) -> Option<usize> {
        self.id_of(label).map(|id| self.vertex(id).reverse.len())
    }

    /// Number of outgoing edge entries, or `None` if the vertex is missing.
    pub fn outdegree(&self, label: &T) -> Option<usize> {
        self.id_of(label).map(|id| self.vertex(id).adjacency.len())
    }

    /// Merge `second` into `first` and call the result `new_label`.
    ///
    /// All edges of both vertices survive with their costs; edges between the
    /// two become self-loops. `new_label` may reuse either merged label but not
    /// the label of a third vertex.
    pub fn merge_vertices(&mut self, first: &T, second: &T, new_label: T) -> GraphResult<(), T> {
        let (keep, gone) = self.endpoints(first, second)?;
        if keep == gone {
            return Err(GraphError::InvalidOperation(format!(
                "cannot merge vertex {:?} with itself",
                first
            )));
        }
        if let Some(existing) = self.id_of(&new_label) {
            if existing != keep && existing != gone {
                return Err(GraphError::InvalidOperation(format!(
                    "merged label {:?} is already used by another vertex",
                    new_label
                )));
            }
        }

        log::debug!("Merging {:?} into {:?} as {:?}", second, first, new_label);
        self.merge_ids(keep, gone);
        if *first != new_label {
            self.relabel(keep, new_label);
        }
        Ok(())
    }

    /// Remove every self-loop, returning how many were removed.
    pub fn remove_self_loops(&mut self) -> usize {
        let ids: Vec<VertexId> = self.ids().collect();
        ids.into_iter()
            .map(|id| self.remove_self_loops_at(id))
            .sum()
    }

    // ==================== Arena internals ====================

    pub(crate) fn id_of(&self, label: &T) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    pub(crate) fn require(&self, label: &T) -> GraphResult<VertexId, T> {
        self.id_of(label)
            .ok_or_else(|| GraphError::VertexNotFound(label.clone()))
    }

    fn endpoints(&self, from: &T, to: &T) -> GraphResult<(VertexId, VertexId), T> {
        Ok((self.require(from)?, self.require(to)?))
    }

    pub(crate) fn vertex(&self, id: VertexId) -> &Vertex<T> {
        match self.slots.get(id.0).and_then(Option::as_ref) {
            Some(vertex) => vertex,
            None => unreachable!("stale vertex handle {}", id.0),
        }
    }

    fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex<T> {
        match self.slots.get_mut(id.0).and_then(Option::as_mut) {
            Some(vertex) => vertex,
            None => unreachable!("stale vertex handle {}", id.0),
        }
    }

    pub(crate) fn label(&self, id: VertexId) -> &T {
        &self.vertex(id).label
    }

    /// Outgoing (target, cost) entries.
    pub(crate) fn neighbors(&self, id: VertexId) -> &[(VertexId, i64)] {
        &self.vertex(id).adjacency
    }

    /// One back-reference per incoming entry.
    pub(crate) fn sources(&self, id: VertexId) -> &[VertexId] {
        &self.vertex(id).reverse
    }

    /// Live handles in label order.
    pub(crate) fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.index.values().copied()
    }

    /// Upper bound (exclusive) on handle values, for per-vertex scratch tables.
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Same vertices under the same handles, no edges.
    pub(crate) fn empty_like(&self) -> Self {
        Self {
            slots: self
                .slots
                .iter()
                .map(|slot| slot.as_ref().map(|v| Vertex::new(v.label.clone())))
                .collect(),
            free: self.free.clone(),
            index: self.index.clone(),
            directed: self.directed,
        }
    }

    /// Insert one forward entry and its back-reference.
    pub(crate) fn link(&mut self, source: VertexId, target: VertexId, cost: i64) {
        self.vertex_mut(source).adjacency.push((target, cost));
        self.vertex_mut(target).reverse.push(source);
    }

    /// Insert an edge, mirrored in undirected mode.
    pub(crate) fn connect(&mut self, source: VertexId, target: VertexId, cost: i64) {
        self.link(source, target, cost);
        if !self.directed && source != target {
            self.link(target, source, cost);
        }
    }

    /// Remove one forward entry (matching `cost` if given) and its back-reference.
    pub(crate) fn unlink(
        &mut self,
        source: VertexId,
        target: VertexId,
        cost: Option<i64>,
    ) -> Option<i64> {
        let adjacency = &mut self.vertex_mut(source).adjacency;
        let pos = adjacency
            .iter()
            .position(|&(t, c)| t == target && cost.map_or(true, |wanted| wanted == c))?;
        let (_, removed) = adjacency.remove(pos);

        let reverse = &mut self.vertex_mut(target).reverse;
        if let Some(pos) = reverse.iter().position(|&s| s == source) {
            reverse.remove(pos);
        }
        Some(removed)
    }

    /// Drop every entry pointing at or leaving `id`, then free the slot.
    pub(crate) fn detach(&mut self, id: VertexId) -> Vertex<T> {
        let vertex = match self.slots.get_mut(id.0).and_then(Option::take) {
            Some(vertex) => vertex,
            None => unreachable!("stale vertex handle {}", id.0),
        };

        for &(target, _) in &vertex.adjacency {
            if target != id {
                let reverse = &mut self.vertex_mut(target).reverse;
                if let Some(pos) = reverse.iter().position(|&s| s == id) {
                    reverse.remove(pos);
                }
            }
        }

        let mut sources = vertex.reverse.clone();
        sources.sort_unstable();
        sources.dedup();
        for source in sources {
            if source != id {
                self.vertex_mut(source)
                    .adjacency
                    .retain(|&(target, _)| target != id);
            }
        }

        self.index.remove(&vertex.label);
        self.free.push(id.0);
        vertex
    }

    /// Fold `gone` into `keep`. Both handles must be live and distinct.
    pub(crate) fn merge_ids(&mut self, keep: VertexId, gone: VertexId) {
        let outgoing = self.vertex(gone).adjacency.clone();

        // Undirected graphs see every incoming edge again as an outgoing one
        let mut incoming = Vec::new();
        if self.directed {
            let mut sources = self.vertex(gone).reverse.clone();
            sources.sort_unstable();
            sources.dedup();
            for source in sources {
                if source == gone {
                    continue;
                }
                for &(target, cost) in &self.vertex(source).adjacency {
                    if target == gone {
                        incoming.push((source, cost));
                    }
                }
            }
        }

        self.detach(gone);

        for (target, cost) in outgoing {
            let target = if target == gone { keep } else { target };
            self.connect(keep, target, cost);
        }
        for (source, cost) in incoming {
            self.link(source, keep, cost);
        }
    }

    pub(crate) fn remove_self_loops_at(&mut self, id: VertexId) -> usize {
        let vertex = self.vertex_mut(id);
        let before = vertex.adjacency.len();
        vertex.adjacency.retain(|&(target, _)| target != id);
        vertex.reverse.retain(|&source| source != id);
        before - vertex.adjacency.len()
    }

    fn relabel(&mut self, id: VertexId, new_label: T) {
        let old_label = std::mem::replace(&mut self.vertex_mut(id).label, new_label.clone());
        self.index.remove(&old_label);
        self.index.insert(new_label, id);
    }
}

impl<T: Label + fmt::Display> fmt::Display for MultiGraph<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}, {}, {}, {}, {} graph",
            if self.is_directed() { "Directed" } else { "Undirected" },
            if self.is_weighted() { "Weighted" } else { "Unweighted" },
            if self.is_acyclic() { "Acyclic" } else { "Cyclic" },
            if self.is_connected() { "Connected" } else { "Disconnected" },
            if self.is_simple() { "Simple" } else { "Non simple" },
        )?;

        for (label, &id) in &self.index {
            write!(f, "{} ->", label)?;
            for (i, &(target, cost)) in self.vertex(id).adjacency.iter().enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{}{}({})", sep, self.label(target), cost)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
