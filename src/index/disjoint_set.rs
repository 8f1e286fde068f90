//! Disjoint-set union over arbitrary labels.

use std::collections::BTreeMap;

use crate::types::{GraphError, GraphResult, Label};

/// Union-find over labels, with path compression and union by size.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    /// Element -> slot in the parallel vectors below.
    index: BTreeMap<T, usize>,
    labels: Vec<T>,
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl<T: Label> DisjointSet<T> {
    /// Create a new, empty disjoint set.
    pub fn new() -> Self {
        Self {
            index: BTreeMap::new(),
            labels: Vec::new(),
            parent: Vec::new(),
            size: Vec::new(),
        }
    }

    /// Register `elem` as a singleton set. Returns false if it was already present.
    pub fn create(&mut self, elem: T) -> bool {
        if self.index.contains_key(&elem) {
            return false;
        }
        let slot = self.labels.len();
        self.index.insert(elem.clone(), slot);
        self.labels.push(elem);
        self.parent.push(slot);
        self.size.push(1);
        true
    }

    /// Whether `elem` has been registered.
    pub fn contains(&self, elem: &T) -> bool {
        self.index.contains_key(elem)
    }

    /// Representative of the set containing `elem`.
    pub fn find(&mut self, elem: &T) -> GraphResult<T, T> {
        let slot = self.slot(elem)?;
        let root = self.root(slot);
        Ok(self.labels[root].clone())
    }

    /// Merge the sets containing `a` and `b`. Returns false if they were already one set.
    pub fn join(&mut self, a: &T, b: &T) -> GraphResult<bool, T> {
        let a_root = {
            let slot = self.slot(a)?;
            self.root(slot)
        };
        let b_root = {
            let slot = self.slot(b)?;
            self.root(slot)
        };
        if a_root == b_root {
            return Ok(false);
        }

        // Smaller tree goes under the larger root
        let (small, large) = if self.size[a_root] < self.size[b_root] {
            (a_root, b_root)
        } else {
            (b_root, a_root)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        Ok(true)
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: &T, b: &T) -> GraphResult<bool, T> {
        let a_slot = self.slot(a)?;
        let b_slot = self.slot(b)?;
        Ok(self.root(a_slot) == self.root(b_slot))
    }

    /// Number of elements in the set containing `elem`.
    pub fn set_size(&mut self, elem: &T) -> GraphResult<usize, T> {
        let slot = self.slot(elem)?;
        let root = self.root(slot);
        Ok(self.size[root])
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        (0..self.parent.len())
            .filter(|&slot| self.parent[slot] == slot)
            .count()
    }

    /// All sets, each listed in ascending element order, ordered by their smallest element.
    pub fn groups(&mut self) -> Vec<Vec<T>> {
        let mut by_root: BTreeMap<usize, Vec<T>> = BTreeMap::new();
        let slots: Vec<usize> = self.index.values().copied().collect();
        let mut order: Vec<usize> = Vec::new();
        for slot in slots {
            let root = self.root(slot);
            if !by_root.contains_key(&root) {
                order.push(root);
            }
            by_root
                .entry(root)
                .or_default()
                .push(self.labels[slot].clone());
        }
        order
            .into_iter()
            .filter_map(|root| by_root.remove(&root))
            .collect()
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no element has been registered.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    fn slot(&self, elem: &T) -> GraphResult<usize, T> {
        self.index
            .get(elem)
            .copied()
            .ok_or_else(|| GraphError::UnknownElement(elem.clone()))
    }

    fn root(&mut self, slot: usize) -> usize {
        let mut root = slot;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut current = slot;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }
}

impl<T: Label> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
