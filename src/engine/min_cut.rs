//! Randomized global minimum cut (Karger's contraction algorithm).
//!
//! The result is a Monte Carlo estimate: every trial returns the size of some
//! real cut, so the answer is never below the true minimum, but it only equals
//! the minimum with a probability that grows with the number of trials. For a
//! graph with `n` vertices a single trial succeeds with probability at least
//! `2 / (n * (n - 1))`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::graph::multi_graph::VertexId;
use crate::graph::MultiGraph;
use crate::index::DisjointSet;
use crate::types::{
    Edge, GraphError, GraphResult, Label, DEFAULT_MIN_CUT_SEED, DEFAULT_MIN_CUT_TRIALS,
};

/// Parameters for a seeded min-cut search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinCutParams {
    /// Number of independent contraction trials.
    pub trials: usize,
    /// Seed for the pseudo-random edge choices.
    pub seed: u64,
}

impl Default for MinCutParams {
    fn default() -> Self {
        Self {
            trials: DEFAULT_MIN_CUT_TRIALS,
            seed: DEFAULT_MIN_CUT_SEED,
        }
    }
}

/// Smallest cut found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinCut<T> {
    /// Number of edges crossing the cut.
    pub size: usize,
    /// The two sides, each in ascending label order.
    pub partition: (Vec<T>, Vec<T>),
}

impl<T: Label> MultiGraph<T> {
    /// Min cut with the default trial count and seed.
    pub fn min_cut(&self) -> GraphResult<MinCut<T>, T> {
        self.min_cut_with(&MinCutParams::default())
    }

    /// Min cut with explicit parameters.
    pub fn min_cut_with(&self, params: &MinCutParams) -> GraphResult<MinCut<T>, T> {
        let mut rng = StdRng::seed_from_u64(params.seed);
        self.min_cut_with_rng(params.trials, &mut rng)
    }

    /// Min cut drawing every random choice from `rng`.
    ///
    /// Undirected graphs with at least two vertices only. Stops early once a
    /// cut of size 0 is found.
    pub fn min_cut_with_rng<R: Rng + ?Sized>(
        &self,
        trials: usize,
        rng: &mut R,
    ) -> GraphResult<MinCut<T>, T> {
        if self.is_directed() {
            return Err(GraphError::NotUndirected);
        }
        if self.vertex_count() < 2 {
            return Err(GraphError::InvalidOperation(
                "min cut needs at least two vertices".to_string(),
            ));
        }
        if trials == 0 {
            return Err(GraphError::InvalidOperation(
                "min cut needs at least one trial".to_string(),
            ));
        }

        let mut best: Option<MinCut<T>> = None;
        let mut run = 0;
        for trial in 0..trials {
            run += 1;
            let cut = self.contract(rng)?;
            log::trace!("Min-cut trial {}: cut of size {}", trial, cut.size);

            let improved = best.as_ref().map_or(true, |current| cut.size < current.size);
            if improved {
                best = Some(cut);
            }
            if best.as_ref().is_some_and(|current| current.size == 0) {
                break;
            }
        }

        let best = best.ok_or_else(|| {
            GraphError::InvalidOperation("min cut produced no trial".to_string())
        })?;
        log::debug!("Min cut after {} trials: {}", run, best.size);
        Ok(best)
    }

    /// A uniformly random vertex, or `None` for an empty graph.
    pub fn pick_random_vertex<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        let count = self.vertex_count();
        if count == 0 {
            return None;
        }
        self.vertices().nth(rng.gen_range(0..count))
    }

    /// A uniformly random adjacency entry as an edge, or `None` if there are no edges.
    ///
    /// Undirected edges are stored twice, so each is equally likely in either orientation.
    pub fn pick_random_edge<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Edge<T>> {
        let (source, target, cost) = self.random_entry(rng)?;
        Some(Edge::new(
            self.label(source).clone(),
            self.label(target).clone(),
            cost,
        ))
    }

    fn random_entry<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(VertexId, VertexId, i64)> {
        let total: usize = self.ids().map(|id| self.neighbors(id).len()).sum();
        if total == 0 {
            return None;
        }
        let mut pick = rng.gen_range(0..total);
        for id in self.ids() {
            let adjacency = self.neighbors(id);
            if let Some(&(target, cost)) = adjacency.get(pick) {
                return Some((id, target, cost));
            }
            pick -= adjacency.len();
        }
        None
    }

    /// One contraction trial on a private copy.
    fn contract<R: Rng + ?Sized>(&self, rng: &mut R) -> GraphResult<MinCut<T>, T> {
        let mut scratch = self.clone();
        scratch.remove_self_loops();

        let mut absorbed = DisjointSet::new();
        for label in self.vertices() {
            absorbed.create(label.clone());
        }

        let mut exhausted = false;
        while scratch.vertex_count() > 2 {
            let Some((keep, gone, _)) = scratch.random_entry(rng) else {
                exhausted = true;
                break;
            };
            absorbed.join(scratch.label(keep), scratch.label(gone))?;
            scratch.merge_ids(keep, gone);
            scratch.remove_self_loops_at(keep);
        }

        let size = if exhausted { 0 } else { scratch.edge_count() };

        let anchor = match scratch.vertices().next() {
            Some(label) => absorbed.find(label)?,
            None => {
                return Err(GraphError::InvalidOperation(
                    "min cut needs at least two vertices".to_string(),
                ))
            }
        };
        let mut side = Vec::new();
        let mut rest = Vec::new();
        for label in self.vertices() {
            if absorbed.find(label)? == anchor {
                side.push(label.clone());
            } else {
                rest.push(label.clone());
            }
        }

        Ok(MinCut {
            size,
            partition: (side, rest),
        })
    }
}
