//! Recursive, memoized solver for lights out on arbitrary graphs.
//!
//! For a vertex subset `vs` the solver looks at the nodes of odd induced degree in ascending order.
//! For such a node `v` it solves `vs \ {v}` recursively. If that press sequence toggles `v` an odd
//! number of times as a side effect, it solves all of `vs` and is returned right away. Otherwise it
//! is appended to the "press everyone" candidate and the next node is tried. If no node of `vs` has
//! odd induced degree, pressing every node once is the answer.
//!
//! Every press sequence returned for `vs` turns the subgraph induced by `vs` from all-ON to
//! all-OFF.

use fxhash::FxHashMap;
use log::{debug, warn};
use std::io;
use crate::cust_error::ProcessingError;
use crate::graph::UGraph;
use crate::multiset::submultiset;
use crate::subset::VertexSubset;

/// Receives every subset the solver computes, together with the presses chosen for it.
///
/// Cache hits are not reported. Subsets are reported once their result is fixed, so a subset is
/// always reported after the subsets it was derived from.
pub trait SubsetObserver {
    fn resolved(&mut self, subset: &VertexSubset, presses: &[usize]) -> io::Result<()>;
}

/// Observer that discards everything.
pub struct NoTrace;

impl SubsetObserver for NoTrace {
    fn resolved(&mut self, _subset: &VertexSubset, _presses: &[usize]) -> io::Result<()> {
        Ok(())
    }
}

impl SubsetObserver for Vec<(VertexSubset, Vec<usize>)> {
    fn resolved(&mut self, subset: &VertexSubset, presses: &[usize]) -> io::Result<()> {
        self.push((subset.clone(), presses.to_vec()));
        Ok(())
    }
}

impl<O: SubsetObserver + ?Sized> SubsetObserver for &mut O {
    fn resolved(&mut self, subset: &VertexSubset, presses: &[usize]) -> io::Result<()> {
        (**self).resolved(subset, presses)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveConfig {
    /// Reuse results of subsets that were already solved.
    pub memoize: bool,
    /// Maximal recursion depth, i.e. number of nodes removed from the top-level subset.
    pub max_depth: usize,
    /// Maximal number of subsets computed during one top-level solve.
    pub max_subsets: usize,
    /// Maximal number of press entries produced during one top-level solve, summed over every
    /// computed subset. This bounds the memory held by the cache.
    pub max_presses: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        SolveConfig {
            memoize: true,
            // Fits the 2 MiB stack of spawned threads in debug builds.
            max_depth: 256,
            max_subsets: 1 << 22,
            max_presses: 1 << 24,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SolveStats {
    pub subsets_solved: usize,
    pub cache_hits: usize,
    pub max_depth: usize,
    /// Press entries produced so far, summed over every computed subset.
    pub presses: usize,
}

/// Solves lights out on subgraphs of `graph`.
///
/// The cache lives as long as the `Solver`, and is only valid for `graph`.
pub struct Solver<'g, O: SubsetObserver> {
    graph: &'g UGraph,
    config: SolveConfig,
    cache: FxHashMap<VertexSubset, Vec<usize>>,
    observer: O,
    stats: SolveStats,
}

impl<'g> Solver<'g, NoTrace> {

    pub fn new(graph: &'g UGraph, config: SolveConfig) -> Self {
        Solver::with_observer(graph, config, NoTrace)
    }

}

impl<'g, O: SubsetObserver> Solver<'g, O> {

    pub fn with_observer(graph: &'g UGraph, config: SolveConfig, observer: O) -> Self {
        Solver {
            graph,
            config,
            cache: FxHashMap::default(),
            observer,
            stats: SolveStats::default(),
        }
    }

    /// Returns a press sequence that switches off every lamp of the graph.
    pub fn solve_all(&mut self) -> Result<Vec<usize>, ProcessingError> {
        let full = VertexSubset::full(self.graph.num_nodes());
        self.solve(&full)
    }

    /// Returns a press sequence that switches off every lamp of the subgraph induced by `vs`.
    ///
    /// Panics if `vs` is not a subset of the nodes of the graph of `self`.
    pub fn solve(&mut self, vs: &VertexSubset) -> Result<Vec<usize>, ProcessingError> {
        assert_eq!(vs.capacity(), self.graph.num_nodes(), "`vs` belongs to another graph");
        if !self.config.memoize {
            warn!("Memoization is disabled, every subset is recomputed.");
        }
        self.stats = SolveStats::default();
        self.solve_inner(vs, 0)
    }

    fn solve_inner(&mut self, vs: &VertexSubset, depth: usize) -> Result<Vec<usize>, ProcessingError> {
        if self.config.memoize {
            if let Some(presses) = self.cache.get(vs) {
                self.stats.cache_hits += 1;
                return Ok(presses.clone())
            }
        }
        if depth > self.config.max_depth {
            return Err(ProcessingError::ResourceExhaustion(
                format!("recursion depth exceeds {}", self.config.max_depth)))
        }
        if self.stats.subsets_solved >= self.config.max_subsets {
            return Err(ProcessingError::ResourceExhaustion(
                format!("more than {} subsets needed", self.config.max_subsets)))
        }
        self.stats.subsets_solved += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        // Answer if every node fails to be fixed by the smaller solution.
        let mut res = vs.to_vec();
        let mut degs_all_even = true;
        for node in vs.iter() {
            if self.graph.induced_degree(node, vs) % 2 == 0 {
                continue
            }
            degs_all_even = false;
            let presses = self.solve_inner(&vs.without(node), depth + 1)?;
            let mut sorted = presses.clone();
            sorted.sort_unstable();
            // `presses` already switches off `node`.
            if submultiset(&sorted, &self.graph.neighbors_in(node, vs)).len() % 2 == 1 {
                return self.resolve(vs, presses)
            }
            self.check_presses(res.len() + presses.len())?;
            res.extend_from_slice(&presses);
        }
        if degs_all_even {
            return self.resolve(vs, vs.to_vec())
        }
        self.resolve(vs, res)
    }

    /// Fails if `pending` more press entries would exceed `self.config.max_presses`.
    fn check_presses(&self, pending: usize) -> Result<(), ProcessingError> {
        if self.stats.presses.saturating_add(pending) > self.config.max_presses {
            return Err(ProcessingError::ResourceExhaustion(
                format!("more than {} press entries needed", self.config.max_presses)))
        }
        Ok(())
    }

    fn resolve(&mut self, vs: &VertexSubset, presses: Vec<usize>) -> Result<Vec<usize>, ProcessingError> {
        self.check_presses(presses.len())?;
        self.stats.presses += presses.len();
        debug!("Resolved subset of size {} with {} presses", vs.len(), presses.len());
        self.observer.resolved(vs, &presses)?;
        if self.config.memoize {
            self.cache.insert(vs.clone(), presses.clone());
        }
        Ok(presses)
    }

    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

}

/// Solves lights out on `graph` with a fresh cache and the default configuration.
pub fn solve(graph: &UGraph) -> Result<Vec<usize>, ProcessingError> {
    Solver::new(graph, SolveConfig::default()).solve_all()
}
