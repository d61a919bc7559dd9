//! Implementation of a simple, static undirected graph with sorted adjacency lists, as needed by
//! the lights out solver.

use std::io::BufRead;
use std::cmp::min;
use rand::Rng;
use rand::seq::SliceRandom;
use crate::cust_error::ImportError;
use crate::subset::VertexSubset;

/// A simple undirected graph on the nodes `0..n`.
///
/// Every edge `(v, u)` appears in the neighborhood of both `v` and `u`, and every neighborhood is
/// kept sorted ascending. Self-loops and parallel edges are rejected on insertion.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct UGraph {
    adj_list: Vec<Vec<usize>>,
    num_edges: usize,
}

impl UGraph {

    /// Returns a graph with `n` isolated nodes.
    pub fn new(n: usize) -> Self {
        UGraph {
            adj_list: vec![Vec::new(); n],
            num_edges: 0,
        }
    }

    /// Builds a graph on `n` nodes from `edges`.
    pub fn from_edges<I: IntoIterator<Item=(usize, usize)>>(n: usize, edges: I) -> Result<Self, ImportError> {
        let mut graph = UGraph::new(n);
        for (src, trg) in edges {
            graph.add_edge(src, trg)?;
        }
        Ok(graph)
    }

    /// Inserts the edge `(src, trg)`, keeping both neighborhoods sorted.
    pub fn add_edge(&mut self, src: usize, trg: usize) -> Result<(), ImportError> {
        let n = self.num_nodes();
        for node in [src, trg] {
            if node >= n {
                return Err(ImportError::VertexRangeError { node, n })
            }
        }
        if src == trg {
            return Err(ImportError::SelfLoopError(src))
        }
        match self.adj_list[src].binary_search(&trg) {
            Ok(_) => return Err(ImportError::DuplicateEdgeError(src, trg)),
            Err(pos) => self.adj_list[src].insert(pos, trg),
        }
        let pos = self.adj_list[trg]
            .binary_search(&src)
            .expect_err("neighborhoods are symmetric");
        self.adj_list[trg].insert(pos, src);
        self.num_edges += 1;
        Ok(())
    }

    /// Returns an `Iterator` over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item=usize> {
        0..self.adj_list.len()
    }

    /// Returns the number of nodes of `self`.
    pub fn num_nodes(&self) -> usize {
        self.adj_list.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns the ascending neighborhood of `node`.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adj_list[node]
    }

    /// Returns the ascending intersection between `set` and the neighborhood of `node`.
    pub fn neighbors_in(&self, node: usize, set: &VertexSubset) -> Vec<usize> {
        self.adj_list[node]
            .iter()
            .copied()
            .filter(|neigh| set.contains(*neigh))
            .collect()
    }

    /// Returns the degree of `node` in the subgraph induced by `set`.
    pub fn induced_degree(&self, node: usize, set: &VertexSubset) -> usize {
        self.adj_list[node]
            .iter()
            .filter(|neigh| set.contains(**neigh))
            .count()
    }

    /// Returns a uniformly random simple graph with `n` nodes and `m` edges. If `m` exceeds the
    /// number of possible edges, the complete graph is returned.
    pub fn random_gnm<R: Rng + ?Sized>(n: usize, m: usize, rng: &mut R) -> Self {
        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|src| ((src + 1)..n).map(move |trg| (src, trg)))
            .collect();
        let m = min(m, pairs.len());
        let mut graph = UGraph::new(n);
        for (src, trg) in pairs.choose_multiple(rng, m) {
            graph.add_edge(*src, *trg).expect("sampled pairs are distinct and in range");
        }
        graph
    }

}

impl UGraph {

    /// Reads an edge list and creates a `UGraph`.
    ///
    /// The input consists of whitespace separated integers: `<n> <m>` followed by `m` pairs
    /// `<v> <u>` with `0 <= v, u < n`. Line breaks carry no meaning.
    pub fn read_edge_list<R: BufRead>(input: R) -> Result<Self, ImportError> {
        let mut tokens = Vec::new();
        for line in input.lines() {
            let line = line?;
            tokens.extend(line.split_whitespace().map(|t| t.to_owned()));
        }
        let mut tokens = tokens.into_iter();
        let mut next_int = || -> Result<usize, ImportError> {
            Ok(tokens.next().ok_or(ImportError::InputMalformedError)?.parse::<usize>()?)
        };
        // <n> <m>
        let n = next_int()?;
        let m = next_int()?;
        let mut edges = Vec::with_capacity(m);
        for _ in 0..m {
            // <v> <u>
            let src = next_int()?;
            let trg = next_int()?;
            edges.push((src, trg));
        }
        if tokens.next().is_some() {
            return Err(ImportError::InputMalformedError)
        }
        UGraph::from_edges(n, edges)
    }

}
