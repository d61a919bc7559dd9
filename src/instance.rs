use crate::graph::UGraph;
use crate::subset::VertexSubset;
use crate::multiset::parity_reduce;
use crate::solver::{SolveConfig, Solver, SubsetObserver};
use crate::cust_error::ProcessingError;
use std::io::{Write};
use std::io;

/// A lights out instance: a lamp sits on every node of `graph`, all lamps start ON.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct LOInstance {
    pub graph: UGraph,
}

impl LOInstance {

    pub fn new(graph: UGraph) -> Self {
        LOInstance {
            graph,
        }
    }

    /// Solves `self` with a fresh cache, reporting every computed subset to `observer`.
    pub fn solve<O: SubsetObserver>(&self, config: SolveConfig, observer: O) -> Result<Vec<usize>, ProcessingError> {
        Solver::with_observer(&self.graph, config, observer).solve_all()
    }

    /// Presses every node of `presses` in turn, starting with all lamps ON.
    /// Returns the final state of each lamp, `true` meaning ON.
    pub fn apply_presses(&self, presses: &[usize]) -> Vec<bool> {
        self.apply_presses_in(&VertexSubset::full(self.graph.num_nodes()), presses)
    }

    /// Like `apply_presses()`, but on the subgraph induced by `set`. Lamps outside of `set` are
    /// reported as OFF and never toggled.
    pub fn apply_presses_in(&self, set: &VertexSubset, presses: &[usize]) -> Vec<bool> {
        let mut lamps: Vec<bool> = self.graph.nodes().map(|node| set.contains(node)).collect();
        for press in presses {
            if !set.contains(*press) {
                continue
            }
            lamps[*press] ^= true;
            for neigh in self.graph.neighbors(*press) {
                if set.contains(*neigh) {
                    lamps[*neigh] ^= true;
                }
            }
        }
        lamps
    }

    /// Checks if `presses` switches off every lamp.
    pub fn validate_solution(&self, presses: &[usize]) -> bool {
        if presses.iter().any(|node| *node >= self.graph.num_nodes()) {
            return false
        }
        self.apply_presses(presses).iter().all(|lamp| !lamp)
    }

    /// Returns the nodes pressed an odd number of times in `presses`.
    pub fn reduce_solution(&self, presses: &[usize]) -> Vec<usize> {
        parity_reduce(presses, self.graph.num_nodes())
    }

}

impl LOInstance {

    /// Writes the raw press sequence, its length and the reduced press set to a `Write` type.
    pub fn write_solution<W: Write>(presses: &[usize], reduced: &[usize], mut out: W) -> Result<(), io::Error> {
        write!(out, "output:")?;
        for press in presses {
            write!(out, " {}", press)?;
        }
        writeln!(out)?;
        writeln!(out, "length: {}", presses.len())?;
        write!(out, "deducted:")?;
        for press in reduced {
            write!(out, " {}", press)?;
        }
        writeln!(out)?;
        Ok(())
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use crate::solver::NoTrace;

    const GRID: &str = "12 17\n0 1\n1 2\n2 3\n4 5\n5 6\n6 7\n8 9\n9 10\n10 11\n\
                        0 4\n4 8\n1 5\n5 9\n2 6\n6 10\n3 7\n7 11\n";

    #[test]
    fn apply_presses_test() {
        let graph = UGraph::from_edges(3, vec![(0, 1), (1, 2)]).unwrap();
        let ins = LOInstance::new(graph);
        assert_eq!(ins.apply_presses(&[]), vec![true, true, true]);
        assert_eq!(ins.apply_presses(&[0]), vec![false, false, true]);
        assert_eq!(ins.apply_presses(&[1]), vec![false, false, false]);
        assert_eq!(ins.apply_presses(&[1, 1]), vec![true, true, true]);
        let set = VertexSubset::from_nodes(3, vec![0, 1]);
        assert_eq!(ins.apply_presses_in(&set, &[1]), vec![false, false, false]);
        assert_eq!(ins.apply_presses_in(&set, &[2]), vec![true, true, false]);
    }

    #[test]
    fn small_cases_test() {
        let ins = LOInstance::new(UGraph::new(1));
        let presses = ins.solve(SolveConfig::default(), NoTrace).unwrap();
        assert_eq!(ins.reduce_solution(&presses), vec![0]);

        let ins = LOInstance::new(UGraph::from_edges(2, vec![(0, 1)]).unwrap());
        let presses = ins.solve(SolveConfig::default(), NoTrace).unwrap();
        assert!(ins.validate_solution(&presses));
        assert_eq!(ins.reduce_solution(&presses), vec![1]);
        // Pressing both lamps leaves both of them ON.
        assert!(!ins.validate_solution(&[0, 1]));
    }

    #[test]
    fn grid_regression_test() {
        let ins = LOInstance::new(UGraph::read_edge_list(Cursor::new(GRID)).unwrap());
        let presses = ins.solve(SolveConfig::default(), NoTrace).unwrap();
        let reduced = ins.reduce_solution(&presses);
        assert_eq!(reduced, vec![0, 1, 2, 3, 4, 7, 8, 9, 10, 11]);
        assert!(ins.validate_solution(&presses));
        assert!(ins.validate_solution(&reduced));
    }

    #[test]
    fn validate_out_of_range_test() {
        let ins = LOInstance::new(UGraph::new(2));
        assert!(ins.validate_solution(&[0, 1]));
        assert!(!ins.validate_solution(&[0, 1, 2]));
    }

    #[test]
    fn random_graphs_test() {
        let mut rng = StdRng::seed_from_u64(1);
        for n in 0..10 {
            for m in [0, n / 2, n, 2 * n, n * n] {
                let ins = LOInstance::new(UGraph::random_gnm(n, m, &mut rng));
                let presses = ins.solve(SolveConfig::default(), NoTrace).unwrap();
                assert!(ins.validate_solution(&presses));
                // Parity equivalence and idempotence of the reduction.
                let reduced = ins.reduce_solution(&presses);
                assert_eq!(ins.apply_presses(&presses), ins.apply_presses(&reduced));
                assert_eq!(reduced, ins.reduce_solution(&presses));
                assert_eq!(reduced, ins.reduce_solution(&reduced));
            }
        }
    }

    #[test]
    fn write_solution_test() {
        let mut out = Vec::new();
        assert!(LOInstance::write_solution(&[0, 1, 2, 3, 2, 1], &[0, 3], &mut out).is_ok());
        assert_eq!(String::from_utf8(out).unwrap(),
            "output: 0 1 2 3 2 1\nlength: 6\ndeducted: 0 3\n");
        let mut out = Vec::new();
        assert!(LOInstance::write_solution(&[], &[], &mut out).is_ok());
        assert_eq!(String::from_utf8(out).unwrap(), "output:\nlength: 0\ndeducted:\n");
    }

}
