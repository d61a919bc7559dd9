//! Binary that takes as standart in a graph as edge list, computes a press sequence that switches
//! off every lamp and writes the trace and the solution to standart out.

use std::error;
use std::io::{self, Write};

use log::info;
use lights_out::{graph::UGraph, instance::LOInstance, report::TraceWriter,
    solver::{SolveConfig, Solver}, cust_error::ProcessingError};

pub fn main() -> Result<(), Box<dyn error::Error>> {
    env_logger::init();
    let stdin = io::stdin();
    let stdin = stdin.lock();
    let stdout = io::stdout();
    let mut stdout = io::BufWriter::new(stdout.lock());
    let graph = UGraph::read_edge_list(stdin)?;
    info!("Read graph with {} nodes and {} edges", graph.num_nodes(), graph.num_edges());
    let ins = LOInstance::new(graph);
    let mut solver = Solver::with_observer(&ins.graph, SolveConfig::default(), TraceWriter::new(&mut stdout));
    let presses = solver.solve_all()?;
    let stats = solver.stats().clone();
    drop(solver);
    info!("{} subsets solved, {} cache hits, recursion depth {}, {} press entries",
        stats.subsets_solved, stats.cache_hits, stats.max_depth, stats.presses);
    let reduced = ins.reduce_solution(&presses);

    // Validate
    if !ins.validate_solution(&presses) || !ins.validate_solution(&reduced) {
        return Err(Box::new(ProcessingError::InvalidSolution(
            "lamps remain ON after pressing".to_owned())));
    }
    info!("{} presses, {} after parity reduction", presses.len(), reduced.len());

    LOInstance::write_solution(&presses, &reduced, &mut stdout)?;
    stdout.flush()?;
    Ok(())
}
