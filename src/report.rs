//! Plain text trace of the subsets visited by the solver.

use std::io::{self, Write};
use crate::solver::SubsetObserver;
use crate::subset::VertexSubset;

/// Writes two lines for every computed subset: `vs:` followed by its members, then the chosen
/// presses, each preceded by a space.
pub struct TraceWriter<W: Write> {
    out: W,
}

impl<W: Write> TraceWriter<W> {

    pub fn new(out: W) -> Self {
        TraceWriter {
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

}

impl<W: Write> SubsetObserver for TraceWriter<W> {
    fn resolved(&mut self, subset: &VertexSubset, presses: &[usize]) -> io::Result<()> {
        write!(self.out, "vs:")?;
        for node in subset.iter() {
            write!(self.out, " {}", node)?;
        }
        writeln!(self.out)?;
        for press in presses {
            write!(self.out, " {}", press)?;
        }
        writeln!(self.out)
    }
}
