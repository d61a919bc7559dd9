//! This module contains all custom errors used in this library.

use std::fmt;
use std::error::Error;

/// Errors raised while reading an edge list or building a graph. All of them are reported before
/// the solver starts.
#[derive(Debug)]
pub enum ImportError {
    IoError(std::io::Error),
    InputMalformedError,
    BadIntError(std::num::ParseIntError),
    /// An edge references `node`, which is not in `0..n`.
    VertexRangeError { node: usize, n: usize },
    SelfLoopError(usize),
    DuplicateEdgeError(usize, usize),
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> ImportError {
        ImportError::IoError(e)
    }
}

impl From<std::num::ParseIntError> for ImportError {
    fn from(e: std::num::ParseIntError) -> ImportError {
        ImportError::BadIntError(e)
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "Import: IoError ({})", e),
            Self::InputMalformedError => write!(f, "Import: Input is malformed."),
            Self::BadIntError(_) => write!(f, "Import: Integer is malformed."),
            Self::VertexRangeError { node, n } => {
                write!(f, "Import: Vertex {} is out of range for {} vertices.", node, n)
            },
            Self::SelfLoopError(node) => write!(f, "Import: Self-loop at vertex {}.", node),
            Self::DuplicateEdgeError(src, trg) => {
                write!(f, "Import: Edge ({}, {}) is given more than once.", src, trg)
            },
        }
    }
}

impl Error for ImportError {}

#[derive(Debug)]
pub enum ProcessingError {
    /// The recursion got deeper, or touched more subsets, than the configured limits allow.
    ResourceExhaustion(String),
    InvalidSolution(String),
    /// Writing the diagnostic trace failed.
    IoError(std::io::Error),
}

impl From<std::io::Error> for ProcessingError {
    fn from(e: std::io::Error) -> ProcessingError {
        ProcessingError::IoError(e)
    }
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceExhaustion(msg) => write!(f, "Resource exhaustion: {}", msg),
            Self::InvalidSolution(msg) => write!(f, "InvalidSolution: {}", msg),
            Self::IoError(e) => write!(f, "IoError: {}", e),
        }
    }
}

impl Error for ProcessingError {}
