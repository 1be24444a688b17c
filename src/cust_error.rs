//! This module contains all custom errors used in this library.

use std::fmt;
use std::error::Error;

/// Errors that can occur while reading a tree from an input stream.
#[derive(Debug)]
pub enum ImportError {
    IoError(std::io::Error),
    /// The stream ended while the named token was still outstanding.
    UnexpectedEof(&'static str),
    BadIntError(std::num::ParseIntError),
    NonUtf8Token,
    /// The number of vertices is smaller than 1.
    InvalidNodeCount(i64),
    VertexOutOfRange { vertex: i64, n: usize },
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
            Self::UnexpectedEof(what) => write!(f, "Import: Unexpected end of input, expected {}.", what),
            Self::BadIntError(e) => write!(f, "Import: Integer is malformed ({}).", e),
            Self::NonUtf8Token => write!(f, "Import: Token is not valid UTF-8."),
            Self::InvalidNodeCount(n) => write!(f, "Import: Number of vertices must be at least 1, got {}.", n),
            Self::VertexOutOfRange { vertex, n } => write!(f, "Import: Vertex {} is not in [1, {}].", vertex, n),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IoError(e) => Some(e),
            Self::BadIntError(e) => Some(e),
            _ => None,
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub enum ProcessingError {
    InvalidParameter(String),
    /// The adjacency structure does not describe a tree.
    GraphError(String),
    InvalidSolution(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Self::GraphError(msg) => write!(f, "Graph error: {}", msg),
            Self::InvalidSolution(msg) => write!(f, "InvalidSolution: {}", msg),
        }
    }
}

impl Error for ProcessingError {}

/// Everything the driver can fail with.
#[derive(Debug)]
pub enum DriverError {
    Import(ImportError),
    Processing(ProcessingError),
    Output(std::io::Error),
}

impl From<ImportError> for DriverError {
    fn from(e: ImportError) -> DriverError {
        DriverError::Import(e)
    }
}

impl From<ProcessingError> for DriverError {
    fn from(e: ProcessingError) -> DriverError {
        DriverError::Processing(e)
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Import(e) => write!(f, "{}", e),
            Self::Processing(e) => write!(f, "{}", e),
            Self::Output(e) => write!(f, "Output: IoError ({})", e),
        }
    }
}

impl Error for DriverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Import(e) => Some(e),
            Self::Processing(e) => Some(e),
            Self::Output(e) => Some(e),
        }
    }
}
