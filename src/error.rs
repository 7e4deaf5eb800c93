//! Error types for scene setup, ray construction and image output.

use std::fmt;
use std::path::PathBuf;

/// Which scene table an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Spheres,
    Lights,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TableKind::Spheres => write!(f, "sphere"),
            TableKind::Lights => write!(f, "light"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SceneError {
    #[error("{kind} table is full (capacity {capacity})")]
    CapacityExceeded { kind: TableKind, capacity: usize },
    #[error("invalid sphere: {0}")]
    InvalidSphere(String),
    #[error("invalid light: {0}")]
    InvalidLight(String),
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TraceError {
    #[error("ray direction must be finite and non-zero, got ({x}, {y}, {z})")]
    DegenerateRay { x: f32, y: f32, z: f32 },
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("cannot create output file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{pixels} pixels do not fill a {width}x{height} image")]
    Dimensions {
        width: usize,
        height: usize,
        pixels: usize,
    },
    #[error("failed to write image data: {0}")]
    Write(#[from] std::io::Error),
}
