// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for mesh slicing

use thiserror::Error;

/// Result type for slicing operations
pub type SliceResult<T> = Result<T, SliceError>;

/// Errors raised while preparing a slice.
///
/// Geometric corner cases (parallel edges, crossings outside a segment,
/// empty meshes) are never errors; they are folded into the crossing
/// classification instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SliceError {
    /// The cutting plane normal has zero (or near-zero) length.
    #[error("cutting plane normal is degenerate: ({x}, {y}, {z})")]
    DegeneratePlane {
        x: f64,
        y: f64,
        z: f64,
    },

    /// A flat index buffer cannot be grouped into triangles.
    #[error("index buffer length {len} is not a multiple of 3")]
    MalformedIndexBuffer {
        len: usize,
    },

    /// A triangle references a vertex that does not exist.
    #[error("triangle {triangle} references vertex {index}, but the mesh has {vertex_count} vertices")]
    IndexOutOfBounds {
        triangle: usize,
        index: usize,
        vertex_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SliceError::MalformedIndexBuffer { len: 7 };
        assert_eq!(err.to_string(), "index buffer length 7 is not a multiple of 3");

        let err = SliceError::IndexOutOfBounds {
            triangle: 2,
            index: 9,
            vertex_count: 4,
        };
        assert!(err.to_string().contains("references vertex 9"));
    }
}
