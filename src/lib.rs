// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Meshslice
//!
//! Splits a triangle mesh into two meshes along an arbitrary cutting plane.
//! Triangles crossing the plane are retriangulated so that every output
//! triangle lies entirely on one side; vertices on the cut appear in both
//! outputs as separate copies.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod slice;

pub use config::SliceConfig;
pub use error::{SliceError, SliceResult};
pub use geometry::{CuttingPlane, Mesh, Plane, Primitive};
pub use io::{export_json, export_stl, import_stl};
pub use slice::{slice, SliceOutput, SliceReport};

use nalgebra::{Point3, Vector3};

/// Slice `mesh` with the plane through `point` facing `normal`
pub fn slice_mesh(mesh: &Mesh, point: Point3<f64>, normal: Vector3<f64>) -> SliceResult<SliceOutput> {
    let plane = Plane::new(point, normal)?;
    slice(mesh, &plane)
}
