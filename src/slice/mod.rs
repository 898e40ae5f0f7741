// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Plane slicing - clip, retriangulate, partition and split a mesh

mod intersect;
mod partition;
mod retriangulate;
mod slicer;
mod split;

pub use intersect::{intersect, Intersection};
pub use partition::{partition, SideSets};
pub use retriangulate::{Crossing, ExtendedGeometry};
pub use slicer::{slice, SliceOutput, SliceReport};
pub use split::{split, SplitOutput};

/// Tolerance for near-plane and near-vertex decisions
pub const SIGMA: f64 = 1e-6;
