// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Slice orchestration

use super::partition::partition;
use super::retriangulate::{Crossing, ExtendedGeometry};
use super::split::split;
use crate::error::SliceResult;
use crate::geometry::{CuttingPlane, Mesh};
use log::debug;
use serde::{Deserialize, Serialize};

/// Counters collected while slicing one mesh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceReport {
    pub source_vertices: usize,
    pub source_triangles: usize,
    /// Triangles left as they were (no crossing, or touching at a vertex)
    pub untouched: usize,
    pub two_crossings: usize,
    pub three_crossings: usize,
    pub seam_vertices: usize,
    pub positive_triangles: usize,
    pub negative_triangles: usize,
    pub dropped_triangles: usize,
}

/// Result of slicing a mesh
#[derive(Debug, Clone)]
pub struct SliceOutput {
    /// Part on the side the plane normal points to
    pub positive: Mesh,
    /// Part on the opposite side
    pub negative: Mesh,
    pub report: SliceReport,
}

/// Slice `mesh` with `plane` into two independent meshes.
///
/// Only the source triangles are classified; triangles appended while
/// retriangulating are never revisited.
pub fn slice<P: CuttingPlane + ?Sized>(mesh: &Mesh, plane: &P) -> SliceResult<SliceOutput> {
    mesh.validate()?;

    let mut report = SliceReport {
        source_vertices: mesh.vertex_count(),
        source_triangles: mesh.triangle_count(),
        ..Default::default()
    };

    let mut geometry = ExtendedGeometry::from_mesh(mesh);
    for i in 0..mesh.triangle_count() {
        match geometry.process_triangle(i, plane) {
            Crossing::None | Crossing::Touch => report.untouched += 1,
            Crossing::Two { .. } => report.two_crossings += 1,
            Crossing::Three { .. } => report.three_crossings += 1,
        }
    }
    report.seam_vertices = geometry.seam.len();

    let sides = partition(&geometry.vertices, &geometry.seam, plane);
    let halves = split(&geometry.vertices, &geometry.triangles, &sides);

    report.positive_triangles = halves.positive.triangle_count();
    report.negative_triangles = halves.negative.triangle_count();
    report.dropped_triangles = halves.dropped;

    debug!(
        "sliced {} triangles: {} split in two, {} through a vertex, {} seam vertices, {}/{} triangles out, {} dropped",
        report.source_triangles,
        report.two_crossings,
        report.three_crossings,
        report.seam_vertices,
        report.positive_triangles,
        report.negative_triangles,
        report.dropped_triangles
    );

    Ok(SliceOutput {
        positive: halves.positive,
        negative: halves.negative,
        report,
    })
}
