// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Splitting extended geometry into two independently indexed meshes

use super::partition::SideSets;
use crate::geometry::{Mesh, Triangle, Vertex};
use ahash::AHashSet;
use log::warn;
use nalgebra::Point3;

/// The two halves of a split
#[derive(Debug, Clone, Default)]
pub struct SplitOutput {
    /// Triangles whose corners are all on the positive side
    pub positive: Mesh,
    /// Triangles whose corners are all on the negative side
    pub negative: Mesh,
    /// Triangles that straddled the sides and were left out of both meshes
    pub dropped: usize,
}

/// Copy of one side's vertices plus the global -> local index map
struct SideBuilder {
    mesh: Mesh,
    local: Vec<Option<usize>>,
}

impl SideBuilder {
    fn new(vertices: &[Point3<f64>], members: &AHashSet<usize>) -> Self {
        let mut mesh = Mesh::with_capacity(members.len(), 0);
        let local = vertices
            .iter()
            .enumerate()
            .map(|(i, position)| {
                members
                    .contains(&i)
                    .then(|| mesh.add_vertex(Vertex::at(*position)))
            })
            .collect();
        Self { mesh, local }
    }

    /// Remap and add `triangle` if every corner belongs to this side
    fn try_add(&mut self, triangle: &Triangle) -> bool {
        let mut indices = [0; 3];
        for (slot, &global) in indices.iter_mut().zip(&triangle.indices) {
            match self.local.get(global).copied().flatten() {
                Some(local) => *slot = local,
                None => return false,
            }
        }
        self.mesh.add_triangle(Triangle::new(indices));
        true
    }

    fn finish(mut self) -> Mesh {
        self.mesh.recompute_normals();
        self.mesh
    }
}

/// Build the positive and negative meshes.
///
/// Vertices keep their relative order. A triangle whose corners are on
/// both sides goes to the positive mesh; one that fits neither side is
/// dropped and counted.
pub fn split(vertices: &[Point3<f64>], triangles: &[Triangle], sides: &SideSets) -> SplitOutput {
    let mut positive = SideBuilder::new(vertices, &sides.positive);
    let mut negative = SideBuilder::new(vertices, &sides.negative);
    let mut dropped = 0;

    for (i, triangle) in triangles.iter().enumerate() {
        if !positive.try_add(triangle) && !negative.try_add(triangle) {
            warn!("triangle {} {:?} straddles the cut and was dropped", i, triangle.indices);
            dropped += 1;
        }
    }

    SplitOutput {
        positive: positive.finish(),
        negative: negative.finish(),
        dropped,
    }
}
