// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Triangle classification and plane-conforming retriangulation
//!
//! Works on an [`ExtendedGeometry`]: a copy of the source mesh that only
//! ever grows. Processing a triangle may overwrite that triangle's own
//! slot and append new vertices and triangles; no other slot is touched,
//! so every index handed out earlier stays valid.
//!
//! Corners are numbered 0, 1, 2 and edge `k` runs from corner `k` to
//! corner `(k + 1) % 3`.

use super::intersect::{intersect, Intersection};
use super::SIGMA;
use crate::geometry::{CuttingPlane, Mesh, Triangle};
use ahash::AHashSet;
use log::trace;
use nalgebra::Point3;

/// How a triangle met the cutting plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    /// No edge crosses the plane
    None,
    /// Only the edge ending at an on-plane corner reaches the plane; the
    /// rest of the triangle is on one side and nothing is split
    Touch,
    /// The plane separates `isolated` from the other two corners
    Two { isolated: usize },
    /// The plane passes (within tolerance) through corner `pivot`
    Three { pivot: usize },
}

/// Working vertex and triangle arrays for one slice
#[derive(Debug, Clone, Default)]
pub struct ExtendedGeometry {
    pub vertices: Vec<Point3<f64>>,
    pub triangles: Vec<Triangle>,
    /// Vertices synthesized on the cutting plane
    pub seam: AHashSet<usize>,
}

impl ExtendedGeometry {
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self {
            vertices: mesh.positions(),
            triangles: mesh.triangles.clone(),
            seam: AHashSet::new(),
        }
    }

    fn push_seam_vertex(&mut self, point: Point3<f64>) -> usize {
        let index = self.vertices.len();
        self.vertices.push(point);
        self.seam.insert(index);
        index
    }

    /// Classify triangle `index` against `plane` and retriangulate it in place.
    pub fn process_triangle<P: CuttingPlane + ?Sized>(&mut self, index: usize, plane: &P) -> Crossing {
        let corners = self.triangles[index].indices;
        let edges: [Option<Intersection>; 3] = std::array::from_fn(|k| {
            intersect(
                plane,
                &self.vertices[corners[k]],
                &self.vertices[corners[(k + 1) % 3]],
            )
        });

        // With two crossings the isolated corner is the one opposite the
        // edge that missed
        let crossing = match edges {
            [None, Some(e1), Some(e2)] => self.split_two(index, 2, e1, e2),
            [Some(e0), None, Some(e2)] => self.split_two(index, 0, e2, e0),
            [Some(e0), Some(e1), None] => self.split_two(index, 1, e0, e1),
            [Some(e0), Some(e1), Some(e2)] => {
                // Edge k starting within SIGMA of the plane marks corner k;
                // the first edge checked wins a tie
                let pivot = if e0.enter < SIGMA {
                    0
                } else if e1.enter < SIGMA {
                    1
                } else {
                    2
                };
                let opposite = [e0, e1, e2][(pivot + 1) % 3];
                self.split_three(index, pivot, opposite)
            }
            [Some(_), None, None] | [None, Some(_), None] | [None, None, Some(_)] => Crossing::Touch,
            [None, None, None] => Crossing::None,
        };

        trace!("triangle {} {:?}: {:?}", index, corners, crossing);
        crossing
    }

    /// Cut off the isolated corner `v` and cover the remaining quad with two
    /// triangles. `entering` is the crossing on edge prev -> v, `leaving` the
    /// one on edge v -> next.
    fn split_two(&mut self, index: usize, v: usize, entering: Intersection, leaving: Intersection) -> Crossing {
        let corners = self.triangles[index].indices;
        let next = (v + 1) % 3;
        let prev = (v + 2) % 3;

        let n1 = self.push_seam_vertex(entering.point);
        let n2 = self.push_seam_vertex(leaving.point);

        let mut small = corners;
        small[next] = n2;
        small[prev] = n1;
        self.triangles[index] = Triangle::new(small);

        self.triangles.push(Triangle::new([corners[prev], n1, n2]));
        self.triangles.push(Triangle::new([corners[prev], n2, corners[next]]));
        Crossing::Two { isolated: v }
    }

    /// Split along the line from corner `p` to the crossing on the opposite
    /// edge.
    fn split_three(&mut self, index: usize, p: usize, opposite: Intersection) -> Crossing {
        let corners = self.triangles[index].indices;
        let next = (p + 1) % 3;

        let n = self.push_seam_vertex(opposite.point);

        let mut kept = corners;
        kept[next] = n;
        self.triangles[index] = Triangle::new(kept);

        self.triangles.push(Triangle::new([n, corners[p], corners[next]]));
        Crossing::Three { pivot: p }
    }
}
