// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Side partitioning of vertices

use super::SIGMA;
use crate::geometry::CuttingPlane;
use ahash::AHashSet;
use nalgebra::Point3;

/// Vertex indices belonging to each output mesh.
///
/// Seam vertices and vertices within [`SIGMA`] of the plane are members
/// of both sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SideSets {
    pub positive: AHashSet<usize>,
    pub negative: AHashSet<usize>,
}

/// Assign every vertex to the positive side, the negative side, or both
pub fn partition<P: CuttingPlane + ?Sized>(
    vertices: &[Point3<f64>],
    seam: &AHashSet<usize>,
    plane: &P,
) -> SideSets {
    let mut sides = SideSets {
        positive: seam.clone(),
        negative: seam.clone(),
    };

    for (i, vertex) in vertices.iter().enumerate() {
        if seam.contains(&i) {
            continue;
        }

        let distance = plane.signed_distance(vertex);
        if distance > SIGMA {
            sides.positive.insert(i);
        } else if distance < -SIGMA {
            sides.negative.insert(i);
        } else {
            sides.positive.insert(i);
            sides.negative.insert(i);
        }
    }

    sides
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Plane;
    use nalgebra::Vector3;

    #[test]
    fn test_partition_by_distance() {
        let plane = Plane::new(Point3::origin(), Vector3::z()).unwrap();
        let vertices = [
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, -1.0),
            Point3::new(5.0, 5.0, 0.0),
            Point3::new(0.0, 0.0, 1e-7),
            Point3::new(0.0, 0.0, -2e-6),
        ];

        let sides = partition(&vertices, &AHashSet::new(), &plane);
        assert_eq!(sides.positive, AHashSet::from_iter([0, 2, 3]));
        assert_eq!(sides.negative, AHashSet::from_iter([1, 2, 3, 4]));
    }

    #[test]
    fn test_seam_vertices_on_both_sides() {
        let plane = Plane::new(Point3::origin(), Vector3::z()).unwrap();
        // A seam vertex is kept on both sides even if rounding moved it off the plane
        let vertices = [Point3::new(0.0, 0.0, 1.0), Point3::new(0.0, 0.0, 3e-6)];
        let seam = AHashSet::from_iter([1]);

        let sides = partition(&vertices, &seam, &plane);
        assert!(sides.positive.contains(&1));
        assert!(sides.negative.contains(&1));
        assert!(!sides.negative.contains(&0));
    }
}
