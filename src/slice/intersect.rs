// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Plane-edge intersection

use super::SIGMA;
use crate::geometry::CuttingPlane;
use nalgebra::{Point3, Unit};

/// Where a directed edge crosses the cutting plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Distance travelled from the edge start along the unit edge direction
    pub enter: f64,
    /// The crossing point
    pub point: Point3<f64>,
    length: f64,
}

impl Intersection {
    /// Crossing position normalized to `[0, 1]` along the edge
    pub fn t(&self) -> f64 {
        self.enter / self.length
    }
}

/// Intersect the segment `p1 -> p2` with `plane`.
///
/// Returns `None` for zero-length or parallel segments, and for hits
/// that fall before `p1` or more than [`SIGMA`] beyond `p2`. A hit at or
/// just past `p2` snaps onto `p2`, so an edge ending on the plane always
/// registers regardless of rounding in the raycast.
pub fn intersect<P: CuttingPlane + ?Sized>(
    plane: &P,
    p1: &Point3<f64>,
    p2: &Point3<f64>,
) -> Option<Intersection> {
    let (direction, length) = Unit::try_new_and_get(p2 - p1, 0.0)?;
    let enter = plane.raycast(p1, &direction)?;

    if enter < 0.0 || enter > length + SIGMA {
        return None;
    }
    if enter >= length {
        return Some(Intersection {
            enter: length,
            point: *p2,
            length,
        });
    }

    Some(Intersection {
        enter,
        point: p1 + direction.into_inner() * enter,
        length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Plane;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    fn x_plane() -> Plane {
        Plane::new(Point3::origin(), Vector3::x()).unwrap()
    }

    #[test]
    fn test_crossing_segment() {
        let hit = intersect(
            &x_plane(),
            &Point3::new(2.0, 0.0, 0.0),
            &Point3::new(-2.0, 4.0, 0.0),
        )
        .unwrap();

        assert_relative_eq!(hit.point, Point3::new(0.0, 2.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(hit.t(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(hit.enter, 8.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_segment_short_of_plane() {
        let plane = x_plane();
        assert!(intersect(&plane, &Point3::new(3.0, 0.0, 0.0), &Point3::new(1.0, 0.0, 0.0)).is_none());
        assert!(intersect(&plane, &Point3::new(1.0, 0.0, 0.0), &Point3::new(3.0, 0.0, 0.0)).is_none());
    }

    #[test]
    fn test_parallel_and_degenerate() {
        let plane = x_plane();
        let p = Point3::new(1.0, 0.0, 0.0);
        assert!(intersect(&plane, &p, &Point3::new(1.0, 5.0, 0.0)).is_none());
        assert!(intersect(&plane, &p, &p).is_none());
    }

    #[test]
    fn test_hit_at_far_endpoint_counts() {
        let hit = intersect(&x_plane(), &Point3::new(1.0, 0.0, 0.0), &Point3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(hit.unwrap().t(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_hit_just_past_far_endpoint_snaps() {
        let p2 = Point3::new(5e-7, 0.0, 0.0);
        let hit = intersect(&x_plane(), &Point3::new(1.0, 0.0, 0.0), &p2).unwrap();
        assert_eq!(hit.point, p2);
        assert_eq!(hit.t(), 1.0);

        let far = intersect(&x_plane(), &Point3::new(1.0, 0.0, 0.0), &Point3::new(2e-6, 0.0, 0.0));
        assert!(far.is_none());
    }

    #[test]
    fn test_edge_ending_on_plane_always_hits() {
        let plane = Plane::new(Point3::origin(), Vector3::new(0.3, -0.7, 0.2)).unwrap();
        for i in 1..200 {
            let f = i as f64;
            let start = Point3::new(f.sin() * 3.0, f.cos() * 2.0 + 0.1, (f * 0.37).sin());
            if plane.signed_distance(&start).abs() < 1e-3 {
                continue;
            }
            let hit = intersect(&plane, &start, &Point3::origin()).unwrap();
            assert_relative_eq!(hit.t(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_hit_at_start_does_not_count() {
        let hit = intersect(&x_plane(), &Point3::new(0.0, 0.0, 0.0), &Point3::new(1.0, 1.0, 0.0));
        assert!(hit.is_none());
    }

    #[test]
    fn test_deterministic() {
        let plane = Plane::new(Point3::new(0.1, 0.2, 0.3), Vector3::new(1.0, 2.0, -0.5)).unwrap();
        let a = Point3::new(-1.0, -1.0, 0.5);
        let b = Point3::new(1.5, 2.0, -0.25);
        assert_eq!(intersect(&plane, &a, &b), intersect(&plane, &a, &b));
    }
}
