// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Cutting plane representation

use crate::error::{SliceError, SliceResult};
use nalgebra::{Isometry3, Point3, Unit, Vector3};
use serde::{Deserialize, Serialize};

/// What the slicer needs from a plane: a signed distance and a raycast.
///
/// Hosts with their own plane type implement this instead of converting
/// to [`Plane`].
pub trait CuttingPlane {
    /// Signed distance from `point` to the plane; positive on the normal side
    fn signed_distance(&self, point: &Point3<f64>) -> f64;

    /// Distance along `direction` at which a ray from `origin` meets the
    /// plane, or `None` when the ray is parallel to the plane or the hit is
    /// not strictly in front of the origin.
    fn raycast(&self, origin: &Point3<f64>, direction: &Unit<Vector3<f64>>) -> Option<f64>;
}

/// A plane in 3D space defined by a point and a unit normal.
///
/// The plane equation is `normal · (p - point) = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    point: Point3<f64>,
    normal: Unit<Vector3<f64>>,
}

impl Plane {
    /// Create a plane through `point` facing `normal`.
    ///
    /// The normal is normalized; a zero-length normal is rejected.
    pub fn new(point: Point3<f64>, normal: Vector3<f64>) -> SliceResult<Self> {
        let normal = Unit::try_new(normal, f64::EPSILON).ok_or(SliceError::DegeneratePlane {
            x: normal.x,
            y: normal.y,
            z: normal.z,
        })?;
        Ok(Self { point, normal })
    }

    /// Plane through the transform's origin facing its forward (+Z) axis
    pub fn from_transform(transform: &Isometry3<f64>) -> Self {
        let point = Point3::from(transform.translation.vector);
        let normal = transform.rotation * Vector3::z_axis();
        Self { point, normal }
    }

    pub fn point(&self) -> &Point3<f64> {
        &self.point
    }

    pub fn normal(&self) -> &Unit<Vector3<f64>> {
        &self.normal
    }

    /// Same plane with the normal reversed, swapping the two sides
    pub fn flipped(&self) -> Self {
        Self {
            point: self.point,
            normal: -self.normal,
        }
    }
}

impl CuttingPlane for Plane {
    fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        self.normal.dot(&(point - self.point))
    }

    fn raycast(&self, origin: &Point3<f64>, direction: &Unit<Vector3<f64>>) -> Option<f64> {
        let vdot = direction.dot(self.normal.as_ref());
        if vdot.abs() < f64::EPSILON {
            return None;
        }

        let enter = -self.signed_distance(origin) / vdot;
        (enter > 0.0).then_some(enter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Translation3, UnitQuaternion};

    #[test]
    fn test_plane_normalizes() {
        let plane = Plane::new(Point3::origin(), Vector3::new(0.0, 0.0, 2.0)).unwrap();
        assert_relative_eq!(plane.normal().norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(plane.signed_distance(&Point3::new(5.0, 1.0, 3.0)), 3.0);
        assert_relative_eq!(plane.signed_distance(&Point3::new(0.0, 0.0, -1.5)), -1.5);
    }

    #[test]
    fn test_degenerate_normal() {
        let err = Plane::new(Point3::origin(), Vector3::zeros()).unwrap_err();
        assert!(matches!(err, SliceError::DegeneratePlane { .. }));
    }

    #[test]
    fn test_from_transform() {
        // Rotate +Z onto +X and move to x = 2
        let rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), std::f64::consts::FRAC_PI_2);
        let transform = Isometry3::from_parts(Translation3::new(2.0, 0.0, 0.0), rotation);
        let plane = Plane::from_transform(&transform);

        assert_relative_eq!(plane.normal().into_inner(), Vector3::x(), epsilon = 1e-12);
        assert_relative_eq!(plane.signed_distance(&Point3::new(3.0, 7.0, -4.0)), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_raycast() {
        let plane = Plane::new(Point3::origin(), Vector3::x()).unwrap();

        let hit = plane.raycast(&Point3::new(-2.0, 0.0, 0.0), &Vector3::x_axis());
        assert_relative_eq!(hit.unwrap(), 2.0);

        // Pointing away from the plane
        assert!(plane.raycast(&Point3::new(2.0, 0.0, 0.0), &Vector3::x_axis()).is_none());
        // Parallel
        assert!(plane.raycast(&Point3::new(1.0, 0.0, 0.0), &Vector3::y_axis()).is_none());
        // Starting on the plane
        assert!(plane.raycast(&Point3::origin(), &Vector3::x_axis()).is_none());
    }

    #[test]
    fn test_flipped() {
        let plane = Plane::new(Point3::origin(), Vector3::y()).unwrap().flipped();
        assert_relative_eq!(plane.signed_distance(&Point3::new(0.0, 1.0, 0.0)), -1.0);
    }
}
