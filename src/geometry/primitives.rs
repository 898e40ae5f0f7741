// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Indexed primitive meshes used for demos, tests and benchmarks.
//!
//! Unlike flat-shaded exports, these share vertices between adjacent
//! triangles so a slice exercises real index remapping.

use super::{Mesh, Triangle, Vertex};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Geometric primitives
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Cube { size: Vector3<f64>, center: bool },
    Sphere { r: f64, segments: u32 },
    Cylinder { h: f64, r: f64, segments: u32 },
}

impl Primitive {
    pub fn cube(size: Vector3<f64>, center: bool) -> Self {
        Self::Cube { size, center }
    }

    pub fn sphere(r: f64, segments: u32) -> Self {
        Self::Sphere {
            r,
            segments: segments.max(3),
        }
    }

    pub fn cylinder(h: f64, r: f64, segments: u32) -> Self {
        Self::Cylinder {
            h,
            r,
            segments: segments.max(3),
        }
    }

    pub fn to_mesh(&self) -> Mesh {
        let mut mesh = match *self {
            Self::Cube { size, center } => generate_cube_mesh(size, center),
            Self::Sphere { r, segments } => generate_sphere_mesh(r, segments),
            Self::Cylinder { h, r, segments } => generate_cylinder_mesh(h, r, segments),
        };
        mesh.recompute_normals();
        mesh
    }
}

fn generate_cube_mesh(size: Vector3<f64>, center: bool) -> Mesh {
    let min = if center { -size / 2.0 } else { Vector3::zeros() };
    let max = min + size;

    let positions = [
        Point3::new(min.x, min.y, min.z),
        Point3::new(max.x, min.y, min.z),
        Point3::new(max.x, max.y, min.z),
        Point3::new(min.x, max.y, min.z),
        Point3::new(min.x, min.y, max.z),
        Point3::new(max.x, min.y, max.z),
        Point3::new(max.x, max.y, max.z),
        Point3::new(min.x, max.y, max.z),
    ];

    // Two counter-clockwise triangles per face, seen from outside
    let faces = [
        [4, 5, 6], [4, 6, 7], // z+
        [1, 0, 3], [1, 3, 2], // z-
        [5, 1, 2], [5, 2, 6], // x+
        [0, 4, 7], [0, 7, 3], // x-
        [7, 6, 2], [7, 2, 3], // y+
        [0, 1, 5], [0, 5, 4], // y-
    ];

    let mut mesh = Mesh::with_capacity(positions.len(), faces.len());
    for position in positions {
        mesh.add_vertex(Vertex::at(position));
    }
    for indices in faces {
        mesh.add_triangle(Triangle::new(indices));
    }
    mesh
}

fn generate_sphere_mesh(radius: f64, segments: u32) -> Mesh {
    let stacks = segments as usize;
    let slices = segments as usize;
    let mut mesh = Mesh::with_capacity((stacks + 1) * (slices + 1), 2 * stacks * slices);

    for i in 0..=stacks {
        let phi = PI * i as f64 / stacks as f64;
        let y = radius * phi.cos();
        let r = radius * phi.sin();

        for j in 0..=slices {
            let theta = 2.0 * PI * j as f64 / slices as f64;
            mesh.add_vertex(Vertex::at(Point3::new(r * theta.cos(), y, r * theta.sin())));
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let first = i * (slices + 1) + j;
            let second = first + slices + 1;

            // The ring at each pole collapses to a point
            if i != 0 {
                mesh.add_triangle(Triangle::new([first, first + 1, second]));
            }
            if i != stacks - 1 {
                mesh.add_triangle(Triangle::new([second, first + 1, second + 1]));
            }
        }
    }

    mesh
}

fn generate_cylinder_mesh(height: f64, radius: f64, segments: u32) -> Mesh {
    let segments = segments as usize;
    let mut mesh = Mesh::with_capacity(2 + 2 * segments, 4 * segments);

    let bottom_center = mesh.add_vertex(Vertex::at(Point3::new(0.0, 0.0, 0.0)));
    let top_center = mesh.add_vertex(Vertex::at(Point3::new(0.0, 0.0, height)));

    let mut bottom = Vec::with_capacity(segments);
    let mut top = Vec::with_capacity(segments);
    for i in 0..segments {
        let angle = 2.0 * PI * i as f64 / segments as f64;
        let (sin, cos) = angle.sin_cos();
        bottom.push(mesh.add_vertex(Vertex::at(Point3::new(radius * cos, radius * sin, 0.0))));
        top.push(mesh.add_vertex(Vertex::at(Point3::new(radius * cos, radius * sin, height))));
    }

    for i in 0..segments {
        let next = (i + 1) % segments;
        let (bi, bn, ti, tn) = (bottom[i], bottom[next], top[i], top[next]);

        mesh.add_triangle(Triangle::new([bottom_center, bn, bi]));
        mesh.add_triangle(Triangle::new([top_center, ti, tn]));
        mesh.add_triangle(Triangle::new([bi, bn, ti]));
        mesh.add_triangle(Triangle::new([ti, bn, tn]));
    }

    mesh
}
