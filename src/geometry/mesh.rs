// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh representation and utilities

use super::BoundingBox;
use crate::error::{SliceError, SliceResult};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Vertex with position and normal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point3<f64>,
    pub normal: Vector3<f64>,
}

impl Vertex {
    pub fn new(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self { position, normal }
    }

    /// Vertex with a zero normal, to be filled by [`Mesh::recompute_normals`]
    pub fn at(position: Point3<f64>) -> Self {
        Self {
            position,
            normal: Vector3::zeros(),
        }
    }
}

/// Triangle defined by three vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle {
    pub indices: [usize; 3],
}

impl Triangle {
    pub fn new(indices: [usize; 3]) -> Self {
        Self { indices }
    }
}

/// Triangular mesh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Build a mesh from flat host buffers: one position per vertex and a
    /// flat index list grouped in threes.
    ///
    /// Normals are recomputed from the triangle winding.
    pub fn from_buffers(positions: &[[f64; 3]], indices: &[usize]) -> SliceResult<Self> {
        if indices.len() % 3 != 0 {
            return Err(SliceError::MalformedIndexBuffer { len: indices.len() });
        }

        let mut mesh = Self::with_capacity(positions.len(), indices.len() / 3);
        for p in positions {
            mesh.add_vertex(Vertex::at(Point3::new(p[0], p[1], p[2])));
        }
        for chunk in indices.chunks_exact(3) {
            mesh.add_triangle(Triangle::new([chunk[0], chunk[1], chunk[2]]));
        }

        mesh.validate()?;
        mesh.recompute_normals();
        Ok(mesh)
    }

    /// Flatten the mesh back into host buffers (positions, indices)
    pub fn to_buffers(&self) -> (Vec<[f64; 3]>, Vec<usize>) {
        let positions = self
            .vertices
            .iter()
            .map(|v| [v.position.x, v.position.y, v.position.z])
            .collect();
        let indices = self
            .triangles
            .iter()
            .flat_map(|t| t.indices)
            .collect();
        (positions, indices)
    }

    /// Check that every triangle references existing vertices
    pub fn validate(&self) -> SliceResult<()> {
        let vertex_count = self.vertices.len();
        for (triangle, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.indices.iter().find(|&&i| i >= vertex_count) {
                return Err(SliceError::IndexOutOfBounds {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, vertex: Vertex) -> usize {
        let index = self.vertices.len();
        self.vertices.push(vertex);
        index
    }

    /// Add a triangle
    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Vertex positions in index order
    pub fn positions(&self) -> Vec<Point3<f64>> {
        self.vertices.iter().map(|v| v.position).collect()
    }

    /// Compute bounding box
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_vertices(&self.vertices)
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Unnormalized face normal of a triangle (length is twice its area)
    pub fn face_normal(&self, triangle: &Triangle) -> Vector3<f64> {
        let v0 = self.vertices[triangle.indices[0]].position;
        let v1 = self.vertices[triangle.indices[1]].position;
        let v2 = self.vertices[triangle.indices[2]].position;
        (v1 - v0).cross(&(v2 - v0))
    }

    /// Recompute vertex normals from triangle geometry
    /// This calculates face normals and averages them at shared vertices
    pub fn recompute_normals(&mut self) {
        if self.vertices.is_empty() {
            return;
        }

        let mut normal_sums: Vec<Vector3<f64>> = vec![Vector3::zeros(); self.vertices.len()];
        let mut normal_counts: Vec<u32> = vec![0; self.vertices.len()];

        for triangle in &self.triangles {
            let face_normal = self.face_normal(triangle);

            // Zero-area slivers contribute nothing
            let area = face_normal.norm();
            if area > 1e-10 {
                for &idx in &triangle.indices {
                    normal_sums[idx] += face_normal;
                    normal_counts[idx] += 1;
                }
            }
        }

        for (i, vertex) in self.vertices.iter_mut().enumerate() {
            vertex.normal = match normal_sums[i].try_normalize(1e-12) {
                Some(normal) if normal_counts[i] > 0 => normal,
                _ => Vector3::new(0.0, 0.0, 1.0),
            };
        }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
