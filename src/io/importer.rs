// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STL importer

use crate::geometry::{Mesh, Triangle, Vertex};
use anyhow::{Context, Result};
use nalgebra::Point3;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

/// Import an STL file (binary or ASCII) as an indexed mesh
pub fn import_stl(path: impl AsRef<Path>) -> Result<Mesh> {
    let path = path.as_ref();
    let mut file = File::open(path).with_context(|| format!("Failed to open STL file: {:?}", path))?;
    read_stl(&mut file).with_context(|| format!("Failed to read STL file: {:?}", path))
}

/// Read STL data; coincident corners are shared between facets
pub fn read_stl<R: Read + Seek>(reader: &mut R) -> Result<Mesh> {
    let stl = stl_io::read_stl(reader)?;

    let mut mesh = Mesh::with_capacity(stl.vertices.len(), stl.faces.len());
    for v in &stl.vertices {
        mesh.add_vertex(Vertex::at(Point3::new(v[0] as f64, v[1] as f64, v[2] as f64)));
    }
    for face in &stl.faces {
        mesh.add_triangle(Triangle::new(face.vertices));
    }

    mesh.validate()?;
    mesh.recompute_normals();
    Ok(mesh)
}
