// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh exporters

use crate::geometry::Mesh;
use anyhow::{Context, Result};
use nalgebra::Vector3;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Export mesh to STL, binary unless `ascii` is set
pub fn export_stl(mesh: &Mesh, path: impl AsRef<Path>, ascii: bool) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Failed to create STL file: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    if ascii {
        write_stl_ascii(mesh, &mut writer)?;
    } else {
        write_stl_binary(mesh, &mut writer)?;
    }

    writer.flush().context("Failed to write STL file")?;
    Ok(())
}

/// Export any serializable value (a mesh, a report) as pretty JSON
pub fn export_json<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write JSON file: {:?}", path))?;
    Ok(())
}

/// Unit facet normal from winding, zero for slivers
fn facet_normal(mesh: &Mesh, index: usize) -> Vector3<f64> {
    mesh.face_normal(&mesh.triangles[index])
        .try_normalize(1e-12)
        .unwrap_or_else(Vector3::zeros)
}

pub fn write_stl_binary<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<()> {
    use stl_io::{Normal, Triangle as StlTriangle, Vertex as StlVertex};

    let triangles: Vec<StlTriangle> = mesh
        .triangles
        .iter()
        .enumerate()
        .map(|(i, tri)| {
            let n = facet_normal(mesh, i);
            let corner = |k: usize| {
                let p = mesh.vertices[tri.indices[k]].position;
                StlVertex::new([p.x as f32, p.y as f32, p.z as f32])
            };

            StlTriangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: [corner(0), corner(1), corner(2)],
            }
        })
        .collect();

    stl_io::write_stl(writer, triangles.iter()).context("Failed to write STL file")?;
    Ok(())
}

pub fn write_stl_ascii<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<()> {
    writeln!(writer, "solid meshslice")?;

    for (i, tri) in mesh.triangles.iter().enumerate() {
        let n = facet_normal(mesh, i);
        writeln!(writer, "  facet normal {} {} {}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for &index in &tri.indices {
            let p = mesh.vertices[index].position;
            writeln!(writer, "      vertex {} {} {}", p.x, p.y, p.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid meshslice")?;
    Ok(())
}
