// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - mesh representation, planes and primitives

mod bbox;
mod mesh;
mod plane;
mod primitives;

pub use bbox::BoundingBox;
pub use mesh::{Mesh, Triangle, Vertex};
pub use plane::{CuttingPlane, Plane};
pub use primitives::Primitive;
