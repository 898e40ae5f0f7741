// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - importing and exporting meshes

mod exporter;
mod importer;

pub use exporter::{export_json, export_stl, write_stl_ascii, write_stl_binary};
pub use importer::{import_stl, read_stl};
