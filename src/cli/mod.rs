// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI support for the meshslice binary

pub mod reporter;

pub use reporter::Reporter;

use std::path::{Path, PathBuf};

/// `<dir>/<stem>_<suffix>.stl` next to `input`
pub fn sibling_output(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "mesh".to_string());
    input.with_file_name(format!("{}_{}.stl", stem, suffix))
}
