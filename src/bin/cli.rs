// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Meshslice CLI

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use meshslice::cli::{sibling_output, Reporter};
use meshslice::config::parse_vec3;
use meshslice::{io, slice, Mesh, Primitive, SliceConfig};
use nalgebra::Vector3;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "meshslice")]
#[command(about = "Split a triangle mesh into two meshes along a plane", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Slice an STL file
    Slice {
        /// Input STL file
        input: PathBuf,

        #[command(flatten)]
        cut: CutArgs,
    },

    /// Slice a generated primitive
    Demo {
        /// Primitive to generate
        #[arg(value_enum)]
        shape: Shape,

        /// Edge length, or radius for round shapes
        #[arg(long, default_value = "10")]
        size: f64,

        /// Segments for round shapes
        #[arg(long, default_value = "32")]
        segments: u32,

        #[command(flatten)]
        cut: CutArgs,
    },

    /// Print vertex/triangle counts and bounds of an STL file
    Info {
        /// Input STL file
        input: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct CutArgs {
    /// Point on the cutting plane as x,y,z (default: bounding-box center)
    #[arg(long, allow_hyphen_values = true)]
    point: Option<String>,

    /// Cutting plane normal as x,y,z (default: 0,0,1)
    #[arg(long, allow_hyphen_values = true)]
    normal: Option<String>,

    /// Output file for the positive half
    #[arg(long)]
    positive: Option<PathBuf>,

    /// Output file for the negative half
    #[arg(long)]
    negative: Option<PathBuf>,

    /// Write ASCII STL
    #[arg(long)]
    ascii: bool,

    /// Write the slice report as JSON
    #[arg(long)]
    report: Option<PathBuf>,

    /// Config file (default: meshslice.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shape {
    Cube,
    Sphere,
    Cylinder,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(cli.command) {
        Reporter::report_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Slice { input, cut } => {
            let mesh = io::import_stl(&input)?;
            let source = input.display().to_string();
            slice_command(&source, &mesh, &cut, |suffix| sibling_output(&input, suffix))
        }
        Commands::Demo {
            shape,
            size,
            segments,
            cut,
        } => {
            let (name, primitive) = match shape {
                Shape::Cube => ("cube", Primitive::cube(Vector3::new(size, size, size), true)),
                Shape::Sphere => ("sphere", Primitive::sphere(size, segments)),
                Shape::Cylinder => ("cylinder", Primitive::cylinder(size, size / 2.0, segments)),
            };
            let mesh = primitive.to_mesh();
            slice_command(name, &mesh, &cut, |suffix| sibling_output(Path::new(name), suffix))
        }
        Commands::Info { input } => {
            let mesh = io::import_stl(&input)?;
            Reporter::report_mesh(&input.display().to_string(), &mesh);
            Ok(())
        }
        Commands::Version => {
            println!("Meshslice v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Config file first, then environment, then command-line flags
fn resolve_config(cut: &CutArgs) -> Result<SliceConfig> {
    let mut config = match &cut.config {
        Some(path) => {
            let mut config = SliceConfig::from_file(path)?;
            config.apply_env()?;
            config
        }
        None => SliceConfig::load()?,
    };

    if let Some(point) = &cut.point {
        config.plane_point = Some(parse_vec3(point)?);
    }
    if let Some(normal) = &cut.normal {
        config.plane_normal = parse_vec3(normal)?;
    }
    if cut.positive.is_some() {
        config.positive_output = cut.positive.clone();
    }
    if cut.negative.is_some() {
        config.negative_output = cut.negative.clone();
    }
    if cut.report.is_some() {
        config.report = cut.report.clone();
    }
    config.ascii |= cut.ascii;

    Ok(config)
}

fn slice_command(
    source: &str,
    mesh: &Mesh,
    cut: &CutArgs,
    default_output: impl Fn(&str) -> PathBuf,
) -> Result<()> {
    let config = resolve_config(cut)?;
    let plane = config.plane(mesh.bounding_box().center())?;
    log::info!(
        "cutting {} with plane through {:?} facing {:?}",
        source,
        plane.point(),
        plane.normal()
    );

    let start = std::time::Instant::now();
    let output = slice(mesh, &plane)?;
    let elapsed = start.elapsed();

    let positive = config.positive_output.unwrap_or_else(|| default_output("pos"));
    let negative = config.negative_output.unwrap_or_else(|| default_output("neg"));
    io::export_stl(&output.positive, &positive, config.ascii)?;
    io::export_stl(&output.negative, &negative, config.ascii)?;

    if let Some(report) = &config.report {
        io::export_json(&output.report, report)?;
    }

    Reporter::report_slice(source, &output.report, elapsed, &positive, &negative);
    Ok(())
}
