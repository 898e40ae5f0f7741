// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::geometry::Mesh;
use crate::slice::SliceReport;
use colored::*;
use std::path::Path;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a finished slice
    pub fn report_slice(
        source: &str,
        report: &SliceReport,
        duration: Duration,
        positive: &Path,
        negative: &Path,
    ) {
        Self::rule();
        println!("{} {}", "Sliced:".bold(), source.cyan());
        Self::rule();

        Self::print_count("Source vertices", report.source_vertices);
        Self::print_count("Source triangles", report.source_triangles);
        Self::print_count("Untouched", report.untouched);
        Self::print_count("Split (2 crossings)", report.two_crossings);
        Self::print_count("Split (3 crossings)", report.three_crossings);
        Self::print_count("Seam vertices", report.seam_vertices);

        println!("\n{}", "Output:".bold());
        println!(
            "  {} {} triangles -> {}",
            "Positive:".bright_black(),
            report.positive_triangles.to_string().green(),
            positive.display().to_string().cyan()
        );
        println!(
            "  {} {} triangles -> {}",
            "Negative:".bright_black(),
            report.negative_triangles.to_string().green(),
            negative.display().to_string().cyan()
        );

        if report.dropped_triangles > 0 {
            Self::report_warning(&format!(
                "{} triangle(s) straddled the cut and were dropped",
                report.dropped_triangles
            ));
        }

        println!(
            "\n  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        Self::rule();
    }

    /// Report mesh statistics
    pub fn report_mesh(source: &str, mesh: &Mesh) {
        let bbox = mesh.bounding_box();

        Self::rule();
        println!("{} {}", "Mesh:".bold(), source.cyan());
        Self::rule();
        Self::print_count("Vertices", mesh.vertex_count());
        Self::print_count("Triangles", mesh.triangle_count());
        if !bbox.is_empty() {
            println!(
                "  {} ({:.4}, {:.4}, {:.4}) .. ({:.4}, {:.4}, {:.4})",
                "Bounds:".bright_black(),
                bbox.min.x,
                bbox.min.y,
                bbox.min.z,
                bbox.max.x,
                bbox.max.y,
                bbox.max.z
            );
        }
        Self::rule();
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "Warning:".yellow().bold(), message);
    }

    fn rule() {
        println!("{}", "━".repeat(80).bright_black());
    }

    fn print_count(name: &str, value: usize) {
        println!(
            "  {} {}",
            format!("{}:", name).bright_black(),
            value.to_string().cyan()
        );
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(
            Reporter::format_duration(Duration::from_micros(500)),
            "500µs"
        );
        assert_eq!(
            Reporter::format_duration(Duration::from_millis(5)),
            "5.00ms"
        );
        assert_eq!(Reporter::format_duration(Duration::from_secs(2)), "2.00s");
    }
}
