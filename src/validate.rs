//! Measurement validation.
//!
//! Mismatches are data, not errors: a validation run always completes and
//! collects every discrepancy it finds into a [`ValidationReport`]. Only the
//! caller decides whether a non-empty report is fatal (the CLI turns it into
//! a non-zero exit code).

use std::fmt;

use crate::layout::{RoomLayout, Wall};
use crate::log::debug;
use crate::render::ascii::AsciiArt;
use crate::types::Inches;

/// Comparison tolerance in inches. Measurements are tape-measure data; two
/// values within a hundredth of an inch are the same measurement.
pub const TOLERANCE: f64 = 0.01;

/// Expected totals declared by the measurement document. These are the
/// authoritative values the room data is checked against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpectedTotals {
    pub north: Inches,
    pub east: Inches,
    pub south: Inches,
    pub west: Inches,
    pub perimeter: Inches,
}

impl ExpectedTotals {
    pub fn for_wall(&self, wall: Wall) -> Inches {
        match wall {
            Wall::North => self.north,
            Wall::East => self.east,
            Wall::South => self.south,
            Wall::West => self.west,
        }
    }
}

/// One discrepancy between an expected and an actual value.
#[derive(Clone, Debug, PartialEq)]
pub struct Mismatch {
    pub subject: String,
    pub expected: f64,
    pub actual: f64,
}

impl Mismatch {
    pub fn delta(&self) -> f64 {
        self.actual - self.expected
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: expected {}, actual {}, delta {:.2}",
            self.subject, self.expected, self.actual, self.delta()
        )
    }
}

/// Outcome of a validation run: how many checks ran and which failed.
#[derive(Clone, Debug, Default)]
pub struct ValidationReport {
    checks: usize,
    mismatches: Vec<Mismatch>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare one value pair within [`TOLERANCE`]; record a mismatch if
    /// they differ.
    pub fn check(&mut self, subject: impl Into<String>, expected: f64, actual: f64) {
        self.checks += 1;
        if (actual - expected).abs() > TOLERANCE {
            self.mismatches.push(Mismatch {
                subject: subject.into(),
                expected,
                actual,
            });
        }
    }

    /// Exact integer comparison, for artifact shape checks.
    pub fn check_exact(&mut self, subject: impl Into<String>, expected: usize, actual: usize) {
        self.checks += 1;
        if expected != actual {
            self.mismatches.push(Mismatch {
                subject: subject.into(),
                expected: expected as f64,
                actual: actual as f64,
            });
        }
    }

    pub fn is_ok(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn checks(&self) -> usize {
        self.checks
    }

    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.checks += other.checks;
        self.mismatches.extend(other.mismatches);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return write!(f, "{} checks passed, 0 mismatches", self.checks);
        }
        writeln!(
            f,
            "{} checks, {} mismatches:",
            self.checks,
            self.mismatches.len()
        )?;
        for m in &self.mismatches {
            writeln!(f, "  {m}")?;
        }
        Ok(())
    }
}

/// Check every wall total and the perimeter against the declared values.
pub fn check_totals(room: &RoomLayout, expected: &ExpectedTotals) -> ValidationReport {
    let mut report = ValidationReport::new();
    for wall in Wall::ALL {
        report.check(
            format!("{wall} wall total"),
            expected.for_wall(wall).raw(),
            room.wall_total(wall).raw(),
        );
    }
    report.check(
        "perimeter",
        expected.perimeter.raw(),
        room.perimeter().raw(),
    );
    debug!(
        checks = report.checks(),
        mismatches = report.mismatches().len(),
        "totals validated"
    );
    report
}

/// Check a rendered ASCII artifact against its declared shape: exact line
/// count, and every line at the exact column width.
pub fn check_artifact(
    report: &mut ValidationReport,
    art: &AsciiArt,
    expected_lines: usize,
    expected_columns: usize,
) {
    let lines = art.lines();
    report.check_exact("artifact line count", expected_lines, lines.len());
    for (i, line) in lines.iter().enumerate() {
        report.check_exact(
            format!("artifact line {} width", i + 1),
            expected_columns,
            line.chars().count(),
        );
    }
}
