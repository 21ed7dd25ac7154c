//! Sequential cabinet placement along walls.
//!
//! Runs are placed with a cursor: each run starts where the previous one
//! ended unless it carries an explicit position. The planner never moves a
//! run to make things fit; it reports overhangs as errors and records the
//! leftover gaps so the overlay and the report both show the real state of
//! the wall.

use std::fmt;

use crate::errors::CabinetError;
use crate::layout::{RoomLayout, Wall};
use crate::log::warn;
use crate::types::Inches;

/// Industry-standard cabinet widths, in inches.
pub const STANDARD_WIDTHS: [f64; 8] = [9.0, 12.0, 15.0, 18.0, 21.0, 24.0, 30.0, 36.0];

/// Gaps narrower than this are treated as seams, not reported.
const MIN_REPORTED_GAP: f64 = 1.0;

/// Which overlay layer a run belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CabinetLayer {
    Base,
    Wall,
}

impl CabinetLayer {
    pub fn label(self) -> &'static str {
        match self {
            CabinetLayer::Base => "base",
            CabinetLayer::Wall => "wall",
        }
    }

    /// Countertop-depth base cabinets, shallow uppers.
    pub fn default_depth(self) -> Inches {
        match self {
            CabinetLayer::Base => Inches(24.0),
            CabinetLayer::Wall => Inches(12.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunKind {
    Cabinet,
    LazySusan,
    Appliance,
    /// Reserved open space; advances the cursor but draws nothing.
    Gap,
}

impl RunKind {
    pub fn label(self) -> &'static str {
        match self {
            RunKind::Cabinet => "cabinet",
            RunKind::LazySusan => "lazy susan",
            RunKind::Appliance => "appliance",
            RunKind::Gap => "gap",
        }
    }
}

/// One run as declared in the measurement document.
#[derive(Clone, Debug)]
pub struct CabinetRun {
    pub id: String,
    pub width: Inches,
    pub kind: RunKind,
    pub depth: Inches,
    /// Offset from the wall start; `None` means place after the predecessor.
    pub explicit_position: Option<Inches>,
}

/// A run fixed at an offset along its wall.
#[derive(Clone, Debug)]
pub struct PlacedRun {
    pub run: CabinetRun,
    pub start: Inches,
    pub end: Inches,
}

/// Unoccupied wall span worth reporting.
#[derive(Clone, Copy, Debug)]
pub struct GapSpan {
    pub start: Inches,
    pub end: Inches,
}

impl GapSpan {
    pub fn width(&self) -> Inches {
        self.end - self.start
    }

    /// Standard cabinet widths that would fit in this gap, widest last.
    pub fn standard_fits(&self) -> Vec<f64> {
        let w = self.width().raw();
        STANDARD_WIDTHS.iter().copied().filter(|&s| s <= w).collect()
    }
}

/// All placements for one wall, plus what the planner noticed along the way.
#[derive(Clone, Debug)]
pub struct WallPlan {
    pub wall: Wall,
    pub wall_length: Inches,
    pub placed: Vec<PlacedRun>,
    pub gaps: Vec<GapSpan>,
    /// Human-readable observations: overlaps from explicit positions,
    /// non-standard cabinet widths.
    pub notes: Vec<String>,
}

/// One overlay layer planned across every wall that declares runs.
#[derive(Clone, Debug)]
pub struct CabinetPlan {
    pub layer: CabinetLayer,
    pub walls: Vec<WallPlan>,
}

/// Nearest standard width, or `None` if the width already is one.
pub fn nearest_standard_width(width: Inches) -> Option<f64> {
    let w = width.raw();
    if STANDARD_WIDTHS.iter().any(|&s| (s - w).abs() < 1e-9) {
        return None;
    }
    STANDARD_WIDTHS
        .iter()
        .copied()
        .min_by(|a, b| {
            let da = (a - w).abs();
            let db = (b - w).abs();
            // Standard widths are finite, so total_cmp is safe and keeps the
            // closure infallible.
            da.total_cmp(&db)
        })
}

/// Place one wall's runs sequentially.
pub fn plan_wall(
    wall: Wall,
    wall_length: Inches,
    runs: &[CabinetRun],
) -> Result<WallPlan, CabinetError> {
    let mut plan = WallPlan {
        wall,
        wall_length,
        placed: Vec::new(),
        gaps: Vec::new(),
        notes: Vec::new(),
    };
    let mut cursor = Inches::ZERO;
    for run in runs {
        let start = run.explicit_position.unwrap_or(cursor);
        if start < cursor {
            let overlap = cursor - start;
            warn!(
                id = %run.id,
                wall = %wall,
                overlap_inches = overlap.raw(),
                "explicit position backtracks over the previous run"
            );
            plan.notes.push(format!(
                "{} overlaps the previous run by {}",
                run.id, overlap
            ));
        } else if (start - cursor).raw() >= MIN_REPORTED_GAP {
            plan.gaps.push(GapSpan { start: cursor, end: start });
        }
        let end = start + run.width;
        if end > wall_length {
            return Err(CabinetError::Overhang {
                id: run.id.clone(),
                wall: wall.label().to_string(),
                overhang_inches: (end - wall_length).raw(),
            });
        }
        if run.kind == RunKind::Cabinet {
            if let Some(suggestion) = nearest_standard_width(run.width) {
                plan.notes.push(format!(
                    "{} is a non-standard width ({}); nearest standard is {}\"",
                    run.id, run.width, suggestion
                ));
            }
        }
        if run.kind == RunKind::Gap {
            plan.gaps.push(GapSpan { start, end });
        } else {
            plan.placed.push(PlacedRun {
                run: run.clone(),
                start,
                end,
            });
        }
        cursor = end;
    }
    if (wall_length - cursor).raw() >= MIN_REPORTED_GAP {
        plan.gaps.push(GapSpan {
            start: cursor,
            end: wall_length,
        });
    }
    Ok(plan)
}

/// Plan a whole layer against the room's wall lengths.
pub fn plan_layer(
    layer: CabinetLayer,
    room: &RoomLayout,
    runs_by_wall: &[(Wall, Vec<CabinetRun>)],
) -> Result<CabinetPlan, CabinetError> {
    let walls = runs_by_wall
        .iter()
        .map(|(wall, runs)| plan_wall(*wall, room.wall_total(*wall), runs))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CabinetPlan { layer, walls })
}

impl fmt::Display for CabinetPlan {
    /// Text report: placements, gaps, and notes per wall.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} cabinet layer", self.layer.label())?;
        for wall in &self.walls {
            writeln!(f, "  {} wall ({}):", wall.wall, wall.wall_length)?;
            for placed in &wall.placed {
                writeln!(
                    f,
                    "    {:<8} {:<10} {} .. {} ({} wide, {} deep)",
                    placed.run.id,
                    placed.run.kind.label(),
                    placed.start,
                    placed.end,
                    placed.run.width,
                    placed.run.depth,
                )?;
            }
            for gap in &wall.gaps {
                write!(f, "    gap      {} .. {} ({})", gap.start, gap.end, gap.width())?;
                match gap.standard_fits().last() {
                    Some(widest) => writeln!(f, ", fits standard widths up to {widest}\"")?,
                    None => writeln!(f)?,
                }
            }
            for note in &wall.notes {
                writeln!(f, "    note: {note}")?;
            }
        }
        Ok(())
    }
}
