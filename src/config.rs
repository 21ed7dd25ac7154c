//! Measurement document: the JSON schema and its conversion into domain
//! values.
//!
//! The document is the single input of every operation. It is read fully at
//! the start of an invocation and never written back; renders and validation
//! runs hold only the immutable [`RoomLayout`] built from it.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cabinets::{CabinetLayer, CabinetRun, RunKind};
use crate::errors::ConfigError;
use crate::layout::{Heading, RoomLayout, SegmentKind, Wall, WallSegment};
use crate::types::Inches;
use crate::validate::ExpectedTotals;

/// Root of the measurement document.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PlanDocument {
    pub walls: WallsSpec,
    /// Authoritative totals the validator checks against.
    #[serde(default)]
    pub expected_totals: Option<TotalsSpec>,
    /// Expected shape of a generated ASCII artifact.
    #[serde(default)]
    pub artifact: Option<ArtifactSpec>,
    /// Optional cabinet runs for the SVG overlay views.
    #[serde(default)]
    pub cabinets: Option<CabinetsSpec>,
}

/// Ordered segment lists per wall, in traversal order (north/south walls
/// west→east, east/west walls north→south).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WallsSpec {
    pub north: Vec<SegmentSpec>,
    pub east: Vec<SegmentSpec>,
    pub south: Vec<SegmentSpec>,
    pub west: Vec<SegmentSpec>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SegmentSpec {
    /// Label like "N1" or "W2".
    pub id: String,
    pub length_inches: f64,
    #[serde(default)]
    pub kind: KindSpec,
    /// Travel direction override; omit for a straight wall run.
    #[serde(default)]
    pub heading: Option<HeadingSpec>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KindSpec {
    #[default]
    Wall,
    Door,
    Window,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HeadingSpec {
    North,
    East,
    South,
    West,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TotalsSpec {
    pub north: f64,
    pub east: f64,
    pub south: f64,
    pub west: f64,
    pub perimeter: f64,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactSpec {
    /// Exact line count of the artifact.
    pub lines: usize,
    /// Exact character count of every line.
    pub columns: usize,
}

/// Cabinet runs keyed by wall name ("north", "east", ...). BTreeMap keeps
/// overlay emission order deterministic.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CabinetsSpec {
    #[serde(default)]
    pub base: BTreeMap<String, Vec<CabinetSpec>>,
    #[serde(default)]
    pub wall: BTreeMap<String, Vec<CabinetSpec>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CabinetSpec {
    pub id: String,
    pub width_inches: f64,
    #[serde(default)]
    pub kind: CabinetKindSpec,
    /// Defaults per layer: 24" base, 12" wall.
    #[serde(default)]
    pub depth_inches: Option<f64>,
    /// Explicit offset from the wall start; omitted runs are placed
    /// sequentially after their predecessor.
    #[serde(default)]
    pub position_inches: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CabinetKindSpec {
    #[default]
    Cabinet,
    LazySusan,
    Appliance,
    Gap,
}

impl PlanDocument {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Json { source })
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Build the immutable room perimeter, rejecting structural problems:
    /// empty walls, non-positive lengths, duplicate ids.
    pub fn room_layout(&self) -> Result<RoomLayout, ConfigError> {
        let mut seen = HashSet::new();
        let mut build = |wall: Wall, specs: &[SegmentSpec]| -> Result<Vec<WallSegment>, ConfigError> {
            if specs.is_empty() {
                return Err(ConfigError::EmptyWall { wall: wall.label() });
            }
            specs
                .iter()
                .map(|spec| {
                    if !seen.insert(spec.id.clone()) {
                        return Err(ConfigError::DuplicateId {
                            id: spec.id.clone(),
                        });
                    }
                    let length = Inches::try_positive(spec.length_inches).map_err(|_| {
                        ConfigError::InvalidLength {
                            id: spec.id.clone(),
                            value: spec.length_inches,
                        }
                    })?;
                    Ok(WallSegment {
                        id: spec.id.clone(),
                        wall,
                        length,
                        kind: spec.kind.into(),
                        heading: spec
                            .heading
                            .map(Heading::from)
                            .unwrap_or_else(|| wall.natural_heading()),
                    })
                })
                .collect()
        };
        let north = build(Wall::North, &self.walls.north)?;
        let east = build(Wall::East, &self.walls.east)?;
        let south = build(Wall::South, &self.walls.south)?;
        let west = build(Wall::West, &self.walls.west)?;
        Ok(RoomLayout::from_walls([north, east, south, west]))
    }

    /// Expected totals for the validator, if the document declares them.
    pub fn expected_totals(&self) -> Option<ExpectedTotals> {
        self.expected_totals.map(|t| ExpectedTotals {
            north: Inches(t.north),
            east: Inches(t.east),
            south: Inches(t.south),
            west: Inches(t.west),
            perimeter: Inches(t.perimeter),
        })
    }

    /// Cabinet runs for one overlay layer, keyed by wall, in deterministic
    /// wall order. Walls without runs are omitted.
    pub fn cabinet_runs(
        &self,
        layer: CabinetLayer,
    ) -> Result<Vec<(Wall, Vec<CabinetRun>)>, ConfigError> {
        let Some(cabinets) = &self.cabinets else {
            return Ok(Vec::new());
        };
        let by_wall = match layer {
            CabinetLayer::Base => &cabinets.base,
            CabinetLayer::Wall => &cabinets.wall,
        };
        let mut out = Vec::new();
        for wall in Wall::ALL {
            let Some(specs) = by_wall.get(wall.label()) else {
                continue;
            };
            let runs = specs
                .iter()
                .map(|spec| {
                    let width = Inches::try_positive(spec.width_inches).map_err(|_| {
                        ConfigError::InvalidCabinetWidth {
                            id: spec.id.clone(),
                            wall: wall.label().to_string(),
                            value: spec.width_inches,
                        }
                    })?;
                    let depth = match spec.depth_inches {
                        Some(value) => Inches::try_positive(value).map_err(|_| {
                            ConfigError::InvalidCabinetDepth {
                                id: spec.id.clone(),
                                wall: wall.label().to_string(),
                                value,
                            }
                        })?,
                        None => layer.default_depth(),
                    };
                    let explicit_position = spec
                        .position_inches
                        .map(|value| {
                            if value.is_finite() && value >= 0.0 {
                                Ok(Inches(value))
                            } else {
                                Err(ConfigError::InvalidCabinetPosition {
                                    id: spec.id.clone(),
                                    wall: wall.label().to_string(),
                                    value,
                                })
                            }
                        })
                        .transpose()?;
                    Ok(CabinetRun {
                        id: spec.id.clone(),
                        width,
                        kind: spec.kind.into(),
                        depth,
                        explicit_position,
                    })
                })
                .collect::<Result<Vec<_>, ConfigError>>()?;
            if !runs.is_empty() {
                out.push((wall, runs));
            }
        }
        Ok(out)
    }
}

impl From<KindSpec> for SegmentKind {
    fn from(k: KindSpec) -> Self {
        match k {
            KindSpec::Wall => SegmentKind::Wall,
            KindSpec::Door => SegmentKind::Door,
            KindSpec::Window => SegmentKind::Window,
        }
    }
}

impl From<HeadingSpec> for Heading {
    fn from(h: HeadingSpec) -> Self {
        match h {
            HeadingSpec::North => Heading::North,
            HeadingSpec::East => Heading::East,
            HeadingSpec::South => Heading::South,
            HeadingSpec::West => Heading::West,
        }
    }
}

impl From<CabinetKindSpec> for RunKind {
    fn from(k: CabinetKindSpec) -> Self {
        match k {
            CabinetKindSpec::Cabinet => RunKind::Cabinet,
            CabinetKindSpec::LazySusan => RunKind::LazySusan,
            CabinetKindSpec::Appliance => RunKind::Appliance,
            CabinetKindSpec::Gap => RunKind::Gap,
        }
    }
}
