//! roomplan renders a measured room perimeter as ASCII art and SVG floor
//! plans, and validates the measurements against their declared totals.
//!
//! The input is a JSON measurement document: per-wall segment lists in
//! inches, with expected totals and optional cabinet runs. From it the crate
//! builds one immutable [`RoomLayout`], which every consumer shares:
//!
//! - [`render::ascii`] paints a character grid (`#` wall, `=` window,
//!   `|` door) at a uniform cells-per-inch scale,
//! - [`render::svg`] emits a deterministic SVG plan with door swings,
//!   dimension labels, and optional cabinet overlays,
//! - [`validate`] compares wall totals and the perimeter against the
//!   document's expected values and collects mismatches instead of failing.
//!
//! ```no_run
//! use roomplan::{PlanDocument, ScaleContext};
//!
//! # fn main() -> Result<(), roomplan::Error> {
//! let doc = PlanDocument::from_path("kitchen.json".as_ref())?;
//! let room = doc.room_layout()?;
//! let art = roomplan::render::ascii::render(&room, &ScaleContext::default())?;
//! print!("{art}");
//! # Ok(())
//! # }
//! ```

pub mod cabinets;
pub mod config;
pub mod errors;
pub mod layout;
pub mod log;
pub mod render;
pub mod scale;
pub mod types;
pub mod validate;

pub use config::PlanDocument;
pub use errors::{CabinetError, ConfigError, Error, ScaleError};
pub use layout::{RoomLayout, SegmentKind, Wall};
pub use render::{AsciiArt, SvgOptions, SvgView};
pub use scale::{OverflowPolicy, ScaleContext};
pub use types::{Cells, Inches, Px};
pub use validate::ValidationReport;

use cabinets::{CabinetLayer, CabinetPlan};

/// Plan one cabinet layer from a document.
pub fn cabinet_plan(doc: &PlanDocument, layer: CabinetLayer) -> Result<CabinetPlan, Error> {
    let room = doc.room_layout()?;
    let runs = doc.cabinet_runs(layer)?;
    Ok(cabinets::plan_layer(layer, &room, &runs)?)
}

/// Run every validation the document declares: totals, and the ASCII
/// artifact shape when an `artifact` section is present.
pub fn validate_document(
    doc: &PlanDocument,
    ctx: &ScaleContext,
) -> Result<ValidationReport, Error> {
    let room = doc.room_layout()?;
    let mut report = ValidationReport::new();
    if let Some(expected) = doc.expected_totals() {
        report.merge(validate::check_totals(&room, &expected));
    }
    if let Some(artifact) = &doc.artifact {
        let art = render::ascii::render(&room, ctx)?;
        validate::check_artifact(&mut report, &art, artifact.lines, artifact.columns);
    }
    Ok(report)
}
