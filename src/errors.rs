//! Error types with rich diagnostics using miette
//!
//! Configuration and scaling errors abort the requested operation with a
//! message identifying the offending segment. Validation mismatches are NOT
//! errors; they are data collected into a [`crate::validate::ValidationReport`].

use miette::Diagnostic;
use thiserror::Error;

/// Any failure from loading a document through rendering it
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scale(#[from] ScaleError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Cabinets(#[from] CabinetError),
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Errors raised while loading or interpreting the measurement document
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("cannot read measurement document {path}")]
    #[diagnostic(code(roomplan::config::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("measurement document is not valid JSON")]
    #[diagnostic(code(roomplan::config::json))]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("wall {wall} has no segments")]
    #[diagnostic(
        code(roomplan::config::empty_wall),
        help("every wall needs at least one segment with a positive length")
    )]
    EmptyWall { wall: &'static str },

    #[error("segment {id}: invalid length {value}")]
    #[diagnostic(code(roomplan::config::invalid_length))]
    InvalidLength { id: String, value: f64 },

    #[error("duplicate segment id {id}")]
    #[diagnostic(code(roomplan::config::duplicate_id))]
    DuplicateId { id: String },

    #[error("cabinet run {id} on wall {wall}: invalid width {value}")]
    #[diagnostic(code(roomplan::config::invalid_cabinet_width))]
    InvalidCabinetWidth {
        id: String,
        wall: String,
        value: f64,
    },

    #[error("cabinet run {id} on wall {wall}: invalid depth {value}")]
    #[diagnostic(
        code(roomplan::config::invalid_cabinet_depth),
        help("depth must be finite and greater than zero; omit it for the layer default")
    )]
    InvalidCabinetDepth {
        id: String,
        wall: String,
        value: f64,
    },

    #[error("cabinet run {id} on wall {wall}: invalid position {value}")]
    #[diagnostic(
        code(roomplan::config::invalid_cabinet_position),
        help("position is a finite offset from the wall start, at least zero")
    )]
    InvalidCabinetPosition {
        id: String,
        wall: String,
        value: f64,
    },
}

// ============================================================================
// Cabinet Planning Errors
// ============================================================================

/// Errors raised by the sequential cabinet planner
#[derive(Error, Diagnostic, Debug)]
pub enum CabinetError {
    #[error("cabinet run {id} extends {overhang_inches:.2}\" past the end of the {wall} wall")]
    #[diagnostic(
        code(roomplan::cabinets::overhang),
        help("shorten the run, move it, or re-measure the wall")
    )]
    Overhang {
        id: String,
        wall: String,
        overhang_inches: f64,
    },
}

// ============================================================================
// Scaling Errors
// ============================================================================

/// Errors raised by the scaling engine
#[derive(Error, Diagnostic, Debug)]
pub enum ScaleError {
    #[error("invalid scale factor {value}: {reason}")]
    #[diagnostic(code(roomplan::scale::invalid_factor))]
    InvalidFactor { value: f64, reason: String },

    #[error("invalid zoom {value}: zoom must be finite and positive")]
    #[diagnostic(code(roomplan::scale::invalid_zoom))]
    InvalidZoom { value: f64 },

    #[error("target canvas {width}x{height} cannot hold the room")]
    #[diagnostic(
        code(roomplan::scale::canvas_too_small),
        help("both canvas dimensions must be at least 1 output unit")
    )]
    CanvasTooSmall { width: usize, height: usize },

    #[error("segment {id} ({length_inches}\") scales below one cell at {units_per_inch} cells/inch")]
    #[diagnostic(
        code(roomplan::scale::overflow),
        help("enlarge the canvas, raise the zoom, or use the clamping overflow policy")
    )]
    ScaleOverflow {
        id: String,
        length_inches: f64,
        units_per_inch: f64,
    },
}
