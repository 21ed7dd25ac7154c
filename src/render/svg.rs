//! SVG floor plan renderer.
//!
//! Output is a deterministic string: elements are emitted in a fixed order
//! (floor, walls, door swings, dimensions, furniture overlay, chrome) and
//! every number goes through [`fmt_num`], so the same document and scale
//! always produce the same bytes. The overlay is appended after the shared
//! plan body, which is why the Base and Wall views agree byte for byte on
//! everything except their cabinet group.

use std::fmt::Write as _;

use glam::DVec2;

use crate::cabinets::{CabinetPlan, RunKind};
use crate::layout::{PlacedSegment, PlanPoint, RoomLayout, SegmentKind, Wall};
use crate::scale::ScaleContext;

/// Which furniture overlay to draw on top of the shared plan body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SvgView {
    /// Floor plan only.
    Plan,
    /// Base cabinets (countertop level).
    Base,
    /// Wall cabinets (upper level).
    Wall,
}

impl SvgView {
    pub fn label(self) -> &'static str {
        match self {
            SvgView::Plan => "plan",
            SvgView::Base => "base cabinets",
            SvgView::Wall => "wall cabinets",
        }
    }
}

#[derive(Clone, Debug)]
pub struct SvgOptions {
    pub title: Option<String>,
    pub show_dimensions: bool,
    pub show_compass: bool,
    /// Blank border around the room, in px. Dimension labels live here.
    pub margin: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        SvgOptions {
            title: None,
            show_dimensions: true,
            show_compass: true,
            margin: 48.0,
        }
    }
}

const STYLE: &str = r#"<style>
.floor { fill: #f8f5ee; stroke: none; }
.wall { stroke: #1f2430; stroke-width: 3; stroke-linecap: square; }
.window { stroke: #4f8fd0; stroke-width: 3; stroke-linecap: butt; }
.door { stroke: #b0703c; stroke-width: 3; stroke-linecap: butt; }
.door-arc { fill: none; stroke: #b0703c; stroke-width: 1; stroke-dasharray: 4 3; }
.tick { stroke: #7a7f8a; stroke-width: 1; }
.dim { fill: #3a3f4a; font-family: ui-sans-serif, system-ui, sans-serif; font-size: 11px; text-anchor: middle; }
.title { fill: #1f2430; font-family: ui-sans-serif, system-ui, sans-serif; font-size: 15px; font-weight: bold; }
.caption { fill: #7a7f8a; font-family: ui-sans-serif, system-ui, sans-serif; font-size: 10px; }
.compass { stroke: #3a3f4a; stroke-width: 1.5; fill: #3a3f4a; }
.cab { fill: #dce8dc; stroke: #5a7a5a; stroke-width: 1; }
.cab.appliance { fill: #e4e0ee; stroke: #6a5a8a; }
.cab.lazy-susan { fill: #efe6d2; stroke: #8a7a4a; }
.cab-label { fill: #3a3f4a; font-family: ui-sans-serif, system-ui, sans-serif; font-size: 10px; text-anchor: middle; dominant-baseline: middle; }
</style>
"#;

struct Canvas<'a> {
    room: &'a RoomLayout,
    ctx: &'a ScaleContext,
    margin: f64,
}

impl Canvas<'_> {
    fn point(&self, p: PlanPoint) -> DVec2 {
        DVec2::new(
            self.margin + self.ctx.to_px(p.x).raw(),
            self.margin + self.ctx.to_px(p.y).raw(),
        )
    }

    fn size(&self) -> DVec2 {
        DVec2::new(
            self.ctx.to_px(self.room.width()).raw() + 2.0 * self.margin,
            self.ctx.to_px(self.room.height()).raw() + 2.0 * self.margin,
        )
    }

    /// Unit vector perpendicular to a wall line, pointing into the room.
    /// Chosen by which perpendicular faces the room center, so it is right
    /// for alcove jogs too.
    fn inward(&self, start: PlanPoint, end: PlanPoint) -> DVec2 {
        let dir = DVec2::new(end.x.raw() - start.x.raw(), end.y.raw() - start.y.raw());
        let perp = DVec2::new(-dir.y, dir.x).normalize_or_zero();
        let mid = DVec2::new(
            (start.x.raw() + end.x.raw()) / 2.0,
            (start.y.raw() + end.y.raw()) / 2.0,
        );
        let center = DVec2::new(self.room.width().raw() / 2.0, self.room.height().raw() / 2.0);
        if perp.dot(center - mid) >= 0.0 { perp } else { -perp }
    }
}

/// Render the shared plan body with no furniture overlay.
pub fn render(room: &RoomLayout, ctx: &ScaleContext, options: &SvgOptions) -> String {
    let mut out = String::new();
    emit_body(&mut out, room, ctx, options, SvgView::Plan);
    out.push_str("</svg>\n");
    out
}

/// Render one furniture view: the shared plan body plus the layer's
/// cabinet overlay.
pub fn render_view(
    room: &RoomLayout,
    ctx: &ScaleContext,
    options: &SvgOptions,
    view: SvgView,
    plan: &CabinetPlan,
) -> String {
    let mut out = String::new();
    emit_body(&mut out, room, ctx, options, view);
    emit_overlay(&mut out, room, ctx, options, plan);
    out.push_str("</svg>\n");
    out
}

fn emit_body(
    out: &mut String,
    room: &RoomLayout,
    ctx: &ScaleContext,
    options: &SvgOptions,
    view: SvgView,
) {
    let canvas = Canvas {
        room,
        ctx,
        margin: options.margin,
    };
    let size = canvas.size();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        fmt_num(size.x),
        fmt_num(size.y),
        fmt_num(size.x),
        fmt_num(size.y),
    );
    out.push_str(STYLE);

    emit_floor(out, &canvas);
    emit_walls(out, &canvas);
    emit_door_arcs(out, &canvas);
    if options.show_dimensions {
        emit_dimensions(out, &canvas);
    }
    emit_chrome(out, &canvas, options, view);
}

fn emit_floor(out: &mut String, canvas: &Canvas<'_>) {
    out.push_str(r#"<polygon class="floor" points=""#);
    for (i, p) in canvas.room.floor_outline().iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let q = canvas.point(*p);
        let _ = write!(out, "{},{}", fmt_num(q.x), fmt_num(q.y));
    }
    out.push_str("\"/>\n");
}

fn segment_class(kind: SegmentKind) -> &'static str {
    match kind {
        SegmentKind::Wall => "wall",
        SegmentKind::Door => "door",
        SegmentKind::Window => "window",
    }
}

fn emit_walls(out: &mut String, canvas: &Canvas<'_>) {
    out.push_str("<g class=\"walls\">\n");
    for wall in Wall::ALL {
        for placed in canvas.room.walk_wall(wall) {
            let a = canvas.point(placed.start);
            let b = canvas.point(placed.end);
            let _ = writeln!(
                out,
                r#"<line class="{}" data-id="{}" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                segment_class(placed.segment.kind),
                xml_escape(&placed.segment.id),
                fmt_num(a.x),
                fmt_num(a.y),
                fmt_num(b.x),
                fmt_num(b.y),
            );
        }
    }
    out.push_str("</g>\n");
}

/// Dashed quarter-circle swing for every door, hinged at the segment start
/// and opening into the room.
fn emit_door_arcs(out: &mut String, canvas: &Canvas<'_>) {
    out.push_str("<g class=\"door-arcs\">\n");
    for wall in Wall::ALL {
        for placed in canvas.room.walk_wall(wall) {
            if placed.segment.kind != SegmentKind::Door {
                continue;
            }
            let hinge = canvas.point(placed.start);
            let latch = canvas.point(placed.end);
            let span = canvas.ctx.to_px(placed.segment.length).raw();
            let inward = canvas.inward(placed.start, placed.end);
            let open = hinge + inward * span;
            let control = latch + inward * span;
            let _ = writeln!(
                out,
                r#"<path class="door-arc" data-id="{}" d="M {} {} Q {} {} {} {}"/>"#,
                xml_escape(&placed.segment.id),
                fmt_num(latch.x),
                fmt_num(latch.y),
                fmt_num(control.x),
                fmt_num(control.y),
                fmt_num(open.x),
                fmt_num(open.y),
            );
            let _ = writeln!(
                out,
                r#"<line class="door-arc" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                fmt_num(hinge.x),
                fmt_num(hinge.y),
                fmt_num(open.x),
                fmt_num(open.y),
            );
        }
    }
    out.push_str("</g>\n");
}

const TICK_LEN: f64 = 6.0;
const LABEL_OFFSET: f64 = 18.0;

/// Per-segment dimension labels with end ticks, placed outside the room.
/// Vertical runs get rotated text.
fn emit_dimensions(out: &mut String, canvas: &Canvas<'_>) {
    out.push_str("<g class=\"dimensions\">\n");
    for wall in Wall::ALL {
        for placed in canvas.room.walk_wall(wall) {
            let outward = -canvas.inward(placed.start, placed.end);
            for p in [placed.start, placed.end] {
                let q = canvas.point(p);
                let t = q + outward * TICK_LEN;
                let _ = writeln!(
                    out,
                    r#"<line class="tick" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
                    fmt_num(q.x),
                    fmt_num(q.y),
                    fmt_num(t.x),
                    fmt_num(t.y),
                );
            }
            emit_dimension_label(out, canvas, &placed, outward);
        }
    }
    out.push_str("</g>\n");
}

fn emit_dimension_label(
    out: &mut String,
    canvas: &Canvas<'_>,
    placed: &PlacedSegment<'_>,
    outward: DVec2,
) {
    let a = canvas.point(placed.start);
    let b = canvas.point(placed.end);
    let mid = (a + b) / 2.0 + outward * LABEL_OFFSET;
    let text = format!(
        "{} {} ({})",
        placed.segment.id,
        placed.segment.length,
        placed.segment.length.feet_inches()
    );
    if placed.segment.heading.is_horizontal() {
        let _ = writeln!(
            out,
            r#"<text class="dim" x="{}" y="{}">{}</text>"#,
            fmt_num(mid.x),
            fmt_num(mid.y),
            xml_escape(&text),
        );
    } else {
        let _ = writeln!(
            out,
            r#"<text class="dim" x="{}" y="{}" transform="rotate(-90 {} {})">{}</text>"#,
            fmt_num(mid.x),
            fmt_num(mid.y),
            fmt_num(mid.x),
            fmt_num(mid.y),
            xml_escape(&text),
        );
    }
}

/// Title, scale caption, compass.
fn emit_chrome(out: &mut String, canvas: &Canvas<'_>, options: &SvgOptions, view: SvgView) {
    let size = canvas.size();
    if let Some(title) = &options.title {
        let text = match view {
            SvgView::Plan => title.clone(),
            other => format!("{title} ({})", other.label()),
        };
        let _ = writeln!(
            out,
            r#"<text class="title" x="{}" y="{}">{}</text>"#,
            fmt_num(canvas.margin),
            fmt_num(canvas.margin * 0.4),
            xml_escape(&text),
        );
    }
    let upi = canvas.ctx.units_per_inch();
    let mut caption = format!("scale {} px/in", fmt_num(upi));
    if canvas.ctx.zoom() != 1.0 {
        let _ = write!(caption, ", zoom {}", fmt_num(canvas.ctx.zoom()));
    }
    let _ = writeln!(
        out,
        r#"<text class="caption" x="{}" y="{}">{}</text>"#,
        fmt_num(canvas.margin),
        fmt_num(size.y - canvas.margin * 0.3),
        caption,
    );
    if options.show_compass {
        emit_compass(out, size.x - canvas.margin * 0.5, canvas.margin * 0.75);
    }
}

fn emit_compass(out: &mut String, x: f64, y: f64) {
    let _ = writeln!(
        out,
        r#"<g class="compass"><line x1="{x0}" y1="{y1}" x2="{x0}" y2="{y0}"/><polygon points="{x0},{tip} {xl},{base} {xr},{base}"/><text class="dim" x="{x0}" y="{ty}">N</text></g>"#,
        x0 = fmt_num(x),
        y0 = fmt_num(y - 14.0),
        y1 = fmt_num(y + 14.0),
        tip = fmt_num(y - 18.0),
        base = fmt_num(y - 10.0),
        xl = fmt_num(x - 4.0),
        xr = fmt_num(x + 4.0),
        ty = fmt_num(y + 26.0),
    );
}

/// Cabinet rectangles for one layer, drawn inward from their wall.
fn emit_overlay(
    out: &mut String,
    room: &RoomLayout,
    ctx: &ScaleContext,
    options: &SvgOptions,
    plan: &CabinetPlan,
) {
    let canvas = Canvas {
        room,
        ctx,
        margin: options.margin,
    };
    let _ = writeln!(out, r#"<g class="cabinets {}">"#, plan.layer.label());
    for wall_plan in &plan.walls {
        let anchor = room.wall_anchor(wall_plan.wall);
        let heading = wall_plan.wall.natural_heading();
        for placed in &wall_plan.placed {
            let p0 = anchor.advanced(heading, placed.start);
            let p1 = anchor.advanced(heading, placed.end);
            let a = canvas.point(p0);
            let b = canvas.point(p1);
            let depth_px = ctx.to_px(placed.run.depth).raw();
            let inward = canvas.inward(p0, p1);
            let c = b + inward * depth_px;
            let (x, y) = (a.x.min(c.x), a.y.min(c.y));
            let (w, h) = ((c.x - a.x).abs(), (c.y - a.y).abs());
            let class = match placed.run.kind {
                RunKind::Appliance => "cab appliance",
                RunKind::LazySusan => "cab lazy-susan",
                _ => "cab",
            };
            let _ = writeln!(
                out,
                r#"<rect class="{}" data-id="{}" x="{}" y="{}" width="{}" height="{}"/>"#,
                class,
                xml_escape(&placed.run.id),
                fmt_num(x),
                fmt_num(y),
                fmt_num(w),
                fmt_num(h),
            );
            let center = (a + c) / 2.0;
            let _ = writeln!(
                out,
                r#"<text class="cab-label" x="{}" y="{}">{}</text>"#,
                fmt_num(center.x),
                fmt_num(center.y),
                xml_escape(&placed.run.id),
            );
        }
    }
    out.push_str("</g>\n");
}

/// Format with 6 significant figures, trailing zeros trimmed (the usual
/// compact SVG number style).
pub(crate) fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let sig_figs = 6;
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}

fn xml_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
