//! End-to-end tests over a real kitchen measurement document.

use roomplan::cabinets::CabinetLayer;
use roomplan::render::{ascii, svg};
use roomplan::validate;
use roomplan::{PlanDocument, ScaleContext, SvgOptions, SvgView, Wall};

const KITCHEN: &str = include_str!("fixtures/kitchen.json");

fn kitchen() -> PlanDocument {
    PlanDocument::from_json(KITCHEN).expect("fixture parses")
}

#[test]
fn kitchen_totals() {
    let room = kitchen().room_layout().unwrap();
    assert_eq!(room.wall_total(Wall::North).raw(), 173.0);
    assert_eq!(room.wall_total(Wall::East).raw(), 179.0);
    assert_eq!(room.wall_total(Wall::South).raw(), 77.25);
    assert_eq!(room.wall_total(Wall::West).raw(), 132.25);
    assert_eq!(room.perimeter().raw(), 561.5);
}

#[test]
fn north_wall_row_at_full_scale() {
    let room = kitchen().room_layout().unwrap();
    let art = ascii::render(&room, &ScaleContext::default()).unwrap();
    // 87" of wall then 86" of window, one cell per inch, inside the
    // one-cell margin.
    let top = &art.lines()[1];
    let expected: String = std::iter::once(' ')
        .chain(std::iter::repeat_n('#', 87))
        .chain(std::iter::repeat_n('=', 86))
        .chain(std::iter::once(' '))
        .collect();
    assert_eq!(top, &expected);
    assert_eq!(top.matches('#').count() + top.matches('=').count(), 173);
}

#[test]
fn full_scale_grid_spans_the_west_wall() {
    let room = kitchen().room_layout().unwrap();
    let art = ascii::render(&room, &ScaleContext::default()).unwrap();
    // 28 + 31.5 + 72.75 inches rounds to 28 + 32 + 73 rows, plus margin.
    assert_eq!(art.lines().len(), 135);
    for line in art.lines() {
        assert_eq!(line.chars().count(), 175);
    }
}

#[test]
fn alcove_jog_recesses_the_east_wall() {
    let room = kitchen().room_layout().unwrap();
    let east = room.walk_wall(Wall::East);
    // E3 descends from the northeast corner, E2 jogs west, E1 descends to
    // the south edge.
    assert_eq!(east[0].start.x.raw(), 173.0);
    assert_eq!(east[1].end.x.raw(), 173.0 - 46.75);
    assert_eq!(east[2].end.y.raw(), 132.25);
}

#[test]
fn south_segment_drift_is_reported_against_declared_totals() {
    let mut doc = kitchen();
    // A mis-measured S1 inflates the south wall by 50" while the declared
    // totals still say 77.25.
    doc.walls.south[0].length_inches += 50.0;
    let room = doc.room_layout().unwrap();
    let report = validate::check_totals(&room, &doc.expected_totals().unwrap());
    // South drifts, and the perimeter inherits the error.
    assert_eq!(report.mismatches().len(), 2);
    let south = &report.mismatches()[0];
    assert_eq!(south.subject, "south wall total");
    assert_eq!(south.expected, 77.25);
    assert_eq!(south.actual, 127.25);
    assert_eq!(south.delta(), 50.0);
    assert!(south.to_string().contains("delta 50.00"));
    let perimeter = &report.mismatches()[1];
    assert_eq!(perimeter.subject, "perimeter");
    assert_eq!(perimeter.expected, 561.5);
    assert_eq!(perimeter.actual, 611.5);
}

#[test]
fn consistent_document_validates_clean() {
    let doc = kitchen();
    let room = doc.room_layout().unwrap();
    let ctx = ScaleContext::fit(&room, 80, 24, 1.0).unwrap();
    let report = roomplan::validate_document(&doc, &ctx).unwrap();
    assert!(report.is_ok(), "unexpected mismatches: {report}");
    // 4 walls + perimeter + line count + 26 line widths.
    assert_eq!(report.checks(), 32);
}

#[test]
fn fitted_artifact_shape() {
    let doc = kitchen();
    let room = doc.room_layout().unwrap();
    let ctx = ScaleContext::fit(&room, 80, 24, 1.0).unwrap();
    let art = ascii::render(&room, &ctx).unwrap();
    // 32x24 room cells plus the margin ring.
    assert_eq!(art.lines().len(), 26);
    assert_eq!(art.lines()[0].chars().count(), 34);
}

#[test]
fn svg_output_is_byte_stable() {
    let room = kitchen().room_layout().unwrap();
    let ctx = ScaleContext::new(4.0, 1.0).unwrap();
    let options = SvgOptions {
        title: Some("Kitchen".to_string()),
        ..SvgOptions::default()
    };
    let first = svg::render(&room, &ctx, &options);
    let second = svg::render(&room, &ctx, &options);
    assert_eq!(first, second);
}

#[test]
fn base_and_wall_views_share_the_plan_body() {
    let doc = kitchen();
    let room = doc.room_layout().unwrap();
    let ctx = ScaleContext::new(4.0, 1.0).unwrap();
    let options = SvgOptions::default();
    let base = roomplan::cabinet_plan(&doc, CabinetLayer::Base).unwrap();
    let wall = roomplan::cabinet_plan(&doc, CabinetLayer::Wall).unwrap();
    let base_svg = svg::render_view(&room, &ctx, &options, SvgView::Base, &base);
    let wall_svg = svg::render_view(&room, &ctx, &options, SvgView::Wall, &wall);
    let cut = |s: &str| s[..s.find("<g class=\"cabinets").unwrap()].to_string();
    assert_eq!(cut(&base_svg), cut(&wall_svg));
    assert!(base_svg.contains(r#"data-id="B1""#));
    assert!(wall_svg.contains(r#"data-id="U1""#));
}

#[test]
fn svg_contains_door_swings_and_dimension_labels() {
    let room = kitchen().room_layout().unwrap();
    let ctx = ScaleContext::new(4.0, 1.0).unwrap();
    let out = svg::render(&room, &ctx, &SvgOptions::default());
    assert!(out.contains(r#"<path class="door-arc" data-id="S2""#));
    assert!(out.contains(r#"<path class="door-arc" data-id="W2""#));
    assert!(out.contains("N1 87&quot; (7'3&quot;)"));
    assert!(out.contains("W3 72.75&quot; (6'0.75&quot;)"));
}

#[test]
fn cabinet_report_places_runs_sequentially() {
    let doc = kitchen();
    let plan = roomplan::cabinet_plan(&doc, CabinetLayer::Base).unwrap();
    let north = &plan.walls[0];
    assert_eq!(north.wall, Wall::North);
    assert_eq!(north.placed[0].start.raw(), 0.0);
    assert_eq!(north.placed[1].start.raw(), 36.0);
    assert_eq!(north.placed[2].start.raw(), 66.0);
    // 173 - 102 = 71" of open wall at the end.
    assert_eq!(north.gaps.len(), 1);
    assert_eq!(north.gaps[0].width().raw(), 71.0);
}

#[test]
fn explicit_position_opens_a_gap_in_the_wall_layer() {
    let doc = kitchen();
    let plan = roomplan::cabinet_plan(&doc, CabinetLayer::Wall).unwrap();
    let north = &plan.walls[0];
    // U2 is pinned at 48", leaving 18" behind U1.
    assert_eq!(north.placed[1].start.raw(), 48.0);
    assert!(north.gaps.iter().any(|g| g.width().raw() == 18.0));
}

#[test]
fn small_room_grid() {
    let doc = PlanDocument::from_json(
        r#"{
        "walls": {
            "north": [
                { "id": "N1", "length_inches": 5.0 },
                { "id": "N2", "length_inches": 4.0, "kind": "window" }
            ],
            "east":  [{ "id": "E1", "length_inches": 6.0 }],
            "south": [
                { "id": "S1", "length_inches": 3.0 },
                { "id": "S2", "length_inches": 3.0, "kind": "door" },
                { "id": "S3", "length_inches": 3.0 }
            ],
            "west":  [{ "id": "W1", "length_inches": 6.0 }]
        }
    }"#,
    )
    .unwrap();
    let room = doc.room_layout().unwrap();
    let art = ascii::render(&room, &ScaleContext::default()).unwrap();
    assert_eq!(
        art.lines(),
        &[
            "           ",
            " #####==== ",
            " #       # ",
            " #       # ",
            " #       # ",
            " #       # ",
            " ###|||### ",
            "           ",
        ]
    );
}

#[test]
fn cabinet_report_snapshot() {
    let doc = kitchen();
    let plan = roomplan::cabinet_plan(&doc, CabinetLayer::Base).unwrap();
    insta::assert_snapshot!(plan.to_string(), @r#"
    base cabinet layer
      north wall (173"):
        B1       cabinet    0" .. 36" (36" wide, 24" deep)
        B2       appliance  36" .. 66" (30" wide, 24" deep)
        B3       lazy susan 66" .. 102" (36" wide, 24" deep)
        gap      102" .. 173" (71"), fits standard widths up to 36"
      south wall (77.25"):
        B4       cabinet    0" .. 24" (24" wide, 24" deep)
        gap      24" .. 77.25" (53.25"), fits standard widths up to 36"
    "#);
}
