//! Room model: walls, segments, and the shared perimeter walk.
//!
//! A [`RoomLayout`] is an immutable value constructed once from the
//! measurement document. Both renderers and the validator consume it; nothing
//! mutates it after construction.
//!
//! Geometry convention: plan coordinates with x growing east and y growing
//! south, origin at the northwest corner. Walls are traversed in the fixed
//! order North, East, South, West; north/south walls run west→east,
//! east/west walls run north→south. A segment may override its travel
//! direction with a [`Heading`], which is how an alcove/recess arises from
//! sequential placement alone.

use crate::types::Inches;

/// The four walls, in traversal (paint) order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wall {
    North,
    East,
    South,
    West,
}

impl Wall {
    /// Fixed traversal order shared by renderers and validator.
    pub const ALL: [Wall; 4] = [Wall::North, Wall::East, Wall::South, Wall::West];

    pub fn label(self) -> &'static str {
        match self {
            Wall::North => "north",
            Wall::East => "east",
            Wall::South => "south",
            Wall::West => "west",
        }
    }

    /// Direction a wall's segments travel by default.
    pub fn natural_heading(self) -> Heading {
        match self {
            Wall::North | Wall::South => Heading::East,
            Wall::East | Wall::West => Heading::South,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Wall::North => 0,
            Wall::East => 1,
            Wall::South => 2,
            Wall::West => 3,
        }
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What a segment is made of; selects the ASCII symbol and SVG styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    Wall,
    Door,
    Window,
}

impl SegmentKind {
    /// ASCII grid symbol for this kind.
    pub fn symbol(self) -> char {
        match self {
            SegmentKind::Wall => '#',
            SegmentKind::Door => '|',
            SegmentKind::Window => '=',
        }
    }
}

/// Travel direction of a segment in plan space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Unit step in plan coordinates (x east, y south).
    pub fn step(self) -> (f64, f64) {
        match self {
            Heading::North => (0.0, -1.0),
            Heading::East => (1.0, 0.0),
            Heading::South => (0.0, 1.0),
            Heading::West => (-1.0, 0.0),
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Heading::East | Heading::West)
    }
}

/// One labeled straight run of a wall.
#[derive(Clone, Debug, PartialEq)]
pub struct WallSegment {
    pub id: String,
    pub wall: Wall,
    pub length: Inches,
    pub kind: SegmentKind,
    /// Travel direction; deviates from `wall.natural_heading()` only for
    /// alcove/recess jogs.
    pub heading: Heading,
}

/// A point in plan space (inches from the northwest corner).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PlanPoint {
    pub x: Inches,
    pub y: Inches,
}

impl PlanPoint {
    pub fn new(x: Inches, y: Inches) -> Self {
        PlanPoint { x, y }
    }

    /// The point reached by travelling `len` along `heading`.
    pub fn advanced(self, heading: Heading, len: Inches) -> PlanPoint {
        let (dx, dy) = heading.step();
        PlanPoint {
            x: Inches(self.x.0 + dx * len.0),
            y: Inches(self.y.0 + dy * len.0),
        }
    }
}

/// A segment placed in plan space by the perimeter walk.
#[derive(Clone, Debug)]
pub struct PlacedSegment<'a> {
    pub segment: &'a WallSegment,
    pub start: PlanPoint,
    pub end: PlanPoint,
}

/// Immutable room perimeter: ordered segments per wall.
#[derive(Clone, Debug)]
pub struct RoomLayout {
    walls: [Vec<WallSegment>; 4],
}

impl RoomLayout {
    /// Build from per-wall segment lists. Walls must already be validated
    /// (non-empty, positive lengths); see [`crate::config`].
    pub(crate) fn from_walls(walls: [Vec<WallSegment>; 4]) -> Self {
        RoomLayout { walls }
    }

    pub fn segments(&self, wall: Wall) -> &[WallSegment] {
        &self.walls[wall.index()]
    }

    /// Declared run length of a wall: sum of its segment lengths.
    pub fn wall_total(&self, wall: Wall) -> Inches {
        self.segments(wall)
            .iter()
            .fold(Inches::ZERO, |acc, s| acc + s.length)
    }

    /// Room width, derived from the North wall.
    pub fn width(&self) -> Inches {
        self.wall_total(Wall::North)
    }

    /// Room height, derived from the West wall.
    pub fn height(&self) -> Inches {
        self.wall_total(Wall::West)
    }

    /// Sum over all segments on all walls.
    pub fn perimeter(&self) -> Inches {
        Wall::ALL
            .iter()
            .fold(Inches::ZERO, |acc, &w| acc + self.wall_total(w))
    }

    /// Width/height ratio, `None` for a degenerate (zero-height) room.
    pub fn aspect_ratio(&self) -> Option<f64> {
        self.width().checked_ratio(self.height())
    }

    /// Where a wall's traversal starts in plan space.
    ///
    /// North and West anchor at the northwest corner, East at the northeast
    /// corner, South at the southwest corner; cursors then advance per
    /// segment heading.
    pub fn wall_anchor(&self, wall: Wall) -> PlanPoint {
        match wall {
            Wall::North | Wall::West => PlanPoint::default(),
            Wall::East => PlanPoint::new(self.width(), Inches::ZERO),
            Wall::South => PlanPoint::new(Inches::ZERO, self.height()),
        }
    }

    /// Walk one wall: each segment placed at the cumulative offset of its
    /// predecessors. This single computation feeds both renderers, so the
    /// alcove geometry can never drift between ASCII and SVG output.
    pub fn walk_wall(&self, wall: Wall) -> Vec<PlacedSegment<'_>> {
        let mut cursor = self.wall_anchor(wall);
        self.segments(wall)
            .iter()
            .map(|segment| {
                let start = cursor;
                let end = start.advanced(segment.heading, segment.length);
                cursor = end;
                PlacedSegment {
                    segment,
                    start,
                    end,
                }
            })
            .collect()
    }

    /// Closed floor outline: the North walk, then the East walk, then the
    /// southwest corner. With consistent measurements the East walk ends on
    /// the south edge and the final point closes it along the South wall.
    pub fn floor_outline(&self) -> Vec<PlanPoint> {
        let mut points = vec![PlanPoint::default()];
        for placed in self.walk_wall(Wall::North) {
            points.push(placed.end);
        }
        for placed in self.walk_wall(Wall::East) {
            points.push(placed.end);
        }
        points.push(PlanPoint::new(Inches::ZERO, self.height()));
        points
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A 4x3 room: every wall one plain segment.
    pub(crate) fn simple_room() -> RoomLayout {
        let seg = |id: &str, wall: Wall, len: f64| WallSegment {
            id: id.to_string(),
            wall,
            length: Inches(len),
            kind: SegmentKind::Wall,
            heading: wall.natural_heading(),
        };
        RoomLayout::from_walls([
            vec![seg("N1", Wall::North, 4.0)],
            vec![seg("E1", Wall::East, 3.0)],
            vec![seg("S1", Wall::South, 4.0)],
            vec![seg("W1", Wall::West, 3.0)],
        ])
    }

    /// 6 wide, 4 tall, with a 2x2 recess in the southeast corner.
    /// East wall: down 2, west 2, down 2; south wall covers only 4.
    pub(crate) fn recessed_room() -> RoomLayout {
        let seg = |id: &str, wall: Wall, len: f64, heading: Heading| WallSegment {
            id: id.to_string(),
            wall,
            length: Inches(len),
            kind: SegmentKind::Wall,
            heading,
        };
        RoomLayout::from_walls([
            vec![seg("N1", Wall::North, 6.0, Heading::East)],
            vec![
                seg("E3", Wall::East, 2.0, Heading::South),
                seg("E2", Wall::East, 2.0, Heading::West),
                seg("E1", Wall::East, 2.0, Heading::South),
            ],
            vec![seg("S1", Wall::South, 4.0, Heading::East)],
            vec![seg("W1", Wall::West, 4.0, Heading::South)],
        ])
    }

    #[test]
    fn wall_totals_and_perimeter() {
        let room = simple_room();
        assert_eq!(room.wall_total(Wall::North), Inches(4.0));
        assert_eq!(room.wall_total(Wall::West), Inches(3.0));
        assert_eq!(room.perimeter(), Inches(14.0));
        assert_eq!(room.width(), Inches(4.0));
        assert_eq!(room.height(), Inches(3.0));
    }

    #[test]
    fn aspect_ratio_of_simple_room() {
        let room = simple_room();
        let ratio = room.aspect_ratio().unwrap();
        assert!((ratio - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn walk_places_segments_sequentially() {
        let room = recessed_room();
        let east = room.walk_wall(Wall::East);
        assert_eq!(east.len(), 3);
        assert_eq!(east[0].start, PlanPoint::new(Inches(6.0), Inches(0.0)));
        assert_eq!(east[0].end, PlanPoint::new(Inches(6.0), Inches(2.0)));
        // The westward jog moves the cursor inward.
        assert_eq!(east[1].end, PlanPoint::new(Inches(4.0), Inches(2.0)));
        // The final run descends at the recessed column.
        assert_eq!(east[2].end, PlanPoint::new(Inches(4.0), Inches(4.0)));
    }

    #[test]
    fn floor_outline_closes_on_south_edge() {
        let room = recessed_room();
        let outline = room.floor_outline();
        // NW corner, NE corner, three east-wall turns, SW corner.
        assert_eq!(outline.len(), 6);
        assert_eq!(*outline.first().unwrap(), PlanPoint::default());
        assert_eq!(
            *outline.last().unwrap(),
            PlanPoint::new(Inches(0.0), Inches(4.0))
        );
        // East walk ends exactly on the south edge for consistent data.
        assert_eq!(outline[4], PlanPoint::new(Inches(4.0), Inches(4.0)));
    }
}
