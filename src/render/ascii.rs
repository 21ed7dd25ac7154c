//! ASCII floor plan renderer.
//!
//! The grid spans the scaled room plus a one-cell blank margin: room width
//! is the sum of the North wall's rounded segment spans, room height the sum
//! of the West wall's. Walls are painted cell by cell in the fixed traversal
//! order (North, East, South, West); a cell is written at most once, so
//! where two walls meet the first-painted wall owns the corner.
//!
//! Symbols: `#` wall, `=` window, `|` door. Interior cells stay blank and
//! trailing blanks are preserved, so every line has the same width.

use std::fmt;

use crate::errors::ScaleError;
use crate::layout::{Heading, RoomLayout, Wall};
use crate::log::debug;
use crate::scale::ScaleContext;
use crate::types::Cells;

/// A rendered character grid.
#[derive(Clone, Debug, PartialEq)]
pub struct AsciiArt {
    lines: Vec<String>,
    width: Cells,
    height: Cells,
}

impl AsciiArt {
    /// All lines, top to bottom. Every line is exactly `width` chars.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn width(&self) -> Cells {
        self.width
    }

    pub fn height(&self) -> Cells {
        self.height
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Legend lines matching the grid symbols.
pub fn legend() -> [&'static str; 3] {
    ["# wall", "= window", "| door"]
}

/// Blank cells around the painted room.
const MARGIN: usize = 1;

/// Cell step for a heading, in (row, col) deltas.
fn cell_step(heading: Heading) -> (isize, isize) {
    match heading {
        Heading::North => (-1, 0),
        Heading::East => (0, 1),
        Heading::South => (1, 0),
        Heading::West => (0, -1),
    }
}

/// Where each wall's paint cursor starts, in cell coordinates of the room
/// (margin not yet applied).
fn cell_anchor(wall: Wall, width: usize, height: usize) -> (isize, isize) {
    match wall {
        Wall::North | Wall::West => (0, 0),
        Wall::East => (0, width as isize - 1),
        Wall::South => (height as isize - 1, 0),
    }
}

/// Render the room at the given scale.
pub fn render(room: &RoomLayout, ctx: &ScaleContext) -> Result<AsciiArt, ScaleError> {
    let (room_w, room_h) = ctx.grid_size(room)?;
    let (w, h) = (room_w.raw() + 2 * MARGIN, room_h.raw() + 2 * MARGIN);
    debug!(width = w, height = h, "ascii grid sized");
    let mut grid = vec![vec![' '; w]; h];

    for wall in Wall::ALL {
        let (anchor_row, anchor_col) = cell_anchor(wall, room_w.raw(), room_h.raw());
        let (mut row, mut col) = (anchor_row + MARGIN as isize, anchor_col + MARGIN as isize);
        for segment in room.segments(wall) {
            let cells = ctx.to_cells(segment)?.raw();
            let (dr, dc) = cell_step(segment.heading);
            let symbol = segment.kind.symbol();
            for _ in 0..cells {
                // Inconsistent measurements can run a wall past the grid;
                // painting is clipped, the validator reports the mismatch.
                if row >= 0 && col >= 0 && (row as usize) < h && (col as usize) < w {
                    let cell = &mut grid[row as usize][col as usize];
                    if *cell == ' ' {
                        *cell = symbol;
                    }
                }
                row += dr;
                col += dc;
            }
        }
    }

    Ok(AsciiArt {
        lines: grid.into_iter().map(|row| row.into_iter().collect()).collect(),
        width: Cells(w),
        height: Cells(h),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tests::{recessed_room, simple_room};
    use crate::layout::{SegmentKind, WallSegment};
    use crate::types::Inches;

    #[test]
    fn simple_room_draws_a_closed_box() {
        let art = render(&simple_room(), &ScaleContext::default()).unwrap();
        assert_eq!(
            art.lines(),
            &["      ", " #### ", " #  # ", " #### ", "      "]
        );
    }

    #[test]
    fn lines_preserve_trailing_blanks() {
        let art = render(&recessed_room(), &ScaleContext::default()).unwrap();
        for line in art.lines() {
            assert_eq!(line.chars().count(), art.width().raw());
        }
    }

    #[test]
    fn recess_jogs_the_east_wall_inward() {
        let art = render(&recessed_room(), &ScaleContext::default()).unwrap();
        // 6 wide, 4 tall; the east wall drops 2, jogs west 2, drops 2 more.
        assert_eq!(art.lines()[1], " ###### ");
        assert_eq!(art.lines()[2], " #    # ");
        assert_eq!(art.lines()[3], " #  ### ");
        assert_eq!(art.lines()[4], " ####   ");
    }

    #[test]
    fn door_and_window_symbols() {
        let seg = |id: &str, wall: Wall, len: f64, kind: SegmentKind| WallSegment {
            id: id.to_string(),
            wall,
            length: Inches(len),
            kind,
            heading: wall.natural_heading(),
        };
        let room = crate::layout::RoomLayout::from_walls([
            vec![
                seg("N1", Wall::North, 2.0, SegmentKind::Wall),
                seg("N2", Wall::North, 3.0, SegmentKind::Window),
            ],
            vec![seg("E1", Wall::East, 4.0, SegmentKind::Wall)],
            vec![
                seg("S1", Wall::South, 2.0, SegmentKind::Wall),
                seg("S2", Wall::South, 3.0, SegmentKind::Door),
            ],
            vec![seg("W1", Wall::West, 4.0, SegmentKind::Wall)],
        ]);
        let art = render(&room, &ScaleContext::default()).unwrap();
        assert_eq!(art.lines()[1], " ##=== ");
        // The southeast corner was painted by the East wall first.
        assert_eq!(art.lines()[4], " ##||# ");
    }

    #[test]
    fn north_corner_cells_belong_to_the_north_wall() {
        // Window across the whole north wall: the corner cells show '='
        // because North paints before East and West.
        let seg = |id: &str, wall: Wall, len: f64, kind: SegmentKind| WallSegment {
            id: id.to_string(),
            wall,
            length: Inches(len),
            kind,
            heading: wall.natural_heading(),
        };
        let room = crate::layout::RoomLayout::from_walls([
            vec![seg("N1", Wall::North, 4.0, SegmentKind::Window)],
            vec![seg("E1", Wall::East, 3.0, SegmentKind::Wall)],
            vec![seg("S1", Wall::South, 4.0, SegmentKind::Wall)],
            vec![seg("W1", Wall::West, 3.0, SegmentKind::Wall)],
        ]);
        let art = render(&room, &ScaleContext::default()).unwrap();
        assert_eq!(art.lines()[1], " ==== ");
        assert_eq!(art.lines()[2], " #  # ");
    }

    #[test]
    fn halved_scale_shrinks_the_grid() {
        let room = simple_room();
        let ctx = ScaleContext::new(0.5, 1.0).unwrap();
        let art = render(&room, &ctx).unwrap();
        // 4x3 inches at half scale: 2 cols, 2 rows (1.5 rounds up), plus
        // the margin ring.
        assert_eq!(art.width(), Cells(4));
        assert_eq!(art.height(), Cells(4));
    }

    #[test]
    fn rendering_is_idempotent() {
        let room = recessed_room();
        let ctx = ScaleContext::default();
        assert_eq!(render(&room, &ctx).unwrap(), render(&room, &ctx).unwrap());
    }
}
