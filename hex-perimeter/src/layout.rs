use glam::Vec2;

use crate::grid::constants::SIDES;
use crate::tracer::PerimeterEdge;

const SQRT_3: f32 = 1.732_050_8;

/// A straight piece of the perimeter in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// Projects offset hex coordinates onto pixels for pointy-top hexes of circumradius `size`.
///
/// Odd rows sit half a hex to the right, matching the neighbour tables in [`crate::grid`].
/// Screen y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLayout {
    size: f32,
    origin: Vec2,
}

impl HexLayout {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            origin: Vec2::ZERO,
        }
    }

    pub fn with_origin(self, origin: Vec2) -> Self {
        Self { origin, ..self }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn center(&self, row: usize, col: usize) -> Vec2 {
        let shift = if row % 2 == 0 { 0.0 } else { 0.5 };
        self.origin
            + Vec2::new(
                SQRT_3 * self.size * (col as f32 + shift),
                1.5 * self.size * row as f32,
            )
    }

    /// Corner `index` of the hex around `center`; corner 0 is the upper end of the right side.
    pub fn corner(&self, center: Vec2, index: usize) -> Vec2 {
        let angle = (60.0 * (index % SIDES) as f32 - 30.0).to_radians();
        center + self.size * Vec2::new(angle.cos(), angle.sin())
    }

    /// Side `d` of a cell runs from corner `d` to corner `d + 1`.
    pub fn side_segment(&self, edge: &PerimeterEdge) -> Segment {
        let center = self.center(edge.row, edge.col);
        let side = edge.side.index();
        Segment {
            start: self.corner(center, side),
            end: self.corner(center, side + 1),
        }
    }

    pub fn segments(&self, edges: &[PerimeterEdge]) -> Vec<Segment> {
        edges.iter().map(|edge| self.side_segment(edge)).collect()
    }

    /// Every hex side is as long as the circumradius.
    pub fn perimeter_length(&self, edges: &[PerimeterEdge]) -> f32 {
        edges.len() as f32 * self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Direction, HexGrid};
    use rstest::rstest;

    const EPSILON: f32 = 1e-3;

    #[rstest]
    #[case::even_row(2, 3)]
    #[case::odd_row(3, 3)]
    fn test_neighbors_share_a_side(#[case] row: usize, #[case] col: usize) -> miette::Result<()> {
        let grid = HexGrid::new(6, 6)?;
        let layout = HexLayout::new(10.0);

        for direction in Direction::ALL {
            let (next_row, next_col) = grid
                .neighbor(row, col, direction)
                .ok_or_else(|| miette::miette!("missing neighbour towards {:?}", direction))?;

            let ours = layout.side_segment(&PerimeterEdge {
                row,
                col,
                side: direction,
            });
            let theirs = layout.side_segment(&PerimeterEdge {
                row: next_row,
                col: next_col,
                side: direction.opposite(),
            });

            assert!(ours.start.abs_diff_eq(theirs.end, EPSILON), "{:?}", direction);
            assert!(ours.end.abs_diff_eq(theirs.start, EPSILON), "{:?}", direction);
        }
        Ok(())
    }

    #[test]
    fn test_side_length_matches_size() {
        let layout = HexLayout::new(12.5).with_origin(Vec2::new(40.0, -3.0));

        for side in Direction::ALL {
            let segment = layout.side_segment(&PerimeterEdge { row: 5, col: 2, side });
            assert!((segment.length() - 12.5).abs() < EPSILON);
        }
    }

    #[test]
    fn test_center_offsets_odd_rows() {
        let layout = HexLayout::new(2.0);

        assert!(layout.center(0, 0).abs_diff_eq(Vec2::ZERO, EPSILON));
        assert!(layout.center(1, 0).abs_diff_eq(Vec2::new(SQRT_3, 3.0), EPSILON));
        assert!(layout.center(2, 1).abs_diff_eq(Vec2::new(2.0 * SQRT_3, 6.0), EPSILON));
    }

    #[test]
    fn test_right_side_is_vertical() {
        let layout = HexLayout::new(1.0);
        let segment = layout.side_segment(&PerimeterEdge {
            row: 0,
            col: 0,
            side: Direction::Right,
        });

        assert!((segment.start.x - SQRT_3 / 2.0).abs() < EPSILON);
        assert!((segment.end.x - SQRT_3 / 2.0).abs() < EPSILON);
        assert!(segment.start.y < segment.end.y);
    }

    #[test]
    fn test_perimeter_length() -> miette::Result<()> {
        let mut tracer = crate::tracer::PerimeterTracer::new(4, 4)?;
        tracer.set_cell(2, 2, true)?;
        tracer.compute_perimeter();

        let layout = HexLayout::new(3.0);
        let total = layout
            .segments(tracer.perimeter_edges())
            .iter()
            .map(Segment::length)
            .sum::<f32>();

        assert!((layout.perimeter_length(tracer.perimeter_edges()) - 18.0).abs() < EPSILON);
        assert!((total - 18.0).abs() < EPSILON);
        Ok(())
    }
}
