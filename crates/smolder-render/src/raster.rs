//! Per-generation rasterization.

use image::{Rgb, RgbImage};
use smolder_sim::{Field, Rule};
use smolder_space::Topology;

/// Paint one generation as solid per-cell rectangles.
///
/// The cell-pixel size per axis is `target_px / (dimension + 1)` with
/// truncating integer division, and the canvas is the cell size times the
/// cell count — so the canvas can fall short of `target_px` by up to
/// `dimension` pixels. That remainder is deliberate, preserved behavior:
/// reference output depends on it, so it is documented and tested rather
/// than rounded away. A `target_px` smaller than the per-axis cell count
/// yields an empty canvas.
pub fn rasterize<T: Topology, R: Rule>(field: &Field<T, R>, target_px: u32) -> RgbImage {
    let bounds = field.bounds();
    let cols = bounds.x as u32 + 1;
    let rows = bounds.y as u32 + 1;
    let cell_w = target_px / cols;
    let cell_h = target_px / rows;

    let mut canvas = RgbImage::new(cell_w * cols, cell_h * rows);
    for (point, cell) in field.cells() {
        let color = Rgb(field.rule().color_for(cell.state));
        let left = point.x as u32 * cell_w;
        let top = point.y as u32 * cell_h;
        for dy in 0..cell_h {
            for dx in 0..cell_w {
                canvas.put_pixel(left + dx, top + dy, color);
            }
        }
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use smolder_core::{EntropyStream, Point};
    use smolder_models::wildfire::{self, Wildfire};
    use smolder_models::WildfireState;
    use smolder_sim::Field;
    use smolder_space::{EdgeBehavior, Square4};

    fn uniform_grass(bounds: Point) -> Field<Square4, Wildfire> {
        let rule = Wildfire::default();
        let lattice = Square4::new(bounds, EdgeBehavior::Absorb).unwrap();
        Field::from_fn(lattice, rule, |_| rule.cell_at(7))
    }

    #[test]
    fn truncating_cell_size_undershoots_the_target() {
        // 51 cells across a 500-pixel target: 9-pixel cells, 459-pixel
        // canvas, 41 pixels of the target never covered.
        let mut stream = EntropyStream::with_seed(1);
        let field =
            wildfire::basic_field(Point::new(50, 50), Wildfire::default(), &mut stream).unwrap();
        let frame = rasterize(&field, 500);
        assert_eq!(frame.dimensions(), (459, 459));
    }

    #[test]
    fn exact_division_fills_the_target() {
        let field = uniform_grass(Point::new(9, 9));
        let frame = rasterize(&field, 500);
        assert_eq!(frame.dimensions(), (500, 500));
    }

    #[test]
    fn cells_paint_solid_rectangles() {
        let rule = Wildfire::default();
        let lattice = Square4::new(Point::new(1, 1), EdgeBehavior::Absorb).unwrap();
        let field = Field::from_fn(lattice, rule, |p| {
            if p == Point::new(0, 0) {
                rule.cell_at(0) // Fire
            } else {
                rule.cell_at(7) // Grass
            }
        });
        let frame = rasterize(&field, 10);
        assert_eq!(frame.dimensions(), (10, 10));

        let fire = Rgb(rule.color_for(WildfireState::Fire));
        let grass = Rgb(rule.color_for(WildfireState::Grass));
        // Every pixel of the top-left cell is fire-colored.
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(frame.get_pixel(x, y), &fire);
            }
        }
        assert_eq!(frame.get_pixel(9, 0), &grass);
        assert_eq!(frame.get_pixel(0, 9), &grass);
        assert_eq!(frame.get_pixel(9, 9), &grass);
    }

    #[test]
    fn undersized_target_yields_empty_canvas() {
        let field = uniform_grass(Point::new(9, 9));
        let frame = rasterize(&field, 7);
        assert_eq!(frame.dimensions(), (0, 0));
    }
}
