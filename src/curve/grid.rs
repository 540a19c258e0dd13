use super::{LookupTable, TABLE_SIZE, raster};

/// Edge length of the editing grid in pixels, one column per table entry.
pub const GRID_SIZE: usize = TABLE_SIZE;

/// Dash period of the anti-diagonal reference line.
const DASH: usize = 8;

const CURVE: [u8; 3] = [0, 0, 0];
const REFERENCE: [u8; 3] = [210, 210, 210];

/// Render the curve as a `GRID_SIZE` x `GRID_SIZE` RGB byte buffer:
/// white background, light reference diagonals, and the curve itself as
/// connected black segments between adjacent columns.
pub fn render(table: &LookupTable) -> Vec<u8> {
    let mut buf = vec![255u8; GRID_SIZE * GRID_SIZE * 3];

    for i in 0..GRID_SIZE {
        put(&mut buf, i as i32, i as i32, REFERENCE);
        if (i / DASH) % 2 == 0 {
            put(&mut buf, i as i32, (GRID_SIZE - 1 - i) as i32, REFERENCE);
        }
    }

    // Row 0 is the top of the grid, so output v sits at row 255 - v.
    for x in 0..GRID_SIZE - 1 {
        let from = (x as i32, 255 - table.get(x as u8) as i32);
        let to = (x as i32 + 1, 255 - table.get(x as u8 + 1) as i32);
        raster::plot_line(from, to, |px, py| put(&mut buf, px, py, CURVE));
    }

    buf
}

fn put(buf: &mut [u8], x: i32, y: i32, rgb: [u8; 3]) {
    let idx = (y as usize * GRID_SIZE + x as usize) * 3;
    buf[idx..idx + 3].copy_from_slice(&rgb);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(buf: &[u8], x: usize, y: usize) -> [u8; 3] {
        let idx = (y * GRID_SIZE + x) * 3;
        [buf[idx], buf[idx + 1], buf[idx + 2]]
    }

    #[test]
    fn buffer_has_rgb_byte_per_grid_cell() {
        let buf = render(&LookupTable::identity());
        assert_eq!(buf.len(), GRID_SIZE * GRID_SIZE * 3);
    }

    #[test]
    fn identity_curve_covers_the_anti_diagonal() {
        // identity: output i drawn at row 255 - i, column i.
        let buf = render(&LookupTable::identity());
        for i in 0..GRID_SIZE {
            assert_eq!(pixel(&buf, i, GRID_SIZE - 1 - i), CURVE);
        }
    }

    #[test]
    fn every_column_carries_a_curve_pixel() {
        let table = LookupTable::from_fn(|i| if i < 128 { 0 } else { 255 });
        let buf = render(&table);
        for x in 0..GRID_SIZE {
            let hit = (0..GRID_SIZE).any(|y| pixel(&buf, x, y) == CURVE);
            assert!(hit, "column {x} has no curve pixel");
        }
    }

    #[test]
    fn step_between_columns_is_connected() {
        // A hard step must be joined by a vertical run, not left as
        // two isolated dots.
        let table = LookupTable::from_fn(|i| if i < 128 { 0 } else { 255 });
        let buf = render(&table);
        for y in 0..GRID_SIZE - 1 {
            let on_left = pixel(&buf, 127, y) == CURVE;
            let on_right = pixel(&buf, 128, y) == CURVE;
            assert!(on_left || on_right, "step gap at row {y}");
        }
    }

    #[test]
    fn background_stays_white_away_from_markings() {
        let buf = render(&LookupTable::identity());
        assert_eq!(pixel(&buf, 10, 100), [255, 255, 255]);
    }

    #[test]
    fn main_diagonal_is_marked_light() {
        // Flat-zero curve sits on the bottom row, leaving the interior
        // reference diagonal visible.
        let table = LookupTable::from_fn(|_| 0);
        let buf = render(&table);
        assert_eq!(pixel(&buf, 100, 100), REFERENCE);
    }
}
