/// Walk the straight line from `from` to `to`, calling `plot` for every
/// integer grid point in traversal order, endpoints included.
///
/// This is the eight-direction symmetric form of Bresenham's algorithm:
/// it handles all octants with one error term and never skips a step,
/// which is what guarantees a fast pointer drag still yields a curve
/// with a value in every traversed column.
pub fn plot_line(from: (i32, i32), to: (i32, i32), mut plot: impl FnMut(i32, i32)) {
    let (mut x, mut y) = from;
    let (x1, y1) = to;

    let dx = (x1 - x).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let dy = -(y1 - y).abs();
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(x, y);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
