use glam::{Vec2, Vec3};

use crate::grid::Grid;

/// Visit every cell whose center `(i + 0.5, j + 0.5)` lies inside the
/// polygon, by even-odd scanline with half-open spans (`lo <= y < hi` per
/// edge, `enter <= x < exit` per span). A center on a shared edge between
/// two polygons is therefore visited for exactly one of them, and
/// degenerate polygons produce empty spans.
fn scan_cells(
    poly: &[Vec2],
    grid: Grid,
    crossings: &mut Vec<f32>,
    mut visit: impl FnMut(usize, usize),
) {
    if poly.len() < 3 {
        return;
    }

    let w = grid.width();
    let h = grid.height();

    let mut y_min = f32::INFINITY;
    let mut y_max = f32::NEG_INFINITY;
    for v in poly {
        y_min = y_min.min(v.y);
        y_max = y_max.max(v.y);
    }

    let j_lo = (y_min - 0.5).ceil().max(0.0) as usize;
    let j_hi = ((y_max - 0.5).ceil().min(h as f32)) as i64;
    if j_hi <= j_lo as i64 {
        return;
    }

    for j in j_lo..j_hi as usize {
        let yc = j as f32 + 0.5;

        crossings.clear();
        let mut prev = poly[poly.len() - 1];
        for &cur in poly {
            if (prev.y <= yc && cur.y > yc) || (cur.y <= yc && prev.y > yc) {
                let t = (yc - prev.y) / (cur.y - prev.y);
                crossings.push(prev.x + t * (cur.x - prev.x));
            }
            prev = cur;
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks_exact(2) {
            let i_lo = (pair[0] - 0.5).ceil().max(0.0) as usize;
            let i_hi = ((pair[1] - 0.5).ceil().min(w as f32)) as i64;
            for i in i_lo..i_hi.max(0) as usize {
                visit(i, j);
            }
        }
    }
}

/// Set every cell whose center falls inside the polygon to 1.0.
pub fn fill_polygon(poly: &[Vec2], mask: &mut [f32], grid: Grid, crossings: &mut Vec<f32>) {
    scan_cells(poly, grid, crossings, |i, j| mask[grid.at(i, j)] = 1.0);
}

/// Toggle the parity bit of every cell whose center the triangle covers in
/// xy and whose plane lies strictly above `z_ray` there.
///
/// One toggle per upward ray/surface crossing: after streaming a closed
/// mesh through this, odd parity marks cells whose center column is inside
/// the solid at `z_ray`. Toggles commute, so the result is independent of
/// triangle order. Edge-on triangles (no z-resolvable projection) are
/// skipped; their cross-sections are handled by the clipped-polygon fill.
pub fn toggle_ray_crossings(
    tri: [Vec3; 3],
    z_ray: f32,
    parity: &mut [u8],
    grid: Grid,
    crossings: &mut Vec<f32>,
) {
    let [a, b, c] = tri;
    let n = (b - a).cross(c - a);
    if n.z == 0.0 {
        return;
    }
    let proj = [Vec2::new(a.x, a.y), Vec2::new(b.x, b.y), Vec2::new(c.x, c.y)];
    scan_cells(&proj, grid, crossings, |i, j| {
        let x = i as f32 + 0.5;
        let y = j as f32 + 0.5;
        let z = a.z - (n.x * (x - a.x) + n.y * (y - a.y)) / n.z;
        if z > z_ray {
            parity[grid.at(i, j)] ^= 1;
        }
    });
}
