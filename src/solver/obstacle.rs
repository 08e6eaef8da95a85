use crate::grid::Grid;

/// Relative thickness of the built-in NACA 00xx profile.
const AIRFOIL_THICKNESS: f32 = 0.15;

/// Half-thickness of a symmetric NACA 00xx airfoil at chordwise position
/// `u` in `[0, 1]`, in chord units.
pub fn naca_half_thickness(u: f32, thickness: f32) -> f32 {
    5.0 * thickness
        * (0.2969 * u.sqrt() - 0.1260 * u - 0.3516 * u * u + 0.2843 * u * u * u
            - 0.1015 * u * u * u * u)
}

/// Rasterize the built-in airfoil into a fresh occupancy mask: chord `W/4`,
/// centered at `(W/3, H/2)`, aligned with the flow axis.
pub fn airfoil_mask(grid: Grid) -> Vec<f32> {
    let w = grid.width();
    let h = grid.height();
    let center_x = (w / 3) as i32;
    let center_y = (h / 2) as i32;
    let chord = (w / 4) as f32;

    let mut mask = grid.alloc();
    for j in 0..h {
        for i in 0..w {
            let u = (i as i32 - center_x) as f32 / chord;
            let v = (j as i32 - center_y) as f32 / chord;
            if (0.0..=1.0).contains(&u) && v.abs() <= naca_half_thickness(u, AIRFOIL_THICKNESS) {
                mask[grid.at(i, j)] = 1.0;
            }
        }
    }
    mask
}
