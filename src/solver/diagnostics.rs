use crate::grid::Grid;

/// Maximum absolute discrete divergence over interior fluid cells, using
/// the same central-difference stencil the projection step uses. A
/// post-projection value near zero is the observable measure of how well
/// the configured relaxation sweeps removed compressibility.
pub fn max_divergence(vel_x: &[f32], vel_y: &[f32], solid: &[f32], grid: Grid) -> f32 {
    let w = grid.width();
    let h = grid.height();
    let cell = 1.0 / w as f32;
    let mut max = 0.0_f32;
    for j in 1..h - 1 {
        for i in 1..w - 1 {
            let ii = grid.at(i, j);
            if solid[ii] > 0.0 {
                continue;
            }
            let div = -0.5
                * cell
                * (vel_x[grid.at(i + 1, j)] - vel_x[grid.at(i - 1, j)]
                    + vel_y[grid.at(i, j + 1)]
                    - vel_y[grid.at(i, j - 1)]);
            max = max.max(div.abs());
        }
    }
    max
}

/// Volume-averaged kinetic energy over interior fluid cells.
pub fn kinetic_energy(vel_x: &[f32], vel_y: &[f32], solid: &[f32], grid: Grid) -> f32 {
    let w = grid.width();
    let h = grid.height();
    let mut sum = 0.0_f32;
    let mut count = 0usize;
    for j in 1..h - 1 {
        for i in 1..w - 1 {
            let ii = grid.at(i, j);
            if solid[ii] > 0.0 {
                continue;
            }
            sum += vel_x[ii] * vel_x[ii] + vel_y[ii] * vel_y[ii];
            count += 1;
        }
    }
    if count > 0 {
        0.5 * sum / count as f32
    } else {
        0.0
    }
}

/// Total dye mass over the whole field.
pub fn total_dye(dye: &[f32]) -> f32 {
    dye.iter().sum()
}
