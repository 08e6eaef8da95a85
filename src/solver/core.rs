use crate::grid::Grid;
use crate::solver::boundary::{set_bnd, BoundaryKind};

/// Diffusion step: relaxes `dest` toward `(I - dt*rate*L)^-1 source` with
/// `iterations` Gauss-Seidel sweeps of the 5-point stencil.
///
/// Sweeps read `dest` in place (row-major), so whatever the buffer holds on
/// entry serves as the initial guess. Solid cells are skipped and keep
/// their value. Solid neighbors are substituted per kind: the center value
/// for `Scalar` (zero flux into the obstacle), zero for velocity kinds
/// (no-slip at the obstacle surface).
pub fn diffuse(
    kind: BoundaryKind,
    dest: &mut [f32],
    source: &[f32],
    solid: &[f32],
    rate: f32,
    dt: f32,
    iterations: u32,
    grid: Grid,
) {
    let w = grid.width();
    let h = grid.height();
    let a = dt * rate * (w - 2) as f32 * (h - 2) as f32;
    let denom = 1.0 + 4.0 * a;

    for _ in 0..iterations {
        for j in 1..h - 1 {
            for i in 1..w - 1 {
                let ii = grid.at(i, j);
                if solid[ii] > 0.0 {
                    continue;
                }

                let center = dest[ii];
                let pick = |n: usize, wall: f32| if solid[n] > 0.0 { wall } else { dest[n] };
                let (n_l, n_r, n_b, n_t);
                match kind {
                    BoundaryKind::Scalar | BoundaryKind::Pressure => {
                        n_l = pick(grid.at(i - 1, j), center);
                        n_r = pick(grid.at(i + 1, j), center);
                        n_b = pick(grid.at(i, j - 1), center);
                        n_t = pick(grid.at(i, j + 1), center);
                    }
                    BoundaryKind::VelocityX | BoundaryKind::VelocityY => {
                        n_l = pick(grid.at(i - 1, j), 0.0);
                        n_r = pick(grid.at(i + 1, j), 0.0);
                        n_b = pick(grid.at(i, j - 1), 0.0);
                        n_t = pick(grid.at(i, j + 1), 0.0);
                    }
                }

                dest[ii] = (source[ii] + a * (n_l + n_r + n_b + n_t)) / denom;
            }
        }
        set_bnd(kind, dest, grid);
    }
}

/// Semi-Lagrangian advection: backtrace each interior fluid cell through
/// the velocity field and bilinearly sample `source` at the traced point.
///
/// The per-axis scale `dt * (extent - 2)` converts cell-unit velocity into
/// a per-step displacement measured in cells. Solid cells write zero.
pub fn advect(
    kind: BoundaryKind,
    dest: &mut [f32],
    source: &[f32],
    vel_x: &[f32],
    vel_y: &[f32],
    solid: &[f32],
    dt: f32,
    grid: Grid,
) {
    let w = grid.width();
    let h = grid.height();
    let dt0_x = dt * (w - 2) as f32;
    let dt0_y = dt * (h - 2) as f32;

    for j in 1..h - 1 {
        for i in 1..w - 1 {
            let ii = grid.at(i, j);
            if solid[ii] > 0.0 {
                dest[ii] = 0.0;
                continue;
            }

            let x = (i as f32 - dt0_x * vel_x[ii]).clamp(0.5, w as f32 - 1.5);
            let y = (j as f32 - dt0_y * vel_y[ii]).clamp(0.5, h as f32 - 1.5);

            let i0 = x.floor() as i32;
            let j0 = y.floor() as i32;
            let s1 = x - i0 as f32;
            let s0 = 1.0 - s1;
            let t1 = y - j0 as f32;
            let t0 = 1.0 - t1;

            dest[ii] = s0
                * (t0 * source[grid.idx(i0, j0)] + t1 * source[grid.idx(i0, j0 + 1)])
                + s1 * (t0 * source[grid.idx(i0 + 1, j0)] + t1 * source[grid.idx(i0 + 1, j0 + 1)]);
        }
    }
    set_bnd(kind, dest, grid);
}

/// Pressure projection: removes the divergent component of the velocity
/// field so it becomes (approximately) incompressible.
///
/// Solid neighbors take the center pressure in both the Poisson sweeps and
/// the gradient subtraction (homogeneous Neumann: no normal pressure
/// gradient into the obstacle, which yields zero normal velocity at the
/// interface). Velocity and pressure inside solid cells are pinned to zero.
pub fn project(
    vel_x: &mut [f32],
    vel_y: &mut [f32],
    pressure: &mut [f32],
    divergence: &mut [f32],
    solid: &[f32],
    iterations: u32,
    grid: Grid,
) {
    let w = grid.width();
    let h = grid.height();
    let cell = 1.0 / w as f32;

    // Divergence of the velocity field; pressure starts at zero.
    for j in 1..h - 1 {
        for i in 1..w - 1 {
            let ii = grid.at(i, j);
            if solid[ii] > 0.0 {
                divergence[ii] = 0.0;
                pressure[ii] = 0.0;
                continue;
            }
            divergence[ii] = -0.5
                * cell
                * (vel_x[grid.at(i + 1, j)] - vel_x[grid.at(i - 1, j)]
                    + vel_y[grid.at(i, j + 1)]
                    - vel_y[grid.at(i, j - 1)]);
            pressure[ii] = 0.0;
        }
    }
    set_bnd(BoundaryKind::Scalar, divergence, grid);
    set_bnd(BoundaryKind::Pressure, pressure, grid);

    // Gauss-Seidel sweeps of the pressure Poisson equation.
    for _ in 0..iterations {
        for j in 1..h - 1 {
            for i in 1..w - 1 {
                let ii = grid.at(i, j);
                if solid[ii] > 0.0 {
                    continue;
                }
                let center = pressure[ii];
                let pick = |n: usize| if solid[n] > 0.0 { center } else { pressure[n] };
                let p_l = pick(grid.at(i - 1, j));
                let p_r = pick(grid.at(i + 1, j));
                let p_b = pick(grid.at(i, j - 1));
                let p_t = pick(grid.at(i, j + 1));
                pressure[ii] = (divergence[ii] + p_l + p_r + p_b + p_t) / 4.0;
            }
        }
        set_bnd(BoundaryKind::Pressure, pressure, grid);
    }

    // Subtract the pressure gradient from the velocity.
    for j in 1..h - 1 {
        for i in 1..w - 1 {
            let ii = grid.at(i, j);
            if solid[ii] > 0.0 {
                vel_x[ii] = 0.0;
                vel_y[ii] = 0.0;
                continue;
            }
            let center = pressure[ii];
            let pick = |n: usize| if solid[n] > 0.0 { center } else { pressure[n] };
            let p_l = pick(grid.at(i - 1, j));
            let p_r = pick(grid.at(i + 1, j));
            let p_b = pick(grid.at(i, j - 1));
            let p_t = pick(grid.at(i, j + 1));
            vel_x[ii] -= 0.5 * (p_r - p_l) / cell;
            vel_y[ii] -= 0.5 * (p_t - p_b) / cell;
        }
    }
    set_bnd(BoundaryKind::VelocityX, vel_x, grid);
    set_bnd(BoundaryKind::VelocityY, vel_y, grid);
}
