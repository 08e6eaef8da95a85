use crate::grid::Grid;

/// Emission speed for the frontal (surface-normal) source mode.
const FRONTAL_SPEED: f32 = 2.0;

/// Dye band half-extent of the wind-tunnel emitter, as fractions of H.
const EMITTER_LO: f32 = 0.45;
const EMITTER_HI: f32 = 0.55;

/// Wind-tunnel inlet: drive the two leftmost columns at `inflow_velocity`
/// and seed a dye band around mid-height.
///
/// The dye emitter only runs while the tunnel is actually blowing
/// (`inflow_velocity != 0`), so a switched-off tunnel leaves every field
/// untouched at zero.
pub fn apply_wind_tunnel(
    vel_x: &mut [f32],
    vel_y: &mut [f32],
    dye: &mut [f32],
    inflow_velocity: f32,
    grid: Grid,
) {
    let h = grid.height();
    for j in 1..h - 1 {
        vel_x[grid.at(0, j)] = inflow_velocity;
        vel_x[grid.at(1, j)] = inflow_velocity;
        vel_y[grid.at(0, j)] = 0.0;
        vel_y[grid.at(1, j)] = 0.0;

        if inflow_velocity != 0.0 {
            let jf = j as f32;
            if jf > h as f32 * EMITTER_LO && jf < h as f32 * EMITTER_HI {
                dye[grid.at(0, j)] = 1.0;
                dye[grid.at(1, j)] = 1.0;
            } else {
                dye[grid.at(0, j)] = 0.0;
            }
        }
    }
}

/// Frontal-source inflow: every fluid cell touching the obstacle emits
/// fluid along the accumulated outward surface normal at a fixed speed,
/// and is saturated with dye.
///
/// Used when the object sits broadside to the flow and the wind-tunnel
/// inlet would be occluded.
pub fn apply_frontal_source(
    vel_x: &mut [f32],
    vel_y: &mut [f32],
    dye: &mut [f32],
    solid: &[f32],
    grid: Grid,
) {
    let w = grid.width();
    let h = grid.height();
    for j in 1..h - 1 {
        for i in 1..w - 1 {
            let ii = grid.at(i, j);
            if solid[ii] > 0.0 {
                continue;
            }

            let mut normal_x = 0.0_f32;
            let mut normal_y = 0.0_f32;
            if solid[grid.at(i - 1, j)] > 0.0 {
                normal_x += 1.0;
            }
            if solid[grid.at(i + 1, j)] > 0.0 {
                normal_x -= 1.0;
            }
            if solid[grid.at(i, j - 1)] > 0.0 {
                normal_y += 1.0;
            }
            if solid[grid.at(i, j + 1)] > 0.0 {
                normal_y -= 1.0;
            }

            if normal_x == 0.0 && normal_y == 0.0 {
                continue;
            }
            let len = (normal_x * normal_x + normal_y * normal_y).sqrt();
            if len > 0.0 {
                vel_x[ii] = normal_x / len * FRONTAL_SPEED;
                vel_y[ii] = normal_y / len * FRONTAL_SPEED;
                dye[ii] = 1.0;
            }
        }
    }
}
