use crate::grid::Grid;

/// Field kind for boundary condition dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    /// Zero-flux Neumann at all four walls (dye, divergence).
    Scalar,
    /// Horizontal velocity: flows through the left/right walls.
    VelocityX,
    /// Vertical velocity: no-slip at top/bottom walls.
    VelocityY,
    /// Pressure: Neumann everywhere except a Dirichlet 0 at the right wall.
    Pressure,
}

/// Apply domain-wall boundary conditions to `field`.
///
/// Top/bottom walls: negate the interior neighbor for `VelocityY`
/// (no-slip), copy it for every other kind. Left wall: copy the interior
/// neighbor. Right wall: fixed 0 for `Pressure` (the outflow sink that
/// makes the domain a wind tunnel instead of a closed box), copy
/// otherwise. Corners are overwritten last with the mean of their two
/// nearest edge cells.
pub fn set_bnd(kind: BoundaryKind, field: &mut [f32], grid: Grid) {
    let w = grid.width();
    let h = grid.height();

    // Top and bottom walls
    for i in 1..w - 1 {
        let (lo, hi) = (field[grid.at(i, 1)], field[grid.at(i, h - 2)]);
        match kind {
            BoundaryKind::VelocityY => {
                field[grid.at(i, 0)] = -lo;
                field[grid.at(i, h - 1)] = -hi;
            }
            _ => {
                field[grid.at(i, 0)] = lo;
                field[grid.at(i, h - 1)] = hi;
            }
        }
    }

    // Left and right walls
    for j in 1..h - 1 {
        field[grid.at(0, j)] = field[grid.at(1, j)];
        field[grid.at(w - 1, j)] = match kind {
            BoundaryKind::Pressure => 0.0,
            _ => field[grid.at(w - 2, j)],
        };
    }

    // Corners: mean of the two adjacent edge cells
    field[grid.at(0, 0)] = 0.5 * (field[grid.at(1, 0)] + field[grid.at(0, 1)]);
    field[grid.at(0, h - 1)] = 0.5 * (field[grid.at(1, h - 1)] + field[grid.at(0, h - 2)]);
    field[grid.at(w - 1, 0)] = 0.5 * (field[grid.at(w - 2, 0)] + field[grid.at(w - 1, 1)]);
    field[grid.at(w - 1, h - 1)] =
        0.5 * (field[grid.at(w - 2, h - 1)] + field[grid.at(w - 1, h - 2)]);
}
