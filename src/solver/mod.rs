mod boundary;
mod core;
pub mod diagnostics;
mod inflow;
mod obstacle;

pub use boundary::BoundaryKind;
pub use obstacle::naca_half_thickness;

use std::mem;

use crate::grid::Grid;
use boundary::set_bnd;
use inflow::{apply_frontal_source, apply_wind_tunnel};
use self::core::{advect, diffuse, project};

/// 2D incompressible wind-tunnel solver on a `W x H` grid.
///
/// Owns all field storage. One `step` runs the full diffuse / project /
/// advect / project cycle for velocity, then diffusion and advection for
/// the passive dye, then the active inflow. Configuration fields are
/// public and may be adjusted between steps.
pub struct FluidSolver {
    grid: Grid,

    vel_x: Vec<f32>,
    vel_x_prev: Vec<f32>,
    vel_y: Vec<f32>,
    vel_y_prev: Vec<f32>,
    pressure: Vec<f32>,
    divergence: Vec<f32>,
    dye: Vec<f32>,
    dye_prev: Vec<f32>,
    /// Occupancy mask: 1.0 = impenetrable solid, 0.0 = fluid.
    solid: Vec<f32>,

    /// Diffusion coefficient for velocity.
    pub viscosity: f32,
    /// Diffusion coefficient for dye.
    pub diffusion: f32,
    /// Left-wall injected x-velocity in wind-tunnel mode.
    pub inflow_velocity: f32,
    /// Gauss-Seidel sweeps for diffusion and projection.
    pub iterations: u32,
    /// false = wind-tunnel inlet, true = surface-normal emission.
    pub frontal_source: bool,
}

impl FluidSolver {
    /// Create a solver with zeroed fields and the built-in airfoil
    /// obstacle. Panics if `width` or `height` is below 4.
    pub fn new(width: usize, height: usize) -> Self {
        let grid = Grid::new(width, height);
        let mut solver = Self {
            grid,
            vel_x: grid.alloc(),
            vel_x_prev: grid.alloc(),
            vel_y: grid.alloc(),
            vel_y_prev: grid.alloc(),
            pressure: grid.alloc(),
            divergence: grid.alloc(),
            dye: grid.alloc(),
            dye_prev: grid.alloc(),
            solid: grid.alloc(),
            viscosity: 1.33e-4,
            diffusion: 0.0,
            inflow_velocity: 1.6,
            iterations: 40,
            frontal_source: false,
        };
        solver.init_obstacle();
        solver
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn vx(&self) -> &[f32] {
        &self.vel_x
    }

    pub fn vy(&self) -> &[f32] {
        &self.vel_y
    }

    pub fn pressure(&self) -> &[f32] {
        &self.pressure
    }

    pub fn dye(&self) -> &[f32] {
        &self.dye
    }

    pub fn solid(&self) -> &[f32] {
        &self.solid
    }

    /// Advance the simulation by `dt`.
    ///
    /// The swap choreography is load-bearing: diffusion writes into the
    /// current slot, the swap demotes it to previous, and advection reads
    /// it back into the fresh current slot. Dye deliberately advects with
    /// the post-projection velocity, not the previous-slot one.
    pub fn step(&mut self, dt: f32) {
        let grid = self.grid;

        mem::swap(&mut self.vel_x, &mut self.vel_x_prev);
        mem::swap(&mut self.vel_y, &mut self.vel_y_prev);

        diffuse(
            BoundaryKind::VelocityX,
            &mut self.vel_x,
            &self.vel_x_prev,
            &self.solid,
            self.viscosity,
            dt,
            self.iterations,
            grid,
        );
        diffuse(
            BoundaryKind::VelocityY,
            &mut self.vel_y,
            &self.vel_y_prev,
            &self.solid,
            self.viscosity,
            dt,
            self.iterations,
            grid,
        );

        project(
            &mut self.vel_x,
            &mut self.vel_y,
            &mut self.pressure,
            &mut self.divergence,
            &self.solid,
            self.iterations,
            grid,
        );

        mem::swap(&mut self.vel_x, &mut self.vel_x_prev);
        mem::swap(&mut self.vel_y, &mut self.vel_y_prev);

        advect(
            BoundaryKind::VelocityX,
            &mut self.vel_x,
            &self.vel_x_prev,
            &self.vel_x_prev,
            &self.vel_y_prev,
            &self.solid,
            dt,
            grid,
        );
        advect(
            BoundaryKind::VelocityY,
            &mut self.vel_y,
            &self.vel_y_prev,
            &self.vel_x_prev,
            &self.vel_y_prev,
            &self.solid,
            dt,
            grid,
        );

        project(
            &mut self.vel_x,
            &mut self.vel_y,
            &mut self.pressure,
            &mut self.divergence,
            &self.solid,
            self.iterations,
            grid,
        );

        mem::swap(&mut self.dye, &mut self.dye_prev);
        diffuse(
            BoundaryKind::Scalar,
            &mut self.dye,
            &self.dye_prev,
            &self.solid,
            self.diffusion,
            dt,
            self.iterations,
            grid,
        );

        mem::swap(&mut self.dye, &mut self.dye_prev);
        advect(
            BoundaryKind::Scalar,
            &mut self.dye,
            &self.dye_prev,
            &self.vel_x,
            &self.vel_y,
            &self.solid,
            dt,
            grid,
        );

        if self.frontal_source {
            apply_frontal_source(
                &mut self.vel_x,
                &mut self.vel_y,
                &mut self.dye,
                &self.solid,
                grid,
            );
        } else {
            apply_wind_tunnel(
                &mut self.vel_x,
                &mut self.vel_y,
                &mut self.dye,
                self.inflow_velocity,
                grid,
            );
        }
    }

    /// Restore the built-in analytic airfoil obstacle.
    pub fn init_obstacle(&mut self) {
        log::debug!(
            "rebuilding airfoil obstacle on {}x{} grid",
            self.grid.width(),
            self.grid.height()
        );
        self.solid = obstacle::airfoil_mask(self.grid);
        self.clear_fields_in_solid();
    }

    /// Replace the obstacle mask wholesale. A mask whose length differs
    /// from `width * height` is rejected as a no-op.
    pub fn set_obstacle_mask(&mut self, mask: &[f32]) {
        if mask.len() != self.grid.len() {
            log::warn!(
                "obstacle mask rejected: expected {} cells, got {}",
                self.grid.len(),
                mask.len()
            );
            return;
        }
        self.solid.copy_from_slice(mask);
        self.clear_fields_in_solid();
    }

    /// Zero velocity (both slots) and pressure in every solid cell, so
    /// the solid-cell invariants hold immediately after a mask change.
    /// Clearing only the current slot would leak stale velocity through
    /// the next buffer swap.
    fn clear_fields_in_solid(&mut self) {
        for (i, &s) in self.solid.iter().enumerate() {
            if s > 0.0 {
                self.vel_x[i] = 0.0;
                self.vel_x_prev[i] = 0.0;
                self.vel_y[i] = 0.0;
                self.vel_y_prev[i] = 0.0;
                self.pressure[i] = 0.0;
            }
        }
    }

    /// Apply the wall boundary rules to an arbitrary field of the same
    /// grid, dispatched on kind.
    pub fn apply_boundary(&self, kind: BoundaryKind, field: &mut [f32]) {
        set_bnd(kind, field, self.grid);
    }
}
