//! 2D incompressible wind-tunnel simulation with mesh slicing.
//!
//! The crate pairs a grid-based Eulerian fluid solver (velocity, pressure,
//! passive dye, solid obstacle mask) with a deterministic CPU slicer that
//! reduces a 3D triangle mesh to an occupancy mask on the same grid. Hosts
//! drive the solver step by step and read field snapshots; windowing, GPU
//! upload, and mesh import stay outside the crate.
//!
//! # Example
//!
//! ```
//! use windtunnel::{FluidSolver, Slicer};
//! use glam::{Mat4, Vec3};
//!
//! let mut solver = FluidSolver::new(64, 32);
//!
//! // Replace the built-in airfoil with a sliced box cross-section.
//! let mesh = windtunnel::mesh::unit_cube();
//! let model = Mat4::from_translation(Vec3::new(32.0, 16.0, 0.0))
//!     * Mat4::from_scale(Vec3::splat(8.0));
//! let mut slicer = Slicer::new(64, 32);
//! let mask = slicer.capture(&mesh, model, 0.0, 2.0);
//! solver.set_obstacle_mask(&mask);
//!
//! for _ in 0..10 {
//!     solver.step(1.0 / 60.0);
//! }
//! assert_eq!(solver.dye().len(), 64 * 32);
//! ```

pub mod config;
pub mod grid;
pub mod mesh;
pub mod slicer;
pub mod solver;

pub use config::Config;
pub use grid::Grid;
pub use mesh::{MeshSource, Triangle};
pub use slicer::Slicer;
pub use solver::{diagnostics, BoundaryKind, FluidSolver};
