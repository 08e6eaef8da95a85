use serde::Deserialize;

use crate::solver::FluidSolver;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid: GridConfig,
    pub fluid: FluidConfig,
    pub slice: SliceConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FluidConfig {
    pub viscosity: f32,
    pub diffusion: f32,
    pub inflow_velocity: f32,
    pub iterations: u32,
    pub frontal_source: bool,
}

/// Default slab placement for hosts that re-slice a mesh into the solver.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SliceConfig {
    pub z: f32,
    pub thickness: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            fluid: FluidConfig::default(),
            slice: SliceConfig::default(),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { width: 256, height: 128 }
    }
}

impl Default for FluidConfig {
    fn default() -> Self {
        Self {
            viscosity: 1.33e-4,
            diffusion: 0.0,
            inflow_velocity: 1.6,
            iterations: 40,
            frontal_source: false,
        }
    }
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self { z: 0.0, thickness: 2.0 }
    }
}

impl Config {
    /// Build a solver sized and parameterized by this configuration.
    pub fn solver(&self) -> FluidSolver {
        let mut solver = FluidSolver::new(self.grid.width, self.grid.height);
        solver.viscosity = self.fluid.viscosity;
        solver.diffusion = self.fluid.diffusion;
        solver.inflow_velocity = self.fluid.inflow_velocity;
        solver.iterations = self.fluid.iterations;
        solver.frontal_source = self.fluid.frontal_source;
        solver
    }
}

/// Load `windtunnel.yaml` from the working directory, falling back to
/// defaults when the file is absent or malformed.
pub fn load() -> Config {
    let path = std::path::Path::new("windtunnel.yaml");
    if path.exists() {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(cfg) => cfg,
                Err(e) => {
                    log::warn!("failed to parse windtunnel.yaml: {e}; using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                log::warn!("failed to read windtunnel.yaml: {e}; using defaults");
                Config::default()
            }
        }
    } else {
        Config::default()
    }
}
