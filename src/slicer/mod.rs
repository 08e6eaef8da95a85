mod clip;
mod raster;

use glam::{Mat4, Vec2, Vec3};

use crate::grid::Grid;
use crate::mesh::MeshSource;
use clip::clip_triangle_to_slab;
use raster::{fill_polygon, toggle_ray_crossings};

/// Reduces a triangle mesh to a 2D occupancy mask by intersecting it with
/// a z-slab and rasterizing the result onto the solver grid.
///
/// World x maps to cell columns over `[0, W)` and world y to cell rows
/// over `[0, H)` (the orthographic projection of the reference renderer);
/// geometry outside that range is ignored. The slicer owns only its grid
/// size and reusable buffers; triangles are consumed per capture.
///
/// A cell is marked solid when the surface passes through the slab over
/// its center (the slab-clipped triangle projection covers it), or when
/// its center column lies inside the closed solid at the slab midplane
/// (upward-ray parity). The second rule is what keeps solid objects
/// closed after slicing: an axis-aligned box yields its filled
/// cross-section, not just the outline of its walls.
pub struct Slicer {
    grid: Grid,
    mask: Vec<f32>,
    parity: Vec<u8>,
    clip_scratch: Vec<Vec3>,
    poly: Vec<Vec3>,
    proj: Vec<Vec2>,
    crossings: Vec<f32>,
}

impl Slicer {
    /// Panics if `width` or `height` is below 4 (the solver grid minimum).
    pub fn new(width: usize, height: usize) -> Self {
        let grid = Grid::new(width, height);
        Self {
            grid,
            mask: grid.alloc(),
            parity: vec![0; grid.len()],
            clip_scratch: Vec::with_capacity(5),
            poly: Vec::with_capacity(5),
            proj: Vec::with_capacity(5),
            crossings: Vec::with_capacity(8),
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Rasterize the cross-section of `mesh` (transformed by `model`)
    /// with the slab `[z - thickness/2, z + thickness/2]`.
    ///
    /// Returns a `width * height` mask of 0.0/1.0 values: a cell is solid
    /// when a slab-clipped triangle covers its center, or when the parity
    /// rule places the center inside the mesh at the slab midplane. Never
    /// fails; an empty mesh, degenerate triangles, and non-finite
    /// vertices all simply contribute nothing.
    pub fn capture<M: MeshSource + ?Sized>(
        &mut self,
        mesh: &M,
        model: Mat4,
        z: f32,
        thickness: f32,
    ) -> Vec<f32> {
        let half = 0.5 * thickness.max(0.0);
        let z_min = z - half;
        let z_max = z + half;

        self.mask.fill(0.0);
        self.parity.fill(0);
        let mut triangles = 0usize;

        for tri in mesh.triangles() {
            triangles += 1;
            let a = model.transform_point3(tri.a);
            let b = model.transform_point3(tri.b);
            let c = model.transform_point3(tri.c);
            if !(a.is_finite() && b.is_finite() && c.is_finite()) {
                continue;
            }

            // Interior rule: parity of surface crossings above the slab
            // midplane, accumulated over the whole (unclipped) surface.
            toggle_ray_crossings([a, b, c], z, &mut self.parity, self.grid, &mut self.crossings);

            // Surface rule: the part of the triangle inside the slab,
            // projected and filled.
            clip_triangle_to_slab([a, b, c], z_min, z_max, &mut self.clip_scratch, &mut self.poly);
            if self.poly.len() < 3 {
                continue;
            }
            self.proj.clear();
            self.proj.extend(self.poly.iter().map(|v| Vec2::new(v.x, v.y)));
            fill_polygon(&self.proj, &mut self.mask, self.grid, &mut self.crossings);
        }

        for (m, &p) in self.mask.iter_mut().zip(&self.parity) {
            if p & 1 == 1 {
                *m = 1.0;
            }
        }

        log::debug!(
            "sliced {} triangles at z={} (thickness {}) into {} solid cells",
            triangles,
            z,
            thickness,
            self.mask.iter().filter(|&&m| m > 0.0).count()
        );
        self.mask.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{unit_cube, Triangle};

    const W: usize = 64;
    const H: usize = 48;

    fn cube_at_center(scale: f32) -> (Vec<Triangle>, Mat4) {
        let model = Mat4::from_translation(Vec3::new(W as f32 / 2.0, H as f32 / 2.0, 0.0))
            * Mat4::from_scale(Vec3::splat(scale));
        (unit_cube(), model)
    }

    #[test]
    fn test_cube_slices_to_filled_rectangle() {
        let mut slicer = Slicer::new(W, H);
        let (cube, model) = cube_at_center(10.0);
        let mask = slicer.capture(&cube, model, 0.0, 2.0);
        assert_eq!(mask.len(), W * H);

        let g = Grid::new(W, H);
        let (cx, cy) = (W as f32 / 2.0, H as f32 / 2.0);
        for j in 0..H {
            for i in 0..W {
                let x = i as f32 + 0.5;
                let y = j as f32 + 0.5;
                let inside = (cx - 5.0..cx + 5.0).contains(&x) && (cy - 5.0..cy + 5.0).contains(&y);
                assert_eq!(
                    mask[g.at(i, j)],
                    if inside { 1.0 } else { 0.0 },
                    "cell ({i},{j}) center ({x},{y})"
                );
            }
        }
    }

    #[test]
    fn test_cube_outside_slab_yields_empty_mask() {
        let mut slicer = Slicer::new(W, H);
        let (cube, model) = cube_at_center(10.0);
        let mask = slicer.capture(&cube, model, 100.0, 2.0);
        assert!(mask.iter().all(|&m| m == 0.0), "slab misses the cube entirely");
    }

    #[test]
    fn test_mask_is_binary() {
        let mut slicer = Slicer::new(W, H);
        let (cube, model) = cube_at_center(13.7);
        let mask = slicer.capture(&cube, model, 0.3, 1.1);
        assert!(mask.iter().all(|&m| m == 0.0 || m == 1.0));
    }

    #[test]
    fn test_capture_is_deterministic() {
        let mut slicer = Slicer::new(W, H);
        let (cube, model) = cube_at_center(9.3);
        let a = slicer.capture(&cube, model, 0.1, 2.3);
        let b = slicer.capture(&cube, model, 0.1, 2.3);
        assert_eq!(a, b, "identical inputs must produce identical masks");
    }

    #[test]
    fn test_empty_mesh_yields_zero_mask() {
        let mut slicer = Slicer::new(W, H);
        let empty: Vec<Triangle> = Vec::new();
        let mask = slicer.capture(&empty, Mat4::IDENTITY, 0.0, 2.0);
        assert_eq!(mask.len(), W * H);
        assert!(mask.iter().all(|&m| m == 0.0));
    }

    #[test]
    fn test_reused_buffer_does_not_leak_previous_capture() {
        let mut slicer = Slicer::new(W, H);
        let (cube, model) = cube_at_center(10.0);
        let first = slicer.capture(&cube, model, 0.0, 2.0);
        assert!(first.iter().any(|&m| m == 1.0));
        let second = slicer.capture(&cube, model, 100.0, 2.0);
        assert!(second.iter().all(|&m| m == 0.0), "previous capture must not bleed through");
    }

    #[test]
    fn test_non_finite_triangles_are_skipped() {
        let mut slicer = Slicer::new(W, H);
        let mut mesh = vec![Triangle::new(
            Vec3::new(f32::NAN, 0.0, 0.0),
            Vec3::new(40.0, 0.0, 0.0),
            Vec3::new(0.0, 40.0, 0.0),
        )];
        let mask = slicer.capture(&mesh, Mat4::IDENTITY, 0.0, 2.0);
        assert!(mask.iter().all(|&m| m == 0.0), "NaN triangle must contribute nothing");

        // A finite triangle alongside it still rasterizes.
        mesh.push(Triangle::new(
            Vec3::new(10.0, 10.0, 0.0),
            Vec3::new(30.0, 10.0, 0.0),
            Vec3::new(10.0, 30.0, 0.0),
        ));
        let mask = slicer.capture(&mesh, Mat4::IDENTITY, 0.0, 2.0);
        assert!(mask.iter().any(|&m| m == 1.0));
    }

    #[test]
    fn test_flat_triangle_in_plane_rasterizes() {
        // A triangle lying exactly in the slicing plane is inside the slab.
        let mut slicer = Slicer::new(W, H);
        let mesh = vec![Triangle::new(
            Vec3::new(8.0, 8.0, 0.0),
            Vec3::new(24.0, 8.0, 0.0),
            Vec3::new(8.0, 24.0, 0.0),
        )];
        let mask = slicer.capture(&mesh, Mat4::IDENTITY, 0.0, 2.0);
        let g = Grid::new(W, H);
        assert_eq!(mask[g.at(10, 10)], 1.0);
        assert_eq!(mask[g.at(30, 30)], 0.0);
    }

    #[test]
    fn test_thin_slab_catches_only_spanning_geometry() {
        // Cube of height 10 at z=0: a slab at z=4.9 still cuts it, a slab
        // at z=5.1 misses.
        let mut slicer = Slicer::new(W, H);
        let (cube, model) = cube_at_center(10.0);
        let hit = slicer.capture(&cube, model, 4.9, 0.1);
        assert!(hit.iter().any(|&m| m == 1.0));
        let miss = slicer.capture(&cube, model, 5.1, 0.1);
        assert!(miss.iter().all(|&m| m == 0.0));
    }

    #[test]
    fn test_rotated_model_matrix_applies() {
        // Rotate the stretched cube 90 degrees about z: its long axis
        // swings from x onto y.
        let mut slicer = Slicer::new(W, H);
        let cube = unit_cube();
        let center = Vec3::new(W as f32 / 2.0, H as f32 / 2.0, 0.0);
        let stretch = Mat4::from_scale(Vec3::new(30.0, 4.0, 4.0));
        let g = Grid::new(W, H);

        let plain = slicer.capture(&cube, Mat4::from_translation(center) * stretch, 0.0, 2.0);
        assert_eq!(plain[g.at(W / 2 + 12, H / 2)], 1.0, "long axis along x");
        assert_eq!(plain[g.at(W / 2, H / 2 + 12)], 0.0);

        let rotated = Mat4::from_translation(center)
            * Mat4::from_rotation_z(std::f32::consts::FRAC_PI_2)
            * stretch;
        let turned = slicer.capture(&cube, rotated, 0.0, 2.0);
        assert_eq!(turned[g.at(W / 2, H / 2 + 12)], 1.0, "long axis along y after rotation");
        assert_eq!(turned[g.at(W / 2 + 12, H / 2)], 0.0);
    }
}
