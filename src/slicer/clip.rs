use glam::Vec3;

/// Clip a convex polygon against the half-space `z >= plane_z` (when
/// `keep_above`) or `z <= plane_z` (otherwise), Sutherland-Hodgman style.
/// `out` is cleared first; vertices exactly on the plane are kept.
fn clip_half_space(poly: &[Vec3], plane_z: f32, keep_above: bool, out: &mut Vec<Vec3>) {
    out.clear();
    if poly.is_empty() {
        return;
    }

    let inside = |v: Vec3| {
        if keep_above {
            v.z >= plane_z
        } else {
            v.z <= plane_z
        }
    };

    let mut prev = poly[poly.len() - 1];
    let mut prev_in = inside(prev);
    for &cur in poly {
        let cur_in = inside(cur);
        if cur_in != prev_in {
            // Edge crosses the plane: emit the intersection point.
            let t = (plane_z - prev.z) / (cur.z - prev.z);
            out.push(prev.lerp(cur, t));
        }
        if cur_in {
            out.push(cur);
        }
        prev = cur;
        prev_in = cur_in;
    }
}

/// Clip a triangle to the slab `[z_min, z_max]`, producing a convex
/// polygon of 3 to 5 vertices (empty when the triangle misses the slab).
/// `scratch` and `out` are caller-owned to keep the per-triangle hot path
/// allocation-free.
pub fn clip_triangle_to_slab(
    tri: [Vec3; 3],
    z_min: f32,
    z_max: f32,
    scratch: &mut Vec<Vec3>,
    out: &mut Vec<Vec3>,
) {
    clip_half_space(&tri, z_min, true, scratch);
    clip_half_space(scratch, z_max, false, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(a: [f32; 3], b: [f32; 3], c: [f32; 3]) -> [Vec3; 3] {
        [Vec3::from(a), Vec3::from(b), Vec3::from(c)]
    }

    fn clip(t: [Vec3; 3], z_min: f32, z_max: f32) -> Vec<Vec3> {
        let mut scratch = Vec::new();
        let mut out = Vec::new();
        clip_triangle_to_slab(t, z_min, z_max, &mut scratch, &mut out);
        out
    }

    #[test]
    fn test_fully_inside_passes_through() {
        let t = tri([0.0, 0.0, 0.0], [4.0, 0.0, 0.1], [0.0, 4.0, -0.1]);
        let poly = clip(t, -1.0, 1.0);
        assert_eq!(poly.len(), 3);
        assert_eq!(poly, t.to_vec());
    }

    #[test]
    fn test_fully_below_is_dropped() {
        let t = tri([0.0, 0.0, -5.0], [4.0, 0.0, -6.0], [0.0, 4.0, -7.0]);
        assert!(clip(t, -1.0, 1.0).is_empty());
    }

    #[test]
    fn test_fully_above_is_dropped() {
        let t = tri([0.0, 0.0, 5.0], [4.0, 0.0, 6.0], [0.0, 4.0, 7.0]);
        assert!(clip(t, -1.0, 1.0).is_empty());
    }

    #[test]
    fn test_one_vertex_inside_yields_triangle() {
        // One vertex below z_min, clipped against the lower plane only.
        let t = tri([0.0, 0.0, 0.0], [2.0, 0.0, -2.0], [0.0, 2.0, -2.0]);
        let poly = clip(t, -1.0, 1.0);
        assert_eq!(poly.len(), 3, "one surviving vertex plus two crossings");
        for v in &poly {
            assert!(v.z >= -1.0 - 1e-6 && v.z <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn test_crossing_both_planes_yields_pentagon() {
        // Vertex below, vertex inside, vertex above: 3-5 vertex polygon
        // with two clipped corners.
        let t = tri([0.0, 0.0, -2.0], [4.0, 0.0, 0.0], [0.0, 4.0, 2.0]);
        let poly = clip(t, -1.0, 1.0);
        assert!(
            (4..=5).contains(&poly.len()),
            "spanning triangle should clip to 4-5 vertices, got {}",
            poly.len()
        );
        for v in &poly {
            assert!(v.z >= -1.0 - 1e-6 && v.z <= 1.0 + 1e-6, "vertex escaped the slab: {v:?}");
        }
    }

    #[test]
    fn test_intersection_points_interpolate_xy() {
        // Edge from (0,0,-1) to (2,0,1) crosses z=0 at (1,0,0).
        let t = tri([0.0, 0.0, -1.0], [2.0, 0.0, 1.0], [0.0, 4.0, 1.0]);
        let poly = clip(t, 0.0, 2.0);
        assert!(
            poly.iter().any(|v| (v.x - 1.0).abs() < 1e-6 && v.y.abs() < 1e-6 && v.z.abs() < 1e-6),
            "expected interpolated crossing at (1,0,0), got {poly:?}"
        );
    }

    #[test]
    fn test_vertex_on_plane_is_kept() {
        let t = tri([0.0, 0.0, -1.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.5]);
        let poly = clip(t, -1.0, 1.0);
        assert_eq!(poly.len(), 3, "boundary vertices count as inside");
    }

    #[test]
    fn test_deterministic() {
        let t = tri([0.3, 0.7, -2.0], [4.1, 0.2, 0.4], [0.9, 4.4, 2.2]);
        assert_eq!(clip(t, -1.0, 1.0), clip(t, -1.0, 1.0));
    }
}
