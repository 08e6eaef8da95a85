use glam::Vec3;

/// A triangle in mesh-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    pub fn vertices(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }

    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite()
    }
}

/// A finite stream of triangles the slicer can consume.
///
/// The slicer iterates once per capture and owns nothing afterwards;
/// sources are free to generate triangles lazily.
pub trait MeshSource {
    fn triangles(&self) -> Box<dyn Iterator<Item = Triangle> + '_>;
}

impl MeshSource for [Triangle] {
    fn triangles(&self) -> Box<dyn Iterator<Item = Triangle> + '_> {
        Box::new(self.iter().copied())
    }
}

impl MeshSource for Vec<Triangle> {
    fn triangles(&self) -> Box<dyn Iterator<Item = Triangle> + '_> {
        Box::new(self.iter().copied())
    }
}

/// Twelve triangles forming an axis-aligned unit cube centered at the
/// origin, wound outward.
pub fn unit_cube() -> Vec<Triangle> {
    let p = |x: f32, y: f32, z: f32| Vec3::new(x, y, z);
    let h = 0.5;
    let corners = [
        p(-h, -h, -h),
        p(h, -h, -h),
        p(h, h, -h),
        p(-h, h, -h),
        p(-h, -h, h),
        p(h, -h, h),
        p(h, h, h),
        p(-h, h, h),
    ];
    // Each face as two triangles (indices into `corners`).
    const FACES: [[usize; 4]; 6] = [
        [0, 3, 2, 1], // -z
        [4, 5, 6, 7], // +z
        [0, 1, 5, 4], // -y
        [3, 7, 6, 2], // +y
        [0, 4, 7, 3], // -x
        [1, 2, 6, 5], // +x
    ];
    let mut tris = Vec::with_capacity(12);
    for f in FACES {
        tris.push(Triangle::new(corners[f[0]], corners[f[1]], corners[f[2]]));
        tris.push(Triangle::new(corners[f[0]], corners[f[2]], corners[f[3]]));
    }
    tris
}
