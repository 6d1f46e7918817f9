use glam::{Mat4, Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Build a world-space ray from `eye` through an NDC point.
    ///
    /// The far-plane point is unprojected with `inv_view_proj`; the ray
    /// starts at the eye like a perspective camera pick.
    pub fn through_ndc(eye: Vec3, ndc: Vec2, inv_view_proj: Mat4) -> Self {
        let p_far = inv_view_proj * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far: Vec3 = p_far.truncate() / p_far.w;
        Self::new(eye, far - eye)
    }
}

/// Whether the ray touches a sphere at all, including from inside.
#[inline]
pub fn ray_hits_sphere(ray: &Ray, center: Vec3, radius: f32) -> bool {
    let oc = ray.origin - center;
    let c = oc.dot(oc) - radius * radius;
    if c <= 0.0 {
        return true;
    }
    let b = oc.dot(ray.direction);
    if b > 0.0 {
        return false;
    }
    b * b - c >= 0.0
}

/// Möller–Trumbore intersection, double-sided. Returns the ray parameter.
#[inline]
pub fn ray_triangle(ray: &Ray, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    const EPS: f32 = 1e-7;
    let e1 = b - a;
    let e2 = c - a;
    let p = ray.direction.cross(e2);
    let det = e1.dot(p);
    if det.abs() < EPS {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = ray.origin - a;
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(e1);
    let v = ray.direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = e2.dot(q) * inv_det;
    (t >= 0.0).then_some(t)
}
