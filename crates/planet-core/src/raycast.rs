use crate::model::{Aabb, Model};
use crate::ray::{ray_hits_sphere, ray_triangle, Ray};
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    /// World-space intersection point.
    pub point: Vec3,
    /// Distance from the ray origin.
    pub distance: f32,
    pub mesh: usize,
}

/// Nearest intersection of `ray` with any mesh of `model`.
///
/// `model_world` places the model (centering offset and rotation) in the
/// world; each mesh's node transform is applied on top. Triangles are tested
/// in world space after a bounding-sphere early-out per mesh.
pub fn nearest_hit(model: &Model, model_world: Mat4, ray: &Ray) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for (i, mesh) in model.meshes.iter().enumerate() {
        let world = model_world * mesh.local;
        let (center, radius) = world_bounding_sphere(&mesh.local_bounds(), world);
        if !ray_hits_sphere(ray, center, radius) {
            continue;
        }
        for [a, b, c] in mesh.triangles() {
            let (a, b, c) = (
                world.transform_point3(a),
                world.transform_point3(b),
                world.transform_point3(c),
            );
            if let Some(t) = ray_triangle(ray, a, b, c) {
                match best {
                    Some(h) if t >= h.distance => {}
                    _ => {
                        best = Some(Hit {
                            point: ray.at(t),
                            distance: t,
                            mesh: i,
                        })
                    }
                }
            }
        }
    }
    best
}

fn world_bounding_sphere(bounds: &Aabb, world: Mat4) -> (Vec3, f32) {
    if bounds.is_empty() {
        return (world.transform_point3(Vec3::ZERO), 0.0);
    }
    let center = world.transform_point3(bounds.center());
    let radius = bounds
        .corners()
        .iter()
        .map(|p| world.transform_point3(*p).distance(center))
        .fold(0.0_f32, f32::max);
    (center, radius)
}
