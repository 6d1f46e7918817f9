// Model construction, normal generation and glTF import.

mod support;

use glam::{Mat4, Vec3};
use planet_core::model::{smooth_normals, to_rgba8, Aabb};
use planet_core::{load_glb, AssetError, Model};
use support::{cube_mesh, BAD_INDEX_GLTF, TRIANGLE_GLTF};

#[test]
fn center_is_bounding_box_center_of_transformed_meshes() {
    let a = cube_mesh(1.0, Mat4::from_translation(Vec3::new(2.0, 0.0, 0.0)));
    let b = cube_mesh(1.0, Mat4::from_translation(Vec3::new(6.0, 2.0, 0.0)));
    let model = Model::new(vec![a, b], None);
    assert!((model.center - Vec3::new(4.0, 1.0, 0.0)).length() < 1e-5);
    assert_eq!(model.triangle_count(), 24);
}

#[test]
fn empty_model_is_centered_at_origin() {
    let model = Model::new(Vec::new(), None);
    assert_eq!(model.center, Vec3::ZERO);
}

#[test]
fn aabb_from_points() {
    let b = Aabb::from_points([Vec3::new(-1.0, 2.0, 0.0), Vec3::new(3.0, -2.0, 1.0)]);
    assert_eq!(b.min, Vec3::new(-1.0, -2.0, 0.0));
    assert_eq!(b.max, Vec3::new(3.0, 2.0, 1.0));
    assert_eq!(b.center(), Vec3::new(1.0, 0.0, 0.5));
    assert!(Aabb::from_points(std::iter::empty()).is_empty());
}

#[test]
fn smooth_normals_of_flat_triangle() {
    let p = [Vec3::ZERO, Vec3::X, Vec3::Y];
    let n = smooth_normals(&p, &[0, 1, 2]);
    for v in n {
        assert!((v - Vec3::Z).length() < 1e-6);
    }
}

#[test]
fn smooth_normals_fall_back_for_unused_vertices() {
    let p = [Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE];
    let n = smooth_normals(&p, &[0, 1, 2]);
    assert_eq!(n[3], Vec3::Y);
}

#[test]
fn cube_normals_point_outward() {
    let cube = cube_mesh(1.0, Mat4::IDENTITY);
    for (p, n) in cube.positions.iter().zip(&cube.normals) {
        assert!(p.dot(*n) > 0.0);
    }
}

#[test]
fn rgb_and_gray_images_expand_to_rgba() {
    use gltf::image::{Data, Format};
    let rgb = Data {
        pixels: vec![1, 2, 3, 4, 5, 6],
        format: Format::R8G8B8,
        width: 2,
        height: 1,
    };
    let t = to_rgba8(&rgb).unwrap();
    assert_eq!(t.rgba, vec![1, 2, 3, 255, 4, 5, 6, 255]);
    assert_eq!((t.width, t.height), (2, 1));

    let la = Data {
        pixels: vec![9, 100],
        format: Format::R8G8,
        width: 1,
        height: 1,
    };
    assert_eq!(to_rgba8(&la).unwrap().rgba, vec![9, 9, 9, 100]);
}

#[test]
fn wide_images_are_rejected() {
    use gltf::image::{Data, Format};
    let deep = Data {
        pixels: vec![0; 6],
        format: Format::R16G16B16,
        width: 1,
        height: 1,
    };
    assert!(matches!(
        to_rgba8(&deep),
        Err(AssetError::UnsupportedImageFormat(Format::R16G16B16))
    ));
}

#[test]
fn garbage_bytes_fail_to_import() {
    assert!(matches!(load_glb(b"definitely not gltf"), Err(AssetError::Gltf(_))));
}

#[test]
fn minimal_gltf_imports_with_generated_attributes() {
    let model = load_glb(TRIANGLE_GLTF.as_bytes()).unwrap();
    assert_eq!(model.meshes.len(), 1);
    assert!(model.texture.is_none());

    let mesh = &model.meshes[0];
    assert_eq!(mesh.indices, vec![0, 1, 2]);
    assert_eq!(mesh.uvs.len(), 3);
    for n in &mesh.normals {
        assert!((*n - Vec3::Z).length() < 1e-6);
    }
    assert!((model.center - Vec3::new(0.5, 0.5, 2.0)).length() < 1e-6);
}

#[test]
fn indices_past_the_vertex_buffer_are_rejected() {
    assert!(matches!(
        load_glb(BAD_INDEX_GLTF.as_bytes()),
        Err(AssetError::IndexOutOfRange {
            index: 7,
            vertices: 3
        })
    ));
}

#[test]
fn hand_built_mesh_skips_triangles_with_bad_indices() {
    let mut mesh = cube_mesh(1.0, Mat4::IDENTITY);
    mesh.indices.extend([0, 1, 99]);
    assert_eq!(mesh.triangles().count(), 12);
}
