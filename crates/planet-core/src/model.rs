//! Owned model data imported from binary glTF.
//!
//! Every triangle primitive in the default scene becomes one [`MeshData`]
//! with its node transform baked into `local`. The base-color texture is
//! taken from the materials met during traversal; later meshes overwrite
//! earlier ones, so the last textured material wins.

use crate::error::AssetError;
use glam::{Mat4, Vec2, Vec3};

#[derive(Clone, Debug)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
    /// Node-to-model transform.
    pub local: Mat4,
}

impl MeshData {
    /// Triangles by position; any triangle with an out-of-range index is
    /// skipped.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).filter_map(|tri| {
            let p = |i: u32| self.positions.get(i as usize).copied();
            Some([p(tri[0])?, p(tri[1])?, p(tri[2])?])
        })
    }

    /// Axis-aligned bounds of the vertices in node space.
    pub fn local_bounds(&self) -> Aabb {
        Aabb::from_points(self.positions.iter().copied())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        points.into_iter().fold(Self::EMPTY, |acc, p| Aabb {
            min: acc.min.min(p),
            max: acc.max.max(p),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }
}

/// Tightly packed RGBA8 pixels, row-major, top row first.
#[derive(Clone, Debug)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureData {
    pub fn white() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![255; 4],
        }
    }
}

#[derive(Clone, Debug)]
pub struct Model {
    pub meshes: Vec<MeshData>,
    pub texture: Option<TextureData>,
    /// Bounding-box center in model space; the scene renders the model
    /// translated by `-center`.
    pub center: Vec3,
}

impl Model {
    pub fn new(meshes: Vec<MeshData>, texture: Option<TextureData>) -> Self {
        let bounds = Aabb::from_points(meshes.iter().flat_map(|m| {
            let local = m.local;
            m.positions.iter().map(move |p| local.transform_point3(*p))
        }));
        let center = if bounds.is_empty() {
            Vec3::ZERO
        } else {
            bounds.center()
        };
        Self {
            meshes,
            texture,
            center,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(|m| m.indices.len() / 3).sum()
    }
}

/// Parse a binary glTF (or embedded JSON glTF) into a [`Model`].
pub fn load_glb(bytes: &[u8]) -> Result<Model, AssetError> {
    let (doc, buffers, images) = gltf::import_slice(bytes)?;
    let scene = doc
        .default_scene()
        .or_else(|| doc.scenes().next())
        .ok_or(AssetError::NoMeshes)?;

    let mut meshes = Vec::new();
    let mut texture_image = None::<usize>;
    for node in scene.nodes() {
        collect_node(&node, Mat4::IDENTITY, &buffers, &mut meshes, &mut texture_image)?;
    }
    if meshes.is_empty() {
        return Err(AssetError::NoMeshes);
    }

    let texture = match texture_image {
        Some(idx) => {
            let data = images.get(idx).ok_or(AssetError::MissingImage(idx))?;
            Some(to_rgba8(data)?)
        }
        None => None,
    };
    let model = Model::new(meshes, texture);
    log::info!(
        "[asset] meshes={} triangles={} textured={} center=({:.2},{:.2},{:.2})",
        model.meshes.len(),
        model.triangle_count(),
        model.texture.is_some(),
        model.center.x,
        model.center.y,
        model.center.z
    );
    Ok(model)
}

fn collect_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<MeshData>,
    texture_image: &mut Option<usize>,
) -> Result<(), AssetError> {
    let local = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        for prim in mesh.primitives() {
            if prim.mode() != gltf::mesh::Mode::Triangles {
                log::warn!("[asset] skipping non-triangle primitive {:?}", prim.mode());
                continue;
            }
            let reader = prim.reader(|buffer| buffers.get(buffer.index()).map(|d| d.0.as_slice()));
            let positions: Vec<Vec3> = match reader.read_positions() {
                Some(it) => it.map(Vec3::from).collect(),
                None => continue,
            };
            let indices: Vec<u32> = match reader.read_indices() {
                Some(it) => it.into_u32().collect(),
                None => (0..positions.len() as u32).collect(),
            };
            if let Some(&index) = indices.iter().find(|&&i| i as usize >= positions.len()) {
                return Err(AssetError::IndexOutOfRange {
                    index,
                    vertices: positions.len(),
                });
            }
            let normals = match reader.read_normals() {
                Some(it) => it.map(Vec3::from).collect(),
                None => smooth_normals(&positions, &indices),
            };
            let uvs = match reader.read_tex_coords(0) {
                Some(it) => it.into_f32().map(Vec2::from).collect(),
                None => vec![Vec2::ZERO; positions.len()],
            };
            if let Some(info) = prim
                .material()
                .pbr_metallic_roughness()
                .base_color_texture()
            {
                *texture_image = Some(info.texture().source().index());
            }
            out.push(MeshData {
                positions,
                normals,
                uvs,
                indices,
                local,
            });
        }
    }
    for child in node.children() {
        collect_node(&child, local, buffers, out, texture_image)?;
    }
    Ok(())
}

/// Area-weighted vertex normals for meshes that ship without them.
pub fn smooth_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        // cross product length is twice the triangle area
        let n = (positions[b] - positions[a]).cross(positions[c] - positions[a]);
        normals[a] += n;
        normals[b] += n;
        normals[c] += n;
    }
    normals
        .into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y))
        .collect()
}

/// Expand decoded glTF image data to RGBA8.
pub fn to_rgba8(data: &gltf::image::Data) -> Result<TextureData, AssetError> {
    use gltf::image::Format;
    let px = &data.pixels;
    let rgba = match data.format {
        Format::R8G8B8A8 => px.clone(),
        Format::R8G8B8 => px
            .chunks_exact(3)
            .flat_map(|c| [c[0], c[1], c[2], 255])
            .collect(),
        Format::R8G8 => px
            .chunks_exact(2)
            .flat_map(|c| [c[0], c[0], c[0], c[1]])
            .collect(),
        Format::R8 => px.iter().flat_map(|&l| [l, l, l, 255]).collect(),
        other => return Err(AssetError::UnsupportedImageFormat(other)),
    };
    Ok(TextureData {
        width: data.width,
        height: data.height,
        rgba,
    })
}
