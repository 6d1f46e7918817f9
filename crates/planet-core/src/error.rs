use thiserror::Error;

/// Failures while turning a `.glb` asset into a [`crate::Model`].
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("glTF import failed: {0}")]
    Gltf(#[from] gltf::Error),
    #[error("glTF contains no triangle meshes")]
    NoMeshes,
    #[error("unsupported texture format {0:?}")]
    UnsupportedImageFormat(gltf::image::Format),
    #[error("vertex index {index} out of range for {vertices} vertices")]
    IndexOutOfRange { index: u32, vertices: usize },
    #[error("texture index {0} out of range")]
    MissingImage(usize),
}
