use crate::scene::PartRole;
use thiserror::Error;

/// Errors raised while decoding and validating a base-frame asset.
///
/// Role validation happens once at load time; a mismatch between the asset's
/// mesh names and the expected roles is a hard, reported error rather than a
/// lookup failure deep inside an updater.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("asset has no mesh named {name:?} for the {role:?} part")]
    MissingRole { role: PartRole, name: &'static str },

    #[error("mesh {0:?} has no vertex positions")]
    EmptyMesh(String),

    #[error("asset contains no usable meshes")]
    NoMeshes,

    #[error("failed to decode glb: {0}")]
    Decode(#[from] gltf::Error),
}
