//! Opaque handles to renderer-owned resources.
//!
//! The embedding application owns the actual shader programs and meshes; the
//! UI layer only stores handles and echoes them back inside draw commands. A
//! handle's integer value is an application-chosen slot index — this crate
//! never allocates or interprets it.
//!
//! The contract a renderer implements per command is the usual immediate one:
//! bind the shader, set its color/transform uniforms, bind the mesh (a unit
//! quad for every rectangle widget), draw, unbind.

/// Handle to an application-owned shader program.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShaderId(pub u32);

/// Handle to an application-owned mesh (typically a unit quad).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MeshId(pub u32);
