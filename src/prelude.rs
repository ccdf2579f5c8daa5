//! The most commonly used types, re-exported in one place.

pub use crate::errors::{Error, Result};
pub use crate::scene::Geometry;
pub use crate::video::assets::mesh::Mesh;
pub use crate::video::assets::shader::ShaderHandle;
pub use crate::video::assets::texture::{Texture, TextureHandle, TextureKind};
pub use crate::video::assets::vertex::Vertex;
pub use crate::video::Context;
