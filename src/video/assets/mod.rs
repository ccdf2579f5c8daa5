pub mod mesh;
pub mod shader;
pub mod texture;
pub mod vertex;

pub mod prelude {
    pub use super::mesh::Mesh;
    pub use super::shader::ShaderHandle;
    pub use super::texture::{Texture, TextureHandle, TextureKind};
    pub use super::vertex::{Vertex, VertexAttribute, VertexFormat, MAX_VERTEX_ATTRIBUTES};
}
