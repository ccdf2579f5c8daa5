//! The backend of the renderer, responsible for only one thing: talking to
//! a low-level video API on behalf of mesh objects.

pub mod gl;
pub mod headless;

use crate::errors::*;

use super::assets::shader::ShaderHandle;
use super::assets::texture::TextureHandle;
use super::assets::vertex::VertexAttribute;

/// Identifier of a driver-allocated resource.
pub type ResourceId = u32;

/// The "no resource" sentinel the driver never hands out.
pub const UNALLOCATED: ResourceId = 0;

/// Which target a raw buffer allocation is bound to.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BufferKind {
    Vertex,
    Index,
}

/// The capability set meshes require from their environment.
///
/// Every method that reaches the driver is `unsafe`: the caller guarantees
/// that the matching graphics context is current on this thread for the
/// whole call.
pub trait Visitor {
    /// True if there is no live graphics context on the calling thread.
    fn is_context_lost(&self) -> bool;

    /// Allocates one array-object handle. Never returns [`UNALLOCATED`].
    ///
    /// [`UNALLOCATED`]: constant.UNALLOCATED.html
    unsafe fn create_vertex_array(&mut self) -> Result<ResourceId>;

    /// Binds the array object as the current target; [`UNALLOCATED`] unbinds.
    ///
    /// [`UNALLOCATED`]: constant.UNALLOCATED.html
    unsafe fn bind_vertex_array(&mut self, id: ResourceId) -> Result<()>;

    unsafe fn delete_vertex_array(&mut self, id: ResourceId);

    /// Allocates a buffer of the given kind, uploads `data` as immutable
    /// static content and leaves the buffer bound to its target.
    unsafe fn create_buffer(&mut self, kind: BufferKind, data: &[u8]) -> Result<ResourceId>;

    unsafe fn delete_buffer(&mut self, id: ResourceId);

    /// Declares the vertex attribute bindings of the currently bound array
    /// object against the currently bound vertex buffer.
    unsafe fn declare_attributes(
        &mut self,
        stride: usize,
        attributes: &[VertexAttribute],
    ) -> Result<()>;

    unsafe fn bind_shader(&mut self, shader: ShaderHandle) -> Result<()>;

    /// Sets an integer uniform on the shader by name. The shader must have
    /// been activated with [`bind_shader`] first.
    ///
    /// [`bind_shader`]: trait.Visitor.html#tymethod.bind_shader
    unsafe fn bind_uniform_i32(&mut self, shader: ShaderHandle, name: &str, v: i32) -> Result<()>;

    /// Binds a texture to the given texture unit.
    unsafe fn bind_texture(&mut self, unit: usize, texture: TextureHandle) -> Result<()>;

    /// Restores unit 0 as the active texture unit.
    unsafe fn reset_active_texture(&mut self) -> Result<()>;

    /// Issues one indexed triangle draw over `len` indices of the currently
    /// bound array object. Returns the number of primitives assembled.
    unsafe fn draw_indexed_triangles(&mut self, len: usize) -> Result<u32>;
}
