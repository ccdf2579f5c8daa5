//! Immutable vertex and index data behind a driver-allocated handle triple
//! whose lifetime is tied to the mesh that owns it.

use std::mem;

use crate::errors::*;
use crate::video::backends::{BufferKind, ResourceId, UNALLOCATED};
use crate::video::Context;

use super::shader::ShaderHandle;
use super::texture::{Texture, TextureKind};
use super::vertex::{as_bytes, Vertex};

/// A triangulated surface and the GPU-resident drawable derived from it.
///
/// A mesh owns three driver handles: the vertex array object, the vertex
/// buffer and the element buffer. The triple is allocated and released as a
/// unit, and at most one live triple exists per mesh at any time.
///
/// `Mesh` is deliberately neither `Copy` nor `Clone` -- a second owner of
/// the same triple would release it twice. Transferring ownership is either
/// a plain Rust move or an explicit [`take`], which leaves the source empty
/// and unallocated so that dropping it releases nothing.
///
/// [`take`]: struct.Mesh.html#method.take
pub struct Mesh {
    ctx: Context,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub textures: Vec<Texture>,
    vao: ResourceId,
    vbo: ResourceId,
    ibo: ResourceId,
}

impl Mesh {
    /// Creates an empty, unallocated mesh against the given context.
    pub fn new(ctx: &Context) -> Self {
        Mesh {
            ctx: ctx.clone(),
            vertices: Vec::new(),
            indices: Vec::new(),
            textures: Vec::new(),
            vao: UNALLOCATED,
            vbo: UNALLOCATED,
            ibo: UNALLOCATED,
        }
    }

    /// Takes ownership of the given data and immediately attempts to set up
    /// the GPU buffers. With empty vertex or index data the mesh simply
    /// stays unallocated; only a later [`draw`] reports that as an error.
    ///
    /// [`draw`]: struct.Mesh.html#method.draw
    pub fn with_data(
        ctx: &Context,
        vertices: Vec<Vertex>,
        indices: Vec<u32>,
        textures: Vec<Texture>,
    ) -> Self {
        let mut mesh = Mesh::new(ctx);
        mesh.vertices = vertices;
        mesh.indices = indices;
        mesh.textures = textures;

        if let Err(err) = mesh.setup_buffers() {
            warn!("Mesh buffers are not ready: {}", err);
        }

        mesh
    }

    /// True if the handle triple is currently allocated.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.vao != UNALLOCATED
    }

    /// Releases any existing allocation, then uploads the vertex and index
    /// data and declares the fixed attribute bindings at slots 0-7.
    ///
    /// Errors with [`Error::EmptyBuffers`] when there is nothing to upload,
    /// or with [`Error::Driver`] when the graphics driver objects. On any
    /// failure the triple is rolled back to fully unallocated.
    ///
    /// [`Error::EmptyBuffers`]: ../../../errors/enum.Error.html
    /// [`Error::Driver`]: ../../../errors/enum.Error.html
    pub fn setup_buffers(&mut self) -> Result<()> {
        self.cleanup();

        if self.vertices.is_empty() || self.indices.is_empty() {
            return Err(Error::EmptyBuffers);
        }

        let result = self.alloc_buffers();
        if result.is_err() {
            self.cleanup();
        }

        result
    }

    fn alloc_buffers(&mut self) -> Result<()> {
        let mut visitor = self.ctx.visitor_mut();

        unsafe {
            self.vao = visitor.create_vertex_array()?;
            visitor.bind_vertex_array(self.vao)?;

            self.vbo = visitor.create_buffer(BufferKind::Vertex, as_bytes(&self.vertices))?;
            self.ibo = visitor.create_buffer(BufferKind::Index, as_bytes(&self.indices))?;

            visitor.declare_attributes(Vertex::stride(), &Vertex::attributes())?;
            visitor.bind_vertex_array(UNALLOCATED)?;
        }

        Ok(())
    }

    /// Activates the shader, binds every texture to a sequential unit
    /// feeding its kind-derived sampler uniform, then issues one indexed
    /// triangle draw over the whole index sequence. Returns the number of
    /// triangles assembled.
    ///
    /// A failed draw skips the frame's draw and nothing else; the caller is
    /// free to carry on.
    pub fn draw(&self, shader: ShaderHandle) -> Result<u32> {
        if !self.is_allocated() {
            return Err(Error::Uninitialized);
        }

        if self.vertices.is_empty() || self.indices.is_empty() {
            return Err(Error::EmptyBuffers);
        }

        let mut visitor = self.ctx.visitor_mut();
        if visitor.is_context_lost() {
            return Err(Error::ContextLost);
        }

        unsafe {
            visitor.bind_shader(shader)?;

            // One ordinal counter per semantic kind; the first diffuse map
            // becomes `texture_diffuse1` no matter where it sits in the list.
            let mut ordinals = [0usize; TextureKind::COUNT];
            for (unit, texture) in self.textures.iter().enumerate() {
                ordinals[texture.kind as usize] += 1;
                let name = texture.kind.uniform(ordinals[texture.kind as usize]);

                visitor.bind_uniform_i32(shader, &name, unit as i32)?;
                visitor.bind_texture(unit, texture.id)?;
            }

            visitor.bind_vertex_array(self.vao)?;
            let triangles = visitor.draw_indexed_triangles(self.indices.len())?;
            visitor.bind_vertex_array(UNALLOCATED)?;
            visitor.reset_active_texture()?;

            Ok(triangles)
        }
    }

    /// Empties the vertex and index data and releases the GPU allocation.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.cleanup();
    }

    /// Transfers the data and the driver handle triple into a new mesh,
    /// leaving `self` empty and unallocated.
    pub fn take(&mut self) -> Mesh {
        Mesh {
            ctx: self.ctx.clone(),
            vertices: mem::replace(&mut self.vertices, Vec::new()),
            indices: mem::replace(&mut self.indices, Vec::new()),
            textures: mem::replace(&mut self.textures, Vec::new()),
            vao: mem::replace(&mut self.vao, UNALLOCATED),
            vbo: mem::replace(&mut self.vbo, UNALLOCATED),
            ibo: mem::replace(&mut self.ibo, UNALLOCATED),
        }
    }

    // Element buffer first, vertex buffer second, array object last.
    fn cleanup(&mut self) {
        let mut visitor = self.ctx.visitor_mut();

        unsafe {
            if self.ibo != UNALLOCATED {
                visitor.delete_buffer(self.ibo);
                self.ibo = UNALLOCATED;
            }

            if self.vbo != UNALLOCATED {
                visitor.delete_buffer(self.vbo);
                self.vbo = UNALLOCATED;
            }

            if self.vao != UNALLOCATED {
                visitor.delete_vertex_array(self.vao);
                self.vao = UNALLOCATED;
            }
        }
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        self.cleanup();
    }
}
