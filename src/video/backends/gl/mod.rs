//! The OpenGL implementation of the backend, built on the raw bindings of
//! the `gl` crate. Requires a core profile with vertex array objects, i.e.
//! OpenGL 3.0 or better.

use std::collections::HashMap;
use std::ffi::{CStr, CString};
use std::os::raw::c_void;
use std::ptr;

use gl;
use gl::types::*;
use smallvec::SmallVec;

use crate::errors::*;
use crate::video::assets::shader::ShaderHandle;
use crate::video::assets::texture::TextureHandle;
use crate::video::assets::vertex::{VertexAttribute, VertexFormat};

use super::{BufferKind, ResourceId, Visitor};

pub struct GLVisitor {
    binded_texture_index: usize,
    binded_textures: SmallVec<[Option<TextureHandle>; 8]>,
    uniforms: HashMap<(ResourceId, String), GLint>,
}

impl GLVisitor {
    /// Wraps the OpenGL context current on the calling thread.
    pub unsafe fn new() -> Result<Self> {
        let version = gl::GetString(gl::VERSION);
        if version.is_null() {
            return Err(Error::ContextLost);
        }

        info!(
            "GLVisitor ({}).",
            CStr::from_ptr(version as *const _).to_string_lossy()
        );

        Ok(GLVisitor {
            binded_texture_index: 0,
            binded_textures: SmallVec::new(),
            uniforms: HashMap::new(),
        })
    }

    unsafe fn uniform_location(&mut self, shader: ShaderHandle, name: &str) -> Result<GLint> {
        let k = (shader.0, name.to_owned());
        if let Some(&location) = self.uniforms.get(&k) {
            return Ok(location);
        }

        let c_name = CString::new(name.as_bytes())
            .map_err(|_| Error::Driver(format!("Uniform name {:?} contains NUL.", name)))?;
        let location = gl::GetUniformLocation(shader.0, c_name.as_ptr());
        check()?;

        self.uniforms.insert(k, location);
        Ok(location)
    }
}

impl Visitor for GLVisitor {
    fn is_context_lost(&self) -> bool {
        unsafe { gl::GetString(gl::VERSION).is_null() }
    }

    unsafe fn create_vertex_array(&mut self) -> Result<ResourceId> {
        let mut id = 0;
        gl::GenVertexArrays(1, &mut id);
        check()?;
        assert!(id != 0);
        Ok(id)
    }

    unsafe fn bind_vertex_array(&mut self, id: ResourceId) -> Result<()> {
        gl::BindVertexArray(id);
        check()
    }

    unsafe fn delete_vertex_array(&mut self, id: ResourceId) {
        gl::DeleteVertexArrays(1, &id);
        if let Err(err) = check() {
            warn!("Failed to delete vertex array {}: {}", id, err);
        }
    }

    unsafe fn create_buffer(&mut self, kind: BufferKind, data: &[u8]) -> Result<ResourceId> {
        let tp = match kind {
            BufferKind::Vertex => gl::ARRAY_BUFFER,
            BufferKind::Index => gl::ELEMENT_ARRAY_BUFFER,
        };

        let mut id = 0;
        gl::GenBuffers(1, &mut id);
        check()?;
        assert!(id != 0);

        gl::BindBuffer(tp, id);

        let value = if data.is_empty() {
            ptr::null()
        } else {
            &data[0] as *const u8 as *const c_void
        };

        gl::BufferData(tp, data.len() as isize, value, gl::STATIC_DRAW);
        check()?;
        Ok(id)
    }

    unsafe fn delete_buffer(&mut self, id: ResourceId) {
        gl::DeleteBuffers(1, &id);
        if let Err(err) = check() {
            warn!("Failed to delete buffer {}: {}", id, err);
        }
    }

    unsafe fn declare_attributes(
        &mut self,
        stride: usize,
        attributes: &[VertexAttribute],
    ) -> Result<()> {
        for v in attributes {
            let location = GLuint::from(v.location);
            gl::EnableVertexAttribArray(location);

            match v.format {
                VertexFormat::Float => gl::VertexAttribPointer(
                    location,
                    GLint::from(v.size),
                    gl::FLOAT,
                    gl::FALSE,
                    stride as GLsizei,
                    v.offset as *const c_void,
                ),
                VertexFormat::Int => gl::VertexAttribIPointer(
                    location,
                    GLint::from(v.size),
                    gl::INT,
                    stride as GLsizei,
                    v.offset as *const c_void,
                ),
            }
        }

        check()
    }

    unsafe fn bind_shader(&mut self, shader: ShaderHandle) -> Result<()> {
        gl::UseProgram(shader.0);
        check()
    }

    unsafe fn bind_uniform_i32(&mut self, shader: ShaderHandle, name: &str, v: i32) -> Result<()> {
        let location = self.uniform_location(shader, name)?;
        gl::Uniform1i(location, v);
        check()
    }

    unsafe fn bind_texture(&mut self, unit: usize, texture: TextureHandle) -> Result<()> {
        if self.binded_texture_index != unit {
            self.binded_texture_index = unit;
            gl::ActiveTexture(gl::TEXTURE0 + unit as GLuint);
        }

        if self.binded_textures.len() <= unit {
            self.binded_textures.resize(unit + 1, None);
        }

        if self.binded_textures[unit] != Some(texture) {
            self.binded_textures[unit] = Some(texture);
            gl::BindTexture(gl::TEXTURE_2D, texture.0);
        }

        check()
    }

    unsafe fn reset_active_texture(&mut self) -> Result<()> {
        if self.binded_texture_index != 0 {
            self.binded_texture_index = 0;
            gl::ActiveTexture(gl::TEXTURE0);
        }

        check()
    }

    unsafe fn draw_indexed_triangles(&mut self, len: usize) -> Result<u32> {
        gl::DrawElements(
            gl::TRIANGLES,
            len as GLsizei,
            gl::UNSIGNED_INT,
            ptr::null(),
        );

        check()?;
        Ok(len as u32 / 3)
    }
}

unsafe fn check() -> Result<()> {
    match gl::GetError() {
        gl::NO_ERROR => Ok(()),

        gl::INVALID_ENUM => Err(Error::Driver(
            "An unacceptable value is specified for an enumerated argument.".into(),
        )),

        gl::INVALID_VALUE => Err(Error::Driver("A numeric argument is out of range.".into())),

        gl::INVALID_OPERATION => Err(Error::Driver(
            "The specified operation is not allowed in the current state.".into(),
        )),

        gl::INVALID_FRAMEBUFFER_OPERATION => Err(Error::Driver(
            "The command is trying to render to or read from the framebuffer \
             while the currently bound framebuffer is not framebuffer complete."
                .into(),
        )),

        gl::OUT_OF_MEMORY => Err(Error::Driver(
            "There is not enough memory left to execute the command.".into(),
        )),

        _ => Err(Error::Driver("Oops, unknown OpenGL error.".into())),
    }
}
