//! A backend that talks to no GPU at all. It hands out fake non-zero
//! identifiers and records every call into a shared [`Trace`], which is how
//! the test-suite observes resource lifecycles without a windowing system.
//!
//! [`Trace`]: struct.Trace.html

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::*;
use crate::video::assets::shader::ShaderHandle;
use crate::video::assets::texture::TextureHandle;
use crate::video::assets::vertex::VertexAttribute;

use super::{BufferKind, ResourceId, Visitor, UNALLOCATED};

/// Everything the headless backend has been asked to do so far.
#[derive(Debug, Default)]
pub struct Trace {
    /// Identifiers currently allocated and not yet released.
    pub live: Vec<ResourceId>,
    /// Identifiers released so far, in release order.
    pub released: Vec<ResourceId>,
    /// Releases of identifiers that were not live at the time.
    pub dangling_releases: usize,
    /// Index count of every draw issued.
    pub draws: Vec<usize>,
    /// Every integer uniform bound, in order.
    pub uniforms: Vec<(String, i32)>,
    /// Every texture bound, as (unit, handle).
    pub texture_binds: Vec<(usize, TextureHandle)>,
    /// Every shader activation.
    pub shader_binds: Vec<ShaderHandle>,
    /// How many times the default active texture unit was restored.
    pub active_texture_resets: usize,
    /// The array object currently bound, if any.
    pub binded_vertex_array: Option<ResourceId>,
}

pub struct HeadlessVisitor {
    next: ResourceId,
    lost: bool,
    allocations_left: Option<usize>,
    trace: Rc<RefCell<Trace>>,
}

impl HeadlessVisitor {
    pub fn new() -> Self {
        HeadlessVisitor {
            next: 1,
            lost: false,
            allocations_left: None,
            trace: Rc::new(RefCell::new(Trace::default())),
        }
    }

    /// A variant that reports its graphics context as lost. Allocations
    /// still succeed, mirroring a context torn down after setup.
    pub fn lost() -> Self {
        let mut visitor = HeadlessVisitor::new();
        visitor.lost = true;
        visitor
    }

    /// A variant whose allocations fail after the first `n`, mirroring a
    /// driver running out of memory mid-setup.
    pub fn failing_after(n: usize) -> Self {
        let mut visitor = HeadlessVisitor::new();
        visitor.allocations_left = Some(n);
        visitor
    }

    pub fn trace(&self) -> Rc<RefCell<Trace>> {
        Rc::clone(&self.trace)
    }

    fn alloc(&mut self) -> Result<ResourceId> {
        if let Some(left) = self.allocations_left.as_mut() {
            if *left == 0 {
                return Err(Error::Driver("Out of memory.".to_owned()));
            }
            *left -= 1;
        }

        let id = self.next;
        self.next += 1;
        self.trace.borrow_mut().live.push(id);
        Ok(id)
    }

    fn release(&mut self, id: ResourceId) {
        let mut trace = self.trace.borrow_mut();
        match trace.live.iter().position(|&v| v == id) {
            Some(index) => {
                trace.live.remove(index);
                trace.released.push(id);
            }
            None => trace.dangling_releases += 1,
        }
    }
}

impl Default for HeadlessVisitor {
    fn default() -> Self {
        HeadlessVisitor::new()
    }
}

impl Visitor for HeadlessVisitor {
    fn is_context_lost(&self) -> bool {
        self.lost
    }

    unsafe fn create_vertex_array(&mut self) -> Result<ResourceId> {
        self.alloc()
    }

    unsafe fn bind_vertex_array(&mut self, id: ResourceId) -> Result<()> {
        self.trace.borrow_mut().binded_vertex_array = if id == UNALLOCATED { None } else { Some(id) };
        Ok(())
    }

    unsafe fn delete_vertex_array(&mut self, id: ResourceId) {
        self.release(id);
    }

    unsafe fn create_buffer(&mut self, _: BufferKind, _: &[u8]) -> Result<ResourceId> {
        self.alloc()
    }

    unsafe fn delete_buffer(&mut self, id: ResourceId) {
        self.release(id);
    }

    unsafe fn declare_attributes(&mut self, _: usize, _: &[VertexAttribute]) -> Result<()> {
        Ok(())
    }

    unsafe fn bind_shader(&mut self, shader: ShaderHandle) -> Result<()> {
        self.trace.borrow_mut().shader_binds.push(shader);
        Ok(())
    }

    unsafe fn bind_uniform_i32(&mut self, _: ShaderHandle, name: &str, v: i32) -> Result<()> {
        self.trace.borrow_mut().uniforms.push((name.to_owned(), v));
        Ok(())
    }

    unsafe fn bind_texture(&mut self, unit: usize, texture: TextureHandle) -> Result<()> {
        self.trace.borrow_mut().texture_binds.push((unit, texture));
        Ok(())
    }

    unsafe fn reset_active_texture(&mut self) -> Result<()> {
        self.trace.borrow_mut().active_texture_resets += 1;
        Ok(())
    }

    unsafe fn draw_indexed_triangles(&mut self, len: usize) -> Result<u32> {
        self.trace.borrow_mut().draws.push(len);
        Ok(len as u32 / 3)
    }
}
