//! Pairs a mesh with a position/scale/rotation triple and a lazily cached
//! model matrix.

use crate::errors::*;
use crate::math::{Deg, Matrix4, SquareMatrix, Vector3};
use crate::video::assets::mesh::Mesh;
use crate::video::assets::shader::ShaderHandle;

/// A mesh placed in the world.
///
/// The model matrix is derived on demand and cached behind a dirty flag:
/// mutating the position, scale or rotation marks it dirty, and the next
/// read recomputes before returning, so the cached value is never observed
/// stale. Rotation is a triple of Euler angles in degrees; the rotation
/// matrices are composed in X, Y, Z order.
pub struct Geometry {
    mesh: Mesh,
    position: Vector3<f32>,
    scale: Vector3<f32>,
    rotation: Vector3<f32>,
    model_matrix: Matrix4<f32>,
    dirty: bool,
}

impl Geometry {
    pub fn new(mesh: Mesh) -> Self {
        Geometry {
            mesh,
            position: Vector3::new(0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            model_matrix: Matrix4::identity(),
            dirty: false,
        }
    }

    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    #[inline]
    pub fn mesh_mut(&mut self) -> &mut Mesh {
        &mut self.mesh
    }

    #[inline]
    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    #[inline]
    pub fn scale(&self) -> Vector3<f32> {
        self.scale
    }

    /// Euler angles in degrees.
    #[inline]
    pub fn rotation(&self) -> Vector3<f32> {
        self.rotation
    }

    pub fn set_position<T>(&mut self, position: T)
    where
        T: Into<Vector3<f32>>,
    {
        self.position = position.into();
        self.dirty = true;
    }

    /// No validation of the input: a degenerate or zero scale is accepted
    /// and produces a degenerate matrix.
    pub fn set_scale<T>(&mut self, scale: T)
    where
        T: Into<Vector3<f32>>,
    {
        self.scale = scale.into();
        self.dirty = true;
    }

    /// Euler angles in degrees.
    pub fn set_rotation<T>(&mut self, rotation: T)
    where
        T: Into<Vector3<f32>>,
    {
        self.rotation = rotation.into();
        self.dirty = true;
    }

    /// The model matrix: translate, rotate about X, then Y, then Z, then
    /// scale. The composition order is fixed; matrix products do not
    /// commute.
    pub fn model_matrix(&mut self) -> Matrix4<f32> {
        if self.dirty {
            self.model_matrix = Matrix4::from_translation(self.position)
                * Matrix4::from_angle_x(Deg(self.rotation.x))
                * Matrix4::from_angle_y(Deg(self.rotation.y))
                * Matrix4::from_angle_z(Deg(self.rotation.z))
                * Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
            self.dirty = false;
        }

        self.model_matrix
    }

    /// Draws the owned mesh with the given shader.
    pub fn draw(&self, shader: ShaderHandle) -> Result<u32> {
        self.mesh.draw(shader)
    }

    /// Clears the owned mesh.
    pub fn clear(&mut self) {
        self.mesh.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::video::Context;

    fn geometry() -> Geometry {
        Geometry::new(Mesh::new(&Context::headless()))
    }

    #[test]
    fn identity_by_default() {
        let mut geometry = geometry();
        assert_eq!(geometry.model_matrix(), Matrix4::identity());
    }

    #[test]
    fn mutations_are_never_observed_stale() {
        let mut geometry = geometry();

        geometry.set_position([0.0, 2.0, 0.0]);
        let m = geometry.model_matrix();
        assert_eq!(m.w.y, 2.0);

        geometry.set_position([0.0, -1.0, 0.0]);
        let m = geometry.model_matrix();
        assert_eq!(m.w.y, -1.0);
    }

    #[test]
    fn cache_reuse_is_bit_identical() {
        let mut geometry = geometry();
        geometry.set_rotation([30.0, 60.0, 90.0]);
        geometry.set_scale([0.5, 2.0, 1.5]);

        let a = geometry.model_matrix();
        let b = geometry.model_matrix();
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_scale_is_accepted() {
        let mut geometry = geometry();
        geometry.set_scale([0.0, 0.0, 0.0]);

        let m = geometry.model_matrix();
        assert_eq!(m.x.x, 0.0);
        assert_eq!(m.y.y, 0.0);
        assert_eq!(m.z.z, 0.0);
    }
}
