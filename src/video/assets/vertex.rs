//! The fixed vertex record every mesh uploads.

use std::mem;
use std::slice;

/// Number of vertex attribute slots consumed by the drawing call.
pub const MAX_VERTEX_ATTRIBUTES: usize = 8;

/// A single vertex as it is laid out in the vertex buffer.
///
/// The layout and field order are fixed; byte offsets of the fields feed the
/// attribute bindings at slots 0-7, so reordering fields here without
/// updating [`Vertex::attributes`] breaks every draw.
///
/// [`Vertex::attributes`]: struct.Vertex.html#method.attributes
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub texcoord: [f32; 2],
    pub color: [f32; 3],
    pub tangent: [f32; 3],
    pub bitangent: [f32; 3],
    pub bone_indices: [i32; 4],
    pub bone_weights: [f32; 4],
}

impl Default for Vertex {
    fn default() -> Self {
        Vertex {
            position: [0.0; 3],
            normal: [0.0; 3],
            texcoord: [0.0; 2],
            color: [1.0; 3],
            tangent: [0.0; 3],
            bitangent: [0.0; 3],
            bone_indices: [0; 4],
            bone_weights: [0.0; 4],
        }
    }
}

/// The data type of each component of a vertex element.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum VertexFormat {
    Float,
    Int,
}

/// The details of a single attribute binding: a mapping from a byte offset
/// into the vertex record to a numbered input slot consumed by shader code.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct VertexAttribute {
    /// The input slot this element feeds.
    pub location: u8,
    /// The data type of each component of this element.
    pub format: VertexFormat,
    /// The number of components per generic vertex element.
    pub size: u8,
    /// Byte offset of this element from the start of the vertex record.
    pub offset: usize,
}

impl Vertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], texcoord: [f32; 2]) -> Self {
        Vertex {
            position,
            normal,
            texcoord,
            ..Default::default()
        }
    }

    /// Stride of a single vertex structure.
    #[inline]
    pub fn stride() -> usize {
        mem::size_of::<Vertex>()
    }

    /// The eight attribute bindings at slots 0-7. Bone indices are declared
    /// as integers; everything else as floats.
    pub fn attributes() -> [VertexAttribute; MAX_VERTEX_ATTRIBUTES] {
        [
            VertexAttribute {
                location: 0,
                format: VertexFormat::Float,
                size: 3,
                offset: mem::offset_of!(Vertex, position),
            },
            VertexAttribute {
                location: 1,
                format: VertexFormat::Float,
                size: 3,
                offset: mem::offset_of!(Vertex, normal),
            },
            VertexAttribute {
                location: 2,
                format: VertexFormat::Float,
                size: 2,
                offset: mem::offset_of!(Vertex, texcoord),
            },
            VertexAttribute {
                location: 3,
                format: VertexFormat::Float,
                size: 3,
                offset: mem::offset_of!(Vertex, color),
            },
            VertexAttribute {
                location: 4,
                format: VertexFormat::Float,
                size: 3,
                offset: mem::offset_of!(Vertex, tangent),
            },
            VertexAttribute {
                location: 5,
                format: VertexFormat::Float,
                size: 3,
                offset: mem::offset_of!(Vertex, bitangent),
            },
            VertexAttribute {
                location: 6,
                format: VertexFormat::Int,
                size: 4,
                offset: mem::offset_of!(Vertex, bone_indices),
            },
            VertexAttribute {
                location: 7,
                format: VertexFormat::Float,
                size: 4,
                offset: mem::offset_of!(Vertex, bone_weights),
            },
        ]
    }
}

/// Reinterprets a slice of plain-old-data values as raw bytes for upload.
pub fn as_bytes<T>(values: &[T]) -> &[u8]
where
    T: Copy,
{
    let len = values.len() * mem::size_of::<T>();
    unsafe { slice::from_raw_parts(values.as_ptr() as *const u8, len) }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn layout() {
        assert_eq!(Vertex::stride(), 100);

        let attributes = Vertex::attributes();
        let offsets: Vec<usize> = attributes.iter().map(|v| v.offset).collect();
        assert_eq!(offsets, [0, 12, 24, 32, 44, 56, 68, 84]);

        for (slot, v) in attributes.iter().enumerate() {
            assert_eq!(v.location as usize, slot);
        }

        assert_eq!(attributes[6].format, VertexFormat::Int);
        assert_eq!(attributes[6].size, 4);
        assert_eq!(attributes[7].format, VertexFormat::Float);
        assert_eq!(attributes[7].size, 4);
    }

    #[test]
    fn representation() {
        let v = Vertex::new([1.0, 2.0, 3.0], [0.0, 1.0, 0.0], [0.5, 0.5]);
        let vertices = [v];
        let bytes = as_bytes(&vertices);
        assert_eq!(bytes.len(), Vertex::stride());

        let head: [f32; 3] = [1.0, 2.0, 3.0];
        assert_eq!(&bytes[0..12], as_bytes(&head));
    }
}
