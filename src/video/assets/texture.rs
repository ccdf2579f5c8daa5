//! Texture references carried by meshes. Decoding and uploading image files
//! is the job of an external loader; meshes only ever see driver handles.

use std::fmt;

/// An opaque handle of a pre-loaded 2D texture.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

impl fmt::Display for TextureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextureHandle({})", self.0)
    }
}

/// The semantic kind of a texture, which determines the sampler uniform it
/// feeds during a draw.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Diffuse,
    Specular,
    Normal,
    Height,
    Reflection,
}

impl TextureKind {
    /// Number of kinds, one ordinal counter each during a draw.
    pub const COUNT: usize = 5;

    /// The sampler uniform name of the `ordinal`-th texture of this kind;
    /// ordinals are 1-based, so the first diffuse map feeds
    /// `texture_diffuse1` and the second `texture_diffuse2`.
    pub fn uniform(self, ordinal: usize) -> String {
        format!("texture_{}{}", self.as_str(), ordinal)
    }

    fn as_str(self) -> &'static str {
        match self {
            TextureKind::Diffuse => "diffuse",
            TextureKind::Specular => "specular",
            TextureKind::Normal => "normal",
            TextureKind::Height => "height",
            TextureKind::Reflection => "reflection",
        }
    }
}

/// A texture reference owned by a mesh: the driver handle, the semantic
/// kind, and the source path kept purely for bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    pub id: TextureHandle,
    pub kind: TextureKind,
    pub path: String,
}

impl Texture {
    pub fn new(id: TextureHandle, kind: TextureKind, path: &str) -> Self {
        Texture {
            id,
            kind,
            path: path.to_owned(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn uniform_names() {
        assert_eq!(TextureKind::Diffuse.uniform(1), "texture_diffuse1");
        assert_eq!(TextureKind::Diffuse.uniform(2), "texture_diffuse2");
        assert_eq!(TextureKind::Specular.uniform(1), "texture_specular1");
        assert_eq!(TextureKind::Reflection.uniform(1), "texture_reflection1");
    }
}
