//! The material library container

use crate::elements::{Comment, Material};
use crate::error::MtlError;

/// An ordered collection of comments and materials, the unit of parsing and
/// serialization.
///
/// Insertion order of both collections is significant and preserved through
/// serialization. Material names are not required to be unique; name lookup
/// returns the first match.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Library {
    comments: Vec<Comment>,
    materials: Vec<Material>,
}

impl Library {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse MTL text into a new library.
    ///
    /// # Errors
    ///
    /// Returns the first parse failure encountered; see [`crate::parse`].
    pub fn from_text(source: &str) -> Result<Self, MtlError> {
        crate::parse(source)
    }

    /// The comments in insertion order.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Mutable access to the comments.
    pub fn comments_mut(&mut self) -> &mut [Comment] {
        &mut self.comments
    }

    /// The materials in insertion order.
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Mutable access to the materials.
    pub fn materials_mut(&mut self) -> &mut [Material] {
        &mut self.materials
    }

    /// Append a comment.
    pub fn add_comment(&mut self, comment: Comment) -> &mut Self {
        self.comments.push(comment);
        self
    }

    /// Append a material.
    pub fn add_material(&mut self, material: Material) -> &mut Self {
        self.materials.push(material);
        self
    }

    /// The first material with the given name, if any.
    pub fn material(&self, name: &str) -> Option<&Material> {
        self.materials
            .iter()
            .find(|material| material.name.as_deref() == Some(name))
    }

    /// Mutable access to the first material with the given name, if any.
    pub fn material_mut(&mut self, name: &str) -> Option<&mut Material> {
        self.materials
            .iter_mut()
            .find(|material| material.name.as_deref() == Some(name))
    }

    /// Remove and return the comment at `index`, or `None` if out of range.
    pub fn remove_comment(&mut self, index: usize) -> Option<Comment> {
        (index < self.comments.len()).then(|| self.comments.remove(index))
    }

    /// Remove and return the material at `index`, or `None` if out of range.
    pub fn remove_material(&mut self, index: usize) -> Option<Material> {
        (index < self.materials.len()).then(|| self.materials.remove(index))
    }

    /// Remove all comments.
    pub fn clear_comments(&mut self) -> &mut Self {
        self.comments.clear();
        self
    }

    /// Remove all materials.
    pub fn clear_materials(&mut self) -> &mut Self {
        self.materials.clear();
        self
    }

    /// Render the library as MTL text.
    ///
    /// All comments come first, followed by a blank line if any were
    /// emitted, then each material block followed by a blank line.
    ///
    /// # Errors
    ///
    /// Returns [`MtlError::MissingName`] if any material has no name;
    /// nothing is emitted in that case.
    pub fn to_text(&self) -> Result<String, MtlError> {
        let mut out = String::new();
        if !self.comments.is_empty() {
            for comment in &self.comments {
                out.push_str(&comment.to_text());
                out.push('\n');
            }
            out.push('\n');
        }
        for material in &self.materials {
            out.push_str(&material.to_text()?);
            out.push('\n');
        }
        Ok(out)
    }
}
