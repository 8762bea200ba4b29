//! Standalone comment lines

/// A `#` comment line in a material library.
///
/// Comments belong to the library as a whole, not to the material they
/// happen to appear next to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comment {
    /// Comment text, without the leading `#` marker
    pub text: Option<String>,
}

impl Comment {
    /// Create an empty comment.
    pub const fn new() -> Self {
        Self { text: None }
    }

    /// Set the comment text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Render the comment as an MTL line.
    pub fn to_text(&self) -> String {
        format!("# {}", self.text.as_deref().unwrap_or(""))
    }
}
