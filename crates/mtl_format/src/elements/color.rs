//! RGB color values for material directives

/// An RGB color carried by the `Ka`, `Kd` and `Ks` directives.
///
/// Components are not clamped: values outside `[0, 1]` are legal and kept
/// as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
}

impl Color {
    /// Create a color from its components.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Render the color as the argument list of a color directive.
    pub fn to_text(&self) -> String {
        format!("{} {} {}", self.r, self.g, self.b)
    }
}
