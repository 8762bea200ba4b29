//! Texture map references and their modifiers

/// A texture map reference with its optional modifiers.
///
/// Used by the `map_Ka`, `map_Kd`, `map_Ks` and `map_d` directives. The file
/// path is stored verbatim and never resolved or checked for existence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextureMap {
    /// Texture file path, verbatim from the directive
    pub file: String,
    /// Scale factor from the `-s` option
    pub scale: Option<f32>,
    /// Offset from the `-o` option
    pub offset: Option<f32>,
    /// Whether the `-t` flag is present; unlike the other modifiers this is
    /// never absent, only on or off
    pub transform: bool,
}

impl TextureMap {
    /// Create a map referencing the given file, with no modifiers.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            scale: None,
            offset: None,
            transform: false,
        }
    }

    /// Set the scale modifier.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set the offset modifier.
    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set or clear the transform flag.
    pub fn with_transform(mut self, transform: bool) -> Self {
        self.transform = transform;
        self
    }

    /// Render the map as the argument list of a map directive.
    ///
    /// Modifiers are emitted in a fixed order (`-s`, `-o`, `-t`) regardless
    /// of the order they were parsed in, so output is deterministic.
    pub fn to_text(&self) -> String {
        let mut segments = Vec::new();
        if let Some(scale) = self.scale {
            segments.push(format!("-s {scale}"));
        }
        if let Some(offset) = self.offset {
            segments.push(format!("-o {offset}"));
        }
        if self.transform {
            segments.push("-t".to_string());
        }
        segments.push(self.file.clone());
        segments.join(" ")
    }
}

/// A bump map reference: a [`TextureMap`] plus the bump-specific `-bm`
/// intensity modifier.
///
/// Used by the `map_Bump` and `bump` directives.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BumpMap {
    /// The underlying texture map reference
    pub map: TextureMap,
    /// Bump intensity from the `-bm` option
    pub intensity: Option<f32>,
}

impl BumpMap {
    /// Create a bump map referencing the given file, with no modifiers.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            map: TextureMap::new(file),
            intensity: None,
        }
    }

    /// Set the intensity modifier.
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = Some(intensity);
        self
    }

    /// Set the scale modifier on the underlying map.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.map.scale = Some(scale);
        self
    }

    /// Set the offset modifier on the underlying map.
    pub fn with_offset(mut self, offset: f32) -> Self {
        self.map.offset = Some(offset);
        self
    }

    /// Set or clear the transform flag on the underlying map.
    pub fn with_transform(mut self, transform: bool) -> Self {
        self.map.transform = transform;
        self
    }

    /// Render the bump map as the argument list of a bump directive.
    ///
    /// The `-bm` segment comes first, before the underlying map's modifiers.
    pub fn to_text(&self) -> String {
        match self.intensity {
            Some(intensity) => format!("-bm {} {}", intensity, self.map.to_text()),
            None => self.map.to_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_map() {
        assert_eq!(TextureMap::new("wood.png").to_text(), "wood.png");
    }

    #[test]
    fn test_modifier_order() {
        let map = TextureMap::new("wood.png")
            .with_transform(true)
            .with_offset(2.0)
            .with_scale(1.5);
        assert_eq!(map.to_text(), "-s 1.5 -o 2 -t wood.png");
    }

    #[test]
    fn test_bump_intensity_first() {
        let bump = BumpMap::new("bump.png").with_scale(2.0).with_intensity(0.3);
        assert_eq!(bump.to_text(), "-bm 0.3 -s 2 bump.png");
    }

    #[test]
    fn test_bump_without_intensity() {
        let bump = BumpMap::new("bump.png").with_transform(true);
        assert_eq!(bump.to_text(), "-t bump.png");
    }
}
