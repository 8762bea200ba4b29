//! Named materials and their optional attributes

use super::{BumpMap, Color, TextureMap};
use crate::error::MtlError;
use crate::illumination::Illumination;

/// A single named material.
///
/// Every attribute is independently optional; an absent attribute simply
/// contributes no directive line when the material is serialized. The name
/// may be absent while a material is under construction, but serializing a
/// nameless material is an error.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    /// Material name from the `newmtl` directive
    pub name: Option<String>,
    /// Transparency from the `d` or `Tr` directive
    pub transparency: Option<f32>,
    /// Specular exponent from the `Ns` directive
    pub specular_exponent: Option<f32>,
    /// Illumination model from the `illum` directive
    pub illumination: Option<Illumination>,
    /// Ambient color from the `Ka` directive
    pub ambient_color: Option<Color>,
    /// Diffuse color from the `Kd` directive
    pub diffuse_color: Option<Color>,
    /// Specular color from the `Ks` directive
    pub specular_color: Option<Color>,
    /// Ambient texture map from the `map_Ka` directive
    pub ambient_map: Option<TextureMap>,
    /// Diffuse texture map from the `map_Kd` directive
    pub diffuse_map: Option<TextureMap>,
    /// Specular texture map from the `map_Ks` directive
    pub specular_map: Option<TextureMap>,
    /// Transparency texture map from the `map_d` directive
    pub transparency_map: Option<TextureMap>,
    /// Bump map from the `map_Bump` or `bump` directive
    pub bump_map: Option<BumpMap>,
}

impl Material {
    /// Create an empty material with every attribute absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty material with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the material name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the transparency.
    pub fn with_transparency(mut self, transparency: f32) -> Self {
        self.transparency = Some(transparency);
        self
    }

    /// Set the specular exponent.
    pub fn with_specular_exponent(mut self, exponent: f32) -> Self {
        self.specular_exponent = Some(exponent);
        self
    }

    /// Set the illumination model.
    pub fn with_illumination(mut self, illumination: Illumination) -> Self {
        self.illumination = Some(illumination);
        self
    }

    /// Set the ambient color.
    pub fn with_ambient_color(mut self, color: Color) -> Self {
        self.ambient_color = Some(color);
        self
    }

    /// Set the diffuse color.
    pub fn with_diffuse_color(mut self, color: Color) -> Self {
        self.diffuse_color = Some(color);
        self
    }

    /// Set the specular color.
    pub fn with_specular_color(mut self, color: Color) -> Self {
        self.specular_color = Some(color);
        self
    }

    /// Set the ambient texture map.
    pub fn with_ambient_map(mut self, map: TextureMap) -> Self {
        self.ambient_map = Some(map);
        self
    }

    /// Set the diffuse texture map.
    pub fn with_diffuse_map(mut self, map: TextureMap) -> Self {
        self.diffuse_map = Some(map);
        self
    }

    /// Set the specular texture map.
    pub fn with_specular_map(mut self, map: TextureMap) -> Self {
        self.specular_map = Some(map);
        self
    }

    /// Set the transparency texture map.
    pub fn with_transparency_map(mut self, map: TextureMap) -> Self {
        self.transparency_map = Some(map);
        self
    }

    /// Set the bump map.
    pub fn with_bump_map(mut self, map: BumpMap) -> Self {
        self.bump_map = Some(map);
        self
    }

    /// Clear the ambient, diffuse and specular colors.
    pub fn clear_colors(&mut self) -> &mut Self {
        self.ambient_color = None;
        self.diffuse_color = None;
        self.specular_color = None;
        self
    }

    /// Clear all five texture map slots.
    pub fn clear_maps(&mut self) -> &mut Self {
        self.ambient_map = None;
        self.diffuse_map = None;
        self.specular_map = None;
        self.transparency_map = None;
        self.bump_map = None;
        self
    }

    /// Render the material as a block of MTL directive lines.
    ///
    /// Directives are emitted in a fixed order: `newmtl`, `d`, `Ns`,
    /// `illum`, `Ka`, `Kd`, `Ks`, then the map directives. Absent attributes
    /// contribute no line. Transparency always serializes as `d`, even when
    /// it was parsed from a `Tr` directive.
    ///
    /// # Errors
    ///
    /// Returns [`MtlError::MissingName`] if the name is absent.
    pub fn to_text(&self) -> Result<String, MtlError> {
        let name = self.name.as_deref().ok_or(MtlError::MissingName)?;
        let mut out = String::new();
        out.push_str(&format!("newmtl {name}\n"));

        if let Some(transparency) = self.transparency {
            out.push_str(&format!("d {transparency}\n"));
        }
        if let Some(exponent) = self.specular_exponent {
            out.push_str(&format!("Ns {exponent}\n"));
        }
        if let Some(illumination) = self.illumination {
            out.push_str(&format!("illum {}\n", illumination.ordinal()));
        }

        if let Some(color) = self.ambient_color {
            out.push_str(&format!("Ka {}\n", color.to_text()));
        }
        if let Some(color) = self.diffuse_color {
            out.push_str(&format!("Kd {}\n", color.to_text()));
        }
        if let Some(color) = self.specular_color {
            out.push_str(&format!("Ks {}\n", color.to_text()));
        }

        if let Some(map) = &self.ambient_map {
            out.push_str(&format!("map_Ka {}\n", map.to_text()));
        }
        if let Some(map) = &self.diffuse_map {
            out.push_str(&format!("map_Kd {}\n", map.to_text()));
        }
        if let Some(map) = &self.specular_map {
            out.push_str(&format!("map_Ks {}\n", map.to_text()));
        }
        if let Some(map) = &self.transparency_map {
            out.push_str(&format!("map_d {}\n", map.to_text()));
        }
        if let Some(map) = &self.bump_map {
            out.push_str(&format!("map_Bump {}\n", map.to_text()));
        }

        Ok(out)
    }
}
