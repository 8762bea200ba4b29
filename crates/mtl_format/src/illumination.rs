//! Illumination models defined by the MTL format

/// The eleven illumination models of the MTL format, in ordinal order.
///
/// The ordinal (0-10) is what an `illum` directive carries on the wire.
/// The description is documentation only and is never written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Illumination {
    /// Color on and Ambient off
    ColorOnAmbientOff = 0,
    /// Color on and Ambient on
    ColorOnAmbientOn = 1,
    /// Highlight on
    HighlightOn = 2,
    /// Reflection on and Ray trace on
    ReflectionRayTrace = 3,
    /// Transparency: Glass on; Reflection: Ray trace on
    GlassRayTrace = 4,
    /// Reflection: Fresnel on and Ray trace on
    FresnelRayTrace = 5,
    /// Transparency: Refraction on; Reflection: Fresnel off and Ray trace on
    RefractionRayTrace = 6,
    /// Transparency: Refraction on; Reflection: Fresnel on and Ray trace on
    RefractionFresnelRayTrace = 7,
    /// Reflection on and Ray trace off
    Reflection = 8,
    /// Transparency: Glass on; Reflection: Ray trace off
    Glass = 9,
    /// Casts shadows onto invisible surfaces
    InvisibleSurfaceShadows = 10,
}

impl Illumination {
    /// Every model in ordinal order.
    pub const ALL: [Self; 11] = [
        Self::ColorOnAmbientOff,
        Self::ColorOnAmbientOn,
        Self::HighlightOn,
        Self::ReflectionRayTrace,
        Self::GlassRayTrace,
        Self::FresnelRayTrace,
        Self::RefractionRayTrace,
        Self::RefractionFresnelRayTrace,
        Self::Reflection,
        Self::Glass,
        Self::InvisibleSurfaceShadows,
    ];

    /// Returns the model with the given wire ordinal, or `None` if the
    /// ordinal is outside 0-10.
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// The wire ordinal of this model.
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// The human-readable description from the MTL format specs.
    pub const fn description(self) -> &'static str {
        match self {
            Self::ColorOnAmbientOff => "Color on and Ambient off",
            Self::ColorOnAmbientOn => "Color on and Ambient on",
            Self::HighlightOn => "Highlight on",
            Self::ReflectionRayTrace => "Reflection on and Ray trace on",
            Self::GlassRayTrace => "Transparency: Glass on; Reflection: Ray trace on",
            Self::FresnelRayTrace => "Reflection: Fresnel on and Ray trace on",
            Self::RefractionRayTrace => {
                "Transparency: Refraction on; Reflection: Fresnel off and Ray trace on"
            }
            Self::RefractionFresnelRayTrace => {
                "Transparency: Refraction on; Reflection: Fresnel on and Ray trace on"
            }
            Self::Reflection => "Reflection on and Ray trace off",
            Self::Glass => "Transparency: Glass on; Reflection: Ray trace off",
            Self::InvisibleSurfaceShadows => "Casts shadows onto invisible surfaces",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ordinal_bounds() {
        assert_eq!(Illumination::from_ordinal(0), Some(Illumination::ColorOnAmbientOff));
        assert_eq!(Illumination::from_ordinal(10), Some(Illumination::InvisibleSurfaceShadows));
        assert_eq!(Illumination::from_ordinal(11), None);
        assert_eq!(Illumination::from_ordinal(-1), None);
    }

    #[test]
    fn test_ordinal_round_trip() {
        for model in Illumination::ALL {
            assert_eq!(Illumination::from_ordinal(i64::from(model.ordinal())), Some(model));
        }
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Illumination::HighlightOn.description(), "Highlight on");
        assert_eq!(
            Illumination::InvisibleSurfaceShadows.description(),
            "Casts shadows onto invisible surfaces"
        );
    }
}
