use super::Density;
use crate::{Error, Unit};
use serde::{Serialize, Deserialize};

/// Configuration of a [LabelBuilder](crate::LabelBuilder)
///
/// Holds the unit and resolution of the document, plus the page geometry the builder starts with. Prefer the builder pattern ([LabelProfile::builder]) over filling the structure by hand. The profile implements `Serialize` and `Deserialize`, so it can be kept next to the application configuration.
///
/// ```rust
/// # use zpl_rs::{LabelProfile, Unit, Density};
/// let profile = LabelProfile::builder(Unit::Millimeters)
///     .with_density(Density::Dpmm12)
///     .with_page_size(50.0, 100.0)
///     .with_margin(2.0)
///     .build();
/// assert_eq!(300, profile.resolution());
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LabelProfile {
    /// Unit of every position and length given to the builder
    #[serde(default)]
    pub(crate) unit: Unit,
    /// Printer resolution in dots per inch
    #[serde(default = "default_resolution")]
    pub(crate) resolution: u32,
    #[serde(default)]
    pub(crate) width: f64,
    #[serde(default)]
    pub(crate) height: f64,
    #[serde(default)]
    pub(crate) margin: f64,
    /// When present, a print width command is added to the pre commands
    #[serde(default)]
    pub(crate) media_width: Option<f64>
}

fn default_resolution() -> u32 {
    Density::default().dpi()
}

impl LabelProfile {
    /// Creates a profile with no page size, no margin and no media width
    pub fn new(unit: Unit, resolution: u32) -> LabelProfile {
        LabelProfile {
            unit,
            resolution,
            width: 0.0,
            height: 0.0,
            margin: 0.0,
            media_width: None
        }
    }

    /// Creates a [LabelProfileBuilder], starting at 203 dpi
    pub fn builder(unit: Unit) -> LabelProfileBuilder {
        LabelProfileBuilder::new(unit)
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Printhead density of the resolution, when it is a standard one
    ///
    /// ```rust
    /// # use zpl_rs::{LabelProfile, Unit, Density};
    /// assert_eq!(Some(Density::Dpmm12), LabelProfile::new(Unit::Dots, 300).density());
    /// assert_eq!(None, LabelProfile::new(Unit::Dots, 250).density());
    /// ```
    pub fn density(&self) -> Option<Density> {
        Density::from_dpi(self.resolution)
    }

    /// Checks the values that would make the builder misbehave
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.resolution == 0 {
            return Err(Error::InvalidResolution(self.resolution));
        }
        if let Some(media_width) = self.media_width {
            if !(media_width > 0.0) || !media_width.is_finite() {
                return Err(Error::InvalidGeometry {
                    what: "media width",
                    value: media_width
                });
            }
        }
        Ok(())
    }
}

/// Helper structure to create a [LabelProfile]
pub struct LabelProfileBuilder {
    profile: LabelProfile
}

impl LabelProfileBuilder {
    pub fn new(unit: Unit) -> LabelProfileBuilder {
        LabelProfileBuilder {
            profile: LabelProfile::new(unit, default_resolution())
        }
    }

    /// Sets the resolution in dots per inch
    pub fn with_resolution(mut self, resolution: u32) -> LabelProfileBuilder {
        self.profile.resolution = resolution;
        self
    }

    /// Sets the resolution from a printhead density
    pub fn with_density(mut self, density: Density) -> LabelProfileBuilder {
        self.profile.resolution = density.dpi();
        self
    }

    /// Page height and width, in the profile's unit
    pub fn with_page_size(mut self, height: f64, width: f64) -> LabelProfileBuilder {
        self.profile.height = height;
        self.profile.width = width;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> LabelProfileBuilder {
        self.profile.margin = margin;
        self
    }

    /// Print width, in the profile's unit
    pub fn with_media_width(mut self, media_width: f64) -> LabelProfileBuilder {
        self.profile.media_width = Some(media_width);
        self
    }

    pub fn build(self) -> LabelProfile {
        self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_defaults() {
        let profile: LabelProfile = serde_json::from_str(r#"{"unit": "mm", "margin": 3.0}"#).unwrap();
        assert_eq!(Unit::Millimeters, profile.unit());
        assert_eq!(203, profile.resolution());
        assert_eq!(3.0, profile.margin);
        assert_eq!(None, profile.media_width);
    }

    #[test]
    fn json_round_trip() {
        let profile = LabelProfile::builder(Unit::Dots)
            .with_resolution(600)
            .with_media_width(812.0)
            .build();
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(profile, serde_json::from_str(&json).unwrap());
    }

    #[test]
    fn validation() {
        assert!(LabelProfile::new(Unit::Dots, 0).validate().is_err());
        assert!(LabelProfile::builder(Unit::Dots).with_media_width(0.0).build().validate().is_err());
        assert!(LabelProfile::builder(Unit::Dots).with_media_width(f64::NAN).build().validate().is_err());
        assert!(LabelProfile::builder(Unit::Dots).with_media_width(f64::INFINITY).build().validate().is_err());
        assert!(LabelProfile::builder(Unit::Dots).build().validate().is_ok());
        assert_eq!(Some(Density::Dpmm24), Density::from_dpi(600));
        assert_eq!(None, Density::from_dpi(72));
        let profile = LabelProfile::builder(Unit::Millimeters).with_density(Density::Dpmm6).build();
        assert_eq!(Some(Density::Dpmm6), profile.density());
    }
}
