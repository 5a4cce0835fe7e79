use serde::{Serialize, Deserialize};
use crate::Error;

/// Millimeters in one inch
const MM_PER_INCH: f64 = 25.4;

/// Points to dots factor used by the printer for font heights, per dpi
const POINT_FACTOR: f64 = 0.014;

/// Unit in which the caller expresses positions and lengths
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Device dots, taken verbatim
    Dots,
    /// Millimeters, converted through the printer resolution
    #[serde(alias = "mm")]
    Millimeters
}

impl Default for Unit {
    fn default() -> Unit {
        Unit::Dots
    }
}

impl std::str::FromStr for Unit {
    type Err = Error;

    /// ```rust
    /// # use zpl_rs::Unit;
    /// assert_eq!(Unit::Millimeters, "mm".parse().unwrap());
    /// assert!("inches".parse::<Unit>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Unit, Error> {
        match s {
            "dots" => Ok(Unit::Dots),
            "mm" | "millimeters" => Ok(Unit::Millimeters),
            other => Err(Error::UnknownUnit(other.to_string()))
        }
    }
}

/// Converts user lengths to device dots
///
/// The converter holds nothing more than the unit and the resolution, so it is `Copy` and can be shared freely.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitConverter {
    unit: Unit,
    resolution: u32
}

impl UnitConverter {
    /// Creates a converter for a resolution given in dots per inch
    pub fn new(unit: Unit, resolution: u32) -> UnitConverter {
        UnitConverter {
            unit,
            resolution
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Converts a length in the configured unit to dots
    ///
    /// ```rust
    /// # use zpl_rs::{Unit, UnitConverter};
    /// let converter = UnitConverter::new(Unit::Millimeters, 254);
    /// assert_eq!(100.0, converter.to_dots(10.0));
    /// ```
    pub fn to_dots(&self, value: f64) -> f64 {
        match self.unit {
            Unit::Dots => value,
            Unit::Millimeters => value * (self.resolution as f64) / MM_PER_INCH
        }
    }

    /// Converts a font size in points to dots
    ///
    /// Independent of the unit, the printer uses a fixed approximation.
    pub fn font_size_to_dots(&self, points: f64) -> f64 {
        points * (self.resolution as f64) * POINT_FACTOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_are_identity() {
        let converter = UnitConverter::new(Unit::Dots, 300);
        for value in &[0.0, 1.5, -3.25, 812.0] {
            assert_eq!(*value, converter.to_dots(*value));
        }
    }

    #[test]
    fn millimeters_scale_with_resolution() {
        for resolution in &[1u32, 152, 203, 300, 600] {
            let converter = UnitConverter::new(Unit::Millimeters, *resolution);
            for value in &[0.0, 1.0, 25.4, 101.6, 7.3] {
                assert_eq!(*value * (*resolution as f64) / 25.4, converter.to_dots(*value));
            }
        }
    }

    #[test]
    fn font_size_ignores_unit() {
        let dots = UnitConverter::new(Unit::Dots, 203);
        let mm = UnitConverter::new(Unit::Millimeters, 203);
        assert_eq!(dots.font_size_to_dots(12.0), mm.font_size_to_dots(12.0));
        assert!((dots.font_size_to_dots(12.0) - 34.104).abs() < 1e-9);
    }

    #[test]
    fn unit_names() {
        assert_eq!(Unit::Dots, "dots".parse().unwrap());
        assert_eq!(Unit::Millimeters, "millimeters".parse().unwrap());
        match "pt".parse::<Unit>() {
            Err(Error::UnknownUnit(name)) => assert_eq!("pt", name),
            other => panic!("unexpected {:?}", other)
        }
    }
}
