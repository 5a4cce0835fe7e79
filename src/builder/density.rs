use serde::{Serialize, Deserialize};

/// Printhead densities found on zebra-class printers
///
/// Handy when the resolution is known as dots per millimeter, as printed on the printer's label.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Density {
    /// 6 dots per millimeter
    Dpmm6,
    /// 8 dots per millimeter, the most common one
    Dpmm8,
    /// 12 dots per millimeter
    Dpmm12,
    /// 24 dots per millimeter
    Dpmm24
}

impl Density {
    /// Resolution in dots per inch
    pub fn dpi(&self) -> u32 {
        match self {
            Density::Dpmm6 => 152,
            Density::Dpmm8 => 203,
            Density::Dpmm12 => 300,
            Density::Dpmm24 => 600
        }
    }

    /// Finds the density matching a resolution, if any
    pub fn from_dpi(dpi: u32) -> Option<Density> {
        match dpi {
            152 => Some(Density::Dpmm6),
            203 => Some(Density::Dpmm8),
            300 => Some(Density::Dpmm12),
            600 => Some(Density::Dpmm24),
            _ => None
        }
    }
}

impl Default for Density {
    fn default() -> Density {
        Density::Dpmm8
    }
}
