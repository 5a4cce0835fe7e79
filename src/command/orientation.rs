use serde::{Serialize, Deserialize};

/// Field rotation
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Upright
    Normal,
    /// Rotated 90 degrees clockwise
    Rotated90,
    /// Inverted 180 degrees
    Inverted180,
    /// Rotated 270 degrees, read from bottom up
    BottomUp270
}

impl Default for Orientation {
    fn default() -> Orientation {
        Orientation::Normal
    }
}

impl Orientation {
    /// Letter used by the protocol
    pub fn as_char(&self) -> char {
        match self {
            Orientation::Normal => 'N',
            Orientation::Rotated90 => 'R',
            Orientation::Inverted180 => 'I',
            Orientation::BottomUp270 => 'B'
        }
    }
}
