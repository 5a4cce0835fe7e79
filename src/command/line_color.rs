use serde::{Serialize, Deserialize};

/// Color for boxes and circles
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineColor {
    /// Foreground, burns the dots
    Black,
    /// Background, clears the dots
    White
}

impl Default for LineColor {
    fn default() -> LineColor {
        LineColor::Black
    }
}

impl LineColor {
    pub fn as_char(&self) -> char {
        match self {
            LineColor::Black => 'B',
            LineColor::White => 'W'
        }
    }
}
