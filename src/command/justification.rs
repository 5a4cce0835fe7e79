use serde::{Serialize, Deserialize};

/// Justification of a typeset field relative to its anchor
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Justification {
    Left,
    Right,
    /// Script dependent
    Auto
}

impl Default for Justification {
    fn default() -> Justification {
        Justification::Left
    }
}

impl Justification {
    pub fn as_digit(&self) -> u8 {
        match self {
            Justification::Left => 0,
            Justification::Right => 1,
            Justification::Auto => 2
        }
    }
}

/// Text alignment inside a field block
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellAlign {
    Left,
    Center,
    Right,
    Justified
}

impl CellAlign {
    pub fn as_char(&self) -> char {
        match self {
            CellAlign::Left => 'L',
            CellAlign::Center => 'C',
            CellAlign::Right => 'R',
            CellAlign::Justified => 'J'
        }
    }
}
