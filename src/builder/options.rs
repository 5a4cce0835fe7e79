use crate::command::{Orientation, Justification};
use serde::{Serialize, Deserialize};

/// Font size used by text fields when none is given, in points
pub(crate) const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Optional parameters of [draw_text](crate::LabelBuilder::draw_text)
///
/// ```rust
/// # use zpl_rs::{TextOptions, command::Orientation};
/// let options = TextOptions::default()
///     .with_orientation(Orientation::Rotated90)
///     .with_width(200.0)
///     .inverted();
/// assert_eq!(Some(200.0), options.width);
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TextOptions {
    pub orientation: Orientation,
    pub justification: Justification,
    /// Wrapping width in user units, no wrapping when absent
    pub width: Option<f64>,
    /// Font size in points, sets the line height of wrapped text
    pub font_size: f64,
    /// Reverses the colors of the field against what is behind it
    pub invert: bool
}

impl Default for TextOptions {
    fn default() -> TextOptions {
        TextOptions {
            orientation: Orientation::Normal,
            justification: Justification::Left,
            width: None,
            font_size: DEFAULT_FONT_SIZE,
            invert: false
        }
    }
}

impl TextOptions {
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_justification(mut self, justification: Justification) -> Self {
        self.justification = justification;
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }
}

/// Optional parameters of the linear barcodes
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct BarcodeOptions {
    /// Narrowest bar, in dots (1 to 10)
    pub module_width: u8,
    /// Prints the data under the code
    pub interpretation: bool,
    pub orientation: Orientation
}

impl Default for BarcodeOptions {
    fn default() -> BarcodeOptions {
        BarcodeOptions {
            module_width: 2,
            interpretation: false,
            orientation: Orientation::Normal
        }
    }
}

impl BarcodeOptions {
    pub fn with_module_width(mut self, module_width: u8) -> Self {
        self.module_width = module_width;
        self
    }

    pub fn with_interpretation(mut self, interpretation: bool) -> Self {
        self.interpretation = interpretation;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }
}
