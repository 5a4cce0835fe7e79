use thiserror::Error;

/// Errors that this crate throws.
#[derive(Error, Debug)]
pub enum Error {
    /// The unit name is neither `dots` nor `mm`
    #[error("Unit {0} not recognized, use either \"dots\" or \"mm\"")]
    UnknownUnit(String),
    /// The printer resolution must be at least one dot per inch
    #[error("Invalid resolution of {0} dpi")]
    InvalidResolution(u32),
    /// A shape, cell or code received a size it can not be drawn with
    #[error("Invalid {what}: {value}")]
    InvalidGeometry {
        what: &'static str,
        value: f64
    },
    /// Graphic fields need at least one pixel in each direction
    #[error("Bitmap of {width}x{height} pixels can not be encoded")]
    EmptyBitmap {
        width: u32,
        height: u32
    },
    /// Box rounding goes from 0 to 8
    #[error("Rounding {0} out of range (0 to 8)")]
    InvalidRounding(u8),
    /// Barcode module width goes from 1 to 10 dots
    #[error("Module width {0} out of range (1 to 10)")]
    InvalidModuleWidth(u8),
    /// International encodings go from 0 to 36
    #[error("Encoding {0} out of range (0 to 36)")]
    InvalidEncoding(u8),
    /// A compressed graphic field could not be expanded
    #[error("Malformed graphic field: {0}")]
    MalformedGraphicField(String),
    /// Error regarding image treatment
    #[error(transparent)]
    Image(#[from] image::ImageError)
}
