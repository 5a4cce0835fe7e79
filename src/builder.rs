pub use self::density::Density;
pub use self::label_profile::{LabelProfile, LabelProfileBuilder};
pub use self::options::{TextOptions, BarcodeOptions};

mod density;
mod label_profile;
mod options;

use crate::{
    Error, CommandBuffer, Unit, UnitConverter,
    command::{Command, FontMapper, FontMap, Orientation, Justification, LineColor, CellAlign},
    raster::{self, BitmapSource}
};
use self::options::DEFAULT_FONT_SIZE;
use log::{debug, warn};
use std::fmt;

/// Thickness used for boxes and circles when 0 is given, in dots
const DEFAULT_THICKNESS: i64 = 3;

/// Horizontal inset of the text inside a cell, in dots
const CELL_INSET: f64 = 10.0;

/// Dots covered by each step of the qr code magnification
const QR_DOTS_PER_FACTOR: f64 = 28.0;

/// Magnification range accepted by the printer for qr codes
const QR_MIN_FACTOR: f64 = 1.0;
const QR_MAX_FACTOR: f64 = 10.0;

/// Largest box rounding
const MAX_ROUNDING: u8 = 8;

/// Largest international encoding
const MAX_ENCODING: u8 = 36;

/// Lengths must be finite and strictly positive
fn positive(what: &'static str, value: f64) -> Result<f64, Error> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidGeometry{what, value})
    }
}

/// Main zpl-rs structure
///
/// The builder keeps a cursor, a margin and the page size in the caller's unit, and translates every drawing call into zpl commands.
///
/// ```rust
/// use zpl_rs::{LabelBuilder, Unit, TextOptions, command::LineColor};
///
/// let mut builder = LabelBuilder::new(Unit::Millimeters, 254).unwrap();
/// builder.draw_rect(1.0, 1.0, 20.0, 10.0, 0.0, LineColor::Black, 0).unwrap();
/// builder.draw_text(2.0, 8.0, "Hello", &TextOptions::default()).unwrap();
///
/// let target = "^XA\n^FO10,10^GB200,100,3,B,0^FS\n^FWN\n^FT20,80,0\n^FH^FDHello^FS\n^XZ\n";
/// assert_eq!(target, builder.to_zpl());
/// ```
///
/// A builder is plain mutable state, use one per thread (or per label).
pub struct LabelBuilder {
    /// Configuration the builder goes back to on [reset](LabelBuilder::reset)
    profile: LabelProfile,
    converter: UnitConverter,
    buffer: CommandBuffer,
    font_mapper: Box<dyn FontMapper>,
    /// Cursor, in user units
    x: f64,
    y: f64,
    margin: f64,
    width: f64,
    height: f64,
    /// Height of the current font, in dots
    font_height: f64
}

impl LabelBuilder {
    /// Creates a builder for the given unit and resolution, in dots per inch
    pub fn new(unit: Unit, resolution: u32) -> Result<LabelBuilder, Error> {
        LabelBuilder::with_profile(LabelProfile::new(unit, resolution))
    }

    /// Creates a builder from a full profile
    ///
    /// The cursor starts at the left margin.
    pub fn with_profile(profile: LabelProfile) -> Result<LabelBuilder, Error> {
        profile.validate()?;
        let converter = UnitConverter::new(profile.unit, profile.resolution);
        let mut builder = LabelBuilder {
            profile,
            converter,
            buffer: CommandBuffer::new(),
            font_mapper: Box::new(FontMap::new()),
            x: 0.0,
            y: 0.0,
            margin: 0.0,
            width: 0.0,
            height: 0.0,
            font_height: converter.font_size_to_dots(DEFAULT_FONT_SIZE)
        };
        builder.apply_profile();
        Ok(builder)
    }

    fn apply_profile(&mut self) {
        self.margin = self.profile.margin;
        self.x = self.profile.margin;
        self.y = 0.0;
        self.width = self.profile.width;
        self.height = self.profile.height;
        self.font_height = self.converter.font_size_to_dots(DEFAULT_FONT_SIZE);
        if let Some(media_width) = self.profile.media_width {
            let width = self.dots(media_width);
            self.buffer.prepend_global(Command::PrintWidth{width}.to_string());
        }
    }

    /// Replaces the font name lookup used by [set_font](LabelBuilder::set_font)
    pub fn set_font_mapper<M: FontMapper + 'static>(&mut self, font_mapper: M) {
        self.font_mapper = Box::new(font_mapper);
    }

    pub fn unit(&self) -> Unit {
        self.converter.unit()
    }

    pub fn resolution(&self) -> u32 {
        self.converter.resolution()
    }

    pub fn converter(&self) -> &UnitConverter {
        &self.converter
    }

    /// Commands added so far
    pub fn buffer(&self) -> &CommandBuffer {
        &self.buffer
    }

    /// Converts a user length to dots
    pub fn to_dots(&self, value: f64) -> f64 {
        self.converter.to_dots(value)
    }

    /// Converts a font size in points to dots
    pub fn font_size_to_dots(&self, points: f64) -> f64 {
        self.converter.font_size_to_dots(points)
    }

    // Whole dots, as written in the commands
    fn dots(&self, value: f64) -> i64 {
        self.converter.to_dots(value).round() as i64
    }

    fn thickness(&self, thickness: f64) -> Result<i64, Error> {
        if thickness == 0.0 {
            return Ok(DEFAULT_THICKNESS);
        }
        Ok(self.dots(positive("thickness", thickness)?))
    }

    fn push(&mut self, command: Command) {
        self.buffer.append(command.to_string());
    }

    fn push_all(&mut self, commands: &[Command]) {
        let line: String = commands.iter().map(|command| command.to_string()).collect();
        self.buffer.append(line);
    }

    /// Sets the print width, in user units
    pub fn set_media_width(&mut self, width: f64) {
        let width = self.dots(width);
        self.push(Command::PrintWidth{width});
    }

    /// Changes the default font
    ///
    /// The font name goes through the font mapper first, unknown names are used verbatim. The size, in points, also becomes the line height of the cells.
    pub fn set_font(&mut self, font: &str, size: f64) {
        let code = self.font_mapper.get(font).unwrap_or(font).to_string();
        self.font_height = self.font_size_to_dots(size);
        let height = self.font_height.round() as i64;
        self.push(Command::ChangeFont{font: code, height});
    }

    /// Selects the international encoding, from 0 to 36
    pub fn set_encoding(&mut self, code: u8) -> Result<(), Error> {
        if code > MAX_ENCODING {
            return Err(Error::InvalidEncoding(code));
        }
        self.push(Command::Encoding{code});
        Ok(())
    }

    /// Default orientation and justification of the following fields
    pub fn set_orientation(&mut self, orientation: Orientation, justification: Justification) {
        self.push(Command::FieldDefaults{orientation, justification});
    }

    /// Moves the label home, in user units
    pub fn set_home(&mut self, x: f64, y: f64) {
        let (x, y) = (self.dots(x), self.dots(y));
        self.push(Command::LabelHome{x, y});
    }

    pub fn draw_dot(&mut self, x: f64, y: f64) {
        let (x, y) = (self.dots(x), self.dots(y));
        self.push_all(&[Command::FieldOrigin{x, y}, Command::GraphicDot, Command::FieldSeparator]);
    }

    /// Writes a text field with its baseline at `x`, `y`
    ///
    /// The characters `^`, `~` and `_` are escaped, everything else is written as given.
    pub fn draw_text(&mut self, x: f64, y: f64, text: &str, options: &TextOptions) -> Result<(), Error> {
        let block_width = match options.width {
            Some(width) => Some(self.dots(positive("text width", width)?)),
            None => None
        };

        self.push(Command::FieldOrientation{orientation: options.orientation});
        let (x, y) = (self.dots(x), self.dots(y));
        self.push(Command::FieldTypeset{x, y, justification: options.justification});
        if let Some(width) = block_width {
            let height = self.font_size_to_dots(options.font_size).round() as i64;
            self.push(Command::TextBlock{width, height});
        }
        if options.invert {
            self.push(Command::FieldReverse);
        }
        self.push(Command::text_data(text));
        Ok(())
    }

    /// Draws a straight bar
    ///
    /// Only horizontal and vertical bars are supported: the bar starts at the cursor, and spans the horizontal and vertical distances between both points.
    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, thickness: f64) -> Result<(), Error> {
        let (width, height) = ((x2 - x1).abs(), (y2 - y1).abs());
        if !width.is_finite() || !height.is_finite() {
            return Err(Error::InvalidGeometry {
                what: "line length",
                value: width + height
            });
        }
        if width == 0.0 && height == 0.0 {
            return Err(Error::InvalidGeometry {
                what: "line length",
                value: 0.0
            });
        }
        let (x, y) = (self.x, self.y);
        self.push_box(x, y, width, height, thickness, LineColor::Black, 0)
    }

    /// Draws a box
    ///
    /// A `thickness` of 0 stands for the default thickness of 3 dots. Rounding goes from 0 (square corners) to 8.
    pub fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, thickness: f64, color: LineColor, rounding: u8) -> Result<(), Error> {
        positive("box width", width)?;
        positive("box height", height)?;
        self.push_box(x, y, width, height, thickness, color, rounding)
    }

    fn push_box(&mut self, x: f64, y: f64, width: f64, height: f64, thickness: f64, color: LineColor, rounding: u8) -> Result<(), Error> {
        if rounding > MAX_ROUNDING {
            return Err(Error::InvalidRounding(rounding));
        }
        let thickness = self.thickness(thickness)?;
        let (x, y) = (self.dots(x), self.dots(y));
        let (width, height) = (self.dots(width), self.dots(height));
        self.push_all(&[
            Command::FieldOrigin{x, y},
            Command::GraphicBox{width, height, thickness, color, rounding},
            Command::FieldSeparator
        ]);
        Ok(())
    }

    /// Draws a circle with its upper left corner at `x`, `y`
    pub fn draw_circle(&mut self, x: f64, y: f64, diameter: f64, thickness: f64, color: LineColor) -> Result<(), Error> {
        positive("circle diameter", diameter)?;
        let thickness = self.thickness(thickness)?;
        let (x, y) = (self.dots(x), self.dots(y));
        let diameter = self.dots(diameter);
        self.push_all(&[
            Command::FieldOrigin{x, y},
            Command::GraphicCircle{diameter, thickness, color},
            Command::FieldSeparator
        ]);
        Ok(())
    }

    /// Draws a table cell at the cursor
    ///
    /// The text sits 10 dots from the left side and a quarter of the height from the top. With an alignment, the text wraps inside the cell. Afterwards, the cursor moves to the right of the cell or, with `ln`, to the margin of the next row. Nothing checks that the cell fits in the label.
    pub fn draw_cell(&mut self, width: f64, height: f64, text: &str, border: bool, ln: bool, align: Option<CellAlign>) -> Result<(), Error> {
        positive("cell width", width)?;
        positive("cell height", height)?;

        let (x, y) = (self.x, self.y);
        if border {
            self.draw_rect(x, y, width, height, 0.0, LineColor::Black, 0)?;
        }
        if !text.is_empty() {
            let height_dots = self.to_dots(height);
            let offset_y = height_dots / 4.0;
            self.push(Command::FieldOrigin {
                x: (self.to_dots(x) + CELL_INSET).round() as i64,
                y: (self.to_dots(y) + offset_y).round() as i64
            });
            if let Some(align) = align {
                let lines = ((height_dots - offset_y) / self.font_height).floor().max(1.0) as i64;
                self.push(Command::FieldBlock {
                    width: (self.to_dots(width) - CELL_INSET).round() as i64,
                    lines,
                    align
                });
            }
            self.push(Command::text_data(text));
        }

        if ln {
            self.y = y + height;
            self.x = self.margin;
        } else {
            self.x = x + width;
        }
        Ok(())
    }

    fn push_barcode(&mut self, x: f64, y: f64, module_width: u8, symbology: Command, data: &str) {
        let (x, y) = (self.dots(x), self.dots(y));
        self.push(Command::FieldOrigin{x, y});
        self.push(Command::BarcodeDefaults{module_width});
        self.push(symbology);
        self.push(Command::raw_data(data));
    }

    fn barcode_height(&self, height: f64, options: &BarcodeOptions) -> Result<i64, Error> {
        if options.module_width < 1 || options.module_width > 10 {
            return Err(Error::InvalidModuleWidth(options.module_width));
        }
        Ok(self.dots(positive("barcode height", height)?))
    }

    /// Code 39 barcode
    ///
    /// The data is written verbatim, it must not contain `^` or `~`.
    pub fn draw_code39(&mut self, x: f64, y: f64, height: f64, data: &str, options: &BarcodeOptions) -> Result<(), Error> {
        let height = self.barcode_height(height, options)?;
        let symbology = Command::Code39 {
            orientation: options.orientation,
            height,
            interpretation: options.interpretation
        };
        self.push_barcode(x, y, options.module_width, symbology, data);
        Ok(())
    }

    /// Code 128 barcode
    ///
    /// The data is written verbatim, it must not contain `^` or `~`.
    pub fn draw_code128(&mut self, x: f64, y: f64, height: f64, data: &str, options: &BarcodeOptions) -> Result<(), Error> {
        let height = self.barcode_height(height, options)?;
        let symbology = Command::Code128 {
            orientation: options.orientation,
            height,
            interpretation: options.interpretation
        };
        self.push_barcode(x, y, options.module_width, symbology, data);
        Ok(())
    }

    /// QR code of roughly `size` user units
    ///
    /// The printer only knows whole magnification factors, each worth 28 dots, so the size gets rounded to the closest one between 1 and 10.
    pub fn draw_qr_code(&mut self, x: f64, y: f64, data: &str, size: f64) -> Result<(), Error> {
        positive("qr code size", size)?;
        let factor = (self.to_dots(size) / QR_DOTS_PER_FACTOR).round();
        let clamped = factor.max(QR_MIN_FACTOR).min(QR_MAX_FACTOR);
        if clamped != factor {
            warn!("QR code magnification {} out of range, using {}", factor, clamped);
        }

        let (x, y) = (self.dots(x), self.dots(y));
        self.push(Command::FieldOrigin{x, y});
        self.push(Command::QrCode{magnification: clamped as u8});
        self.push(Command::raw_data(format!("MA,{}", data)));
        Ok(())
    }

    /// Embeds a picture as a graphic field
    ///
    /// When a width is given the source gets scaled first, keeping its aspect ratio unless a height is given as well.
    pub fn draw_image<S: BitmapSource + ?Sized>(&mut self, x: f64, y: f64, source: &mut S, width: Option<f64>, height: Option<f64>) -> Result<(), Error> {
        let (source_width, source_height) = (source.width(), source.height());
        if source_width == 0 || source_height == 0 {
            return Err(Error::EmptyBitmap{width: source_width, height: source_height});
        }
        if let Some(width) = width {
            let width = self.dots(positive("image width", width)?) as u32;
            let height = match height {
                Some(height) => Some(self.dots(positive("image height", height)?) as u32),
                None => None
            };
            source.scale_image(width, height);
        }

        let payload = raster::encode(&*source)?;
        let (x, y) = (self.dots(x), self.dots(y));
        self.push(Command::FieldOrigin{x, y});
        self.push(Command::GraphicField{payload});
        Ok(())
    }

    /// Adds a command written before the first label and between labels
    pub fn add_pre_command<A: Into<String>>(&mut self, command: A) {
        self.buffer.prepend_global(command);
    }

    pub fn set_pre_commands<A: IntoIterator<Item = B>, B: Into<String>>(&mut self, commands: A) {
        self.buffer.set_pre_commands(commands);
    }

    /// Adds a command written after the last label and between labels
    pub fn add_post_command<A: Into<String>>(&mut self, command: A) {
        self.buffer.append_global(command);
    }

    pub fn set_post_commands<A: IntoIterator<Item = B>, B: Into<String>>(&mut self, commands: A) {
        self.buffer.set_post_commands(commands);
    }

    /// Adds a raw command to the current label
    pub fn add_command<A: Into<String>>(&mut self, command: A) {
        self.push(Command::Raw{text: command.into()});
    }

    /// Starts a new label, moving the cursor to the margin at the top
    pub fn new_page(&mut self) {
        self.buffer.break_page();
        self.y = 0.0;
        self.x = self.margin;
    }

    pub fn set_xy(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_margin(&mut self, margin: f64) {
        self.margin = margin;
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_page_size(&mut self, height: f64, width: f64) {
        self.height = height;
        self.width = width;
    }

    /// The whole document, see [CommandBuffer::serialize]
    pub fn to_zpl(&self) -> String {
        self.buffer.serialize()
    }

    /// Drops every command and brings the cursor, margin and page size back to their initial values
    pub fn reset(&mut self) {
        debug!("Resetting builder with {} labels", self.buffer.label_count());
        self.buffer.clear();
        self.apply_profile();
    }
}

impl fmt::Display for LabelBuilder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_zpl())
    }
}
