use super::{Orientation, LineColor, Justification, CellAlign};
use crate::raster::RasterPayload;
use serde::{Serialize, Deserialize};
use std::fmt;

/// Characters that structure the command grammar, with the hex escape used inside `^FH` fields
const CONTROL_CHAR_ESCAPES: [(char, &str); 3] = [
    ('^', "_5E"),
    ('~', "_7E"),
    ('_', "_5F")
];

/// Raw zpl commands
///
/// The `Display` implementation gives the exact text sent to the printer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum Command {
    /// Start of a label format, ^XA
    StartFormat,
    /// End of a label format, ^XZ
    EndFormat,
    /// Print width in dots, ^PW
    PrintWidth {
        width: i64
    },
    /// Default font, ^CF
    ChangeFont {
        font: String,
        height: i64
    },
    /// International encoding, ^CI
    Encoding {
        code: u8
    },
    /// Default orientation and justification for the following fields, ^FW
    FieldDefaults {
        orientation: Orientation,
        justification: Justification
    },
    /// Orientation for the following fields, ^FW
    FieldOrientation {
        orientation: Orientation
    },
    /// Label home offset, ^LH
    LabelHome {
        x: i64,
        y: i64
    },
    /// Upper left corner of the next field, ^FO
    FieldOrigin {
        x: i64,
        y: i64
    },
    /// Baseline origin of the next field, ^FT
    FieldTypeset {
        x: i64,
        y: i64,
        justification: Justification
    },
    /// Wrapping text block, ^TB
    TextBlock {
        width: i64,
        height: i64
    },
    /// Multi-line field block, ^FB
    FieldBlock {
        width: i64,
        lines: i64,
        align: CellAlign
    },
    /// Reverses the colors of the next field, ^FR
    FieldReverse,
    /// Field data terminated by ^FS. With `hex_escaped`, an ^FH prefix enables the escapes
    FieldData {
        data: String,
        hex_escaped: bool
    },
    /// A small graphic box, ^GB2
    GraphicDot,
    /// Graphic box, ^GB
    GraphicBox {
        width: i64,
        height: i64,
        thickness: i64,
        color: LineColor,
        rounding: u8
    },
    /// Graphic circle, ^GC
    GraphicCircle {
        diameter: i64,
        thickness: i64,
        color: LineColor
    },
    /// Terminates a field, ^FS
    FieldSeparator,
    /// Module width for the next barcode, ^BY
    BarcodeDefaults {
        module_width: u8
    },
    /// Code 39 barcode, ^B3
    Code39 {
        orientation: Orientation,
        height: i64,
        interpretation: bool
    },
    /// Code 128 barcode, ^BC
    Code128 {
        orientation: Orientation,
        height: i64,
        interpretation: bool
    },
    /// QR code model 2, ^BQ
    QrCode {
        magnification: u8
    },
    /// ASCII hex graphic field, ^GFA
    GraphicField {
        payload: RasterPayload
    },
    /// Anything not covered above, written verbatim
    Raw {
        text: String
    }
}

impl Command {
    /// Replaces the control characters of the protocol with their hex escapes
    ///
    /// ```rust
    /// # use zpl_rs::command::Command;
    /// assert_eq!("A_5EB_7EC_5FD", Command::escape("A^B~C_D"));
    /// ```
    pub fn escape<A: AsRef<str>>(text: A) -> String {
        let text = text.as_ref();
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match CONTROL_CHAR_ESCAPES.iter().find(|(control, _)| *control == c) {
                Some((_, replacement)) => escaped.push_str(replacement),
                None => escaped.push(c)
            }
        }
        escaped
    }

    /// Field data with the control characters escaped
    pub fn text_data<A: AsRef<str>>(text: A) -> Command {
        Command::FieldData {
            data: Command::escape(text),
            hex_escaped: true
        }
    }

    /// Field data taken verbatim
    pub fn raw_data<A: Into<String>>(data: A) -> Command {
        Command::FieldData {
            data: data.into(),
            hex_escaped: false
        }
    }
}

fn yes_no(flag: bool) -> char {
    if flag { 'Y' } else { 'N' }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Command::StartFormat => write!(f, "^XA"),
            Command::EndFormat => write!(f, "^XZ"),
            Command::PrintWidth{width} => write!(f, "^PW{}", width),
            Command::ChangeFont{font, height} => write!(f, "^CF{},{}", font, height),
            Command::Encoding{code} => write!(f, "^CI{}", code),
            Command::FieldDefaults{orientation, justification} => {
                write!(f, "^FW{},{}", orientation.as_char(), justification.as_digit())
            },
            Command::FieldOrientation{orientation} => write!(f, "^FW{}", orientation.as_char()),
            Command::LabelHome{x, y} => write!(f, "^LH{},{}", x, y),
            Command::FieldOrigin{x, y} => write!(f, "^FO{},{}", x, y),
            Command::FieldTypeset{x, y, justification} => {
                write!(f, "^FT{},{},{}", x, y, justification.as_digit())
            },
            Command::TextBlock{width, height} => write!(f, "^TB,{},{}", width, height),
            Command::FieldBlock{width, lines, align} => {
                write!(f, "^FB{},{},0,{}", width, lines, align.as_char())
            },
            Command::FieldReverse => write!(f, "^FR"),
            Command::FieldData{data, hex_escaped} => {
                if *hex_escaped {
                    write!(f, "^FH^FD{}^FS", data)
                } else {
                    write!(f, "^FD{}^FS", data)
                }
            },
            Command::GraphicDot => write!(f, "^GB2"),
            Command::GraphicBox{width, height, thickness, color, rounding} => {
                write!(f, "^GB{},{},{},{},{}", width, height, thickness, color.as_char(), rounding)
            },
            Command::GraphicCircle{diameter, thickness, color} => {
                write!(f, "^GC{},{},{}", diameter, thickness, color.as_char())
            },
            Command::FieldSeparator => write!(f, "^FS"),
            Command::BarcodeDefaults{module_width} => write!(f, "^BY{}", module_width),
            Command::Code39{orientation, height, interpretation} => {
                write!(f, "^B3{},N,{},{}", orientation.as_char(), height, yes_no(*interpretation))
            },
            Command::Code128{orientation, height, interpretation} => {
                write!(f, "^BC{},{},{}", orientation.as_char(), height, yes_no(*interpretation))
            },
            Command::QrCode{magnification} => write!(f, "^BQN,2,{}", magnification),
            Command::GraphicField{payload} => write!(f, "^GFA,{}", payload),
            Command::Raw{text} => write!(f, "{}", text)
        }
    }
}
