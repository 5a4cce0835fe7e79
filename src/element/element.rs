use crate::{
    Error, LabelBuilder, TextOptions, BarcodeOptions,
    command::{LineColor, CellAlign},
    raster::LabelImage
};
use serde::{Serialize, Deserialize};

/// Label templates
///
/// An [Element](crate::Element) describes one drawing call of a [LabelBuilder](crate::LabelBuilder), so a whole label can be stored (for example as json) and replayed on any builder with [apply](Element::apply). Elements can be added together to form compound elements.
///
/// ```rust
/// use zpl_rs::{Element, LabelBuilder, TextOptions, Unit};
///
/// let mut template = Element::font("0", 10.0);
/// template += Element::text(10.0, 30.0, "Hello", TextOptions::default());
/// template += Element::NewPage;
///
/// let mut builder = LabelBuilder::new(Unit::Dots, 203).unwrap();
/// template.apply(&mut builder).unwrap();
/// assert_eq!(2, builder.buffer().label_count());
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "kind")]
pub enum Element {
    /// Elements applied one after the other
    Compound {
        elements: Vec<Element>
    },
    /// Default font, with a size in points
    Font {
        font: String,
        size: f64
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        #[serde(default)]
        options: TextOptions
    },
    /// Bar starting at the cursor, see [draw_line](crate::LabelBuilder::draw_line)
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        #[serde(default)]
        thickness: f64
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        #[serde(default)]
        thickness: f64,
        #[serde(default)]
        color: LineColor,
        #[serde(default)]
        rounding: u8
    },
    Circle {
        x: f64,
        y: f64,
        diameter: f64,
        #[serde(default)]
        thickness: f64,
        #[serde(default)]
        color: LineColor
    },
    /// Table cell at the cursor
    Cell {
        width: f64,
        height: f64,
        text: String,
        #[serde(default)]
        border: bool,
        #[serde(default)]
        ln: bool,
        #[serde(default)]
        align: Option<CellAlign>
    },
    Code39 {
        x: f64,
        y: f64,
        height: f64,
        data: String,
        #[serde(default)]
        options: BarcodeOptions
    },
    Code128 {
        x: f64,
        y: f64,
        height: f64,
        data: String,
        #[serde(default)]
        options: BarcodeOptions
    },
    QrCode {
        x: f64,
        y: f64,
        data: String,
        size: f64
    },
    /// Picture, scaled when a width is present
    Image {
        x: f64,
        y: f64,
        image: LabelImage,
        #[serde(default)]
        width: Option<f64>,
        #[serde(default)]
        height: Option<f64>
    },
    /// Moves the cursor
    Move {
        x: f64,
        y: f64
    },
    /// Command written verbatim in the current label
    Raw {
        command: String
    },
    NewPage
}

/// Element addition
impl std::ops::Add<Element> for Element {
    type Output = Element;
    fn add(self, rhs: Element) -> Self::Output {
        let mut elements = match self {
            Element::Compound{elements} => elements,
            lhs => vec![lhs]
        };
        match rhs {
            Element::Compound{elements: mut rhs_elements} => elements.append(&mut rhs_elements),
            rhs => elements.push(rhs)
        }
        Element::Compound{elements}
    }
}

/// Mutable addition for elements
impl std::ops::AddAssign for Element {
    fn add_assign(&mut self, other: Self) {
        let lhs = std::mem::replace(self, Element::Compound{elements: Vec::new()});
        *self = lhs + other;
    }
}

impl Element {
    /// Returns true if the element is compound
    pub fn is_compound(&self) -> bool {
        matches!(self, Element::Compound{..})
    }

    pub fn font<A: Into<String>>(font: A, size: f64) -> Element {
        Element::Font {
            font: font.into(),
            size
        }
    }

    pub fn text<A: Into<String>>(x: f64, y: f64, text: A, options: TextOptions) -> Element {
        Element::Text {
            x,
            y,
            text: text.into(),
            options
        }
    }

    /// Rectangle with the default thickness, black and square
    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Element {
        Element::Rect {
            x,
            y,
            width,
            height,
            thickness: 0.0,
            color: LineColor::Black,
            rounding: 0
        }
    }

    pub fn cell<A: Into<String>>(width: f64, height: f64, text: A, border: bool, ln: bool, align: Option<CellAlign>) -> Element {
        Element::Cell {
            width,
            height,
            text: text.into(),
            border,
            ln,
            align
        }
    }

    pub fn qr_code<A: Into<String>>(x: f64, y: f64, data: A, size: f64) -> Element {
        Element::QrCode {
            x,
            y,
            data: data.into(),
            size
        }
    }

    pub fn image(x: f64, y: f64, image: LabelImage) -> Element {
        Element::Image {
            x,
            y,
            image,
            width: None,
            height: None
        }
    }

    /// Draws the element with the builder
    ///
    /// Compound elements stop at the first failing element, leaving the previous ones applied.
    pub fn apply(&self, builder: &mut LabelBuilder) -> Result<(), Error> {
        match self {
            Element::Compound{elements} => {
                for element in elements {
                    element.apply(builder)?;
                }
            },
            Element::Font{font, size} => builder.set_font(font, *size),
            Element::Text{x, y, text, options} => builder.draw_text(*x, *y, text, options)?,
            Element::Line{x1, y1, x2, y2, thickness} => builder.draw_line(*x1, *y1, *x2, *y2, *thickness)?,
            Element::Rect{x, y, width, height, thickness, color, rounding} => {
                builder.draw_rect(*x, *y, *width, *height, *thickness, *color, *rounding)?
            },
            Element::Circle{x, y, diameter, thickness, color} => builder.draw_circle(*x, *y, *diameter, *thickness, *color)?,
            Element::Cell{width, height, text, border, ln, align} => {
                builder.draw_cell(*width, *height, text, *border, *ln, *align)?
            },
            Element::Code39{x, y, height, data, options} => builder.draw_code39(*x, *y, *height, data, options)?,
            Element::Code128{x, y, height, data, options} => builder.draw_code128(*x, *y, *height, data, options)?,
            Element::QrCode{x, y, data, size} => builder.draw_qr_code(*x, *y, data, *size)?,
            Element::Image{x, y, image, width, height} => {
                // Scaling works on a copy, the template keeps its picture
                let mut image = image.clone();
                builder.draw_image(*x, *y, &mut image, *width, *height)?
            },
            Element::Move{x, y} => builder.set_xy(*x, *y),
            Element::Raw{command} => builder.add_command(command.as_str()),
            Element::NewPage => builder.new_page()
        }
        Ok(())
    }
}
