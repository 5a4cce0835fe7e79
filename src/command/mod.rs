pub use self::command::Command;
pub use self::font::{FontMapper, FontMap};
pub use self::justification::{Justification, CellAlign};
pub use self::line_color::LineColor;
pub use self::orientation::Orientation;

mod command;
mod font;
mod justification;
mod line_color;
mod orientation;
