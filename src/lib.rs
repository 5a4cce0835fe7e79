//! Library for building zpl label documents with rust
//!
//! The crate does not talk to any printer, it produces the text of a document that can then be sent through whatever channel the printer listens on (raw tcp socket, usb, a print spooler...).
//!
//! ```rust
//! use zpl_rs::{LabelBuilder, Unit, TextOptions, BarcodeOptions};
//!
//! // Positions and lengths are given in millimeters, for a 203 dpi printer
//! let mut builder = LabelBuilder::new(Unit::Millimeters, 203).unwrap();
//! builder.set_font("0", 12.0);
//! builder.draw_text(5.0, 10.0, "Hello, world!", &TextOptions::default()).unwrap();
//! builder.draw_code128(5.0, 15.0, 10.0, "12345678", &BarcodeOptions::default()).unwrap();
//! // Second label
//! builder.new_page();
//! builder.draw_qr_code(5.0, 5.0, "https://example.com", 14.0).unwrap();
//!
//! let zpl = builder.to_zpl();
//! assert!(zpl.starts_with("^XA\n^CF0,34\n"));
//! assert_eq!(2, zpl.matches("^XZ").count());
//! ```
//!
//! ## Label details
//!
//! The unit, the resolution and the initial page geometry of a document are held by the [LabelProfile](crate::LabelProfile) structure. Every position given afterwards to the builder is in the profile's unit, and gets converted to whole dots.
//!
//! ```rust
//! use zpl_rs::{LabelBuilder, LabelProfile, Unit, Density};
//!
//! let profile = LabelProfile::builder(Unit::Millimeters)
//!     .with_density(Density::Dpmm12)
//!     .with_media_width(100.0)
//!     .with_margin(3.0)
//!     .build();
//! let builder = LabelBuilder::with_profile(profile).unwrap();
//! // The media width is sent once, before the label
//! assert_eq!("^PW1181\n^XA\n^XZ\n", builder.to_zpl());
//! ```
//!
//! Commands added with [add_pre_command](crate::LabelBuilder::add_pre_command) and [add_post_command](crate::LabelBuilder::add_post_command) are repeated around every label of the document.
//!
//! ### Elements
//!
//! For labels printed over and over with the same layout, the [Element](crate::Element) structure describes the drawing calls as data. Elements implement both Serialize and Deserialize from [serde](https://docs.rs/serde), pictures included (they are stored as base64 encoded png), so a layout can be kept as json and replayed on any builder.

pub use builder::{LabelBuilder, LabelProfile, LabelProfileBuilder, Density, TextOptions, BarcodeOptions};
pub use buffer::CommandBuffer;
pub use element::Element;
pub use error::Error;
pub use units::{Unit, UnitConverter};
pub use command::{FontMapper, FontMap};
pub use raster::{Bitmap, BitmapSource, PixelGrid, LabelImage, RasterPayload};

/// Contains raw zpl commands
pub mod command;
/// Monochrome pictures and their graphic field encoding
pub mod raster;

mod builder;
mod buffer;
mod element;
mod error;
mod units;
