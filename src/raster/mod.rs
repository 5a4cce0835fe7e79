//! Raster images as graphic fields
pub use self::bitmap::{Bitmap, BitmapSource, PixelGrid};
pub use self::compression::decompress;
pub use self::encoder::{RasterPayload, encode, pack_row, to_hex};
pub use self::label_image::LabelImage;

mod bitmap;
mod compression;
mod encoder;
mod label_image;
