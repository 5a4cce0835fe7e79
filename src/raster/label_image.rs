use super::{Bitmap, BitmapSource};
use crate::Error;
use image::{DynamicImage, GenericImageView, ImageFormat, imageops::FilterType};
use serde::{Serialize, Deserialize, ser::Serializer, de::Deserializer};
use serde::ser::SerializeTuple;

use base64::{Engine, engine::general_purpose::STANDARD};

use std::io::Cursor;

/// Luminance under which a pixel gets printed
const DEFAULT_THRESHOLD: u8 = 128;

/// Alpha at or below which a pixel counts as transparent
const TRANSPARENT_ALPHA: u8 = 64;

/// Picture adapted to the printer.
///
/// Wraps a [DynamicImage](https://docs.rs/image/0.25/image/enum.DynamicImage.html) and decides, pixel by pixel, what gets burnt. Transparent pixels are never printed, the rest are printed when their luminance falls under the threshold.
#[derive(Clone, Debug)]
pub struct LabelImage {
    dynamic_image: DynamicImage,
    threshold: u8
}

impl LabelImage {
    pub fn new(dynamic_image: DynamicImage) -> LabelImage {
        LabelImage {
            dynamic_image,
            threshold: DEFAULT_THRESHOLD
        }
    }

    /// Loads an image from an encoded byte sequence (png, jpeg, ...)
    pub fn from_bytes(source: &[u8]) -> Result<LabelImage, Error> {
        let dynamic_image = image::load_from_memory(source)?;
        Ok(LabelImage::new(dynamic_image))
    }

    /// Changes the luminance threshold, from 0 (nothing printed) to 255
    pub fn with_threshold(mut self, threshold: u8) -> LabelImage {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn dynamic_image(&self) -> &DynamicImage {
        &self.dynamic_image
    }

    /// Png encoding of the current picture, in base64
    fn encoded_source(&self) -> Result<String, Error> {
        let mut encoded = Cursor::new(Vec::new());
        self.dynamic_image.write_to(&mut encoded, ImageFormat::Png)?;
        Ok(STANDARD.encode(encoded.into_inner()))
    }
}

impl Bitmap for LabelImage {
    fn width(&self) -> u32 {
        self.dynamic_image.width()
    }

    fn height(&self) -> u32 {
        self.dynamic_image.height()
    }

    fn is_set(&self, row: u32, col: u32) -> bool {
        let [r, g, b, a] = self.dynamic_image.get_pixel(col, row).0;
        if a <= TRANSPARENT_ALPHA {
            return false;
        }
        let luminance = 0.2126 * (r as f64) + 0.7152 * (g as f64) + 0.0722 * (b as f64);
        luminance < self.threshold as f64
    }
}

impl BitmapSource for LabelImage {
    fn scale_image(&mut self, width: u32, height: Option<u32>) {
        let (im_width, im_height) = self.dynamic_image.dimensions();
        let height = height.unwrap_or_else(|| {
            if im_width == 0 {
                0
            } else {
                ((width as f64) * (im_height as f64) / (im_width as f64)).round() as u32
            }
        });
        log::debug!("Scaling image from {}x{} to {}x{}", im_width, im_height, width, height);
        self.dynamic_image = self.dynamic_image.resize_exact(width, height, FilterType::Nearest);
    }
}

// Manual implementation of serialization
impl Serialize for LabelImage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer {
        let source = self.encoded_source().map_err(|e| <S::Error as serde::ser::Error>::custom(e))?;
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&source)?;
        tup.serialize_element(&self.threshold)?;
        tup.end()
    }
}

struct LabelImageVisitor;

impl<'de> serde::de::Visitor<'de> for LabelImageVisitor {
    type Value = LabelImage;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a tuple containing as first element a base64 encoded image, as second the threshold")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error> where A: serde::de::SeqAccess<'de> {
        let value: String = seq.next_element()?.ok_or_else(|| serde::de::Error::custom("first element of tuple missing"))?;
        let content = STANDARD.decode(value.as_bytes()).map_err(|_| serde::de::Error::custom("string is not a valid base64 sequence"))?;
        let label_image = LabelImage::from_bytes(&content).map_err(|e| serde::de::Error::custom(format!("first element of tuple not an image, {}", e)))?;
        let threshold: u8 = seq.next_element()?.ok_or_else(|| serde::de::Error::custom("second element of tuple missing"))?;
        Ok(label_image.with_threshold(threshold))
    }
}

// Manual implementation of deserialization
impl<'de> Deserialize<'de> for LabelImage {
    fn deserialize<D>(deserializer: D) -> Result<LabelImage, D::Error>
    where D: Deserializer<'de> {
        deserializer.deserialize_tuple(2, LabelImageVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn checkerboard() -> LabelImage {
        let mut buffer = RgbaImage::new(4, 2);
        for (x, y, pixel) in buffer.enumerate_pixels_mut() {
            *pixel = if (x + y) % 2 == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, 255])
            };
        }
        LabelImage::new(DynamicImage::ImageRgba8(buffer))
    }

    #[test]
    fn dark_pixels_are_set() {
        let image = checkerboard();
        assert!(image.is_set(0, 0));
        assert!(!image.is_set(0, 1));
        assert!(image.is_set(1, 1));
    }

    #[test]
    fn transparent_pixels_are_clear() {
        let buffer = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 10]));
        let image = LabelImage::new(DynamicImage::ImageRgba8(buffer));
        assert!(!image.is_set(0, 0));
    }

    #[test]
    fn threshold_moves_the_cut() {
        let buffer = RgbaImage::from_pixel(1, 1, Rgba([150, 150, 150, 255]));
        let image = LabelImage::new(DynamicImage::ImageRgba8(buffer));
        assert!(!image.is_set(0, 0));
        assert!(image.with_threshold(200).is_set(0, 0));
    }

    #[test]
    fn scaling_keeps_aspect_ratio() {
        let mut image = checkerboard();
        image.scale_image(8, None);
        assert_eq!((8, 4), (image.width(), image.height()));
        image.scale_image(2, Some(6));
        assert_eq!((2, 6), (image.width(), image.height()));
    }

    #[test]
    fn serde_round_trip() {
        let image = checkerboard().with_threshold(90);
        let json = serde_json::to_string(&image).unwrap();
        let back: LabelImage = serde_json::from_str(&json).unwrap();
        assert_eq!(90, back.threshold());
        assert_eq!((4, 2), (back.width(), back.height()));
        for row in 0..2 {
            for col in 0..4 {
                assert_eq!(image.is_set(row, col), back.is_set(row, col));
            }
        }
    }
}
