use super::{Bitmap, compression};
use crate::Error;
use serde::{Serialize, Deserialize};
use std::fmt;

/// Encoded graphic field, ready to follow `^GFA,`
///
/// The byte counts always describe the decompressed data, regardless of how much the hex text was compressed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RasterPayload {
    /// Total bytes of the decompressed image
    pub byte_count: usize,
    /// Same as `byte_count` for ASCII hex fields
    pub field_byte_count: usize,
    /// Bytes per row, each row padded to a whole byte
    pub bytes_per_row: usize,
    /// Compressed hex digits
    pub data: String
}

impl RasterPayload {
    /// Number of rows in the image
    pub fn rows(&self) -> usize {
        if self.bytes_per_row == 0 {
            0
        } else {
            self.byte_count / self.bytes_per_row
        }
    }

    /// Expands the data back into packed bytes, `bytes_per_row` bytes per row
    pub fn decompress(&self) -> Result<Vec<u8>, Error> {
        compression::decompress(&self.data, self.bytes_per_row, self.rows())
    }
}

/// Field header followed by the data, as expected after `^GFA,`
impl fmt::Display for RasterPayload {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{},{}", self.byte_count, self.field_byte_count, self.bytes_per_row, self.data)
    }
}

/// Encodes a bitmap into a compressed graphic field
///
/// Each row packs 8 pixels per byte, most significant bit first, padding the last byte of the row with cleared bits. Bytes become uppercase hex digit pairs, which are then compressed row by row (see [decompress](crate::raster::decompress)).
///
/// ```rust
/// # use zpl_rs::{PixelGrid, raster};
/// // A 10 pixel wide, 3 pixel high bar
/// let bar = PixelGrid::from_fn(10, 3, |_, _| true);
/// let payload = raster::encode(&bar).unwrap();
/// assert_eq!(2, payload.bytes_per_row);
/// assert_eq!(6, payload.byte_count);
/// assert_eq!("6,6,2,FFC,::", payload.to_string());
/// ```
pub fn encode<B: Bitmap + ?Sized>(bitmap: &B) -> Result<RasterPayload, Error> {
    let (width, height) = (bitmap.width(), bitmap.height());
    if width == 0 || height == 0 {
        return Err(Error::EmptyBitmap { width, height });
    }

    let bytes_per_row = ((width as usize) + 7) / 8;
    let byte_count = bytes_per_row * (height as usize);

    let mut data = String::new();
    let mut packed = vec![0u8; bytes_per_row];
    let mut previous: Option<String> = None;
    for row in 0..height {
        pack_row(bitmap, row, &mut packed);
        let hex = to_hex(&packed);
        compression::compress_row(hex.as_bytes(), previous.as_ref().map(|p| p.as_bytes()), &mut data);
        previous = Some(hex);
    }

    log::debug!(
        "Encoded {}x{} bitmap, {} bytes in {} characters",
        width, height, byte_count, data.len()
    );

    Ok(RasterPayload {
        byte_count,
        field_byte_count: byte_count,
        bytes_per_row,
        data
    })
}

/// Packs one row of the bitmap, most significant bit first
pub fn pack_row<B: Bitmap + ?Sized>(bitmap: &B, row: u32, target: &mut [u8]) {
    for byte in target.iter_mut() {
        *byte = 0;
    }
    for col in 0..bitmap.width() {
        if bitmap.is_set(row, col) {
            target[(col / 8) as usize] |= 0x80 >> (col % 8);
        }
    }
}

/// Uppercase hex digits, no separators
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{:02X}", byte)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelGrid;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn unpack(bytes: &[u8], bytes_per_row: usize, row: usize, col: usize) -> bool {
        bytes[row * bytes_per_row + col / 8] & (0x80 >> (col % 8)) != 0
    }

    #[test]
    fn empty_bitmaps_fail() {
        for (w, h) in &[(0, 0), (0, 4), (4, 0)] {
            match encode(&PixelGrid::new(*w, *h)) {
                Err(Error::EmptyBitmap{width, height}) => assert_eq!((*w, *h), (width, height)),
                other => panic!("unexpected {:?}", other)
            }
        }
    }

    #[test]
    fn packs_most_significant_bit_first() {
        let grid = PixelGrid::from_fn(9, 1, |_, col| col == 0 || col == 7 || col == 8);
        let mut packed = [0xAAu8; 2];
        pack_row(&grid, 0, &mut packed);
        assert_eq!([0x81, 0x80], packed);
        assert_eq!("8180", to_hex(&packed));
    }

    #[test]
    fn header_matches_dimensions() {
        let grid = PixelGrid::from_fn(17, 5, |row, col| (row + col) % 3 == 0);
        let payload = encode(&grid).unwrap();
        assert_eq!(3, payload.bytes_per_row);
        assert_eq!(15, payload.byte_count);
        assert_eq!(payload.byte_count, payload.field_byte_count);
        assert_eq!(5, payload.rows());
        assert!(payload.to_string().starts_with("15,15,3,"));
    }

    #[test]
    fn random_bitmaps_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x5a9c);
        for _ in 0..200 {
            let width = rng.random_range(1..=70u32);
            let height = rng.random_range(1..=12u32);
            let density: f64 = rng.random_range(0.0..=1.0);
            let mut grid = PixelGrid::new(width, height);
            for row in 0..height {
                // Some rows copy the one above to exercise the row repeat
                if row > 0 && rng.random_bool(0.3) {
                    for col in 0..width {
                        let above = grid.is_set(row - 1, col);
                        grid.set(row, col, above);
                    }
                } else {
                    for col in 0..width {
                        grid.set(row, col, rng.random_bool(density));
                    }
                }
            }

            let payload = encode(&grid).unwrap();
            let bytes_per_row = ((width + 7) / 8) as usize;
            assert_eq!(bytes_per_row, payload.bytes_per_row);
            assert_eq!(bytes_per_row * height as usize, payload.byte_count);

            let bytes = payload.decompress().unwrap();
            assert_eq!(payload.byte_count, bytes.len());
            for row in 0..height {
                for col in 0..width {
                    assert_eq!(
                        grid.is_set(row, col),
                        unpack(&bytes, bytes_per_row, row as usize, col as usize),
                        "pixel {},{} of a {}x{} bitmap", row, col, width, height
                    );
                }
                // Padding stays cleared
                for col in width as usize..bytes_per_row * 8 {
                    assert!(!unpack(&bytes, bytes_per_row, row as usize, col));
                }
            }
        }
    }

    #[test]
    fn wide_runs_round_trip() {
        let mut rng = StdRng::seed_from_u64(0x2b1d);
        let mut long_counts = 0;
        for _ in 0..40 {
            let width = rng.random_range(1600..=6000u32);
            let height = rng.random_range(1..=4u32);
            let mut grid = PixelGrid::new(width, height);
            for row in 0..height {
                let mut col = 0;
                while col < width {
                    let run = rng.random_range(1..=2500u32).min(width - col);
                    // Constant runs alternate with noise
                    match rng.random_range(0..3u8) {
                        0 => (),
                        1 => for offset in 0..run {
                            grid.set(row, col + offset, true);
                        },
                        _ => for offset in 0..run {
                            grid.set(row, col + offset, rng.random_bool(0.5));
                        }
                    }
                    col += run;
                }
            }

            let payload = encode(&grid).unwrap();
            if payload.data.contains('z') {
                long_counts += 1;
            }
            let bytes = payload.decompress().unwrap();
            let bytes_per_row = payload.bytes_per_row;
            for row in 0..height {
                for col in 0..width {
                    assert_eq!(
                        grid.is_set(row, col),
                        unpack(&bytes, bytes_per_row, row as usize, col as usize),
                        "pixel {},{} of a {}x{} bitmap", row, col, width, height
                    );
                }
            }
        }
        // Runs over 400 digits were produced and expanded
        assert!(long_counts > 0);
    }

    #[test]
    fn repeated_rows_are_shorter() {
        let mut rng = StdRng::seed_from_u64(7);
        for height in 2..10u32 {
            let first: Vec<bool> = (0..40).map(|_| rng.random_bool(0.5)).collect();
            let grid = PixelGrid::from_fn(40, height, |_, col| first[col as usize]);
            let payload = encode(&grid).unwrap();
            let uncompressed = payload.byte_count * 2;
            assert!(payload.data.len() < uncompressed);
            assert_eq!(height as usize - 1, payload.data.matches(':').count());
        }
    }
}
