/// Monochrome picture, as seen by the raster encoder
///
/// `is_set` answers whether the pixel at `row`, `col` is burnt (foreground). Rows go from the top, columns from the left.
pub trait Bitmap {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn is_set(&self, row: u32, col: u32) -> bool;
}

/// A bitmap that can be resized before being encoded
///
/// Used by [draw_image](crate::LabelBuilder::draw_image) when the caller asks for explicit dimensions. A `None` height keeps the aspect ratio.
pub trait BitmapSource: Bitmap {
    fn scale_image(&mut self, width: u32, height: Option<u32>);
}

/// Plain boolean pixel grid
///
/// ```rust
/// # use zpl_rs::{Bitmap, PixelGrid};
/// let mut grid = PixelGrid::new(3, 2);
/// grid.set(1, 2, true);
/// assert!(grid.is_set(1, 2));
/// assert!(!grid.is_set(0, 0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<bool>
}

impl PixelGrid {
    /// Creates a cleared grid
    pub fn new(width: u32, height: u32) -> PixelGrid {
        PixelGrid {
            width,
            height,
            pixels: vec![false; (width as usize) * (height as usize)]
        }
    }

    /// Builds a grid from a predicate evaluated on every pixel
    pub fn from_fn<F: Fn(u32, u32) -> bool>(width: u32, height: u32, pixel: F) -> PixelGrid {
        let mut grid = PixelGrid::new(width, height);
        for row in 0..height {
            for col in 0..width {
                grid.set(row, col, pixel(row, col));
            }
        }
        grid
    }

    /// Copies any bitmap into a grid
    ///
    /// ```rust
    /// # use zpl_rs::{Bitmap, BitmapSource, PixelGrid};
    /// let original = PixelGrid::from_fn(3, 3, |row, col| row == col);
    /// let mut copy = PixelGrid::from_bitmap(&original);
    /// copy.scale_image(6, None);
    /// assert_eq!(original, PixelGrid::from_fn(3, 3, |row, col| row == col));
    /// assert!(copy.is_set(5, 5));
    /// ```
    pub fn from_bitmap<B: Bitmap + ?Sized>(bitmap: &B) -> PixelGrid {
        PixelGrid::from_fn(bitmap.width(), bitmap.height(), |row, col| bitmap.is_set(row, col))
    }

    pub fn set(&mut self, row: u32, col: u32, value: bool) {
        let index = self.index(row, col);
        self.pixels[index] = value;
    }

    fn index(&self, row: u32, col: u32) -> usize {
        (row as usize) * (self.width as usize) + (col as usize)
    }
}

impl Bitmap for PixelGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn is_set(&self, row: u32, col: u32) -> bool {
        self.pixels[self.index(row, col)]
    }
}

impl BitmapSource for PixelGrid {
    /// Nearest neighbour resampling
    fn scale_image(&mut self, width: u32, height: Option<u32>) {
        let height = height.unwrap_or_else(|| {
            if self.width == 0 {
                0
            } else {
                ((width as f64) * (self.height as f64) / (self.width as f64)).round() as u32
            }
        });
        if self.width == 0 || self.height == 0 {
            *self = PixelGrid::new(width, height);
            return;
        }
        let source = self.clone();
        *self = PixelGrid::from_fn(width, height, |row, col| {
            let src_row = ((row as u64) * (source.height as u64) / (height as u64)) as u32;
            let src_col = ((col as u64) * (source.width as u64) / (width as u64)) as u32;
            source.is_set(src_row, src_col)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_an_empty_grid_stays_clear() {
        let mut grid = PixelGrid::new(4, 0);
        grid.scale_image(8, Some(8));
        assert_eq!((8, 8), (grid.width(), grid.height()));
        assert!((0..8).all(|row| (0..8).all(|col| !grid.is_set(row, col))));
        let mut grid = PixelGrid::new(0, 3);
        grid.scale_image(5, None);
        assert_eq!((5, 0), (grid.width(), grid.height()));
    }

    #[test]
    fn scale_doubles() {
        let mut grid = PixelGrid::from_fn(2, 2, |row, col| row == col);
        grid.scale_image(4, None);
        assert_eq!(4, grid.height());
        assert!(grid.is_set(0, 0) && grid.is_set(1, 1) && grid.is_set(3, 3));
        assert!(!grid.is_set(0, 3) && !grid.is_set(3, 0));
    }

    #[test]
    fn scale_explicit_height() {
        let mut grid = PixelGrid::from_fn(4, 4, |_, col| col < 2);
        grid.scale_image(2, Some(8));
        assert_eq!((2, 8), (grid.width(), grid.height()));
        for row in 0..8 {
            assert!(grid.is_set(row, 0));
            assert!(!grid.is_set(row, 1));
        }
    }
}
