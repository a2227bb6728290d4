//! RAM framebuffer with per-pixel change detection
//!
//! All drawing targets this buffer instead of the panel. After a frame is
//! complete, only the rectangular region containing changed pixels is
//! flushed to the hardware in a single transfer.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Bounding box of pixels that have changed since the last flush
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DirtyRect {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl DirtyRect {
    /// Expand the dirty region to include the given pixel coordinate
    fn expand(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Create a new dirty rect covering a single pixel
    fn from_point(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }
}

/// Framebuffer implementing `DrawTarget<Color = Rgb565>`
///
/// Borrows its pixel storage so the caller decides where it lives (a
/// `static` on the target, a `Vec` in tests). A fresh buffer is fully
/// dirty so the first flush paints the whole panel.
pub struct FrameBuffer<'a> {
    pixels: &'a mut [Rgb565],
    width: usize,
    height: usize,
    dirty: Option<DirtyRect>,
}

impl<'a> FrameBuffer<'a> {
    /// Wrap pixel storage of at least `width * height` pixels
    ///
    /// Returns `None` if the storage is too small.
    pub fn new(pixels: &'a mut [Rgb565], width: u16, height: u16) -> Option<Self> {
        let width = usize::from(width);
        let height = usize::from(height);
        if width == 0 || height == 0 || pixels.len() < width * height {
            return None;
        }

        Some(Self {
            pixels,
            width,
            height,
            dirty: Some(DirtyRect {
                min_x: 0,
                min_y: 0,
                max_x: width - 1,
                max_y: height - 1,
            }),
        })
    }

    /// Pixel at a coordinate, `None` outside the buffer
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb565> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Check if any pixel changed since the last flush
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_some()
    }

    /// Write a single pixel, expanding the dirty rect only if the color changed
    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        let idx = y * self.width + x;
        if self.pixels[idx] != color {
            self.pixels[idx] = color;
            match &mut self.dirty {
                Some(rect) => rect.expand(x, y),
                None => self.dirty = Some(DirtyRect::from_point(x, y)),
            }
        }
    }

    /// Flush the dirty region to a display, then reset the dirty state
    ///
    /// Only the bounding rectangle of changed pixels is sent, via
    /// `fill_contiguous`. If nothing changed, this is a no-op. On error
    /// the region stays dirty so the next flush retries it.
    pub fn flush<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(rect) = self.dirty else {
            return Ok(());
        };

        let width = rect.max_x - rect.min_x + 1;
        let height = rect.max_y - rect.min_y + 1;
        let area = Rectangle::new(
            Point::new(rect.min_x as i32, rect.min_y as i32),
            Size::new(width as u32, height as u32),
        );

        let pixels = &*self.pixels;
        let stride = self.width;
        let pixel_iter = (rect.min_y..=rect.max_y).flat_map(move |y| {
            let row_start = y * stride + rect.min_x;
            pixels[row_start..row_start + width].iter().copied()
        });

        display.fill_contiguous(&area, pixel_iter)?;
        self.dirty = None;
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer<'_> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for FrameBuffer<'_> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let (x, y) = (coord.x, coord.y);
            if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped = area.intersection(&self.bounding_box());
        let Some(bottom_right) = clipped.bottom_right() else {
            return Ok(());
        };

        let top_left = clipped.top_left;
        for y in top_left.y as usize..=bottom_right.y as usize {
            for x in top_left.x as usize..=bottom_right.x as usize {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        for y in 0..self.height {
            for x in 0..self.width {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }
}
