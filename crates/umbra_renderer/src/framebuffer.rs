//! Fixed-size 8-bit RGB frame buffer.

use crate::Color;
use umbra_core::ColorWrite;

/// Row-major RGB buffer with a top-left origin.
///
/// The integrator addresses pixels in scene space, where `j = 0` is the
/// bottom row; [`FrameBuffer::set_pixel`] flips them so storage row 0 is
/// the top of the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 3]>,
}

impl FrameBuffer {
    /// Create a new buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0; 3]; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at storage position (x, y), top-left origin.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at storage position (x, y), top-left origin.
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let index = self.index(x, y);
        self.pixels[index] = rgb;
    }

    /// Write scene-space pixel (i, j), bottom-left origin, narrowing the
    /// color with `policy`.
    pub fn set_pixel(&mut self, i: u32, j: u32, color: Color, policy: ColorWrite) {
        assert!(j < self.height, "row {j} outside buffer of height {}", self.height);
        self.set(i, self.height - 1 - j, policy.narrow_rgb(color));
    }

    /// Read scene-space pixel (i, j), bottom-left origin.
    pub fn get_pixel(&self, i: u32, j: u32) -> [u8; 3] {
        assert!(j < self.height, "row {j} outside buffer of height {}", self.height);
        self.get(i, self.height - 1 - j)
    }

    /// Storage rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[[u8; 3]]> {
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }

    /// Largest channel value anywhere in the buffer.
    pub fn max_channel(&self) -> u8 {
        self.pixels.iter().flatten().copied().max().unwrap_or(0)
    }
}
