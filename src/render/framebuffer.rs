//! RGB565 pixel buffer covering the whole board

use crate::game::{Cell, GRID_EXTENT, TILE_SIZE};

/// Packed 16-bit color: blue in bits 0-4, green in 5-10, red in 11-15
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const WHITE: Self = Self(0xFFFF);
    pub const BLACK: Self = Self(0x0000);

    /// Pack channels, masking each to its field width
    pub const fn pack(blue: u16, green: u16, red: u16) -> Self {
        Self((blue & 31) | ((green & 63) << 5) | ((red & 31) << 11))
    }

    pub const fn blue(&self) -> u16 {
        self.0 & 31
    }

    pub const fn green(&self) -> u16 {
        (self.0 >> 5) & 63
    }

    pub const fn red(&self) -> u16 {
        (self.0 >> 11) & 31
    }

    /// Expand to 8-bit channels as (red, green, blue)
    pub fn to_rgb888(&self) -> (u8, u8, u8) {
        let scale5 = |v: u16| ((v * 255 + 15) / 31) as u8;
        let scale6 = |v: u16| ((v * 255 + 31) / 63) as u8;
        (scale5(self.red()), scale6(self.green()), scale5(self.blue()))
    }
}

/// Board background
pub const BACKGROUND: Rgb565 = Rgb565::pack(31, 63, 31);
/// Snake body
pub const SNAKE: Rgb565 = Rgb565::BLACK;
/// Target cell
pub const TARGET: Rgb565 = Rgb565::pack(0, 0, 31);

/// Geometry of a pixel rectangle handed to a display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferDescriptor {
    pub width: u16,
    pub height: u16,
    /// Pixels between the starts of two consecutive rows
    pub pitch: u16,
    /// Total number of pixels in the buffer
    pub buf_size: u32,
}

const EXTENT: usize = GRID_EXTENT as usize;

/// Row-major RGB565 pixels for the whole board
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    pixels: Box<[u16]>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: vec![BACKGROUND.0; EXTENT * EXTENT].into_boxed_slice(),
        }
    }

    pub fn descriptor(&self) -> BufferDescriptor {
        BufferDescriptor {
            width: EXTENT as u16,
            height: EXTENT as u16,
            pitch: EXTENT as u16,
            buf_size: self.pixels.len() as u32,
        }
    }

    pub fn pixels(&self) -> &[u16] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Rgb565 {
        Rgb565(self.pixels[y * EXTENT + x])
    }

    /// Paint every pixel with the background color
    pub fn fill_background(&mut self) {
        self.pixels.fill(BACKGROUND.0);
    }

    /// Fill the tile anchored at `cell` with a solid color
    ///
    /// Tiles that fall partly off the board are clipped.
    pub fn paint_cell(&mut self, cell: Cell, color: Rgb565) {
        let x0 = cell.x.clamp(0, GRID_EXTENT) as usize;
        let y0 = cell.y.clamp(0, GRID_EXTENT) as usize;
        let x1 = (cell.x + TILE_SIZE).clamp(0, GRID_EXTENT) as usize;
        let y1 = (cell.y + TILE_SIZE).clamp(0, GRID_EXTENT) as usize;

        for y in y0..y1 {
            self.pixels[y * EXTENT + x0..y * EXTENT + x1].fill(color.0);
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
