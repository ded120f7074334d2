use crate::window::Bounds;

/// One entry of the window server's window list, as reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawWindow {
    pub id: Option<u32>,
    pub owner_name: Option<String>,
    pub title: Option<String>,
    pub owner_pid: Option<i32>,
    pub bounds: Option<Bounds>,
    pub layer: Option<i32>,
}

/// Pixel buffer returned by a window capture.
///
/// Pixels are 32-bit BGRA (the window server's native little-endian
/// premultiplied-first layout). Rows may be padded: `bytes_per_row` can be
/// larger than `width * 4`.
#[derive(Debug, Clone)]
pub struct Raster {
    width: usize,
    height: usize,
    bytes_per_row: usize,
    bits_per_pixel: usize,
    data: Vec<u8>,
}

impl Raster {
    pub fn new(
        width: usize,
        height: usize,
        bytes_per_row: usize,
        bits_per_pixel: usize,
        data: Vec<u8>,
    ) -> Self {
        Self {
            width,
            height,
            bytes_per_row,
            bits_per_pixel,
            data,
        }
    }

    /// Tightly packed BGRA raster, mostly useful for tests.
    pub fn packed_bgra(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self::new(width, height, width * 4, 32, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }
    pub fn bits_per_pixel(&self) -> usize {
        self.bits_per_pixel
    }
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.data.is_empty()
    }
}
