// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/phasmcore

//! Row-major RGB pixel grid.
//!
//! The grid is the only view of a carrier the codec sees. Pixels are stored
//! and iterated row-major (y outer, x inner); that order is the embedding
//! sequence and must be identical on the hide and reveal side.

/// One pixel's three 8-bit color channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub const fn r(self) -> u8 {
        self.0[0]
    }

    pub const fn g(self) -> u8 {
        self.0[1]
    }

    pub const fn b(self) -> u8 {
        self.0[2]
    }
}

/// A pixel with its position in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub x: u32,
    pub y: u32,
    pub rgb: Rgb,
}

/// Carrier dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count (`width * height`).
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A width × height grid of RGB pixels in one row-major buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    data: Vec<Rgb>,
}

impl PixelGrid {
    /// Create a grid filled with a single color.
    pub fn filled(width: u32, height: u32, rgb: Rgb) -> Self {
        let len = width as usize * height as usize;
        Self { width, height, data: vec![rgb; len] }
    }

    /// Wrap an existing row-major buffer. Returns `None` if its length is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<Rgb>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(Self { width, height, data })
    }

    /// Build a grid from packed `RGBRGB...` bytes.
    pub fn from_rgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != width as usize * height as usize * 3 {
            return None;
        }
        let data = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Some(Self { width, height, data })
    }

    /// Pack the grid into `RGBRGB...` bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 3);
        for px in &self.data {
            out.extend_from_slice(&px.0);
        }
        out
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Number of pixels (`width * height`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Channel values at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Overwrite the pixel at `(x, y)`. Returns `false` outside the grid.
    pub fn set(&mut self, x: u32, y: u32, rgb: Rgb) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.data[i] = rgb;
                true
            }
            None => false,
        }
    }

    /// The row-major pixel buffer.
    pub fn as_slice(&self) -> &[Rgb] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.data
    }

    /// Iterate pixels with their positions in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        let w = self.width.max(1) as usize;
        self.data.iter().enumerate().map(move |(i, &rgb)| Pixel {
            x: (i % w) as u32,
            y: (i / w) as u32,
            rgb,
        })
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}
