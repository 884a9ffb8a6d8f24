// The off-screen bitmap: raw BGRX bytes plus the geometry to walk them.
// Visual: nothing shows up until the presenter copies this into a window.

use crate::error::{Error, Result};
use crate::types::{BYTES_PER_PIXEL, Bgrx};

/// Off-screen pixel storage.
///
/// Memory is one contiguous block of `height * pitch` bytes, `pitch` being
/// `width * 4`. Rows are stored bottom-up: row 0 is the lowest scanline once
/// presented.
#[derive(Debug, Default)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pitch: usize,
    memory: Vec<u8>,
}

impl PixelBuffer {
    /// An empty 0x0 buffer with no memory behind it.
    pub const fn new() -> Self {
        Self { width: 0, height: 0, pitch: 0, memory: Vec::new() }
    }

    /// Convenience: a buffer already sized to `width x height`.
    pub fn with_size(width: usize, height: usize) -> Result<Self> {
        let mut buffer = Self::new();
        buffer.resize(width, height)?;
        Ok(buffer)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes from the start of one row to the next.
    #[inline]
    pub fn pitch(&self) -> usize {
        self.pitch
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    /// The whole backing block, bottom row first.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.memory
    }

    /// Reallocate for a new size. Zero in either dimension gives an empty buffer.
    ///
    /// The new block is obtained before the old one is dropped, so a failed
    /// allocation returns [`Error::OutOfMemory`] and leaves the current size
    /// and pixels exactly as they were. Resizing to the current size keeps
    /// the existing block.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        if width == self.width && height == self.height {
            return Ok(());
        }

        let oom = || Error::OutOfMemory { width, height };
        let pitch = width.checked_mul(BYTES_PER_PIXEL).ok_or_else(oom)?;
        let len = pitch.checked_mul(height).ok_or_else(oom)?;

        let mut memory = Vec::new();
        if memory.try_reserve_exact(len).is_err() {
            log::error!("pixel buffer: could not reserve {len} bytes for {width}x{height}");
            return Err(oom());
        }
        memory.resize(len, 0);

        log::debug!(
            "pixel buffer: {}x{} -> {width}x{height} ({len} bytes)",
            self.width,
            self.height
        );

        // Swapping in drops the old block.
        self.memory = memory;
        self.width = width;
        self.height = height;
        self.pitch = pitch;
        Ok(())
    }

    /// Free the block and go back to 0x0.
    pub fn release(&mut self) {
        self.memory = Vec::new();
        self.width = 0;
        self.height = 0;
        self.pitch = 0;
    }

    /// Pixel at column `x`, memory row `y` (row 0 = bottom scanline).
    ///
    /// # Panics
    /// If `(x, y)` lies outside the buffer.
    pub fn pixel_at(&self, x: usize, y: usize) -> Bgrx {
        self.pixel(x, y).unwrap_or_else(|| {
            panic!("pixel ({x}, {y}) out of bounds for {}x{} buffer", self.width, self.height)
        })
    }

    /// Like [`pixel_at`](Self::pixel_at) but `None` outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Bgrx> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = y * self.pitch + x * BYTES_PER_PIXEL;
        let cell = self.memory.get(start..start + BYTES_PER_PIXEL)?;
        let mut bytes = [0u8; BYTES_PER_PIXEL];
        bytes.copy_from_slice(cell);
        Some(Bgrx::from_bytes(bytes))
    }

    /// One memory row (`pitch` bytes).
    ///
    /// # Panics
    /// If `y >= height`.
    pub fn row(&self, y: usize) -> &[u8] {
        assert!(y < self.height, "row {y} out of bounds for height {}", self.height);
        let start = y * self.pitch;
        &self.memory[start..start + self.pitch]
    }

    /// Mutable rows, bottom row first. Yields nothing for an empty buffer.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        // chunks_exact_mut(0) panics; a zero pitch means an empty block anyway.
        self.memory.chunks_exact_mut(self.pitch.max(1))
    }
}
