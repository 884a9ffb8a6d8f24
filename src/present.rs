// Copies the off-screen buffer onto whatever surface the window gives us.
// Visual: this is the moment the frame becomes visible, stretched to fill
// the client area.

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::types::BYTES_PER_PIXEL;

/// A drawable surface owned by the window side.
///
/// Cells are `0x00RRGGBB` (a BGRX pixel read little-endian), stored
/// top-down, `width * height` of them.
pub trait PresentationTarget {
    /// Current size in pixels, asked for at every present.
    fn size(&self) -> (usize, usize);

    /// The cells to draw into; must be exactly `width * height` long.
    fn pixels_mut(&mut self) -> &mut [u32];

    /// Push the drawn cells to the screen.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Stretch the whole `buffer` over the whole `target`, nearest-neighbour.
///
/// Buffer rows are bottom-up and target rows top-down, so buffer row 0 lands
/// on the last target row. Cells are copied bit-for-bit, padding byte
/// included. A zero-sized target is left alone (no writes, no flush). An
/// empty buffer clears a non-empty target to black.
pub fn present(buffer: &PixelBuffer, target: &mut dyn PresentationTarget) -> Result<()> {
    let (target_w, target_h) = target.size();
    if target_w == 0 || target_h == 0 {
        return Ok(());
    }

    let (src_w, src_h) = (buffer.width(), buffer.height());
    let cells = target.pixels_mut();
    debug_assert_eq!(cells.len(), target_w * target_h);

    if src_w == 0 || src_h == 0 {
        cells.fill(0);
        return target.flush();
    }

    for (dst_y, dst_row) in cells.chunks_exact_mut(target_w).enumerate() {
        let from_top = nearest(dst_y, target_h, src_h);
        let src_row = buffer.row(src_h - 1 - from_top);
        for (dst_x, dst) in dst_row.iter_mut().enumerate() {
            let at = nearest(dst_x, target_w, src_w) * BYTES_PER_PIXEL;
            let cell = &src_row[at..at + BYTES_PER_PIXEL];
            *dst = u32::from_le_bytes([cell[0], cell[1], cell[2], cell[3]]);
        }
    }

    target.flush()
}

/// Source index sampled by destination index `dst` when stretching
/// `src_len` samples over `dst_len`.
#[inline]
fn nearest(dst: usize, dst_len: usize, src_len: usize) -> usize {
    ((dst as u64 * src_len as u64) / dst_len as u64) as usize
}

/// A plain in-memory surface, handy for tests and headless runs.
#[derive(Debug, Default, Clone)]
pub struct MemorySurface {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    flushes: usize,
}

impl MemorySurface {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0; width * height], flushes: 0 }
    }

    /// Change size; contents become black.
    pub fn resize(&mut self, width: usize, height: usize) {
        if (width, height) == (self.width, self.height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width * height];
    }

    /// Cell at column `x`, row `y` counted from the top.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// How many frames have been flushed to this surface.
    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl PresentationTarget for MemorySurface {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
