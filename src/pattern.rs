// The animated test pattern.
// Visual: a blue gradient across, a green gradient up, both repeating every
// 256 pixels and scrolling as the offsets move.

use crate::buffer::PixelBuffer;
use crate::types::{BYTES_PER_PIXEL, Bgrx};

/// Fill every pixel of `buffer` with the gradient for the given offsets.
///
/// Pixel `(x, y)` gets blue `(x + blue_offset) mod 256`, green
/// `(y + green_offset) mod 256`, red and padding 0. Nothing is read back, so
/// the same offsets always produce the same bytes.
pub fn render_weird_gradient(buffer: &mut PixelBuffer, blue_offset: i32, green_offset: i32) {
    for (y, row) in buffer.rows_mut().enumerate() {
        // Only the low 8 bits matter; truncating the wrapped sum is mod 256.
        let green = (y as i32).wrapping_add(green_offset) as u8;
        for (x, cell) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let blue = (x as i32).wrapping_add(blue_offset) as u8;
            cell.copy_from_slice(&Bgrx::new(blue, green, 0).to_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_formula(buffer: &PixelBuffer, bo: i32, go: i32) {
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let px = buffer.pixel_at(x, y);
                assert_eq!(px.blue as i64, (x as i64 + bo as i64).rem_euclid(256), "blue at ({x},{y})");
                assert_eq!(px.green as i64, (y as i64 + go as i64).rem_euclid(256), "green at ({x},{y})");
                assert_eq!(px.red, 0);
                assert_eq!(px.pad, 0);
            }
        }
    }

    #[test]
    fn writes_gradient_formula() {
        let mut buffer = PixelBuffer::with_size(300, 260).unwrap();
        render_weird_gradient(&mut buffer, 0, 0);
        check_formula(&buffer, 0, 0);

        render_weird_gradient(&mut buffer, 37, 511);
        check_formula(&buffer, 37, 511);
    }

    #[test]
    fn negative_and_extreme_offsets_wrap() {
        let mut buffer = PixelBuffer::with_size(5, 4).unwrap();
        render_weird_gradient(&mut buffer, -3, i32::MIN);
        check_formula(&buffer, -3, i32::MIN);

        render_weird_gradient(&mut buffer, i32::MAX, -1);
        // (x + i32::MAX) wraps in i32 but the low byte still equals (x + MAX) mod 256.
        check_formula(&buffer, i32::MAX, -1);
    }

    #[test]
    fn ignores_prior_content() {
        let mut dirty = PixelBuffer::with_size(16, 16).unwrap();
        for row in dirty.rows_mut() {
            row.fill(0xEE);
        }
        let mut clean = PixelBuffer::with_size(16, 16).unwrap();

        render_weird_gradient(&mut dirty, 9, 4);
        render_weird_gradient(&mut clean, 9, 4);
        assert_eq!(dirty.bytes(), clean.bytes());

        // Regenerating is not cumulative.
        render_weird_gradient(&mut dirty, 9, 4);
        assert_eq!(dirty.bytes(), clean.bytes());
    }

    #[test]
    fn empty_buffer_is_fine() {
        let mut buffer = PixelBuffer::new();
        render_weird_gradient(&mut buffer, 1, 2);
        assert!(buffer.is_empty());
    }
}
