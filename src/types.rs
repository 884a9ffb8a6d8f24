// Core types shared by the buffer, the pattern and the run loop.

/// Bytes per pixel in the off-screen buffer: blue, green, red, unused.
pub const BYTES_PER_PIXEL: usize = 4;

/// One pixel as it sits in memory: B, G, R, then a padding byte.
/// Read as a little-endian `u32` this is `0xXXRRGGBB`, the layout native
/// 32-bit surfaces expect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bgrx {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub pad: u8,
}

impl Bgrx {
    pub const fn new(blue: u8, green: u8, red: u8) -> Self {
        Self { blue, green, red, pad: 0 }
    }

    #[inline]
    pub const fn from_bytes(bytes: [u8; BYTES_PER_PIXEL]) -> Self {
        Self { blue: bytes[0], green: bytes[1], red: bytes[2], pad: bytes[3] }
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; BYTES_PER_PIXEL] {
        [self.blue, self.green, self.red, self.pad]
    }

    /// Packed cell value, bit-for-bit what the bytes mean on a little-endian surface.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        u32::from_le_bytes(self.to_bytes())
    }
}

/// Scroll offsets for the test pattern.
/// Visual: the gradient slides right by 1 and up by 2 every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationState {
    pub x_offset: i32,
    pub y_offset: i32,
}

impl AnimationState {
    /// Step once. Overflow wraps; the pattern only looks at the low 8 bits anyway.
    pub fn advance(&mut self) {
        self.x_offset = self.x_offset.wrapping_add(1);
        self.y_offset = self.y_offset.wrapping_add(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bgrx_packs_as_xrgb_little_endian() {
        let px = Bgrx::new(0x11, 0x22, 0x33);
        assert_eq!(px.to_bytes(), [0x11, 0x22, 0x33, 0x00]);
        assert_eq!(px.to_u32(), 0x0033_2211);
        assert_eq!(Bgrx::from_bytes(px.to_bytes()), px);
    }

    #[test]
    fn animation_wraps_instead_of_overflowing() {
        let mut anim = AnimationState { x_offset: i32::MAX, y_offset: i32::MAX - 1 };
        anim.advance();
        assert_eq!(anim.x_offset, i32::MIN);
        assert_eq!(anim.y_offset, i32::MIN);
    }
}
