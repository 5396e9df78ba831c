//! Colors in ARGB8888 format.

pub const BACKGROUND: u32 = 0xFF1E1E1E;
pub const GRID: u32 = 0xFF333333;
pub const WINDOW: u32 = 0xFFFFFFFF;
/// The part of a segment that was clipped away.
pub const CLIPPED: u32 = 0xFF5A5A5A;
pub const VISIBLE: u32 = 0xFF00FF7F;

/// Split a packed ARGB color into `(a, r, g, b)` bytes.
#[inline]
pub fn unpack(color: u32) -> (u8, u8, u8, u8) {
    (
        (color >> 24) as u8,
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack() {
        assert_eq!(unpack(VISIBLE), (0xFF, 0x00, 0xFF, 0x7F));
        assert_eq!(unpack(BACKGROUND), (0xFF, 0x1E, 0x1E, 0x1E));
    }
}
