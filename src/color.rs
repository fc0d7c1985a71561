//! Packed color handling and brightness conversion

/// Mask selecting the RGB channels of a packed `0xAARRGGBB` word
const RGB_MASK: u32 = 0x00FF_FFFF;

/// Maximum brightness accepted by the LED driver
pub const MAX_BRIGHTNESS: u32 = 255;

/// Packed `0xAARRGGBB` color as delivered by the host. The alpha byte is
/// carried but never interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(0x00FF_FFFF);

    pub const fn new(argb: u32) -> Self {
        Self(argb)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u32 {
        (self.0 >> 16) & 0xFF
    }

    pub const fn green(self) -> u32 {
        (self.0 >> 8) & 0xFF
    }

    pub const fn blue(self) -> u32 {
        self.0 & 0xFF
    }

    /// A color counts as lit when any RGB channel is non-zero. Alpha alone
    /// does not light an LED.
    pub const fn is_lit(self) -> bool {
        self.0 & RGB_MASK != 0
    }

    /// Perceptual brightness of the RGB channels, fixed-point luma weighting.
    /// The formula cannot exceed 255; the clamp states the driver limit
    /// explicitly.
    pub fn brightness(self) -> u32 {
        let luma = (77 * self.red() + 150 * self.green() + 29 * self.blue()) >> 8;
        luma.min(MAX_BRIGHTNESS)
    }
}
