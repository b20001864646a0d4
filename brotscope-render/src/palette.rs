/// Two-color gradient from `background` (at the cap) to `foreground` (at zero).
///
/// Colors are `[r, g, b, a]`. Passed to the renderer explicitly so callers can
/// swap it without touching the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: [u8; 4],
    pub foreground: [u8; 4],
}

impl Palette {
    pub const DEFAULT_BACKGROUND: u32 = 0x332222FF;
    pub const DEFAULT_FOREGROUND: u32 = 0xFF5555FF;

    pub fn new(background: [u8; 4], foreground: [u8; 4]) -> Self {
        Self {
            background,
            foreground,
        }
    }

    /// Build from packed `0xRRGGBBAA` values.
    pub fn from_hex(background: u32, foreground: u32) -> Self {
        Self::new(background.to_be_bytes(), foreground.to_be_bytes())
    }

    /// `255 − round(255·n/cap)`: 255 for `n = 0`, 0 at the cap.
    #[inline]
    pub fn brightness(n: u32, cap: u32) -> u32 {
        debug_assert!(cap > 0, "iteration cap must be positive");
        let n = n.min(cap);
        255 - (255.0 * n as f64 / cap as f64).round() as u32
    }

    /// Color for an iteration count. Alpha is always opaque.
    #[inline]
    pub fn color(&self, n: u32, cap: u32) -> [u8; 4] {
        let bright = Self::brightness(n, cap);
        let mix = |ch: usize| {
            ((bright * self.foreground[ch] as u32 + (255 - bright) * self.background[ch] as u32)
                / 255) as u8
        };
        [mix(0), mix(1), mix(2), 255]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_hex(Self::DEFAULT_BACKGROUND, Self::DEFAULT_FOREGROUND)
    }
}
