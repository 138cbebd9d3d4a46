// Simple color struct, created from an unsigned 32 representing 0x00RRGGBB.
// Alpha lives on the particle, not the color, so every draw call picks its own.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const VIOLET: Color = Color::from_u32(0x7C6DFF);
    pub const TEAL: Color = Color::from_u32(0x4FD1C5);

    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 16) as u8;
        let g = (num >> 8) as u8;
        let b = num as u8;

        Color { r, g, b }
    }

    // CSS color string usable as a canvas fill or stroke style
    pub fn to_rgba(&self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}
