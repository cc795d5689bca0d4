use std::str::FromStr;

use palette::{IntoColor, Oklch, Srgb};

#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32, a: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h, a: 1.0 }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let srgb = Srgb::<u8>::from_str(hex.trim()).ok()?;
        Some(Self::rgb(srgb.red, srgb.green, srgb.blue))
    }

    pub fn to_hex(&self) -> String {
        let Rgb { r, g, b } = self.to_rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h, .. } => oklch_to_rgb(*l, *c, *h),
        }
    }

    /// Lightness, chroma and hue (degrees, `0..360`).
    pub fn to_oklch(&self) -> (f32, f32, f32) {
        match self {
            Self::Oklch { l, c, h, .. } => (*l, *c, *h),
            Self::Rgb { r, g, b } => {
                let srgb = Srgb::new(*r as f32 / 255.0, *g as f32 / 255.0, *b as f32 / 255.0);
                let oklch: Oklch = srgb.into_color();
                (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
            }
        }
    }

    /// Interpolate towards `to` in OKLCH space, taking the short way around the hue circle.
    pub fn lerp(&self, to: &Color, t: f32) -> Color {
        let (from_l, from_c, from_h) = self.to_oklch();
        let (to_l, to_c, to_h) = to.to_oklch();

        let l = from_l + (to_l - from_l) * t;
        let c = from_c + (to_c - from_c) * t;

        let mut dh = to_h - from_h;
        if dh > 180.0 {
            dh -= 360.0;
        } else if dh < -180.0 {
            dh += 360.0;
        }
        let h = (from_h + dh * t).rem_euclid(360.0);

        Color::oklch(l, c, h)
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
