//! Built-in palettes, looked up by name.

use tuidom::Color;

/// Scheme used when a series does not name one.
pub const DEFAULT_SCHEME: &str = "cybertron";

const CYBERTRON: &[Color] = &[
    Color::rgb(0x00, 0xec, 0xb1),
    Color::rgb(0x2a, 0xb6, 0xf4),
    Color::rgb(0x4c, 0x86, 0xff),
    Color::rgb(0x9d, 0x7b, 0xf9),
    Color::rgb(0xe2, 0x6b, 0xf4),
    Color::rgb(0xff, 0x6b, 0x8b),
    Color::rgb(0xff, 0xb8, 0x00),
    Color::rgb(0x40, 0xe5, 0xd1),
];

// ColorBrewer qualitative schemes
const SET1: &[Color] = &[
    Color::rgb(0xe4, 0x1a, 0x1c),
    Color::rgb(0x37, 0x7e, 0xb8),
    Color::rgb(0x4d, 0xaf, 0x4a),
    Color::rgb(0x98, 0x4e, 0xa3),
    Color::rgb(0xff, 0x7f, 0x00),
    Color::rgb(0xff, 0xff, 0x33),
    Color::rgb(0xa6, 0x56, 0x28),
    Color::rgb(0xf7, 0x81, 0xbf),
    Color::rgb(0x99, 0x99, 0x99),
];

const SET2: &[Color] = &[
    Color::rgb(0x66, 0xc2, 0xa5),
    Color::rgb(0xfc, 0x8d, 0x62),
    Color::rgb(0x8d, 0xa0, 0xcb),
    Color::rgb(0xe7, 0x8a, 0xc3),
    Color::rgb(0xa6, 0xd8, 0x54),
    Color::rgb(0xff, 0xd9, 0x2f),
    Color::rgb(0xe5, 0xc4, 0x94),
    Color::rgb(0xb3, 0xb3, 0xb3),
];

const DARK2: &[Color] = &[
    Color::rgb(0x1b, 0x9e, 0x77),
    Color::rgb(0xd9, 0x5f, 0x02),
    Color::rgb(0x75, 0x70, 0xb3),
    Color::rgb(0xe7, 0x29, 0x8a),
    Color::rgb(0x66, 0xa6, 0x1e),
    Color::rgb(0xe6, 0xab, 0x02),
    Color::rgb(0xa6, 0x76, 0x1d),
    Color::rgb(0x66, 0x66, 0x66),
];

const SCHEMES: &[(&str, &[Color])] = &[
    ("cybertron", CYBERTRON),
    ("set1", SET1),
    ("set2", SET2),
    ("dark2", DARK2),
];

/// Palette for `name`, matched case-insensitively.
pub fn scheme(name: &str) -> Option<&'static [Color]> {
    SCHEMES
        .iter()
        .find(|(scheme_name, _)| scheme_name.eq_ignore_ascii_case(name))
        .map(|(_, colors)| *colors)
}

pub fn scheme_names() -> impl Iterator<Item = &'static str> {
    SCHEMES.iter().map(|(name, _)| *name)
}
