use super::Color;

/// Pastel wedge colors, assigned in category first-seen order and cycled.
pub const PIE_PALETTE: [Color; 8] = [
    Color::rgb8(0xb1, 0x9c, 0xd9),
    Color::rgb8(0xff, 0xb4, 0xa2),
    Color::rgb8(0x9a, 0xd0, 0xf5),
    Color::rgb8(0xb6, 0xe2, 0xd3),
    Color::rgb8(0xff, 0xf7, 0xae),
    Color::rgb8(0xf2, 0xb5, 0xd4),
    Color::rgb8(0xc4, 0xdb, 0xe0),
    Color::rgb8(0xe6, 0xe6, 0xe6),
];

/// Default line series colors for hosts building `SeriesInput`s.
pub const LINE_SERIES_PALETTE: [Color; 3] = [
    Color::rgb8(0xff, 0x6c, 0x4a),
    Color::rgb8(0x46, 0x82, 0xb4),
    Color::rgb8(0x43, 0xa0, 0x47),
];
