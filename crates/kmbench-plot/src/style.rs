//! Shared chart styling.

use plotters::style::RGBColor;

/// Canvas size of every rendered figure.
pub(crate) const FIGURE_SIZE: (u32, u32) = (1024, 768);

/// Caption font.
pub(crate) const CAPTION_FONT: (&str, u32) = ("sans-serif", 32);

/// Axis label font.
pub(crate) const LABEL_FONT: (&str, u32) = ("sans-serif", 18);

/// Colour-blind-safe series palette.
const SERIES_COLOURS: &[RGBColor] = &[
    RGBColor(0x33, 0x22, 0x88),
    RGBColor(0x11, 0x77, 0x33),
    RGBColor(0xCC, 0x66, 0x77),
    RGBColor(0x88, 0xCC, 0xEE),
    RGBColor(0xDD, 0xCC, 0x77),
    RGBColor(0x88, 0x22, 0x55),
    RGBColor(0x44, 0xAA, 0x99),
    RGBColor(0xAA, 0x44, 0x99),
];

/// Colour for the series at `index`, cycling past the palette end.
pub(crate) fn series_colour(index: usize) -> RGBColor {
    SERIES_COLOURS[index % SERIES_COLOURS.len()]
}
