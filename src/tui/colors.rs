use crossterm::style::Color;
use palette::{FromColor, Lch, Srgb};

use crate::engine::row::{Cell, EMPTY};

/// Number of doublings it takes to walk once around the hue wheel.
const HUE_STEPS: f32 = 10.0;
const FG_HUE: f32 = 28.0 + 180.0;

/// TileColors is the background and foreground pair a tile is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TileColors {
    pub(crate) background: Color,
    pub(crate) foreground: Color,
}

fn rgb(lch: Lch) -> Color {
    let rgb = Srgb::from_color(lch).into_format::<u8>();
    Color::Rgb {
        r: rgb.red,
        g: rgb.green,
        b: rgb.blue,
    }
}

/// Colors for a tile value; empty cells are drawn uncolored.
pub(crate) fn tile_colors(value: Cell) -> Option<TileColors> {
    if value == EMPTY {
        return None;
    }
    let exponent = value.ilog2() as f32;
    Some(TileColors {
        background: rgb(Lch::new(80.0, 90.0, exponent * 360.0 / HUE_STEPS)),
        foreground: rgb(Lch::new(20.0, 50.0, FG_HUE)),
    })
}
