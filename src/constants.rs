//! Sizing, color, and styling constants for the picker and the swatch button.

/// Initial color of an uncontrolled [`ColorPickerButton`](crate::ColorPickerButton).
pub const DEFAULT_COLOR: &str = "#58E1BE";

/// Initial color of the demo page's shared state.
pub const PAGE_COLOR: &str = "#FFFFFF";

/// Hue strip height
pub const SLIDER_HEIGHT: f32 = 16.0;

/// Saturation/brightness area height
pub const AREA_HEIGHT: f32 = 160.0;

/// Picker width (area and hue strip)
pub const PICKER_WIDTH: f32 = 200.0;

/// Cursor circle radius on the 2D area
pub const CURSOR_RADIUS: f64 = 8.0;

/// Thumb radius on the hue strip
pub const THUMB_RADIUS: f64 = 7.0;

/// Border radius for the area, strip and swatches
pub const RADIUS: f32 = 4.0;

/// Gap between picker elements
pub const GAP: f32 = 8.0;

/// Padding around the whole picker
pub const PADDING: f32 = 8.0;

/// Side length of the default swatch trigger
pub const SWATCH_SIZE: f32 = 32.0;

/// Raster resolution of the saturation/brightness area image.
pub const AREA_RASTER_SIZE: u32 = 128;

/// Input font size
pub const INPUT_FONT: f32 = 13.0;
