//! # floem-swatch
//!
//! A popover color picker button and shared color state for
//! [Floem](https://github.com/lapce/floem).
//!
//! A [`ColorPickerButton`] shows the current color as a swatch; activating it
//! opens a panel with a saturation/brightness area, a hue strip, and a text
//! field that mirrors the color string verbatim. Give it both a color and a
//! change handler and it is driven by its parent; give it neither and it
//! keeps its own color, starting at [`DEFAULT_COLOR`].
//!
//! Page-wide color is owned by a [`ColorState`] and broadcast read-only
//! through a [`ColorProvider`]'s [`ColorContext`], which is passed to
//! whatever needs it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_swatch::{ColorPickerButton, ColorState};
//!
//! let page = ColorState::new("#FFFFFF");
//! let shared = ColorPickerButton::builder().bind(page).build();
//! let standalone = ColorPickerButton::builder().build();
//! // Use `shared.view()` and `standalone.view()` in your Floem view tree.
//! ```

mod binding;
mod button;
mod color;
mod config;
mod constants;
mod context;
mod hue_slider;
mod inputs;
mod math;
mod picker;
mod popover;
mod saturation_area;
pub mod site;
mod snippets;

pub use binding::{ColorBinding, ColorGetter, ColorSetter};
pub use button::{ColorPickerButton, ColorPickerButtonBuilder};
pub use color::{paint_color, SolidColor};
pub use config::{SiteConfig, SiteLinks, SiteUrls};
pub use constants::{DEFAULT_COLOR, PAGE_COLOR};
pub use context::{ColorContext, ColorContextError, ColorProvider, ColorState};
pub use inputs::{copy_button, ColorField};
pub use picker::{hex_picker, Hsb, PickerState};
pub use popover::{popover, OutsideClicks, PopoverState};

use std::sync::Once;

use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Register the lucide icon font used by the copy button and page icons.
pub(crate) fn load_icon_font() {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
}
