//! Code shown on the demo page's Installation and Usage sections.

pub const INSTALL: &str = "cargo add floem floem-swatch";

pub const INLINE_PICKER: &str = r##"use floem::prelude::*;
use floem_swatch::{hex_picker, ColorBinding, ColorField};

fn inline_picker() -> impl IntoView {
    let binding = ColorBinding::owned("#FFFFFF");
    let field = ColorField::sync(&binding);
    v_stack((hex_picker(&binding), field.view()))
}
"##;

pub const IMPORTS: &str = r##"use floem_swatch::{
    ColorPickerButton,
    ColorProvider,
    ColorState,
};"##;

pub const BUTTON: &str = r##"use floem::prelude::*;
use floem_swatch::{ColorPickerButton, ColorProvider, ColorState, OutsideClicks};

fn app_view() -> impl IntoView {
    let clicks = OutsideClicks::new();

    // Controlled: the page owns the color.
    let state = ColorState::new("#FFFFFF");
    let provider = ColorProvider::new();
    provider.bind(state);
    let shared = ColorPickerButton::builder()
        .bind(state)
        .dismiss_on(clicks)
        .build();

    // Uncontrolled: starts at #58E1BE and keeps its own color.
    let standalone = ColorPickerButton::builder().dismiss_on(clicks).build();

    let ctx = provider.context();
    clicks.listen(
        h_stack((shared.view(), standalone.view())).style(move |s| {
            let bg = ctx.consume().unwrap_or_default();
            s.gap(16.0).background(floem_swatch::paint_color(&bg))
        }),
    )
}
"##;
