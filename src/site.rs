//! The demo landing page.
//!
//! One [`ColorState`] owned by the page drives the page background (read
//! through a [`ColorContext`]), the inline picker, and the header's swatch
//! button. The button in the Usage section is independent and uncontrolled.

use floem::prelude::*;
use floem::style::Style;

use crate::binding::ColorBinding;
use crate::button::ColorPickerButton;
use crate::color::paint_color;
use crate::config::SiteConfig;
use crate::constants;
use crate::context::{ColorContext, ColorContextError, ColorProvider, ColorState};
use crate::inputs::{copy_button, ColorField};
use crate::picker::hex_picker;
use crate::popover::{OutsideClicks, PopoverState};
use crate::snippets;

const CONTENT_WIDTH: f32 = 736.0;
const MUTED: Color = Color::rgb8(100, 116, 139);
const CODE_BG: Color = Color::rgb8(241, 245, 249);

/// Build the landing page with its own shared color state.
pub fn page(config: &SiteConfig) -> Result<impl View, ColorContextError> {
    crate::load_icon_font();
    let state = ColorState::new(constants::PAGE_COLOR);
    let provider = ColorProvider::new();
    provider.bind(state);
    app(config, state, provider.context())
}

fn app(
    config: &SiteConfig,
    state: ColorState,
    ctx: ColorContext,
) -> Result<impl View, ColorContextError> {
    let initial = ctx.consume_untracked()?;
    log::debug!("page color starts at {initial}");

    let clicks = OutsideClicks::new();

    let header_button = ColorPickerButton::builder()
        .id("color-picker-button")
        .bind(state)
        .dismiss_on(clicks)
        .style(|s| s.border_color(Color::rgb8(15, 23, 42)))
        .build();
    let header_popover = header_button.popover();

    let demo_button = ColorPickerButton::builder()
        .id("color-picker-button1")
        .style(|s| s.size(160.0, 80.0).box_shadow_blur(8.0))
        .dismiss_on(clicks)
        .build();
    let demo_popover = demo_button.popover();

    let content = v_stack((
        header(config, header_popover),
        pickers(state, header_button),
        installation(),
        usage(demo_button, demo_popover),
    ))
    .style(|s| {
        s.width(CONTENT_WIDTH)
            .max_width_pct(100.0)
            .gap(48.0)
            .padding(32.0)
            .padding_vert(48.0)
            .border_radius(8.0)
            .background(Color::rgba8(255, 255, 255, 242))
    });

    let root = scroll(
        container(content).style(|s| s.width_full().justify_center().padding_vert(40.0)),
    )
    .style(move |s| {
        // Background follows the shared color; unparseable strings leave it clear.
        let bg = ctx.consume().unwrap_or_default();
        s.size_full().background(paint_color(&bg))
    });

    Ok(clicks.listen(root))
}

fn header(config: &SiteConfig, picker_popover: PopoverState) -> impl IntoView {
    let name = config.name.clone();
    let description = config.description.clone();
    let github = config.links.github.clone();

    v_stack((
        label(move || name.clone()).style(|s| s.font_size(40.0).font_bold()),
        label(move || description.clone())
            .style(|s| s.font_size(14.0).color(MUTED).max_width(480.0)),
        text_button("Try it Out!", filled).on_click_stop(move |_| picker_popover.show()),
        h_stack((
            label(|| "Star on GitHub"),
            label(|| lucide_icons::Icon::MoveRight.unicode().to_string())
                .style(|s| s.font_family("lucide".to_string())),
        ))
        .style(|s| {
            s.gap(8.0)
                .items_center()
                .cursor(floem::style::CursorStyle::Pointer)
                .hover(|s| s.font_bold())
        })
        .on_click_stop(move |_| open_link(&github)),
    ))
    .style(|s| s.gap(8.0).items_center())
}

fn pickers(state: ColorState, button: ColorPickerButton) -> impl IntoView {
    let inline = ColorBinding::shared(state);
    let field = ColorField::sync(&inline);

    h_stack((
        v_stack((hex_picker(&inline), field.view())).style(|s| {
            s.gap(constants::GAP)
                .padding(constants::PADDING)
                .border(1.0)
                .border_radius(constants::RADIUS * 2.0)
                .border_color(Color::rgb8(226, 232, 240))
        }),
        label(|| "Or").style(|s| s.color(MUTED)),
        button.view(),
    ))
    .style(|s| s.gap(16.0).items_center().justify_center())
}

fn installation() -> impl IntoView {
    v_stack((
        section_title("Installation"),
        paragraph("Add the crates to your project."),
        code_block(snippets::INSTALL),
        paragraph("Put the inline picker together from its parts."),
        code_block(snippets::INLINE_PICKER),
        paragraph("Adjust the colors and sizes to match your app."),
    ))
    .style(|s| s.gap(12.0))
}

fn usage(demo: ColorPickerButton, demo_popover: PopoverState) -> impl IntoView {
    v_stack((
        section_title("Usage"),
        paragraph("Import the components."),
        code_block(snippets::IMPORTS),
        paragraph("Use the swatch button in your view tree."),
        code_block(snippets::BUTTON),
        v_stack((
            demo.view(),
            h_stack((
                label(|| "CLICK ME"),
                label(|| lucide_icons::Icon::ArrowUp.unicode().to_string())
                    .style(|s| s.font_family("lucide".to_string())),
            ))
            .style(|s| {
                s.gap(4.0)
                    .items_center()
                    .font_size(18.0)
                    .cursor(floem::style::CursorStyle::Pointer)
                    .hover(|s| s.font_bold())
            })
            .on_click_stop(move |_| demo_popover.toggle()),
        ))
        .style(|s| {
            s.gap(12.0)
                .margin_top(32.0)
                .height(200.0)
                .width_full()
                .items_center()
                .justify_center()
                .border(1.0)
                .border_radius(8.0)
                .border_color(Color::rgb8(226, 232, 240))
                .background(Color::WHITE)
        }),
    ))
    .style(|s| s.gap(12.0))
}

fn section_title(title: &'static str) -> impl IntoView {
    label(move || title).style(|s| s.font_size(24.0).font_bold().margin_bottom(8.0))
}

fn paragraph(body: &'static str) -> impl IntoView {
    label(move || body).style(|s| s.color(MUTED))
}

fn code_block(code: &'static str) -> impl IntoView {
    h_stack((
        label(move || code).style(|s| {
            s.flex_grow(1.0)
                .font_size(13.0)
                .font_family("monospace".to_string())
                .color(Color::rgb8(51, 65, 85))
        }),
        copy_button(move || code.to_string()),
    ))
    .style(|s| {
        s.padding(8.0)
            .gap(8.0)
            .border_radius(8.0)
            .background(CODE_BG)
    })
}

fn filled(s: Style) -> Style {
    s.padding_horiz(16.0)
        .padding_vert(8.0)
        .border_radius(6.0)
        .color(Color::WHITE)
        .background(Color::rgb8(15, 23, 42))
        .cursor(floem::style::CursorStyle::Pointer)
        .hover(|s| s.background(Color::rgb8(51, 65, 85)))
}

fn text_button(text: &'static str, look: fn(Style) -> Style) -> impl View {
    container(label(move || text)).style(look)
}

fn open_link(url: &str) {
    log::debug!("opening {url}");
    if let Err(err) = open::that(url) {
        log::warn!("failed to open {url}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_without_provided_color_fails() {
        let config = SiteConfig::from_lookup(|_| None);
        let state = ColorState::new("#FFFFFF");
        let result = app(&config, state, ColorContext::detached()).map(|_| ());
        assert_eq!(result.err(), Some(ColorContextError::OutsideProvider));

        let unprovided = ColorProvider::new();
        let result = app(&config, state, unprovided.context()).map(|_| ());
        assert_eq!(result.err(), Some(ColorContextError::OutsideProvider));
    }

    #[test]
    fn shared_state_reaches_context_and_inline_field() {
        let state = ColorState::new(constants::PAGE_COLOR);
        let provider = ColorProvider::new();
        provider.bind(state);
        let ctx = provider.context();

        let inline = ColorField::sync(&ColorBinding::shared(state));
        let header = ColorPickerButton::builder().bind(state).build();

        inline.edit("#abcdef");
        assert_eq!(ctx.consume().unwrap(), "#abcdef");
        assert_eq!(header.value(), "#abcdef");
        assert_eq!(header.field().text(), "#abcdef");

        // The Usage demo button is not wired to the page.
        let demo = ColorPickerButton::builder().build();
        demo.field().edit("#000000");
        assert_eq!(ctx.consume().unwrap(), "#abcdef");
    }
}
