//! A swatch button that opens the picker in a popover.

use std::rc::Rc;

use floem::prelude::*;
use floem::style::Style;

use crate::binding::{ColorBinding, ColorGetter, ColorSetter};
use crate::color::paint_color;
use crate::constants;
use crate::context::ColorState;
use crate::inputs::ColorField;
use crate::picker::hex_picker;
use crate::popover::{popover, OutsideClicks, PopoverState};

type StyleFn = Box<dyn Fn(Style) -> Style>;

/// Builder for a [`ColorPickerButton`].
///
/// Supplying both [`color`](Self::color) and [`on_change`](Self::on_change)
/// makes the button controlled by its parent. Anything less and it keeps its
/// own color, starting at [`DEFAULT_COLOR`](constants::DEFAULT_COLOR). The
/// mode is fixed by [`build`](Self::build).
#[derive(Default)]
pub struct ColorPickerButtonBuilder {
    color: Option<ColorGetter>,
    on_change: Option<ColorSetter>,
    debug_name: Option<String>,
    style: Option<StyleFn>,
    dismiss_on: Option<OutsideClicks>,
}

impl ColorPickerButtonBuilder {
    /// The parent's current color. May read signals.
    pub fn color(mut self, color: impl Fn() -> String + 'static) -> Self {
        self.color = Some(Rc::new(color));
        self
    }

    /// Called with every new color string.
    pub fn on_change(mut self, on_change: impl Fn(String) + 'static) -> Self {
        self.on_change = Some(Rc::new(on_change));
        self
    }

    /// Shorthand for reading from and writing to `state`.
    pub fn bind(self, state: ColorState) -> Self {
        self.color(move || state.get())
            .on_change(move |c| state.set(c))
    }

    pub fn id(mut self, name: impl Into<String>) -> Self {
        self.debug_name = Some(name.into());
        self
    }

    /// Extra styling for the trigger, applied after the defaults.
    pub fn style(mut self, style: impl Fn(Style) -> Style + 'static) -> Self {
        self.style = Some(Box::new(style));
        self
    }

    /// Close the panel on presses reported by `clicks`.
    pub fn dismiss_on(mut self, clicks: OutsideClicks) -> Self {
        self.dismiss_on = Some(clicks);
        self
    }

    pub fn build(self) -> ColorPickerButton {
        let binding = ColorBinding::resolve(self.color, self.on_change);
        let popover = PopoverState::new();
        if let Some(clicks) = self.dismiss_on {
            popover.dismiss_on(clicks);
        }
        let field = ColorField::sync(&binding);
        ColorPickerButton {
            binding,
            popover,
            field,
            debug_name: self.debug_name,
            style: self.style,
        }
    }
}

/// A built swatch button. Its handles stay usable after [`view`](Self::view)
/// is taken, e.g. to open the popover from elsewhere on the page.
pub struct ColorPickerButton {
    binding: ColorBinding,
    popover: PopoverState,
    field: ColorField,
    debug_name: Option<String>,
    style: Option<StyleFn>,
}

impl ColorPickerButton {
    pub fn builder() -> ColorPickerButtonBuilder {
        ColorPickerButtonBuilder::default()
    }

    /// The color the trigger currently shows.
    pub fn value(&self) -> String {
        self.binding.get_untracked()
    }

    pub fn binding(&self) -> &ColorBinding {
        &self.binding
    }

    pub fn popover(&self) -> PopoverState {
        self.popover
    }

    pub fn field(&self) -> ColorField {
        self.field
    }

    pub fn view(self) -> impl IntoView {
        let ColorPickerButton {
            binding,
            popover: state,
            field,
            debug_name,
            style,
        } = self;

        let swatch = binding.clone();
        let trigger = empty().style(move |s| {
            let s = s
                .size(constants::SWATCH_SIZE, constants::SWATCH_SIZE)
                .border(1.0)
                .border_radius(constants::RADIUS)
                .border_color(Color::rgb8(180, 180, 180))
                .cursor(floem::style::CursorStyle::Pointer)
                .background(paint_color(&swatch.get()));
            match &style {
                Some(extra) => extra(s),
                None => s,
            }
        });
        let trigger = match debug_name {
            Some(name) => trigger.debug_name(name),
            None => trigger,
        };

        let panel = v_stack((hex_picker(&binding), field.view()))
            .style(|s| s.gap(constants::GAP));

        popover(state, trigger, panel)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(String) + 'static) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        (calls, move |c: String| sink.borrow_mut().push(c))
    }

    #[test]
    fn field_edit_is_reflected_on_trigger_and_field() {
        let button = ColorPickerButton::builder().build();
        for s in ["#123", "#ABCDEF", "rebeccapurple", "", "#58e1be"] {
            button.field().edit(s);
            assert_eq!(button.value(), s);
            assert_eq!(button.field().text(), s);
        }
    }

    #[test]
    fn controlled_button_routes_every_edit_to_on_change() {
        let (calls, on_change) = recorder();
        let button = ColorPickerButton::builder()
            .color(|| "#112233".to_string())
            .on_change(on_change)
            .build();

        assert!(button.binding().is_controlled());
        assert!(button.binding().owned_state().is_none());

        button.field().edit("#445566");
        button.field().edit("#778899");
        assert_eq!(*calls.borrow(), vec!["#445566", "#778899"]);
        // The parent never applied the change.
        assert_eq!(button.value(), "#112233");
        assert_eq!(button.field().text(), button.value());
    }

    #[test]
    fn uncontrolled_button_starts_at_default_and_owns_edits() {
        let (calls, on_change) = recorder();
        // Half a controlled pair is not enough.
        let button = ColorPickerButton::builder().on_change(on_change).build();
        assert!(!button.binding().is_controlled());
        assert_eq!(button.value(), "#58E1BE");
        assert_eq!(button.field().text(), "#58E1BE");

        button.field().edit("#000000");
        assert_eq!(button.value(), "#000000");
        assert_eq!(
            button.binding().owned_state().map(|s| s.get_untracked()),
            Some("#000000".to_string())
        );
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn uncontrolled_buttons_are_isolated() {
        let a = ColorPickerButton::builder().build();
        let b = ColorPickerButton::builder().build();
        a.field().edit("#111111");
        assert_eq!(b.value(), "#58E1BE");
        b.field().edit("#222222");
        assert_eq!(a.value(), "#111111");
        assert_eq!(a.field().text(), "#111111");
    }

    #[test]
    fn bound_button_shares_page_state() {
        let state = ColorState::new("#FFFFFF");
        let button = ColorPickerButton::builder().bind(state).build();
        button.field().edit("#010101");
        assert_eq!(state.get_untracked(), "#010101");
        state.set("#020202");
        assert_eq!(button.field().text(), "#020202");
        assert_eq!(button.value(), "#020202");
    }

    #[test]
    fn builder_settings_carry_over() {
        let styled = Rc::new(Cell::new(false));
        let mark = styled.clone();
        let button = ColorPickerButton::builder()
            .id("swatch")
            .style(move |s| {
                mark.set(true);
                s
            })
            .build();
        assert_eq!(button.debug_name.as_deref(), Some("swatch"));

        let extra = button.style.as_ref().expect("style was set");
        let _ = extra(Style::new());
        assert!(styled.get());

        let plain = ColorPickerButton::builder().build();
        assert!(plain.debug_name.is_none());
        assert!(plain.style.is_none());
    }
}
