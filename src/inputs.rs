//! Text field mirroring a color binding, and the clipboard copy button.

use floem::prelude::*;
use floem::reactive::{create_effect, untrack, RwSignal, SignalGet, SignalUpdate};

use crate::binding::ColorBinding;
use crate::constants;

/// A text buffer kept equal to a [`ColorBinding`] in both directions.
///
/// Whatever is typed is handed to the binding as-is, once per edit; whatever
/// the binding holds is shown as-is.
#[derive(Clone, Copy)]
pub struct ColorField {
    text: RwSignal<String>,
}

impl ColorField {
    pub fn sync(binding: &ColorBinding) -> Self {
        let text = RwSignal::new(binding.get_untracked());

        // Binding -> text
        let source = binding.clone();
        create_effect(move |_| {
            let value = source.get();
            if text.get_untracked() != value {
                text.set(value);
            }
        });

        // Text -> binding. Only `text` is tracked; the getter may read signals.
        // A controlled parent may ignore the write, in which case the field
        // goes back to showing what the parent holds.
        let sink = binding.clone();
        create_effect(move |prev: Option<String>| {
            let typed = text.get();
            if prev.as_ref() == Some(&typed) {
                return typed;
            }
            let differs = untrack(|| sink.get_untracked() != typed);
            if differs {
                sink.set(typed.clone());
                let applied = untrack(|| sink.get_untracked());
                if applied != typed {
                    text.set(applied);
                }
            }
            text.get_untracked()
        });

        Self { text }
    }

    /// What the field currently displays.
    pub fn text(&self) -> String {
        self.text.get_untracked()
    }

    /// Replace the field's content, as a keystroke or paste would.
    pub fn edit(&self, value: impl Into<String>) {
        self.text.set(value.into());
    }

    pub fn view(self) -> impl IntoView {
        text_input(self.text)
            .placeholder("#000")
            .style(|s| {
                s.width(constants::PICKER_WIDTH)
                    .padding(4.0)
                    .font_size(constants::INPUT_FONT)
                    .font_family("monospace".to_string())
                    .background(Color::WHITE)
                    .border(1.0)
                    .border_color(Color::rgb8(200, 200, 200))
                    .border_radius(3.0)
            })
    }
}

/// A small copy button that copies the result of `get_text` to the clipboard.
pub fn copy_button(get_text: impl Fn() -> String + 'static) -> impl IntoView {
    crate::load_icon_font();
    let pressed = RwSignal::new(false);
    container(
        label(|| lucide_icons::Icon::Copy.unicode().to_string()).style(move |s| {
            let c = if pressed.get() {
                Color::rgb8(80, 80, 80)
            } else {
                Color::rgb8(120, 120, 120)
            };
            s.font_size(14.0).font_family("lucide".to_string()).color(c)
        }),
    )
    .style(|s| {
        s.size(22.0, 22.0)
            .items_center()
            .justify_center()
            .border_radius(3.0)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(230, 230, 230)))
    })
    .on_event_stop(floem::event::EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(floem::event::EventListener::PointerUp, move |_| {
        pressed.set(false);
        copy_to_clipboard(&get_text());
    })
}

fn copy_to_clipboard(text: &str) {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => {
            if let Err(err) = clipboard.set_text(text) {
                log::warn!("failed to copy to clipboard: {err}");
            }
        }
        Err(err) => log::warn!("clipboard unavailable: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::context::ColorState;

    #[test]
    fn field_starts_with_binding_value() {
        let field = ColorField::sync(&ColorBinding::owned("#010203"));
        assert_eq!(field.text(), "#010203");
    }

    #[test]
    fn typed_text_is_written_verbatim() {
        let binding = ColorBinding::owned("#000000");
        let field = ColorField::sync(&binding);
        for s in ["#abc", "  spaced ", "not a color", ""] {
            field.edit(s);
            assert_eq!(binding.get_untracked(), s);
            assert_eq!(field.text(), s);
        }
    }

    #[test]
    fn binding_changes_reach_the_field() {
        let state = ColorState::new("#FFFFFF");
        let field = ColorField::sync(&ColorBinding::shared(state));
        state.set("#123456");
        assert_eq!(field.text(), "#123456");
    }

    #[test]
    fn one_setter_call_per_edit() {
        let parent = ColorState::new("#112233");
        let calls = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = calls.clone();
        let binding = ColorBinding::External {
            color: Rc::new(move || parent.get()),
            on_change: Rc::new(move |c| {
                sink.borrow_mut().push(c.clone());
                parent.set(c);
            }),
        };
        let field = ColorField::sync(&binding);
        field.edit("#445566");
        field.edit("#778899");
        assert_eq!(*calls.borrow(), vec!["#445566", "#778899"]);
        assert_eq!(parent.get_untracked(), "#778899");
    }

    #[test]
    fn ignored_edit_reverts_to_parent_value() {
        let calls = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = calls.clone();
        let binding = ColorBinding::External {
            color: Rc::new(|| "#112233".to_string()),
            on_change: Rc::new(move |c| sink.borrow_mut().push(c)),
        };
        let field = ColorField::sync(&binding);
        field.edit("#445566");
        assert_eq!(*calls.borrow(), vec!["#445566"]);
        assert_eq!(field.text(), "#112233");

        field.edit("#778899");
        assert_eq!(*calls.borrow(), vec!["#445566", "#778899"]);
        assert_eq!(field.text(), "#112233");
    }
}
