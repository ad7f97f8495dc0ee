//! Page-level color state and its read-only broadcast to descendant views.
//!
//! The owner of the color keeps a [`ColorState`]. A [`ColorProvider`] turns
//! that state (or any value) into a [`ColorContext`], a copyable read-only
//! handle that is passed down explicitly to the views that need it. Nothing
//! is looked up ambiently: a view that was never handed a provider's context
//! holds a detached one and gets [`ColorContextError::OutsideProvider`].

use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use thiserror::Error;

/// Misuse of a [`ColorContext`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorContextError {
    #[error("color context consumed outside of a ColorProvider")]
    OutsideProvider,
}

/// A reactive color cell and its setter, owned by one component.
#[derive(Clone, Copy)]
pub struct ColorState {
    color: RwSignal<String>,
}

impl ColorState {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            color: RwSignal::new(initial.into()),
        }
    }

    /// Current value, subscribing the running effect.
    pub fn get(&self) -> String {
        self.color.get()
    }

    pub fn get_untracked(&self) -> String {
        self.color.get_untracked()
    }

    /// Replace the value verbatim.
    pub fn set(&self, value: impl Into<String>) {
        self.color.set(value.into());
    }
}

/// The writable side of a color broadcast.
#[derive(Clone, Copy)]
pub struct ColorProvider {
    slot: RwSignal<Option<String>>,
}

impl ColorProvider {
    /// A provider that has not provided anything yet.
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(None),
        }
    }

    /// Make `value` visible to every context handed out by this provider.
    pub fn provide(&self, value: impl Into<String>) {
        let value = value.into();
        log::trace!("providing color {value:?}");
        self.slot.set(Some(value));
    }

    /// Re-provide `state`'s value every time it changes.
    pub fn bind(&self, state: ColorState) {
        let provider = *self;
        create_effect(move |_| provider.provide(state.get()));
    }

    /// A read-only handle for descendants.
    pub fn context(&self) -> ColorContext {
        ColorContext {
            slot: Some(self.slot),
        }
    }
}

impl Default for ColorProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of a provider's current color.
#[derive(Clone, Copy, Default)]
pub struct ColorContext {
    slot: Option<RwSignal<Option<String>>>,
}

impl ColorContext {
    /// A context with no provider above it.
    pub fn detached() -> Self {
        Self { slot: None }
    }

    /// The most recently provided value, subscribing the running effect.
    pub fn consume(&self) -> Result<String, ColorContextError> {
        let slot = self.slot.ok_or(ColorContextError::OutsideProvider)?;
        slot.get().ok_or(ColorContextError::OutsideProvider)
    }

    pub fn consume_untracked(&self) -> Result<String, ColorContextError> {
        let slot = self.slot.ok_or(ColorContextError::OutsideProvider)?;
        slot.get_untracked().ok_or(ColorContextError::OutsideProvider)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn detached_context_is_a_usage_error() {
        let ctx = ColorContext::detached();
        assert_eq!(ctx.consume(), Err(ColorContextError::OutsideProvider));
        assert_eq!(
            ColorContext::default().consume_untracked(),
            Err(ColorContextError::OutsideProvider)
        );
    }

    #[test]
    fn provider_without_value_is_a_usage_error() {
        let provider = ColorProvider::new();
        assert_eq!(
            provider.context().consume(),
            Err(ColorContextError::OutsideProvider)
        );
    }

    #[test]
    fn empty_value_is_not_an_error() {
        let provider = ColorProvider::new();
        provider.provide("");
        assert_eq!(provider.context().consume(), Ok(String::new()));
    }

    #[test]
    fn consumers_see_latest_value() {
        let provider = ColorProvider::new();
        let ctx = provider.context();
        provider.provide("#FFFFFF");
        assert_eq!(ctx.consume().unwrap(), "#FFFFFF");
        provider.provide("#000000");
        assert_eq!(ctx.consume().unwrap(), "#000000");
    }

    #[test]
    fn bound_state_propagates_to_effects() {
        let state = ColorState::new("#FFFFFF");
        let provider = ColorProvider::new();
        provider.bind(state);
        let ctx = provider.context();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        create_effect(move |_| {
            log.borrow_mut().push(ctx.consume().unwrap());
        });

        state.set("#123456");
        state.set("not-a-color");
        assert_eq!(
            *seen.borrow(),
            vec!["#FFFFFF", "#123456", "not-a-color"]
        );
        assert_eq!(ctx.consume_untracked().unwrap(), "not-a-color");
    }

    #[test]
    fn error_message_names_the_misuse() {
        assert_eq!(
            ColorContextError::OutsideProvider.to_string(),
            "color context consumed outside of a ColorProvider"
        );
    }
}
