//! Where a picker reads and writes its color.
//!
//! A picker is either driven by its parent ([`ColorBinding::External`]) or
//! keeps its own cell ([`ColorBinding::Owned`]). The choice is made once in
//! [`ColorBinding::resolve`] and never revisited.

use std::fmt;
use std::rc::Rc;

use floem::reactive::untrack;

use crate::constants;
use crate::context::ColorState;

/// Reads the parent-owned color. May subscribe to signals.
pub type ColorGetter = Rc<dyn Fn() -> String>;

/// Receives every new color string.
pub type ColorSetter = Rc<dyn Fn(String)>;

#[derive(Clone)]
pub enum ColorBinding {
    /// Controlled: every read and write goes to the parent.
    External {
        color: ColorGetter,
        on_change: ColorSetter,
    },
    /// Uncontrolled: the picker owns this cell.
    Owned(ColorState),
}

impl ColorBinding {
    /// Controlled iff both halves are present, otherwise a fresh cell holding
    /// [`DEFAULT_COLOR`](constants::DEFAULT_COLOR).
    pub fn resolve(color: Option<ColorGetter>, on_change: Option<ColorSetter>) -> Self {
        match (color, on_change) {
            (Some(color), Some(on_change)) => {
                log::debug!("color picker is controlled by its parent");
                ColorBinding::External { color, on_change }
            }
            (color, on_change) => {
                if color.is_some() || on_change.is_some() {
                    log::debug!(
                        "color picker got only one of color/on_change; owning its state instead"
                    );
                }
                ColorBinding::owned(constants::DEFAULT_COLOR)
            }
        }
    }

    pub fn owned(initial: impl Into<String>) -> Self {
        ColorBinding::Owned(ColorState::new(initial))
    }

    /// Controlled by `state`: reads it and writes every change back into it.
    pub fn shared(state: ColorState) -> Self {
        ColorBinding::External {
            color: Rc::new(move || state.get()),
            on_change: Rc::new(move |c| state.set(c)),
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, ColorBinding::External { .. })
    }

    /// The owned cell, if this binding has one.
    pub fn owned_state(&self) -> Option<ColorState> {
        match self {
            ColorBinding::Owned(state) => Some(*state),
            ColorBinding::External { .. } => None,
        }
    }

    /// Current value, subscribing the running effect.
    pub fn get(&self) -> String {
        match self {
            ColorBinding::External { color, .. } => color(),
            ColorBinding::Owned(state) => state.get(),
        }
    }

    pub fn get_untracked(&self) -> String {
        match self {
            ColorBinding::External { color, .. } => untrack(|| color()),
            ColorBinding::Owned(state) => state.get_untracked(),
        }
    }

    /// Route `value` to whichever setter is in effect, verbatim.
    pub fn set(&self, value: String) {
        match self {
            ColorBinding::External { on_change, .. } => on_change(value),
            ColorBinding::Owned(state) => state.set(value),
        }
    }
}

impl fmt::Debug for ColorBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorBinding::External { .. } => f.write_str("External"),
            ColorBinding::Owned(state) => {
                f.debug_tuple("Owned").field(&state.get_untracked()).finish()
            }
        }
    }
}
