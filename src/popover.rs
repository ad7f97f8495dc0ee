//! A trigger plus a floating panel that opens below it.
//!
//! The panel closes when the trigger is activated again, when Escape is
//! pressed inside it, when [`PopoverState::dismiss`] is called, or when the
//! page reports a click outside of every popover through [`OutsideClicks`].

use floem::event::{Event, EventListener, EventPropagation};
use floem::keyboard::{Key, NamedKey};
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};

use crate::constants;

/// Open/closed state of one popover.
#[derive(Clone, Copy)]
pub struct PopoverState {
    open: RwSignal<bool>,
}

impl PopoverState {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn is_open_untracked(&self) -> bool {
        self.open.get_untracked()
    }

    pub fn show(&self) {
        self.set(true);
    }

    pub fn dismiss(&self) {
        self.set(false);
    }

    pub fn toggle(&self) {
        self.set(!self.open.get_untracked());
    }

    fn set(&self, open: bool) {
        if self.open.get_untracked() != open {
            log::debug!("popover {}", if open { "opened" } else { "dismissed" });
            self.open.set(open);
        }
    }

    /// Close whenever `clicks` reports an outside interaction.
    pub fn dismiss_on(&self, clicks: OutsideClicks) {
        let state = *self;
        create_effect(move |prev: Option<u64>| {
            let n = clicks.count.get();
            if prev.is_some() {
                state.dismiss();
            }
            n
        });
    }
}

impl Default for PopoverState {
    fn default() -> Self {
        Self::new()
    }
}

/// Page-level notifier for pointer presses that no popover consumed.
#[derive(Clone, Copy)]
pub struct OutsideClicks {
    count: RwSignal<u64>,
}

impl OutsideClicks {
    pub fn new() -> Self {
        Self {
            count: RwSignal::new(0),
        }
    }

    /// Report a press outside of every trigger and panel.
    pub fn notify(&self) {
        self.count.update(|n| *n += 1);
    }

    /// Wrap the page root so unconsumed presses close subscribed popovers.
    pub fn listen<V: IntoView + 'static>(self, root: V) -> impl View {
        container(root)
            .style(|s| s.size_full())
            .on_event_cont(EventListener::PointerDown, move |_| {
                self.notify();
            })
    }
}

impl Default for OutsideClicks {
    fn default() -> Self {
        Self::new()
    }
}

fn dismisses_on(key: &Key) -> bool {
    *key == Key::Named(NamedKey::Escape)
}

/// Lay out `trigger` with `panel` floating below it while `state` is open.
pub fn popover<T, P>(state: PopoverState, trigger: T, panel: P) -> impl IntoView
where
    T: IntoView + 'static,
    P: IntoView + 'static,
{
    let trigger = container(trigger)
        .on_click_stop(move |_| state.toggle())
        .on_event_stop(EventListener::PointerDown, |_| {});

    let panel = container(panel)
        .on_event_stop(EventListener::PointerDown, |_| {})
        .on_event(EventListener::KeyDown, move |e| {
            if let Event::KeyDown(ke) = e {
                if dismisses_on(&ke.key.logical_key) {
                    state.dismiss();
                    return EventPropagation::Stop;
                }
            }
            EventPropagation::Continue
        })
        .style(move |s| {
            s.absolute()
                .inset_top_pct(100.0)
                .margin_top(constants::GAP)
                .z_index(10)
                .padding(constants::PADDING)
                .border(1.0)
                .border_radius(constants::RADIUS * 2.0)
                .border_color(Color::rgb8(220, 220, 220))
                .background(Color::WHITE)
                .box_shadow_blur(12.0)
                .box_shadow_color(Color::rgba8(0, 0, 0, 40))
                .apply_if(!state.is_open(), |s| s.hide())
        });

    v_stack((trigger, panel)).style(|s| s.items_center())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes() {
        let state = PopoverState::new();
        assert!(!state.is_open_untracked());
        state.toggle();
        assert!(state.is_open_untracked());
        state.toggle();
        assert!(!state.is_open_untracked());
    }

    #[test]
    fn show_and_dismiss_are_idempotent() {
        let state = PopoverState::new();
        state.show();
        state.show();
        assert!(state.is_open_untracked());
        state.dismiss();
        state.dismiss();
        assert!(!state.is_open_untracked());
    }

    #[test]
    fn outside_clicks_dismiss_every_subscriber() {
        let clicks = OutsideClicks::new();
        let a = PopoverState::new();
        let b = PopoverState::new();
        a.dismiss_on(clicks);
        b.dismiss_on(clicks);

        // Subscribing alone must not close anything.
        a.show();
        b.show();
        assert!(a.is_open_untracked() && b.is_open_untracked());

        clicks.notify();
        assert!(!a.is_open_untracked());
        assert!(!b.is_open_untracked());

        // Later clicks keep working after a reopen.
        a.show();
        clicks.notify();
        assert!(!a.is_open_untracked());
    }

    #[test]
    fn only_escape_dismisses_from_the_keyboard() {
        assert!(dismisses_on(&Key::Named(NamedKey::Escape)));
        assert!(!dismisses_on(&Key::Named(NamedKey::Enter)));
        assert!(!dismisses_on(&Key::Named(NamedKey::Tab)));
        assert!(!dismisses_on(&Key::Character("q".into())));
    }
}
