//! Hex color picker: a saturation/brightness area over a hue strip.
//!
//! The widget edits HSB internally and talks to the outside world only
//! through a [`ColorBinding`] of color strings. Strings that parse move the
//! cursor; strings that don't are left alone. Widget edits are written back
//! as `#RRGGBB`, unless the binding's current string already names that
//! color (so `#58e1be` typed by hand stays `#58e1be`).

use std::cell::Cell;
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{create_effect, untrack, RwSignal, SignalGet, SignalUpdate};

use crate::binding::ColorBinding;
use crate::color::SolidColor;
use crate::constants;
use crate::hue_slider::hue_slider;
use crate::saturation_area::saturation_area;

/// Hue, saturation and brightness, all 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub h: f64,
    pub s: f64,
    pub b: f64,
}

impl Hsb {
    /// HSB for `c`, keeping `hue` when `c` is gray or black.
    pub fn from_color(c: SolidColor, hue: f64) -> Self {
        let (h, s, b) = c.to_hsb();
        let h = if s > 0.001 && b > 0.001 { h } else { hue };
        Hsb { h, s, b }
    }

    pub fn to_color(self) -> SolidColor {
        SolidColor::from_hsb(self.h, self.s, self.b)
    }
}

/// The picker's HSB cell, synchronized with a [`ColorBinding`].
#[derive(Clone, Copy)]
pub struct PickerState {
    hsb: RwSignal<Hsb>,
}

impl PickerState {
    pub fn sync(binding: &ColorBinding) -> Self {
        let start = SolidColor::from_hex(&binding.get_untracked())
            .unwrap_or_else(|| SolidColor::from_rgb(255, 255, 255));
        let (h, s, b) = start.to_hsb();
        let hsb = RwSignal::new(Hsb { h, s, b });

        // Binding -> HSB, for strings that parse to a different color.
        let source = binding.clone();
        create_effect(move |_| {
            let value = source.get();
            let Some(c) = SolidColor::from_hex(&value) else {
                return;
            };
            let current = hsb.get_untracked();
            if !c.same_rgb(&current.to_color()) {
                hsb.set(Hsb::from_color(c, current.h));
            }
        });

        // Non-reactive guard so a snap-back doesn't echo into the binding.
        let reverting = Rc::new(Cell::new(false));

        // HSB -> binding, skipping the initial run. A controlled parent may
        // ignore the write; the cursor then snaps back to what it holds.
        let sink = binding.clone();
        create_effect(move |prev: Option<Hsb>| {
            let now = hsb.get();
            let Some(before) = prev else {
                return now;
            };
            if reverting.get() {
                return now;
            }
            let picked = now.to_color();
            let names_picked = |value: &str| {
                SolidColor::from_hex(value)
                    .map(|c| c.same_rgb(&picked))
                    .unwrap_or(false)
            };
            if names_picked(&untrack(|| sink.get_untracked())) {
                return now;
            }
            sink.set(picked.to_hex());

            let applied = untrack(|| sink.get_untracked());
            if names_picked(&applied) {
                return now;
            }
            let target = SolidColor::from_hex(&applied)
                .map(|c| Hsb::from_color(c, before.h))
                .unwrap_or(before);
            reverting.set(true);
            hsb.set(target);
            reverting.set(false);
            target
        });

        Self { hsb }
    }

    pub fn hsb(&self) -> Hsb {
        self.hsb.get()
    }

    pub fn hsb_untracked(&self) -> Hsb {
        self.hsb.get_untracked()
    }

    /// A press or drag on the saturation/brightness area.
    pub fn pick_saturation_brightness(&self, s: f64, b: f64) {
        self.hsb.update(|hsb| {
            hsb.s = s.clamp(0.0, 1.0);
            hsb.b = b.clamp(0.0, 1.0);
        });
    }

    /// A press or drag on the hue strip.
    pub fn pick_hue(&self, h: f64) {
        self.hsb.update(|hsb| hsb.h = h.clamp(0.0, 1.0));
    }
}

/// The picker widget bound to `binding`.
pub fn hex_picker(binding: &ColorBinding) -> impl IntoView {
    let picker = PickerState::sync(binding);
    v_stack((saturation_area(picker), hue_slider(picker)))
        .style(|s| s.gap(constants::GAP).items_center())
}
