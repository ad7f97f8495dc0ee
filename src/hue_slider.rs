//! Horizontal hue strip (0.0–1.0, red to red).
//!
//! The rainbow is rasterized once per size and scale; only the thumb moves.

use std::sync::Arc;

use floem::kurbo::Rect;
use floem::peniko::{self, Blob, Color};

use floem::reactive::create_effect;
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::constants;
use crate::math;
use crate::picker::PickerState;

fn rasterize_hue_strip(width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let h = px as f64 / (width - 1).max(1) as f64;
        let (r, g, b) = math::hue_rgb8(h);
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset..offset + 4].copy_from_slice(&[r, g, b, 255]);
        }
    }
    buf
}

struct HueValue(f64);

pub(crate) struct HueSlider {
    id: ViewId,
    held: bool,
    hue: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64)>,
    strip_img: Option<peniko::Image>,
    strip_hash: Vec<u8>,
    cached_dims: (u32, u32),
}

/// Creates the hue strip for `picker`.
pub(crate) fn hue_slider(picker: PickerState) -> HueSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(HueValue(picker.hsb().h));
    });

    HueSlider {
        id,
        held: false,
        hue: picker.hsb_untracked().h,
        size: Default::default(),
        on_change: Box::new(move |h| picker.pick_hue(h)),
        strip_img: None,
        strip_hash: Vec::new(),
        cached_dims: (0, 0),
    }
    .style(|s| {
        s.width(constants::PICKER_WIDTH)
            .height(constants::SLIDER_HEIGHT)
            .border_radius(constants::THUMB_RADIUS as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl HueSlider {
    fn update_from_pointer(&mut self, x: f64) {
        let w = self.size.width as f64;
        let r = constants::THUMB_RADIUS;
        let usable = w - 2.0 * r;
        if usable > 0.0 {
            self.hue = ((x - r) / usable).clamp(0.0, 1.0);
            (self.on_change)(self.hue);
        }
    }

    fn ensure_strip_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 || self.cached_dims == (pw, ph) {
            return;
        }

        let pixels = rasterize_hue_strip(pw, ph);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.strip_hash = blob.id().to_le_bytes().to_vec();
        self.strip_img = Some(img);
        self.cached_dims = (pw, ph);
    }
}

impl View for HueSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(value) = state.downcast::<HueValue>() {
            self.hue = value.0;
            self.id.request_paint();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                self.id.request_paint();
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.update_from_pointer(e.pos.x);
                self.id.request_paint();
                EventPropagation::Stop
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(constants::THUMB_RADIUS);

        cx.save();
        cx.clip(&rrect);
        let scale = cx.scale();
        self.ensure_strip_image(scale);
        if let Some(ref img) = self.strip_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.strip_hash,
                },
                rect,
            );
        }
        cx.restore();

        cx.stroke(
            &rrect,
            Color::rgba8(0, 0, 0, 40),
            &floem::kurbo::Stroke::new(1.0),
        );

        let radius = constants::THUMB_RADIUS;
        let thumb = (radius + self.hue * (w - 2.0 * radius), h / 2.0);
        let (r, g, b) = math::hue_rgb8(self.hue);
        cx.fill(
            &floem::kurbo::Circle::new(thumb, radius - 1.5),
            Color::rgb8(r, g, b),
            0.0,
        );
        cx.stroke(
            &floem::kurbo::Circle::new(thumb, radius),
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        cx.stroke(
            &floem::kurbo::Circle::new(thumb, radius - 1.5),
            Color::WHITE,
            &floem::kurbo::Stroke::new(2.0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_runs_red_to_red() {
        let (w, h) = (7, 2);
        let buf = rasterize_hue_strip(w, h);
        let px = |x: u32, y: u32| {
            let o = ((y * w + x) * 4) as usize;
            (buf[o], buf[o + 1], buf[o + 2])
        };
        assert_eq!(px(0, 0), (255, 0, 0));
        assert_eq!(px(w - 1, 1), (255, 0, 0));
        assert_eq!(px(2, 0), (0, 255, 0)); // h = 1/3
        assert_eq!(px(4, 1), (0, 0, 255)); // h = 2/3
    }
}
