//! Square saturation/brightness area.
//!
//! Saturation grows left to right, brightness falls top to bottom, at the
//! picker's current hue. The area is rasterized to an RGBA8 image at a fixed
//! resolution and only re-rasterized when the hue changes.

use std::sync::Arc;

use floem::kurbo::{Circle, Point, Rect};
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
use crate::picker::{Hsb, PickerState};

/// Rasterize the area for hue `h`: column = saturation, row = 1 - brightness.
fn rasterize_area(size: u32, h: f64) -> Vec<u8> {
    let mut buf = vec![0u8; (size * size * 4) as usize];
    let last = (size - 1).max(1) as f64;
    for py in 0..size {
        let v = 1.0 - py as f64 / last;
        for px in 0..size {
            let s = px as f64 / last;
            let (r, g, b) = math::hsb_to_rgb(h, s, v);
            let offset = ((py * size + px) * 4) as usize;
            buf[offset] = math::to_u8(r);
            buf[offset + 1] = math::to_u8(g);
            buf[offset + 2] = math::to_u8(b);
            buf[offset + 3] = 255;
        }
    }
    buf
}

pub(crate) struct SaturationArea {
    id: ViewId,
    held: bool,
    hsb: Hsb,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64, f64)>,
    area_img: Option<peniko::Image>,
    area_hash: Vec<u8>,
    /// Hue the cached image was rasterized for, in 1/3600ths.
    cached_hue: Option<u32>,
}

/// Creates the saturation/brightness area for `picker`.
pub(crate) fn saturation_area(picker: PickerState) -> SaturationArea {
    let id = ViewId::new();

    create_effect(move |_| {
        id.update_state(picker.hsb());
    });

    SaturationArea {
        id,
        held: false,
        hsb: picker.hsb_untracked(),
        size: Default::default(),
        on_change: Box::new(move |s, b| picker.pick_saturation_brightness(s, b)),
        area_img: None,
        area_hash: Vec::new(),
        cached_hue: None,
    }
    .style(|s| {
        s.width(constants::PICKER_WIDTH)
            .height(constants::AREA_HEIGHT)
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl SaturationArea {
    fn update_from_pointer(&mut self, pos: Point) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        self.hsb.s = (pos.x / w).clamp(0.0, 1.0);
        self.hsb.b = 1.0 - (pos.y / h).clamp(0.0, 1.0);
        (self.on_change)(self.hsb.s, self.hsb.b);
    }

    fn ensure_area_image(&mut self) {
        let key = (self.hsb.h.rem_euclid(1.0) * 3600.0).round() as u32;
        if self.cached_hue == Some(key) && self.area_img.is_some() {
            return;
        }
        let size = constants::AREA_RASTER_SIZE;
        let pixels = rasterize_area(size, self.hsb.h);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, size, size);

        self.area_hash = blob.id().to_le_bytes().to_vec();
        self.area_img = Some(img);
        self.cached_hue = Some(key);
    }
}

impl View for SaturationArea {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(hsb) = state.downcast::<Hsb>() {
            self.hsb = *hsb;
            self.id.request_paint();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos);
                self.id.request_paint();
                EventPropagation::Stop
            }
            Event::PointerMove(e) if self.held => {
                self.update_from_pointer(e.pos);
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
        let rrect = rect.to_rounded_rect(constants::RADIUS as f64);

        cx.save();
        cx.clip(&rrect);
        self.ensure_area_image();
        if let Some(ref img) = self.area_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.area_hash,
                },
                rect,
            );
        }
        cx.restore();

        // Cursor: white ring between two faint dark rings, like the hue thumb.
        let cur = Point::new(self.hsb.s * w, (1.0 - self.hsb.b) * h);
        cx.stroke(
            &Circle::new(cur, constants::CURSOR_RADIUS + 1.0),
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
        cx.stroke(
            &Circle::new(cur, constants::CURSOR_RADIUS),
            Color::WHITE,
            &floem::kurbo::Stroke::new(2.0),
        );
        cx.stroke(
            &Circle::new(cur, constants::CURSOR_RADIUS - 1.5),
            Color::rgba8(0, 0, 0, 80),
            &floem::kurbo::Stroke::new(1.0),
        );
    }
}
