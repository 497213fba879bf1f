use crate::constants::*;
use crate::layout::{self, LabelBox};
use panorama_core::{CanonicalTable, DisplayMode, Frame, HotspotView, Phase};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas2D painter for the hotspot layer. The artwork itself is a CSS
/// background / sprite layer beneath the canvas.
pub struct Painter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Painter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }

    pub fn draw(&self, frame: &Frame, table: &CanonicalTable, dpr: f64) {
        let ctx = &self.ctx;
        _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        // Everything below is in CSS px.
        _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

        for view in &frame.hotspots {
            if view.dot_visible {
                self.draw_dot(view);
            }
            if view.phase == Phase::Active {
                self.draw_outline(view);
            }
        }
        // Labels last so they sit above every dot.
        for view in &frame.hotspots {
            if !view.label_visible {
                continue;
            }
            let Some(obj) = table.get(view.index) else { continue };
            let Some(label) = obj.label.as_deref() else { continue };
            let caption = match frame.display_mode {
                DisplayMode::StaticLabel => None,
                DisplayMode::HoverExpand => obj.caption.as_deref(),
            };
            self.draw_label(view, label, caption, frame.viewport.screen.x, frame.viewport.screen.y);
        }
    }

    fn circle(&self, x: f64, y: f64, r: f64) {
        self.ctx.begin_path();
        _ = self.ctx.arc(x, y, r.max(0.0), 0.0, TAU);
    }

    fn draw_dot(&self, view: &HotspotView) {
        let c = view.placement.center;
        let ctx = &self.ctx;
        ctx.set_line_width(1.5);
        for ring in &view.rings {
            if ring.alpha <= 0.0 {
                continue;
            }
            self.circle(c.x, c.y, ring.radius);
            ctx.set_stroke_style_str(&format!("rgba({}, {:.3})", DOT_COLOR, ring.alpha));
            ctx.stroke();
        }
        let core = view.rings.first().map(|r| r.radius).unwrap_or(view.hit_radius)
            * DOT_CORE_RADIUS_FRACTION;
        self.circle(c.x, c.y, core);
        ctx.set_fill_style_str(&format!("rgba({}, 0.95)", DOT_COLOR));
        ctx.fill();
    }

    fn draw_outline(&self, view: &HotspotView) {
        let c = view.placement.center;
        self.circle(c.x, c.y, view.hit_radius);
        self.ctx.set_line_width(2.0);
        self.ctx.set_stroke_style_str(OUTLINE_COLOR);
        self.ctx.stroke();
    }

    fn rounded_rect(&self, b: &LabelBox, r: f64) {
        let ctx = &self.ctx;
        let r = r.min(b.w * 0.5).min(b.h * 0.5);
        ctx.begin_path();
        ctx.move_to(b.x + r, b.y);
        _ = ctx.arc_to(b.x + b.w, b.y, b.x + b.w, b.y + b.h, r);
        _ = ctx.arc_to(b.x + b.w, b.y + b.h, b.x, b.y + b.h, r);
        _ = ctx.arc_to(b.x, b.y + b.h, b.x, b.y, r);
        _ = ctx.arc_to(b.x, b.y, b.x + b.w, b.y, r);
        ctx.close_path();
    }

    fn text_width(&self, text: &str, font: &str) -> f64 {
        self.ctx.set_font(font);
        self.ctx
            .measure_text(text)
            .map(|m| m.width())
            .unwrap_or(0.0)
    }

    fn draw_label(
        &self,
        view: &HotspotView,
        label: &str,
        caption: Option<&str>,
        screen_w: f64,
        screen_h: f64,
    ) {
        let ctx = &self.ctx;
        let c = view.placement.center;
        let mut text_w = self.text_width(label, LABEL_FONT);
        if let Some(cap) = caption {
            text_w = text_w.max(self.text_width(cap, CAPTION_FONT));
        }
        let height = LABEL_HEIGHT + if caption.is_some() { CAPTION_HEIGHT } else { 0.0 };
        let b = layout::label_box(
            [c.x, c.y],
            view.hit_radius,
            text_w,
            view.label_progress,
            LABEL_PAD_X,
            height,
            LABEL_GAP,
        );
        let b = layout::clamp_to_screen(b, screen_w, screen_h);

        ctx.set_global_alpha(layout::ease(view.label_progress));
        self.rounded_rect(&b, LABEL_HEIGHT * 0.5);
        ctx.set_fill_style_str(LABEL_BG);
        ctx.fill();

        if layout::text_visible(view.label_progress) {
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            let mid_x = b.x + b.w * 0.5;
            ctx.set_font(LABEL_FONT);
            ctx.set_fill_style_str(LABEL_FG);
            _ = ctx.fill_text(label, mid_x, b.y + LABEL_HEIGHT * 0.5);
            if let Some(cap) = caption {
                ctx.set_font(CAPTION_FONT);
                ctx.set_fill_style_str(CAPTION_FG);
                _ = ctx.fill_text(cap, mid_x, b.y + LABEL_HEIGHT + CAPTION_HEIGHT * 0.4);
            }
        }
        ctx.set_global_alpha(1.0);
    }
}
