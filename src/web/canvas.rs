//! `RenderSurface` over a 2d canvas context.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

use crate::ports::{RenderSurface, Sprite};

const PLAYER_IMG: &str = "assets/player_ship.png";
const ENEMY_IMG: &str = "assets/enemy_ship.png";

pub(crate) struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    player_img: HtmlImageElement,
    enemy_img: HtmlImageElement,
}

impl CanvasSurface {
    /// Reuse the page's canvas with `id`, or create one and append it to the body.
    pub(crate) fn attach(doc: &Document, id: &str, width: f64, height: f64) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id(id) {
            el.dyn_into()?
        } else {
            let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
            c.set_id(id);
            doc.body()
                .ok_or_else(|| JsValue::from_str("no body"))?
                .append_child(&c)?;
            c
        };
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;
        Ok(Self {
            ctx,
            player_img: load_image(PLAYER_IMG)?,
            enemy_img: load_image(ENEMY_IMG)?,
        })
    }
}

fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    img.set_src(src);
    Ok(img)
}

impl RenderSurface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn draw_sprite(&mut self, sprite: Sprite, x: f64, y: f64, width: f64, height: f64) {
        let img = match sprite {
            Sprite::Player => &self.player_img,
            Sprite::Enemy => &self.enemy_img,
        };
        // Draws nothing until the image has loaded.
        self.ctx
            .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, width, height)
            .ok();
    }

    fn fill_rect(&mut self, color: &str, x: f64, y: f64, width: f64, height: f64) {
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.fill_rect(x, y, width, height);
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str) {
        self.ctx.set_fill_style(&JsValue::from_str(color));
        self.ctx.set_font(font);
        self.ctx.set_text_align("center");
        self.ctx.fill_text(text, x, y).ok();
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }
}
