//! Canvas + HUD adapter. Reads the game state once per frame after the tick;
//! never mutates it.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement};

use crate::sim::Game;

const GROUND_FILL: &str = "#0b1220";
const PLAYER_FILL: &str = "#e2e8f0";
const OBSTACLE_FILL: &str = "#ef4444";
const TEXT_FILL: &str = "#94a3b8";
const GAME_OVER_FONT: &str = "20px system-ui, sans-serif";
const GAME_OVER_TEXT: &str = "Game Over — Press Restart";

pub(crate) struct CanvasPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    /// Optional `<span id="score">` style element; pages without one simply
    /// get no textual HUD.
    score_el: Option<Element>,
}

impl CanvasPainter {
    pub(crate) fn new(doc: &Document, canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;
        let score_el = doc.get_element_by_id("score");
        Ok(Self { canvas, ctx, score_el })
    }

    pub(crate) fn draw(&self, game: &Game) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);

        // Ground strip.
        let ground_y = game.config().ground_y();
        self.ctx.set_fill_style(&JsValue::from_str(GROUND_FILL));
        self.ctx.fill_rect(0.0, ground_y, w, h - ground_y);

        // Player; positions rounded to whole pixels for crisp fills.
        let p = &game.player;
        self.ctx.set_fill_style(&JsValue::from_str(PLAYER_FILL));
        self.ctx.fill_rect(p.x.round(), p.y.round(), p.w, p.h);

        // Obstacles.
        self.ctx.set_fill_style(&JsValue::from_str(OBSTACLE_FILL));
        for o in &game.obstacles {
            self.ctx.fill_rect(o.x.round(), o.y.round(), o.w, o.h);
        }

        if !game.is_running() {
            self.ctx.set_fill_style(&JsValue::from_str(TEXT_FILL));
            self.ctx.set_font(GAME_OVER_FONT);
            self.ctx.fill_text(GAME_OVER_TEXT, 90.0, h / 2.0).ok();
        }
    }

    pub(crate) fn update_hud(&self, score: u32) {
        if let Some(el) = &self.score_el {
            el.set_text_content(Some(&format!("Score: {}", score)));
        }
    }
}
