//! Dino Dash core crate.
//!
//! A canvas runner mini-game: the player rectangle jumps over obstacles that
//! spawn from the right edge and sweep left at a speed that ramps with
//! survival time. The simulation ([`sim`]) is pure Rust and host-testable; the
//! browser pieces (canvas painting, DOM input, the animation loop) live in
//! thin adapters around it and are only reachable through [`start_game`].

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, window};

pub mod config;
pub mod geom;
pub mod sim;

mod input;
mod render;

use config::GameConfig;
use render::CanvasPainter;
use sim::Game;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Session: the single mutable resource. Owned by the tick loop; input
// listeners reach it through the same cell between frames.
// -----------------------------------------------------------------------------

pub(crate) struct Session {
    pub(crate) game: Game,
    painter: CanvasPainter,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = RefCell::new(None);
}

pub(crate) fn with_session<F: FnOnce(&mut Session)>(f: F) {
    SESSION.with(|cell| {
        if let Some(session) = cell.borrow_mut().as_mut() {
            f(session);
        }
    });
}

pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

// -----------------------------------------------------------------------------
// Entrypoint
// -----------------------------------------------------------------------------

/// Boot the game against the page: reuse (or create) the `#game` canvas, wire
/// input, and start the animation loop. Canvas dimensions found in the markup
/// override the config defaults, so the page controls the playfield size.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win.document().ok_or_else(|| JsValue::from_str("no document"))?;

    let defaults = GameConfig::default();
    let canvas: HtmlCanvasElement = if let Some(el) = doc.get_element_by_id("game") {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id("game");
        c.set_width(defaults.canvas_width as u32);
        c.set_height(defaults.canvas_height as u32);
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    let config = GameConfig {
        canvas_width: canvas.width() as f64,
        canvas_height: canvas.height() as f64,
        ..defaults
    };

    let painter = CanvasPainter::new(&doc, canvas)?;
    input::attach_handlers(&doc)?;

    let game = Game::new(config, performance_now());
    SESSION.with(|cell| cell.replace(Some(Session { game, painter })));
    start_loop();
    Ok(())
}

/// Self-rescheduling rAF loop. The timestamp the browser hands the callback
/// shares a timebase with `performance.now()`, so restarts triggered from
/// input handlers and ticks see consistent clocks.
fn start_loop() {
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        SESSION.with(|cell| {
            if let Some(session) = cell.borrow_mut().as_mut() {
                session.game.tick(ts);
                session.painter.draw(&session.game);
                session.painter.update_hud(session.game.score);
            }
        });
        if let Some(w) = window() {
            let _ = w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
