//! DOM input adapter. Translates key and button events into the guarded
//! simulation operations; listeners only flip the held-jump intent flag or
//! call `try_jump` / `restart`, both of which are safe in any state.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, KeyboardEvent, MouseEvent};

use crate::{performance_now, with_session};

fn is_jump_key(e: &KeyboardEvent) -> bool {
    e.key() == "ArrowUp" || e.code() == "Space"
}

/// Wire keyboard plus the optional `#btn-jump` / `#btn-restart` buttons.
/// Listener closures are leaked (`forget`); they live for the page lifetime.
pub(crate) fn attach_handlers(doc: &Document) -> Result<(), JsValue> {
    let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if is_jump_key(&e) {
            with_session(|s| s.game.set_jump_held(true));
        }
        // Restart is allowed at any time, mid-run included.
        if e.key() == "r" || e.key() == "R" {
            let now = performance_now();
            with_session(move |s| s.game.restart(now));
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    doc.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;
    keydown.forget();

    let keyup = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if is_jump_key(&e) {
            with_session(|s| s.game.set_jump_held(false));
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    doc.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref())?;
    keyup.forget();

    if let Some(btn) = doc.get_element_by_id("btn-jump") {
        let click = Closure::wrap(Box::new(move |_: MouseEvent| {
            with_session(|s| s.game.try_jump());
        }) as Box<dyn FnMut(MouseEvent)>);
        btn.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }

    if let Some(btn) = doc.get_element_by_id("btn-restart") {
        let click = Closure::wrap(Box::new(move |_: MouseEvent| {
            let now = performance_now();
            with_session(move |s| s.game.restart(now));
        }) as Box<dyn FnMut(MouseEvent)>);
        btn.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
        click.forget();
    }

    Ok(())
}
