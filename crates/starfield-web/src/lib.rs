//! `#[wasm_bindgen]` exports for the star field.
//!
//! The host page owns the frame loop: call `starfield_init` once, optionally
//! `starfield_attach_canvas`, then `starfield_tick` from every
//! `requestAnimationFrame` callback. Pointer and resize callbacks forward to
//! the matching exports; their effects apply at the start of the next tick.

pub mod canvas;
pub mod runner;

pub use canvas::{CanvasSurface, CanvasTarget};
pub use runner::StarfieldRunner;

use std::cell::RefCell;

use starfield_engine::{InputEvent, StarfieldConfig};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<StarfieldRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut StarfieldRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Starfield not initialized. Call starfield_init() first.");
        f(runner)
    })
}

/// Create and populate the simulation. `config_json` may be empty for
/// defaults; malformed JSON is logged and ignored. Calling it again
/// replaces the simulation but keeps an attached canvas.
#[wasm_bindgen]
pub fn starfield_init(width: f32, height: f32, config_json: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let mut config = if config_json.trim().is_empty() {
        StarfieldConfig::default()
    } else {
        StarfieldConfig::from_json_or_default(config_json)
    };
    // Seed from the host unless one was pinned explicitly.
    config
        .seed
        .get_or_insert_with(|| (js_sys::Math::random() * u64::MAX as f64) as u64);

    let mut runner = StarfieldRunner::new(config, width, height);
    runner.init();

    RUNNER.with(|cell| {
        let mut slot = cell.borrow_mut();
        if let Some(canvas) = slot.as_mut().and_then(StarfieldRunner::take_canvas) {
            runner.attach_canvas(canvas);
        }
        *slot = Some(runner);
    });
    log::info!("starfield: initialized");
}

/// Draw every tick onto the canvas with this element id.
#[wasm_bindgen]
pub fn starfield_attach_canvas(canvas_id: &str) -> Result<(), JsValue> {
    let canvas = CanvasSurface::from_element_id(canvas_id)?;
    with_runner(|r| r.attach_canvas(canvas));
    Ok(())
}

#[wasm_bindgen]
pub fn starfield_tick() {
    with_runner(|r| r.tick());
}

#[wasm_bindgen]
pub fn starfield_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn starfield_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn starfield_pointer_up() {
    with_runner(|r| r.push_input(InputEvent::PointerUp));
}

#[wasm_bindgen]
pub fn starfield_resize(width: f32, height: f32) {
    with_runner(|r| r.resize(width, height));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_commands_ptr() -> *const f32 {
    with_runner(|r| r.commands_ptr())
}

#[wasm_bindgen]
pub fn get_command_count() -> u32 {
    with_runner(|r| r.command_count())
}

#[wasm_bindgen]
pub fn get_command_floats() -> u32 {
    starfield_engine::DrawCommand::FLOATS as u32
}

#[wasm_bindgen]
pub fn get_viewport_width() -> f32 {
    with_runner(|r| r.viewport_width())
}

#[wasm_bindgen]
pub fn get_viewport_height() -> f32 {
    with_runner(|r| r.viewport_height())
}
