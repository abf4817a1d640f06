//! Browser frame loop.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::{AnimationApp, FrameSource};
use crate::errors::{Result, TesseraError};
use crate::render::Renderer;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

const FALLBACK_INTERVAL: Duration = Duration::from_micros(16_667);

fn js_error(e: &JsValue) -> TesseraError {
    TesseraError::WasmError(format!("{e:?}"))
}

/// Requests the next frame from `source`. A failing display hook falls back
/// to a 60 Hz timer.
fn schedule(
    window: &web_sys::Window,
    callback: &Closure<dyn FnMut()>,
    source: FrameSource,
) -> Result<()> {
    let function = callback.as_ref().unchecked_ref();
    match source {
        FrameSource::DisplaySync => {
            if let Err(e) = window.request_animation_frame(function) {
                log::warn!("requestAnimationFrame failed ({e:?}), using timer");
                return schedule(window, callback, FrameSource::FixedInterval(FALLBACK_INTERVAL));
            }
            Ok(())
        }
        FrameSource::FixedInterval(interval) => window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                function,
                interval.as_millis() as i32,
            )
            .map(|_| ())
            .map_err(|e| js_error(&e)),
    }
}

/// Drives `app` from the browser until the animation finishes.
///
/// The app moves into the frame callback; the loop stops rescheduling once
/// the player reports completion or a frame fails.
pub fn run_web<R: Renderer + 'static>(app: AnimationApp<R>, source: FrameSource) -> Result<()> {
    let window =
        web_sys::window().ok_or_else(|| TesseraError::WasmError("No window found".into()))?;

    let app = Rc::new(RefCell::new(app));
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let frame_window = window.clone();

    *callback.borrow_mut() = Some(Closure::new(move || {
        let mut app = app.borrow_mut();
        if let Err(e) = app.frame() {
            log::error!("Frame failed: {e}");
            return;
        }
        if app.is_finished() {
            log::info!("Animation finished after {} frames", app.frame_count());
            return;
        }
        if let Some(cb) = next.borrow().as_ref()
            && let Err(e) = schedule(&frame_window, cb, source)
        {
            log::error!("Could not schedule next frame: {e}");
        }
    }));

    let first = callback.borrow();
    let cb = first
        .as_ref()
        .ok_or_else(|| TesseraError::WasmError("Frame callback missing".into()))?;
    schedule(&window, cb, source)
}
