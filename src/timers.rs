use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A single pending `setTimeout`. Scheduling again cancels the previous one.
#[derive(Clone, Default)]
pub struct OneShotTimer {
    handle: Rc<Cell<Option<i32>>>,
}

impl OneShotTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        if let (Some(h), Some(w)) = (self.handle.take(), web::window()) {
            w.clear_timeout_with_handle(h);
        }
    }

    pub fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) {
        self.cancel();
        let Some(w) = web::window() else { return };
        let handle = self.handle.clone();
        let fire = Closure::once_into_js(move || {
            handle.set(None);
            callback();
        });
        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        let callback_fn = fire.unchecked_ref::<js_sys::Function>();
        match w.set_timeout_with_callback_and_timeout_and_arguments_0(callback_fn, ms) {
            Ok(h) => self.handle.set(Some(h)),
            Err(e) => log::warn!("[timer] setTimeout failed: {:?}", e),
        }
    }
}
