use site_core::autoplay::Scheduler;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A live `setInterval`. Owns the callback so it outlives the JS timer.
pub struct IntervalHandle {
    id: i32,
    _tick: Closure<dyn FnMut()>,
}

/// Drives `AutoplayTimer` from the window's interval timers.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Option<IntervalHandle>;

    fn start_interval(&mut self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle {
        let window = web_sys::window()?;
        let tick = Closure::wrap(tick);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            period_ms as i32,
        ) {
            Ok(id) => Some(IntervalHandle { id, _tick: tick }),
            Err(e) => {
                log::warn!("setInterval failed: {e:?}");
                None
            }
        }
    }

    fn cancel(&mut self, handle: Self::Handle) {
        let Some(handle) = handle else { return };
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(handle.id);
        }
    }
}
