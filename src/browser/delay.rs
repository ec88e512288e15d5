use leptos::prelude::*;
use site_core::task::{CancelToken, Cancelled, TaskGuard};
use wasm_bindgen_futures::JsFuture;

/// Resolve after `ms` milliseconds on the window timer.
pub async fn sleep(ms: u32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        let scheduled = web_sys::window()
            .map(|w| w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms as i32).is_ok())
            .unwrap_or(false);
        if !scheduled {
            log::warn!("No window timer; resolving {ms} ms delay immediately");
            let _ = resolve.call0(&wasm_bindgen::JsValue::UNDEFINED);
        }
    });
    JsFuture::from(promise).await.ok();
}

/// Fake request latency that stops early when `token` is cancelled.
pub async fn simulate(token: &CancelToken, ms: u32) -> Result<(), Cancelled> {
    token.run(sleep(ms)).await
}

/// A [`TaskGuard`] scoped to the current component. Pending simulated
/// requests resolve to [`Cancelled`] once the component is dropped.
pub fn use_task_guard() -> StoredValue<TaskGuard, LocalStorage> {
    let guard = StoredValue::new_local(TaskGuard::new());
    on_cleanup(move || guard.with_value(|g| g.cancel()));
    guard
}

/// Fresh token from a component's guard.
pub fn token_of(guard: StoredValue<TaskGuard, LocalStorage>) -> CancelToken {
    guard.with_value(|g| g.token())
}
