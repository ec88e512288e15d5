use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Section;
use leptos::prelude::*;
use site_core::visibility::{effective_threshold, LatchOutcome, VisibilityLatch};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type ObserverSlot = Option<(IntersectionObserver, Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>)>;

/// Becomes `true` the first time `target` crosses `threshold` and stays true.
///
/// `None` means the caller is not gated on visibility at all.
pub fn use_in_view(target: NodeRef<Section>, threshold: Option<f64>) -> Signal<bool> {
    let Some(threshold) = threshold else {
        return Signal::stored(true);
    };

    let in_view = RwSignal::new(false);
    let slot: StoredValue<ObserverSlot, LocalStorage> = StoredValue::new_local(None);

    Effect::new(move || {
        let Some(el) = target.get() else { return };
        if in_view.get_untracked() || slot.with_value(|s| s.is_some()) {
            return;
        }

        let latch = Rc::new(RefCell::new(VisibilityLatch::new()));
        let on_entries = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if latch.borrow_mut().observe(entry.is_intersecting()) == LatchOutcome::Latched {
                        observer.unobserve(&entry.target());
                        in_view.set(true);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(effective_threshold(threshold)));
        options.set_root_margin("0px");

        match IntersectionObserver::new_with_options(on_entries.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&el);
                slot.set_value(Some((observer, on_entries)));
            }
            Err(e) => {
                // No observer support: behave as if always on screen
                log::warn!("IntersectionObserver unavailable: {e:?}");
                in_view.set(true);
            }
        }
    });

    on_cleanup(move || {
        slot.update_value(|s| {
            if let Some((observer, _)) = s.take() {
                observer.disconnect();
            }
        });
    });

    in_view.into()
}
