use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use site_core::video::{scroll_target, ScrollDirection, ScrollKey, ScrollState, VideoItem};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::content::media;

fn smooth_scroll_to(el: &web_sys::Element, left: f64) {
    let opts = ScrollToOptions::new();
    opts.set_left(left);
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_to_with_scroll_to_options(&opts);
}

/// Horizontal strip of sermon videos with arrow, keyboard and drag scrolling.
#[component]
pub fn VideoGallery() -> impl IntoView {
    let videos = media::sermon_videos();
    let scroller = NodeRef::<Div>::new();
    let scroll = RwSignal::new(ScrollState::default());
    let selected = RwSignal::new(None::<VideoItem>);
    // (touch x, scroll_left) at drag start
    let drag = StoredValue::new(None::<(f64, f64)>);

    let measure = move || {
        if let Some(el) = scroller.get_untracked() {
            scroll.set(ScrollState::measure(
                el.scroll_left() as f64,
                el.scroll_width() as f64,
                el.client_width() as f64,
            ));
        }
    };

    Effect::new(move || {
        if scroller.get().is_some() {
            measure();
        }
    });
    let resize = window_event_listener(ev::resize, move |_| measure());
    on_cleanup(move || resize.remove());

    let page = move |direction: ScrollDirection| {
        if let Some(el) = scroller.get_untracked() {
            let target = scroll_target(direction, el.scroll_left() as f64, el.client_width() as f64);
            smooth_scroll_to(&el, target);
        }
    };

    let on_key = move |ev: web_sys::KeyboardEvent| {
        let Some(key) = ScrollKey::from_key(&ev.key()) else { return };
        let Some(el) = scroller.get_untracked() else { return };
        ev.prevent_default();
        match key {
            ScrollKey::Page(direction) => page(direction),
            ScrollKey::Start => smooth_scroll_to(&el, 0.0),
            ScrollKey::End => smooth_scroll_to(&el, el.scroll_width() as f64),
        }
    };

    let on_touch_start = move |ev: web_sys::TouchEvent| {
        let (Some(touch), Some(el)) = (ev.touches().get(0), scroller.get_untracked()) else { return };
        drag.set_value(Some((touch.client_x() as f64, el.scroll_left() as f64)));
    };

    let on_touch_move = move |ev: web_sys::TouchEvent| {
        let Some((start_x, start_left)) = drag.get_value() else { return };
        let (Some(touch), Some(el)) = (ev.touches().get(0), scroller.get_untracked()) else { return };
        el.set_scroll_left((start_left + start_x - touch.client_x() as f64) as i32);
    };

    let on_touch_end = move |_| {
        drag.set_value(None);
        measure();
    };

    view! {
        <section class="video-gallery">
            <div class="section-heading">
                <h2>"Watch Sermons"</h2>
                <p>"Messages from the pulpit of The SCOAN"</p>
            </div>
            <div class="video-strip">
                <Show when=move || scroll.get().can_scroll_left>
                    <button class="scroll-arrow left" aria-label="Scroll left"
                        on:click=move |_| page(ScrollDirection::Left)
                    >"‹"</button>
                </Show>
                <div class="video-scroller" node_ref=scroller tabindex="0"
                    on:scroll=move |_| measure()
                    on:keydown=on_key
                    on:touchstart=on_touch_start
                    on:touchmove=on_touch_move
                    on:touchend=on_touch_end
                >
                    {videos.into_iter().map(|video| {
                        let item = video.clone();
                        view! {
                            <button class="video-card" on:click=move |_| selected.set(Some(item.clone()))>
                                <img src=video.thumbnail.clone() alt=video.title.clone() loading="lazy" />
                                <span class="video-play" aria-hidden="true">"▶"</span>
                                <span class="video-title">{video.title.clone()}</span>
                            </button>
                        }
                    }).collect_view()}
                </div>
                <Show when=move || scroll.get().can_scroll_right>
                    <button class="scroll-arrow right" aria-label="Scroll right"
                        on:click=move |_| page(ScrollDirection::Right)
                    >"›"</button>
                </Show>
            </div>
            {move || selected.get().map(|video| view! { <VideoModal video=video selected=selected /> })}
        </section>
    }
}

#[component]
fn VideoModal(video: VideoItem, selected: RwSignal<Option<VideoItem>>) -> impl IntoView {
    let close = move || selected.set(None);
    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close();
        }
    });
    on_cleanup(move || escape.remove());

    let url = video.source.url().to_string();
    let player = if video.source.is_embed() {
        view! {
            <iframe class="video-frame" src=url title=video.title.clone()
                allow="autoplay; encrypted-media; picture-in-picture; web-share"
                allowfullscreen
            ></iframe>
        }
        .into_any()
    } else {
        view! { <video class="video-frame" src=url controls autoplay playsinline></video> }.into_any()
    };

    view! {
        <div class="video-modal" role="dialog" aria-modal="true" on:click=move |_| close()>
            <div class="video-modal-body" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                <button class="video-modal-close" aria-label="Close video" on:click=move |_| close()>"✕"</button>
                {player}
                <h3>{video.title.clone()}</h3>
                {video.description.clone().map(|d| view! { <p>{d}</p> })}
            </div>
        </div>
    }
}
