use leptos::ev;
use leptos::html::Section;
use leptos::prelude::*;
use site_core::autoplay::AutoplayTimer;
use site_core::carousel::{CarouselConfig, CarouselKind, KeyAction, Slides};
use site_core::gesture::{SwipeDirection, SwipeTracker};

use crate::browser::scheduler::BrowserScheduler;
use crate::browser::visibility::use_in_view;

/// Reactive handle to one carousel instance: the slide model, autoplay
/// gating inputs, and the timer/gesture state behind them.
pub struct Carousel<M: 'static> {
    pub slides: RwSignal<M>,
    pub auto_playing: RwSignal<bool>,
    pub hovered: RwSignal<bool>,
    pub in_view: Signal<bool>,
    pub config: CarouselConfig,
    timer: StoredValue<AutoplayTimer<BrowserScheduler>, LocalStorage>,
    swipe: StoredValue<SwipeTracker>,
}

impl<M> Clone for Carousel<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M> Copy for Carousel<M> {}

impl<M: Slides + Send + Sync + 'static> Carousel<M> {
    pub fn current(&self) -> usize {
        self.slides.with(|s| s.current())
    }

    pub fn total(&self) -> usize {
        self.slides.with(|s| s.total())
    }

    pub fn next(&self) {
        self.slides.update(|s| s.next());
        self.navigated();
    }

    pub fn prev(&self) {
        self.slides.update(|s| s.prev());
        self.navigated();
    }

    pub fn go_to(&self, index: usize) {
        self.slides.update(|s| s.go_to(index));
        self.navigated();
    }

    fn navigated(&self) {
        if self.config.restart_on_navigate {
            self.timer.update_value(|t| t.restart());
        }
    }

    pub fn toggle_autoplay(&self) {
        self.auto_playing.update(|p| *p = !*p);
    }

    pub fn touch_start(&self, ev: &web_sys::TouchEvent) {
        if let Some(x) = touch_x(ev) {
            self.swipe.update_value(|s| s.touch_start(x));
        }
    }

    pub fn touch_move(&self, ev: &web_sys::TouchEvent) {
        if let Some(x) = touch_x(ev) {
            self.swipe.update_value(|s| s.touch_move(x));
        }
    }

    pub fn touch_end(&self) {
        let mut tracker = self.swipe.get_value();
        let swipe = tracker.touch_end();
        self.swipe.set_value(tracker);
        match swipe {
            Some(SwipeDirection::Left) => self.next(),
            Some(SwipeDirection::Right) => self.prev(),
            None => {}
        }
    }
}

fn touch_x(ev: &web_sys::TouchEvent) -> Option<f64> {
    ev.target_touches().get(0).map(|t| t.client_x() as f64)
}

/// Wire a slide model to autoplay, the visibility gate and (per `kind`)
/// keyboard control. `target` is the element watched by the gate.
pub fn use_carousel<M>(kind: CarouselKind, slides: RwSignal<M>, target: NodeRef<Section>) -> Carousel<M>
where
    M: Slides + Send + Sync + 'static,
{
    let config = kind.config();
    let auto_playing = RwSignal::new(true);
    let hovered = RwSignal::new(false);
    let in_view = use_in_view(target, config.visibility_threshold);

    let timer = StoredValue::new_local(AutoplayTimer::new(
        BrowserScheduler,
        config.autoplay_interval_ms,
        config.pause_on_hover,
        move || slides.update(|s| s.next()),
    ));

    let carousel = Carousel {
        slides,
        auto_playing,
        hovered,
        in_view,
        config,
        timer,
        swipe: StoredValue::new(SwipeTracker::new()),
    };

    let can_autoplay = Memo::new(move |_| slides.with(|s| s.can_autoplay()));
    Effect::new(move || {
        let playing = auto_playing.get() && can_autoplay.get();
        let visible = in_view.get();
        let hover = hovered.get();
        timer.update_value(|t| t.configure(playing, visible, hover, config.autoplay_interval_ms));
    });
    on_cleanup(move || timer.update_value(|t| t.dispose()));

    if config.keyboard {
        let handle = window_event_listener(ev::keydown, move |ev| {
            if !in_view.get_untracked() {
                return;
            }
            match KeyAction::from_key(&ev.key()) {
                Some(KeyAction::Prev) => carousel.prev(),
                Some(KeyAction::Next) => carousel.next(),
                Some(KeyAction::ToggleAutoplay) => {
                    ev.prevent_default();
                    carousel.toggle_autoplay();
                }
                None => {}
            }
        });
        on_cleanup(move || handle.remove());
    }

    carousel
}

/// Arrows, dots and the play/pause toggle, shown per the carousel's config.
#[component]
pub fn CarouselControls<M>(carousel: Carousel<M>, #[prop(into)] labels: Vec<String>) -> impl IntoView
where
    M: Slides + Send + Sync + 'static,
{
    let config = carousel.config;
    let dots = config.show_dots.then(|| {
        labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                view! {
                    <button
                        class=move || if carousel.current() == i { "carousel-dot active" } else { "carousel-dot" }
                        aria-label=format!("Go to slide {}: {label}", i + 1)
                        on:click=move |_| carousel.go_to(i)
                    ></button>
                }
            })
            .collect_view()
    });

    view! {
        <div class="carousel-controls">
            {config.show_arrows.then(|| view! {
                <button class="carousel-arrow prev" aria-label="Previous slide"
                    disabled=move || !carousel.slides.with(|s| s.can_prev())
                    on:click=move |_| carousel.prev()
                >"‹"</button>
            })}
            <div class="carousel-dots">{dots}</div>
            {config.show_arrows.then(|| view! {
                <button class="carousel-arrow next" aria-label="Next slide"
                    disabled=move || !carousel.slides.with(|s| s.can_next())
                    on:click=move |_| carousel.next()
                >"›"</button>
            })}
            <button class="carousel-autoplay"
                aria-label=move || if carousel.auto_playing.get() { "Pause slideshow" } else { "Play slideshow" }
                on:click=move |_| carousel.toggle_autoplay()
            >
                {move || if carousel.auto_playing.get() { "❚❚" } else { "▶" }}
            </button>
            <span class="carousel-counter">
                {move || format!("{} / {}", carousel.current() + 1, carousel.total())}
            </span>
        </div>
    }
}
