use leptos::html::Audio;
use leptos::prelude::*;
use leptos::task::spawn_local;
use site_core::playlist::{format_time, tab_label, Playlist, Transport, CATEGORY_TABS};
use site_core::routes::Route;
use site_core::visualizer::idle_bars;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::audio::visualizer;
use crate::content::media;

#[component]
pub fn AudioPlaylist(#[prop(optional)] show_more_link: bool) -> impl IntoView {
    let playlist = RwSignal::new(Playlist::new(media::audio_tracks()));
    let transport = RwSignal::new(Transport::default());
    let bars = RwSignal::new(idle_bars().to_vec());
    let audio_ref = NodeRef::<Audio>::new();

    let current = Memo::new(move |_| playlist.with(|p| p.current().cloned()));
    let has_audio = move || current.with(|t| t.as_ref().is_some_and(|t| t.audio_url.is_some()));

    on_cleanup(visualizer::stop_sampling);

    let stop = move || {
        if let Some(el) = audio_ref.get_untracked() {
            let _ = el.pause();
        }
        visualizer::stop_sampling();
        transport.update(|t| t.reset());
        bars.set(idle_bars().to_vec());
    };

    let toggle_play = move |_| {
        let Some(el) = audio_ref.get_untracked() else { return };
        if transport.with_untracked(|t| t.is_playing) {
            let _ = el.pause();
            return;
        }
        if !has_audio() {
            return;
        }
        spawn_local(async move {
            if let Err(e) = visualizer::attach(&el) {
                log::warn!("Audio context unavailable: {e}");
                return;
            }
            visualizer::resume().await;
            match el.play() {
                Ok(promise) => {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("Playback rejected: {e:?}");
                    }
                }
                Err(e) => log::warn!("Playback failed: {e:?}"),
            }
        });
    };

    let step = move |forward: bool| {
        let moved = playlist
            .try_update(|p| if forward { p.next() } else { p.prev() })
            .unwrap_or(false);
        if moved {
            stop();
        }
    };

    let select = move |id: u32| {
        let changed = playlist
            .try_update(|p| p.current().map(|t| t.id) != Some(id) && p.select(id))
            .unwrap_or(false);
        if changed {
            stop();
        }
    };

    let on_seek = move |ev: web_sys::MouseEvent| {
        let Some(el) = audio_ref.get_untracked() else { return };
        let Some(bar) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        let rect = bar.get_bounding_client_rect();
        let target = transport.with_untracked(|t| t.seek_time(ev.client_x() as f64 - rect.left(), rect.width()));
        el.set_current_time(target);
        transport.update(|t| t.current_time = target);
    };

    let on_time_update = move |_| {
        if let Some(el) = audio_ref.get_untracked() {
            transport.update(|t| t.current_time = el.current_time());
        }
    };

    let on_metadata = move |_| {
        if let Some(el) = audio_ref.get_untracked() {
            transport.update(|t| t.duration = el.duration());
        }
    };

    let on_play = move |_| {
        transport.update(|t| t.is_playing = true);
        visualizer::start_sampling(bars);
    };

    let on_pause = move |_| {
        transport.update(|t| t.is_playing = false);
        visualizer::stop_sampling();
    };

    let on_ended = move |_| {
        visualizer::stop_sampling();
        transport.update(|t| {
            t.is_playing = false;
            t.current_time = 0.0;
        });
        bars.set(idle_bars().to_vec());
    };

    let duration_label = move || {
        let (known, duration) = transport.with(|t| (t.duration > 0.0 && t.duration.is_finite(), t.duration));
        if known {
            format_time(duration)
        } else {
            current.with(|t| t.as_ref().map(|t| t.duration.to_string()).unwrap_or_default())
        }
    };

    view! {
        <section class="audio-playlist">
            <audio node_ref=audio_ref preload="metadata"
                src=move || current.with(|t| t.as_ref().and_then(|t| t.audio_url))
                on:play=on_play
                on:pause=on_pause
                on:ended=on_ended
                on:timeupdate=on_time_update
                on:loadedmetadata=on_metadata
            ></audio>

            <div class="section-heading">
                <h2>"Listen & Be Blessed"</h2>
                <p>"Sermons, worship and devotionals to carry with you through the week"</p>
            </div>

            <div class="now-playing">
                <div class="now-playing-meta">
                    <span class="now-playing-category">{move || current.with(|t| t.as_ref().map(|t| t.category).unwrap_or_default())}</span>
                    <h3>{move || current.with(|t| t.as_ref().map(|t| t.title).unwrap_or_default())}</h3>
                    <p>{move || current.with(|t| t.as_ref().map(|t| format!("{} · {}", t.artist, t.date)).unwrap_or_default())}</p>
                </div>

                {move || has_audio().then(|| view! {
                    <div class="visualizer" aria-hidden="true">
                        {move || bars.get().into_iter().map(|h| view! {
                            <span class="visualizer-bar" style:height=format!("{h}%")></span>
                        }).collect_view()}
                    </div>
                })}

                <div class="transport">
                    <button class="transport-btn" aria-label="Previous track"
                        disabled=move || !playlist.with(|p| p.can_prev())
                        on:click=move |_| step(false)
                    >"⏮"</button>
                    <button class="transport-btn play" disabled=move || !has_audio()
                        aria-label=move || if transport.with(|t| t.is_playing) { "Pause" } else { "Play" }
                        on:click=toggle_play
                    >{move || if transport.with(|t| t.is_playing) { "❚❚" } else { "▶" }}</button>
                    <button class="transport-btn" aria-label="Next track"
                        disabled=move || !playlist.with(|p| p.can_next())
                        on:click=move |_| step(true)
                    >"⏭"</button>
                </div>

                <div class="progress" on:click=on_seek>
                    <div class="progress-fill" style:width=move || format!("{}%", transport.with(|t| t.progress_percent()))></div>
                </div>
                <div class="progress-times">
                    <span>{move || format_time(transport.with(|t| t.current_time))}</span>
                    <span>{duration_label}</span>
                </div>
                {move || (!has_audio()).then(|| view! {
                    <p class="audio-unavailable">"Audio for this message is coming soon"</p>
                })}
            </div>

            <div class="playlist-tabs" role="tablist">
                {CATEGORY_TABS.into_iter().map(|tab| view! {
                    <button role="tab"
                        class=move || if playlist.with(|p| p.tab() == tab) { "playlist-tab active" } else { "playlist-tab" }
                        on:click=move |_| playlist.update(|p| p.set_tab(tab))
                    >{tab_label(tab)}</button>
                }).collect_view()}
            </div>

            <ul class="playlist">
                <For each=move || playlist.with(|p| p.filtered().into_iter().cloned().collect::<Vec<_>>())
                    key=|t| t.id
                    let:track
                >
                    {
                        let id = track.id;
                        view! {
                            <li class=move || if current.with(|c| c.as_ref().map(|c| c.id) == Some(id)) { "playlist-item active" } else { "playlist-item" }
                                on:click=move |_| select(id)
                            >
                                <div class="playlist-item-title">{track.title}</div>
                                <div class="playlist-item-meta">{track.artist}" · "{track.category}</div>
                                <div class="playlist-item-duration">{track.duration}</div>
                            </li>
                        }
                    }
                </For>
            </ul>

            {show_more_link.then(|| view! {
                <a class="button-outline" href=Route::Sermons.href()>"More sermons"</a>
            })}
        </section>
    }
}
