use leptos::prelude::*;

use crate::components::audio_player::AudioPlaylist;
use crate::components::video_gallery::VideoGallery;
use crate::content::media::FEATURED_SERMON;

#[component]
pub fn FeaturedSermon() -> impl IntoView {
    let sermon = FEATURED_SERMON;
    let playing = RwSignal::new(false);

    view! {
        <section class="featured-sermon">
            <div class="featured-media">
                {move || if playing.get() {
                    view! {
                        <iframe src=sermon.embed_url title=sermon.title
                            allow="autoplay; clipboard-write; encrypted-media; picture-in-picture; web-share"
                            allowfullscreen
                        ></iframe>
                    }.into_any()
                } else {
                    view! {
                        <button class="featured-poster" aria-label="Play featured sermon" on:click=move |_| playing.set(true)>
                            <img src=sermon.poster alt=sermon.title />
                            <span class="video-play" aria-hidden="true">"▶"</span>
                        </button>
                    }.into_any()
                }}
            </div>
            <div class="featured-text">
                <span class="eyebrow">"Featured Sermon"</span>
                <h2>{sermon.title}</h2>
                <p>{sermon.preacher}</p>
                <a class="button" href=sermon.watch_url target="_blank" rel="noopener noreferrer">"Watch on Emmanuel TV"</a>
            </div>
        </section>
    }
}

#[component]
pub fn SermonsPage() -> impl IntoView {
    view! {
        <div class="sermons-page">
            <section class="page-hero">
                <h1>"Sermons"</h1>
                <p>"Watch and listen to messages that build faith"</p>
            </section>
            <FeaturedSermon />
            <VideoGallery />
            <AudioPlaylist />
        </div>
    }
}
