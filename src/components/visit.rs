use leptos::html::Section;
use leptos::prelude::*;
use site_core::carousel::{CarouselKind, SlideIndex, SlidePhase};
use site_core::config::{directions_url, larger_map_url, map_embed_url};

use crate::browser::dom::encode_component;
use crate::components::carousel::{use_carousel, CarouselControls};
use crate::content::media::CHURCH_PHOTOS;
use crate::state::AppState;

#[component]
fn ChurchTour() -> impl IntoView {
    let config = CarouselKind::ChurchTour.config();
    let index = RwSignal::new(SlideIndex::new(CHURCH_PHOTOS.len(), config.infinite_loop));
    let section = NodeRef::<Section>::new();
    let carousel = use_carousel(CarouselKind::ChurchTour, index, section);
    let labels: Vec<String> = CHURCH_PHOTOS.iter().map(|p| p.alt.to_string()).collect();

    view! {
        <section class="church-tour" node_ref=section
            on:mouseenter=move |_| carousel.hovered.set(true)
            on:mouseleave=move |_| carousel.hovered.set(false)
        >
            <div class="slides">
                {CHURCH_PHOTOS.iter().enumerate().map(|(i, photo)| view! {
                    <img class=move || index.with(|idx| SlidePhase::of(idx, i).class())
                        src=photo.src alt=photo.alt loading="lazy"
                    />
                }).collect_view()}
            </div>
            <CarouselControls carousel=carousel labels=labels />
        </section>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MapState {
    Loading,
    Loaded,
    Failed,
}

#[component]
fn ChurchMap() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (name, address, embed, directions, larger) = state.config.with_value(|c| {
        let encoded = encode_component(&c.address);
        (
            c.church_name.clone(),
            c.address.clone(),
            map_embed_url(&encoded, c.maps_key()),
            directions_url(&encoded),
            larger_map_url(&encoded),
        )
    });
    let larger_link = larger.clone();
    let map = RwSignal::new(MapState::Loading);

    view! {
        <section class="church-map">
            <div class="map-frame">
                <Show when=move || map.get() == MapState::Loading>
                    <div class="map-loading">"Loading map..."</div>
                </Show>
                {move || if map.get() == MapState::Failed {
                    view! {
                        <div class="map-error">
                            <p>"The map could not be loaded."</p>
                            <a href=larger.clone() target="_blank" rel="noopener noreferrer">"Open in Google Maps"</a>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <iframe src=embed.clone() title=format!("Map of {name}")
                            {::leptos::tachys::html::attribute::custom::custom_attribute("loading", "lazy")} referrerpolicy="no-referrer-when-downgrade" allowfullscreen
                            on:load=move |_| map.set(MapState::Loaded)
                            on:error=move |_| {
                                log::warn!("Map embed failed to load");
                                map.set(MapState::Failed);
                            }
                        ></iframe>
                    }.into_any()
                }}
            </div>
            <div class="map-details">
                <h3>"Find Us"</h3>
                <p>{address}</p>
                <div class="hero-actions">
                    <a class="button" href=directions target="_blank" rel="noopener noreferrer">"Get Directions"</a>
                    <a class="button-outline" href=larger_link target="_blank" rel="noopener noreferrer">"View Larger Map"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn VisitPage() -> impl IntoView {
    view! {
        <div class="visit-page">
            <section class="page-hero">
                <h1>"Plan Your Visit"</h1>
                <p>"Everyone is welcome. Here is what to expect when you join us."</p>
            </section>
            <ChurchTour />
            <section class="service-times">
                <h2>"Service Times"</h2>
                <ul>
                    <li><strong>"Sunday Service"</strong>" · 7:00 AM"</li>
                    <li><strong>"Wednesday Service"</strong>" · 9:00 AM"</li>
                </ul>
            </section>
            <ChurchMap />
        </div>
    }
}
