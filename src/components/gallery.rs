use std::collections::HashSet;

use leptos::html::Section;
use leptos::prelude::*;
use site_core::carousel::CarouselKind;
use site_core::gallery::{card_placement, GalleryCategory, GalleryItem, GalleryView};

use crate::components::carousel::{use_carousel, CarouselControls};
use crate::content::gallery::{self, DEFAULT_CATEGORY};

fn items_of(categories: &[GalleryCategory], name: &str) -> Vec<GalleryItem> {
    categories
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.items.clone())
        .unwrap_or_default()
}

#[component]
pub fn GalleryPage() -> impl IntoView {
    let categories = StoredValue::new(gallery::categories());
    let initial = categories.with_value(|c| items_of(c, DEFAULT_CATEGORY).len());
    let view_state = RwSignal::new(GalleryView::new(DEFAULT_CATEGORY, initial));
    let section = NodeRef::<Section>::new();
    let carousel = use_carousel(CarouselKind::Gallery, view_state, section);
    let config = carousel.config;
    // Items whose image failed to load
    let broken = RwSignal::new(HashSet::<u32>::new());

    let active_name = Memo::new(move |_| view_state.with(|v| v.category().to_string()));
    let items = Memo::new(move |_| active_name.with(|name| categories.with_value(|c| items_of(c, name))));

    let switch = move |name: &'static str| {
        let count = categories.with_value(|c| items_of(c, name).len());
        view_state.update(|v| v.switch_category(name, count));
    };

    let cards = move || {
        items
            .get()
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let id = item.id;
                let title = item.title;
                let image = item.image;
                let style = move || view_state.with(|v| card_placement(&item, i, v.current(), v.len()).style());
                view! {
                    <figure class="gallery-card" style=style
                        class:active=move || view_state.with(|v| v.current() == i)
                        on:click=move |_| carousel.go_to(i)
                    >
                        {move || if broken.with(|b| b.contains(&id)) {
                            view! { <div class="gallery-placeholder">"Image unavailable"</div> }.into_any()
                        } else {
                            view! {
                                <img src=image alt=title loading="lazy"
                                    on:error=move |_| broken.update(|b| { b.insert(id); })
                                />
                            }.into_any()
                        }}
                        <figcaption>{title}</figcaption>
                    </figure>
                }
            })
            .collect_view()
    };

    view! {
        <div class="gallery-page">
            <section class="page-hero">
                <h1>"Gallery"</h1>
                <p>"Moments from the ministry around the world"</p>
            </section>

            <div class="gallery-filters" role="tablist">
                {categories.with_value(|c| c.iter().map(|cat| {
                    let name = cat.name;
                    view! {
                        <button role="tab"
                            class=move || if active_name.with(|a| a == name) { "gallery-filter active" } else { "gallery-filter" }
                            on:click=move |_| switch(name)
                        >{name}</button>
                    }
                }).collect_view())}
            </div>

            <section class="gallery-stage" node_ref=section
                on:mouseenter=move |_| carousel.hovered.set(true)
                on:mouseleave=move |_| carousel.hovered.set(false)
                on:touchstart=move |ev| if config.swipe { carousel.touch_start(&ev) }
                on:touchmove=move |ev| if config.swipe { carousel.touch_move(&ev) }
                on:touchend=move |_| if config.swipe { carousel.touch_end() }
            >
                {move || if items.with(|i| i.is_empty()) {
                    view! { <p class="gallery-empty">"No images available for this category"</p> }.into_any()
                } else {
                    view! { <div class="gallery-stack">{cards}</div> }.into_any()
                }}
                {move || {
                    let labels: Vec<String> = items.with(|i| i.iter().map(|item| item.title.to_string()).collect());
                    (labels.len() > 1).then(|| view! { <CarouselControls carousel=carousel labels=labels /> })
                }}
            </section>

            {move || active_name.with(|name| gallery::description(name)).map(|d| view! {
                <section class="gallery-description">
                    <h2>{d.title}</h2>
                    <p>{d.description}</p>
                    <a href=d.read_more_url target="_blank" rel="noopener noreferrer">"Read more"</a>
                </section>
            })}
        </div>
    }
}
