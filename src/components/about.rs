use leptos::html::Section;
use leptos::prelude::*;
use site_core::carousel::{CarouselKind, SlideIndex, SlidePhase};
use site_core::routes::{AboutPage, Route};

use crate::components::carousel::{use_carousel, CarouselControls};
use crate::content::biographies;
use crate::types::{ImageSide, Slide};

fn slide_view(slide: &'static Slide, i: usize, index: RwSignal<SlideIndex>) -> impl IntoView {
    let layout = match slide.image.side {
        ImageSide::Left => "slide-body image-left",
        ImageSide::Right => "slide-body image-right",
    };
    view! {
        <article class=move || index.with(|idx| SlidePhase::of(idx, i).class())
            aria-hidden=move || (index.with(|idx| idx.current()) != i).to_string()
        >
            <div class=layout>
                <img class="slide-image" src=slide.image.src alt=slide.image.alt loading="lazy" />
                <div class="slide-text">
                    <h2>{slide.title}</h2>
                    <h3>{slide.subtitle}</h3>
                    {slide.paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                </div>
            </div>
        </article>
    }
}

/// Swipeable, autoplaying biography for one of the about pages.
#[component]
pub fn Biography(page: AboutPage) -> impl IntoView {
    let slides = biographies::slides_for(page);
    let config = CarouselKind::Biography.config();
    let index = RwSignal::new(SlideIndex::new(slides.len(), config.infinite_loop));
    let section = NodeRef::<Section>::new();
    let carousel = use_carousel(CarouselKind::Biography, index, section);
    let labels: Vec<String> = slides.iter().map(|s| s.title.to_string()).collect();

    view! {
        <section class="biography" node_ref=section
            on:touchstart=move |ev| if config.swipe { carousel.touch_start(&ev) }
            on:touchmove=move |ev| if config.swipe { carousel.touch_move(&ev) }
            on:touchend=move |_| if config.swipe { carousel.touch_end() }
        >
            <header class="biography-head">
                <h1>{page.label()}</h1>
            </header>
            <div class="slides">
                {slides.iter().enumerate().map(|(i, slide)| slide_view(slide, i, index)).collect_view()}
            </div>
            {(slides.len() > 1).then(|| view! { <CarouselControls carousel=carousel labels=labels /> })}
        </section>
    }
}

#[component]
pub fn AboutIndex() -> impl IntoView {
    view! {
        <section class="about-index">
            <h1>"About Us"</h1>
            <p class="lead">
                "The Synagogue, Church Of All Nations has welcomed people from every nation for decades. "
                "Read the stories of the ministry and the people behind it."
            </p>
            <div class="about-cards">
                {AboutPage::ALL.into_iter().map(|page| {
                    let cover = biographies::slides_for(page).first().map(|s| s.image.src).unwrap_or_default();
                    view! {
                        <a class="about-card" href=Route::About(Some(page)).href()>
                            <img src=cover alt=page.label() loading="lazy" />
                            <span>{page.label()}</span>
                        </a>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
