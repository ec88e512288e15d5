use leptos::html::Section;
use leptos::prelude::*;
use site_core::carousel::{CarouselKind, SlideIndex};
use site_core::routes::{AboutPage, Route};

use crate::components::audio_player::AudioPlaylist;
use crate::components::carousel::use_carousel;
use crate::components::forms::NewsletterForm;
use crate::components::sermons::FeaturedSermon;
use crate::content::media::{HERO_PHRASES, SERVICES, TESTIMONIALS};

#[component]
fn Hero() -> impl IntoView {
    let section = NodeRef::<Section>::new();
    let phrases = RwSignal::new(SlideIndex::new(HERO_PHRASES.len(), true));
    let _carousel = use_carousel(CarouselKind::HeroPhrases, phrases, section);

    view! {
        <section class="hero" node_ref=section>
            <div class="hero-content">
                <p class="eyebrow">"The Synagogue, Church Of All Nations"</p>
                <h1>"Win Souls, "
                    {move || {
                        let phrase = HERO_PHRASES.get(phrases.with(|p| p.current())).copied().unwrap_or_default();
                        view! { <span class="hero-phrase">{phrase}</span> }
                    }}
                </h1>
                <p class="hero-lead">"Come as you are. Experience the love of God in a place of prayer for all nations."</p>
                <div class="hero-actions">
                    <a class="button" href=Route::Visit.href()>"Plan a Visit"</a>
                    <a class="button-outline" href=Route::Sermons.href()>"Watch Sermons"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Services() -> impl IntoView {
    view! {
        <section class="services">
            <div class="section-heading">
                <h2>"Our Ministry"</h2>
                <p>"Ways we serve and grow together"</p>
            </div>
            <div class="service-grid">
                {SERVICES.iter().map(|s| view! {
                    <div class="service-card">
                        <h3>{s.title}</h3>
                        <p>{s.description}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Testimonials() -> impl IntoView {
    view! {
        <section class="testimonials">
            <div class="section-heading">
                <h2>"Testimonies"</h2>
            </div>
            <div class="testimonial-grid">
                {TESTIMONIALS.iter().map(|t| view! {
                    <blockquote class="testimonial">
                        <p>{t.text}</p>
                        <footer>
                            <strong>{t.name}</strong>
                            <span>{t.role}</span>
                        </footer>
                    </blockquote>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <Hero />
            <Services />
            <AudioPlaylist show_more_link=true />
            <FeaturedSermon />
            <Testimonials />
            <NewsletterForm />
            <section class="cta">
                <h2>"Join Us This Sunday"</h2>
                <p>"Discover the story of the ministry or come and worship with us in Lagos."</p>
                <div class="hero-actions">
                    <a class="button" href=Route::Visit.href()>"Get Directions"</a>
                    <a class="button-outline" href=Route::About(Some(AboutPage::Scoan)).href()>"Our Story"</a>
                </div>
            </section>
        </div>
    }
}
