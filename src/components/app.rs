use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use site_core::routes::Route;

use crate::browser::delay::sleep;
use crate::browser::dom;
use crate::components::about::{AboutIndex, Biography};
use crate::components::admin::session::AdminSession;
use crate::components::admin::AdminShell;
use crate::components::forms::ContactForm;
use crate::components::gallery::GalleryPage;
use crate::components::home::HomePage;
use crate::components::layout::{Footer, Header, NotFound, Preloader, StatusToast};
use crate::components::sermons::SermonsPage;
use crate::components::visit::VisitPage;
use crate::state::{load_config, AppState};

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new(load_config());
    provide_context(state);
    AdminSession::provide();

    let hashchange = window_event_listener(ev::hashchange, move |_| {
        let route = Route::parse(&dom::current_hash());
        log::debug!("route: {route:?}");
        state.route.set(route);
        state.mobile_menu_open.set(false);
        dom::scroll_to_top();
    });
    on_cleanup(move || hashchange.remove());

    Effect::new(move || {
        let title = state.route.with(|r| r.title());
        dom::set_document_title(&title);
    });

    let preloader_ms = state.config.with_value(|c| c.preloader_ms);
    spawn_local(async move {
        sleep(preloader_ms).await;
        state.preloading.set(false);
    });

    view! {
        <Preloader />
        <StatusToast />
        {move || match state.route.get() {
            Route::Admin(page, id) => view! { <AdminShell page=page page_id=id /> }.into_any(),
            route => view! {
                <Header />
                <main class="site-main">
                    <PublicPage route=route />
                </main>
                <Footer />
            }.into_any(),
        }}
    }
}

#[component]
fn PublicPage(route: Route) -> impl IntoView {
    match route {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::About(None) => view! { <AboutIndex /> }.into_any(),
        Route::About(Some(page)) => view! { <Biography page=page /> }.into_any(),
        Route::Sermons => view! { <SermonsPage /> }.into_any(),
        Route::Gallery => view! { <GalleryPage /> }.into_any(),
        Route::Visit => view! { <VisitPage /> }.into_any(),
        Route::Contact => view! {
            <div class="contact-page">
                <section class="page-hero">
                    <h1>"Contact Us"</h1>
                </section>
                <ContactForm />
            </div>
        }.into_any(),
        Route::NotFound(path) => view! { <NotFound path=path /> }.into_any(),
        Route::Admin(..) => view! { <NotFound path="admin".to_string() /> }.into_any(),
    }
}
