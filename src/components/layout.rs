use leptos::prelude::*;
use leptos::task::spawn_local;
use site_core::routes::{AboutPage, Route};
use site_core::task::latency;

use crate::browser::delay::sleep;
use crate::state::AppState;

const NAV: [(&str, Route); 5] = [
    ("Home", Route::Home),
    ("Sermons", Route::Sermons),
    ("Gallery", Route::Gallery),
    ("Visit", Route::Visit),
    ("Contact", Route::Contact),
];

fn is_active(current: &Route, link: &Route) -> bool {
    match (current, link) {
        (Route::About(_), Route::About(None)) => true,
        _ => current == link,
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();
    let about_open = RwSignal::new(false);
    let site_name = state.config.with_value(|c| c.site_name.clone());

    let link_class = move |link: Route| {
        move || {
            if state.route.with(|r| is_active(r, &link)) {
                "nav-link active"
            } else {
                "nav-link"
            }
        }
    };

    view! {
        <header class="site-header">
            <a class="brand" href=Route::Home.href()>{site_name}</a>
            <button class="menu-toggle"
                aria-label="Toggle menu"
                aria-expanded=move || state.mobile_menu_open.get().to_string()
                on:click=move |_| state.mobile_menu_open.update(|o| *o = !*o)
            >{move || if state.mobile_menu_open.get() { "✕" } else { "☰" }}</button>
            <nav class=move || if state.mobile_menu_open.get() { "site-nav open" } else { "site-nav" }>
                <a class=link_class(NAV[0].1.clone()) href=NAV[0].1.href()>{NAV[0].0}</a>
                <div class="nav-dropdown"
                    on:mouseenter=move |_| about_open.set(true)
                    on:mouseleave=move |_| about_open.set(false)
                >
                    <button class=link_class(Route::About(None))
                        on:click=move |_| about_open.update(|o| *o = !*o)
                    >"About ▾"</button>
                    <div class="dropdown-menu" class:open=move || about_open.get()>
                        <a href=Route::About(None).href() on:click=move |_| about_open.set(false)>"Overview"</a>
                        {AboutPage::ALL.into_iter().map(|page| view! {
                            <a href=Route::About(Some(page)).href() on:click=move |_| about_open.set(false)>
                                {page.label()}
                            </a>
                        }).collect_view()}
                    </div>
                </div>
                {NAV[1..].iter().map(|(label, route)| view! {
                    <a class=link_class(route.clone()) href=route.href()>{*label}</a>
                }).collect_view()}
            </nav>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (church, address, email, phone) = state.config.with_value(|c| {
        (c.church_name.clone(), c.address.clone(), c.contact_email.clone(), c.phone.clone())
    });
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="footer-col">
                <h4>{church.clone()}</h4>
                <p>{address}</p>
            </div>
            <div class="footer-col">
                <h4>"Get in touch"</h4>
                <a href=format!("mailto:{email}")>{email.clone()}</a>
                <a href=format!("tel:{}", phone.replace(' ', ""))>{phone.clone()}</a>
            </div>
            <div class="footer-col">
                <h4>"Explore"</h4>
                {NAV.iter().map(|(label, route)| view! { <a href=route.href()>{*label}</a> }).collect_view()}
            </div>
            <p class="footer-copy">{format!("© {year} {church}")}</p>
        </footer>
    }
}

/// Full-screen splash shown until the app flips `preloading` off.
#[component]
pub fn Preloader() -> impl IntoView {
    let state = expect_context::<AppState>();
    view! {
        <Show when=move || state.preloading.get()>
            <div class="preloader" aria-busy="true">
                <div class="preloader-logo">"SCOAN"</div>
                <div class="preloader-spinner"></div>
            </div>
        </Show>
    }
}

/// Corner toast for `AppState::notify`. Auto-dismisses unless a newer
/// message replaced it in the meantime.
#[component]
pub fn StatusToast() -> impl IntoView {
    let state = expect_context::<AppState>();
    view! {
        {move || state.status_message.get().map(|msg| {
            let shown = msg.clone();
            spawn_local(async move {
                sleep(latency::STATUS_RESET_MS).await;
                state.status_message.update(|m| {
                    if m.as_deref() == Some(shown.as_str()) {
                        *m = None;
                    }
                });
            });
            view! {
                <div class="status-toast" role="status" on:click=move |_| state.status_message.set(None)>
                    {msg}
                </div>
            }
        })}
    }
}

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>{format!("Nothing lives at /{path}")}</p>
            <a class="button" href=Route::Home.href()>"Back to home"</a>
        </section>
    }
}
