//! Mock admin dashboard. Every list lives in component state; the only
//! persisted piece is the signed-in user.

pub mod dashboard;
pub mod login;
pub mod media;
pub mod page_editor;
pub mod pages;
pub mod session;
pub mod sermons;
pub mod users;

use leptos::prelude::*;
use site_core::routes::{AdminPage, Route};

use crate::browser::dom;
use dashboard::Dashboard;
use login::AdminLogin;
use media::MediaLibrary;
use page_editor::PageEditor;
use pages::PagesList;
use session::use_admin_session;
use sermons::SermonsAdmin;
use users::UsersAdmin;

const NAV: [AdminPage; 5] = [
    AdminPage::Dashboard,
    AdminPage::Pages,
    AdminPage::Sermons,
    AdminPage::Media,
    AdminPage::Users,
];

/// Today's date as `YYYY-MM-DD`.
pub(crate) fn today() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.split('T').next().unwrap_or_default().to_string()
}

/// Local time of day for "last saved" labels.
pub(crate) fn time_of_day() -> String {
    String::from(js_sys::Date::new_0().to_locale_time_string("en-US"))
}

#[component]
pub fn AdminShell(page: AdminPage, page_id: Option<String>) -> impl IntoView {
    let session = use_admin_session();

    view! {
        {move || {
            if session.is_loading.get() {
                return view! { <div class="admin-loading">"Loading..."</div> }.into_any();
            }
            let Some(user) = session.user.get() else {
                return view! { <AdminLogin /> }.into_any();
            };
            let page_id = page_id.clone();
            view! {
                <div class="admin">
                    <AdminSidebar current=page />
                    <div class="admin-main">
                        <header class="admin-header">
                            <span class="admin-user">{user.name.clone()}" · "{user.role.label()}</span>
                            <a class="admin-site-link" href=Route::Home.href()>"View site"</a>
                            <button class="admin-logout" on:click=move |_| {
                                session.logout();
                                dom::navigate(&Route::Admin(AdminPage::Dashboard, None));
                            }>"Sign out"</button>
                        </header>
                        <main class="admin-content">
                            {match page {
                                AdminPage::Dashboard => view! { <Dashboard /> }.into_any(),
                                AdminPage::Sermons => view! { <SermonsAdmin /> }.into_any(),
                                AdminPage::Media => view! { <MediaLibrary /> }.into_any(),
                                AdminPage::Users => view! { <UsersAdmin /> }.into_any(),
                                AdminPage::Pages => view! { <PagesList /> }.into_any(),
                                AdminPage::EditPage => view! {
                                    <PageEditor page_id=page_id.unwrap_or_else(|| "new".to_string()) />
                                }.into_any(),
                            }}
                        </main>
                    </div>
                </div>
            }.into_any()
        }}
    }
}

#[component]
fn AdminSidebar(current: AdminPage) -> impl IntoView {
    view! {
        <nav class="admin-sidebar">
            <div class="admin-brand">"SCOAN Admin"</div>
            {NAV.into_iter().map(|item| {
                let active = item == current || (item == AdminPage::Pages && current == AdminPage::EditPage);
                view! {
                    <a class=if active { "admin-nav-item active" } else { "admin-nav-item" }
                        href=Route::Admin(item, None).href()
                    >{item.label()}</a>
                }
            }).collect_view()}
        </nav>
    }
}
