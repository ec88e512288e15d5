use leptos::prelude::*;
use site_core::admin::PageStatus;
use site_core::routes::{AdminPage, Route};

use crate::content::admin;

#[component]
pub fn Dashboard() -> impl IntoView {
    let pages = admin::pages();
    let published = pages.iter().filter(|p| p.status == PageStatus::Published).count();
    let stats = [
        ("Total Pages", pages.len()),
        ("Media Files", admin::media_files().len()),
        ("Published Content", published),
        ("Users", admin::accounts().len()),
    ];
    let quick_links = [AdminPage::Pages, AdminPage::Sermons, AdminPage::Media, AdminPage::Users];

    view! {
        <div class="admin-dashboard">
            <h1>"Dashboard"</h1>
            <p class="admin-subtitle">"Manage your website content and settings"</p>
            <div class="admin-stats">
                {stats.into_iter().map(|(label, value)| view! {
                    <div class="admin-stat">
                        <h3>{label}</h3>
                        <p>{value}</p>
                    </div>
                }).collect_view()}
            </div>
            <div class="admin-quick-links">
                <h2>"Quick links"</h2>
                {quick_links.into_iter().map(|page| view! {
                    <a class="admin-quick-link" href=Route::Admin(page, None).href()>{page.label()}</a>
                }).collect_view()}
            </div>
        </div>
    }
}
