use leptos::prelude::*;
use site_core::admin::{filter_pages, remove_by_id, PageStatus};
use site_core::routes::{AdminPage, Route};

use crate::browser::dom;
use crate::content::admin;

/// Public URL of a page slug such as `/about/scoan`.
pub(crate) fn preview_href(slug: &str) -> String {
    format!("#/{}", slug.trim_start_matches('/'))
}

#[component]
pub fn PagesList() -> impl IntoView {
    let pages = RwSignal::new(admin::pages());
    let search = RwSignal::new(String::new());

    let visible = move || {
        pages.with(|list| search.with(|q| filter_pages(list, q).into_iter().cloned().collect::<Vec<_>>()))
    };

    view! {
        <div class="admin-pages">
            <div class="admin-page-head">
                <div>
                    <h1>"Pages"</h1>
                    <p class="admin-subtitle">"Edit the content of the public site"</p>
                </div>
                <a class="admin-button primary" href=Route::Admin(AdminPage::EditPage, None).href()>"New Page"</a>
            </div>
            <div class="admin-filters">
                <input type="search" placeholder="Search pages..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Slug"</th>
                        <th>"Status"</th>
                        <th>"Last modified"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=visible key=|p| p.id.clone() let:page>
                        {
                            let id = page.id.clone();
                            let status_class = match page.status {
                                PageStatus::Published => "badge status-active",
                                PageStatus::Draft => "badge status-inactive",
                            };
                            view! {
                                <tr>
                                    <td class="admin-strong">{page.title.clone()}</td>
                                    <td class="admin-muted">{page.slug.clone()}</td>
                                    <td><span class=status_class>{page.status.label()}</span></td>
                                    <td class="admin-muted">{page.last_modified.clone()}" by "{page.author.clone()}</td>
                                    <td class="admin-actions">
                                        <a href=preview_href(&page.slug) target="_blank" rel="noopener noreferrer">"Preview"</a>
                                        <a href=Route::Admin(AdminPage::EditPage, Some(page.id.clone())).href()>"Edit"</a>
                                        <button class="admin-danger" on:click=move |_| {
                                            if dom::confirm("Are you sure you want to delete this page?") {
                                                pages.update(|list| { remove_by_id(list, &id); });
                                            }
                                        }>"Delete"</button>
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
        </div>
    }
}
