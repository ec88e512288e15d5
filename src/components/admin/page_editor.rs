use leptos::prelude::*;
use leptos::task::spawn_local;
use site_core::admin::{slugify, PageDraft, PageField, PageStatus};
use site_core::routes::{AdminPage, Route};
use site_core::task::{latency, TaskGuard};

use super::pages::preview_href;
use super::time_of_day;
use crate::browser::delay::{simulate, token_of, use_task_guard};
use crate::browser::files;
use crate::content::admin;
use crate::state::AppState;

#[component]
pub fn PageEditor(page_id: String) -> impl IntoView {
    let state = expect_context::<AppState>();
    let guard = use_task_guard();

    let initial = admin::pages()
        .iter()
        .find(|p| p.id == page_id)
        .map(PageDraft::from_page)
        .unwrap_or_default();
    let is_new = page_id == "new";
    let draft = RwSignal::new(initial);
    let saving = RwSignal::new(false);
    let last_saved = RwSignal::new(None::<String>);

    let save = move |auto: bool| {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let revision = draft.with_untracked(|d| d.revision());
        let token = token_of(guard);
        spawn_local(async move {
            if simulate(&token, latency::PAGE_SAVE_MS).await.is_err() {
                return;
            }
            draft.update(|d| d.mark_saved(revision));
            saving.set(false);
            last_saved.set(Some(time_of_day()));
            log::info!("Page saved (revision {revision}, auto: {auto})");
            if !auto {
                state.notify("Page saved successfully!");
            }
        });
    };

    // Each edit replaces the pending autosave; dropping a guard cancels its token
    let autosave = StoredValue::new_local(TaskGuard::new());
    on_cleanup(move || autosave.with_value(|g| g.cancel()));
    Effect::new(move || {
        let dirty = draft.with(|d| d.has_changes());
        autosave.set_value(TaskGuard::new());
        if !dirty {
            return;
        }
        let token = autosave.with_value(|g| g.token());
        spawn_local(async move {
            if simulate(&token, latency::AUTOSAVE_MS).await.is_ok() {
                save(true);
            }
        });
    });

    let text_input = move |field: PageField, label: &'static str| {
        view! {
            <label class="admin-field">
                {label}
                <input type="text"
                    prop:value=move || draft.with(|d| d.field(field).to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| {
                            if field == PageField::Title && is_new && d.slug == slugify(&d.title) {
                                d.set(PageField::Slug, slugify(&value));
                            }
                            d.set(field, value);
                        });
                    }
                />
            </label>
        }
    };

    let text_area = move |field: PageField, label: &'static str, rows: u32| {
        view! {
            <label class="admin-field">
                {label}
                <textarea rows=rows
                    prop:value=move || draft.with(|d| d.field(field).to_string())
                    on:input=move |ev| draft.update(|d| d.set(field, event_target_value(&ev)))
                ></textarea>
            </label>
        }
    };

    let on_image = move |ev: web_sys::Event| {
        let Some(file) = files::picked_files(&ev).into_iter().next() else { return };
        match files::object_url(&file) {
            Ok(url) => draft.update(|d| d.set(PageField::FeaturedImage, url)),
            Err(e) => {
                log::error!("Featured image preview failed: {e}");
                state.notify("Could not load that image");
            }
        }
    };

    view! {
        <div class="admin-page-editor">
            <div class="admin-page-head">
                <div>
                    <a class="admin-back" href=Route::Admin(AdminPage::Pages, None).href()>"← Pages"</a>
                    <h1>{if is_new { "New Page" } else { "Edit Page" }}</h1>
                    <p class="admin-muted">
                        {move || match (draft.with(|d| d.has_changes()), last_saved.get()) {
                            (true, _) => "Unsaved changes".to_string(),
                            (false, Some(at)) => format!("Last saved at {at}"),
                            (false, None) => String::new(),
                        }}
                    </p>
                </div>
                <div class="admin-actions">
                    <a href=move || draft.with(|d| preview_href(&d.slug)) target="_blank" rel="noopener noreferrer">"Preview"</a>
                    <button class="admin-button primary" disabled=move || saving.get() on:click=move |_| save(false)>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>

            <button class="admin-status-toggle" on:click=move |_| draft.update(|d| {
                let next = match d.status {
                    PageStatus::Published => PageStatus::Draft,
                    PageStatus::Draft => PageStatus::Published,
                };
                d.set_status(next);
            })>
                {move || draft.with(|d| d.status.label())}
            </button>

            <div class="admin-editor-grid">
                <div class="admin-editor-main">
                    {text_input(PageField::Title, "Title")}
                    {text_input(PageField::Slug, "Slug")}
                    {text_area(PageField::Excerpt, "Excerpt", 3)}
                    {text_area(PageField::Content, "Content", 16)}
                </div>
                <aside class="admin-editor-side">
                    <div class="admin-field">
                        "Featured image"
                        {move || {
                            let src = draft.with(|d| d.featured_image.clone());
                            (!src.is_empty()).then(|| view! {
                                <img class="admin-featured" src=src alt="Featured" />
                                <button on:click=move |_| draft.update(|d| d.set(PageField::FeaturedImage, String::new()))>
                                    "Remove"
                                </button>
                            })
                        }}
                        <input type="file" accept="image/*" on:change=on_image />
                    </div>
                    {text_input(PageField::MetaTitle, "Meta title")}
                    {text_area(PageField::MetaDescription, "Meta description", 3)}
                </aside>
            </div>
        </div>
    }
}
