use leptos::prelude::*;
use site_core::admin::{filter_sermons, remove_by_id, Sermon, SERMON_CATEGORIES};

use crate::browser::{dom, files};
use crate::content::admin;
use crate::state::AppState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Replace {
    Video,
    Thumbnail,
}

/// Swap a sermon's video or thumbnail for a locally picked file, previewed
/// through an object URL.
fn replace_asset(sermons: RwSignal<Vec<Sermon>>, id: &str, what: Replace, ev: &web_sys::Event) -> Result<(), String> {
    let Some(file) = files::picked_files(ev).into_iter().next() else {
        return Ok(());
    };
    let url = files::object_url(&file)?;
    sermons.update(|list| {
        if let Some(sermon) = list.iter_mut().find(|s| s.id == id) {
            match what {
                Replace::Video => {
                    files::revoke_object_url(&sermon.video_url);
                    sermon.video_url = url;
                    sermon.duration = "00:00".to_string();
                }
                Replace::Thumbnail => {
                    files::revoke_object_url(&sermon.thumbnail);
                    sermon.thumbnail = url;
                }
            }
        }
    });
    Ok(())
}

#[component]
pub fn SermonsAdmin() -> impl IntoView {
    let state = expect_context::<AppState>();
    let sermons = RwSignal::new(admin::sermons());
    let search = RwSignal::new(String::new());
    let category = RwSignal::new("all".to_string());

    let visible = move || {
        sermons.with(|list| {
            search.with(|q| {
                category.with(|c| filter_sermons(list, q, c).into_iter().cloned().collect::<Vec<_>>())
            })
        })
    };

    let on_replace = move |id: String, what: Replace, ev: web_sys::Event| {
        if let Err(e) = replace_asset(sermons, &id, what, &ev) {
            log::error!("Sermon file preview failed: {e}");
            state.notify("Could not preview that file");
        }
    };

    view! {
        <div class="admin-sermons">
            <h1>"Sermons"</h1>
            <p class="admin-subtitle">"Manage your sermon videos and content"</p>
            <div class="admin-filters">
                <input type="search" placeholder="Search sermons..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| category.set(event_target_value(&ev))>
                    {SERMON_CATEGORIES.into_iter().map(|c| view! {
                        <option value=c selected=move || category.with(|cur| cur == c)>
                            {if c == "all" { "All Categories" } else { c }}
                        </option>
                    }).collect_view()}
                </select>
            </div>
            <div class="admin-sermon-grid">
                <For each=visible key=|s| (s.id.clone(), s.thumbnail.clone(), s.video_url.clone()) let:sermon>
                    {
                        let id_video = sermon.id.clone();
                        let id_thumb = sermon.id.clone();
                        let id_delete = sermon.id.clone();
                        view! {
                            <article class="admin-sermon-card">
                                <img src=sermon.thumbnail.clone() alt=sermon.title.clone() />
                                <h3>{sermon.title.clone()}</h3>
                                <p class="admin-muted">{sermon.preacher.clone()}" · "{sermon.date.clone()}" · "{sermon.duration.clone()}</p>
                                <p>{sermon.description.clone()}</p>
                                <div class="admin-tags">
                                    {sermon.tags.iter().map(|t| view! { <span class="tag">{t.clone()}</span> }).collect_view()}
                                </div>
                                <p class="admin-muted">{sermon.category.clone()}" · "{sermon.views}" views"</p>
                                <div class="admin-actions">
                                    <label class="admin-file-btn">
                                        "Replace video"
                                        <input type="file" accept="video/*" hidden
                                            on:change=move |ev| on_replace(id_video.clone(), Replace::Video, ev)
                                        />
                                    </label>
                                    <label class="admin-file-btn">
                                        "Replace thumbnail"
                                        <input type="file" accept="image/*" hidden
                                            on:change=move |ev| on_replace(id_thumb.clone(), Replace::Thumbnail, ev)
                                        />
                                    </label>
                                    <button class="admin-danger" on:click=move |_| {
                                        if dom::confirm("Are you sure you want to delete this sermon?") {
                                            sermons.update(|list| { remove_by_id(list, &id_delete); });
                                        }
                                    }>"Delete"</button>
                                </div>
                            </article>
                        }
                    }
                </For>
            </div>
        </div>
    }
}
