use leptos::prelude::*;
use leptos::task::spawn_local;
use site_core::admin::remove_by_id;
use site_core::media::{content_id, filter_media, format_file_size, MediaFile, MediaKind};
use site_core::task::latency;
use web_sys::File;

use super::today;
use crate::browser::delay::{simulate, token_of, use_task_guard};
use crate::browser::{dom, files};
use crate::content::admin;
use crate::state::AppState;

/// Read one picked file into a library record.
async fn to_media_file(file: &File) -> Result<MediaFile, String> {
    let bytes = files::read_file_bytes(file).await?;
    let name = file.name();
    let kind = MediaKind::from_mime(&file.type_());
    let url = files::object_url(file)?;
    Ok(MediaFile {
        id: content_id(&name, &bytes),
        thumbnail: (kind == MediaKind::Image).then(|| url.clone()),
        size: format_file_size(file.size() as u64),
        upload_date: today(),
        url,
        kind,
        name,
    })
}

fn kind_icon(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "🖼",
        MediaKind::Video => "🎬",
        MediaKind::Audio => "🎵",
        MediaKind::Document => "📄",
    }
}

#[component]
pub fn MediaLibrary() -> impl IntoView {
    let state = expect_context::<AppState>();
    let guard = use_task_guard();
    let media = RwSignal::new(admin::media_files());
    let search = RwSignal::new(String::new());
    let kind = RwSignal::new(None::<MediaKind>);
    let uploading = RwSignal::new(false);

    let visible = move || {
        media.with(|list| search.with(|q| filter_media(list, q, kind.get()).into_iter().cloned().collect::<Vec<_>>()))
    };

    let on_upload = move |ev: web_sys::Event| {
        let picked = files::picked_files(&ev);
        if picked.is_empty() || uploading.get_untracked() {
            return;
        }
        uploading.set(true);
        let token = token_of(guard);
        spawn_local(async move {
            if simulate(&token, latency::MEDIA_UPLOAD_MS).await.is_err() {
                return;
            }
            let mut failed = 0;
            for file in &picked {
                match to_media_file(file).await {
                    Ok(record) => {
                        if token.is_cancelled() {
                            return;
                        }
                        media.update(|list| list.insert(0, record));
                    }
                    Err(e) => {
                        log::error!("Upload of {} failed: {e}", file.name());
                        failed += 1;
                    }
                }
            }
            if token.is_cancelled() {
                return;
            }
            uploading.set(false);
            if failed == 0 {
                log::info!("Uploaded {} file(s)", picked.len());
                state.notify("Files uploaded successfully!");
            } else {
                state.notify("Failed to upload files. Please try again.");
            }
        });
    };

    let on_delete = move |id: String| {
        if dom::confirm("Are you sure you want to delete this file?") {
            media.update(|list| {
                if let Some(file) = list.iter().find(|f| f.id == id) {
                    files::revoke_object_url(&file.url);
                }
                remove_by_id(list, &id);
            });
        }
    };

    view! {
        <div class="admin-media">
            <div class="admin-page-head">
                <div>
                    <h1>"Media Library"</h1>
                    <p class="admin-subtitle">"Upload and manage images, videos, audio and documents"</p>
                </div>
                <label class="admin-file-btn primary">
                    {move || if uploading.get() { "Uploading..." } else { "Upload Files" }}
                    <input type="file" multiple hidden
                        accept="image/*,video/*,audio/*,.pdf,.doc,.docx"
                        disabled=move || uploading.get()
                        on:change=on_upload
                    />
                </label>
            </div>
            <div class="admin-filters">
                <input type="search" placeholder="Search files..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| kind.set(MediaKind::from_slug(&event_target_value(&ev)))>
                    <option value="all">"All Types"</option>
                    {MediaKind::ALL.into_iter().map(|k| view! {
                        <option value=k.slug()>{k.slug()}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="admin-media-grid">
                <For each=visible key=|f| f.id.clone() let:file>
                    {
                        let id = file.id.clone();
                        view! {
                            <div class="admin-media-card">
                                {match file.thumbnail.clone() {
                                    Some(src) => view! { <img src=src alt=file.name.clone() /> }.into_any(),
                                    None => view! { <div class="admin-media-icon">{kind_icon(file.kind)}</div> }.into_any(),
                                }}
                                <p class="admin-media-name" title=file.name.clone()>{file.name.clone()}</p>
                                <p class="admin-muted">{file.size.clone()}" · "{file.upload_date.clone()}</p>
                                <div class="admin-actions">
                                    <a href=file.url.clone() download=file.name.clone()>"Download"</a>
                                    <button class="admin-danger" on:click=move |_| on_delete(id.clone())>"Delete"</button>
                                </div>
                            </div>
                        }
                    }
                </For>
            </div>
            {move || (!uploading.get() && media.with(|m| m.is_empty())).then(|| view! {
                <p class="admin-empty">"No media files yet"</p>
            })}
        </div>
    }
}
