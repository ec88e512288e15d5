use leptos::prelude::*;
use site_core::admin::{filter_accounts, remove_by_id, toggle_status, AccountStatus};
use site_core::session::Role;

use crate::browser::dom;
use crate::content::admin;
use crate::state::AppState;

#[component]
pub fn UsersAdmin() -> impl IntoView {
    let state = expect_context::<AppState>();
    let accounts = RwSignal::new(admin::accounts());
    let search = RwSignal::new(String::new());
    let role = RwSignal::new("all".to_string());
    let status = RwSignal::new("all".to_string());

    let visible = move || {
        accounts.with(|list| {
            search.with(|q| {
                role.with(|r| status.with(|s| filter_accounts(list, q, r, s).into_iter().cloned().collect::<Vec<_>>()))
            })
        })
    };

    let on_toggle = move |id: String| {
        accounts.update(|list| {
            toggle_status(list, &id);
        });
    };

    let on_reset_password = move |email: String| {
        if dom::confirm("Are you sure you want to reset this user's password?") {
            log::info!("Password reset requested for {email}");
            state.notify(format!("Password reset email sent to {email}"));
        }
    };

    let on_delete = move |id: String| {
        if dom::confirm("Are you sure you want to delete this user?") {
            accounts.update(|list| {
                remove_by_id(list, &id);
            });
        }
    };

    view! {
        <div class="admin-users">
            <h1>"Users"</h1>
            <p class="admin-subtitle">"Manage admin accounts and permissions"</p>
            <div class="admin-filters">
                <input type="search" placeholder="Search users..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select on:change=move |ev| role.set(event_target_value(&ev))>
                    <option value="all">"All Roles"</option>
                    {Role::ALL.into_iter().map(|r| view! {
                        <option value=r.slug()>{r.label()}</option>
                    }).collect_view()}
                </select>
                <select on:change=move |ev| status.set(event_target_value(&ev))>
                    <option value="all">"All Status"</option>
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                </select>
            </div>
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"User"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th>"Last login"</th>
                        <th>"Permissions"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=visible key=|a| (a.id.clone(), a.status.slug()) let:account>
                        {
                            let id_toggle = account.id.clone();
                            let id_delete = account.id.clone();
                            let email = account.email.clone();
                            let active = account.status == AccountStatus::Active;
                            view! {
                                <tr>
                                    <td>
                                        <div class="admin-strong">{account.name.clone()}</div>
                                        <div class="admin-muted">{account.email.clone()}</div>
                                    </td>
                                    <td><span class=format!("badge role-{}", account.role.slug())>{account.role.label()}</span></td>
                                    <td>
                                        <label class="admin-switch">
                                            <input type="checkbox" prop:checked=active
                                                on:change=move |_| on_toggle(id_toggle.clone())
                                            />
                                            <span class=format!("badge status-{}", account.status.slug())>{account.status.slug()}</span>
                                        </label>
                                    </td>
                                    <td class="admin-muted">{account.last_login.clone()}</td>
                                    <td class="admin-muted">{account.permissions.join(", ")}</td>
                                    <td class="admin-actions">
                                        <button on:click=move |_| on_reset_password(email.clone())>"Reset password"</button>
                                        <button class="admin-danger" on:click=move |_| on_delete(id_delete.clone())>"Delete"</button>
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
