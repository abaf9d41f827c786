use leptos::prelude::*;

use crate::shared::components::PaginationControls;
use crate::shared::list_state::use_list_state;

use super::super::queries::{use_delete_user, use_user_roles, use_users, UsersDomain};

#[component]
pub fn UsersList() -> impl IntoView {
    let filter = use_list_state::<UsersDomain>();
    let users = use_users(filter);
    let roles = use_user_roles();
    let delete = use_delete_user();

    let current_page = Signal::derive(move || filter.get().page);
    let page_size = Signal::derive(move || filter.get().limit);
    let total_pages =
        Signal::derive(move || users.data.get().map(|page| page.total_pages).unwrap_or(0));
    let total_count =
        Signal::derive(move || users.data.get().map(|page| page.total_count).unwrap_or(0));

    view! {
        <section class="entity-list">
            <h1>"Users"</h1>
            <p class="hint">
                {move || {
                    roles
                        .data
                        .get()
                        .map(|roles| {
                            format!(
                                "Roles: {}",
                                roles
                                    .iter()
                                    .map(|role| role.name.as_str())
                                    .collect::<Vec<_>>()
                                    .join(", "),
                            )
                        })
                }}
            </p>
            <Show when=move || users.loading.get()>
                <p class="loading">"Loading…"</p>
            </Show>
            {move || {
                users
                    .error
                    .get()
                    .map(|err| view! { <p class="error">{err.to_string()}</p> })
            }}
            <table>
                <thead>
                    <tr>
                        <th>"Username"</th>
                        <th>"Full name"</th>
                        <th>"Role"</th>
                        <th>"Active"</th>
                        <th>"Last login"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        users
                            .data
                            .get()
                            .map(|page| {
                                page.items
                                    .into_iter()
                                    .map(|user| {
                                        let id = user.id;
                                        view! {
                                            <tr>
                                                <td>{user.username}</td>
                                                <td>{user.full_name.unwrap_or_default()}</td>
                                                <td>{user.role.name}</td>
                                                <td>{if user.is_active { "yes" } else { "no" }}</td>
                                                <td>
                                                    {user
                                                        .last_login_at
                                                        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                                                        .unwrap_or_else(|| "never".to_string())}
                                                </td>
                                                <td>
                                                    <button
                                                        class="danger"
                                                        disabled=move || delete.pending.get()
                                                        on:click=move |_| delete.run(id)
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            })
                    }}
                </tbody>
            </table>
            {move || {
                delete
                    .error
                    .get()
                    .map(|err| view! { <p class="error">{format!("Delete failed: {err}")}</p> })
            }}
            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                total_count=total_count
                page_size=page_size
                on_page_change=Callback::new(move |page| filter.update(|s| s.set_page(page)))
                on_page_size_change=Callback::new(move |limit| {
                    filter.update(|s| s.set_limit(limit))
                })
            />
        </section>
    }
}
