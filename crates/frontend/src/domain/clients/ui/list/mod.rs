use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::components::A;
use wasm_bindgen_futures::spawn_local;

use crate::shared::components::PaginationControls;
use crate::shared::list_state::use_list_state;

use super::super::queries::{use_clients, use_delete_client, ClientsDomain};

const SEARCH_DEBOUNCE_MS: u32 = 300;

#[component]
pub fn ClientsList() -> impl IntoView {
    let filter = use_list_state::<ClientsDomain>();
    let typed = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());

    // Debounce: only the value still current after the timeout reaches the
    // query; a new search term starts over from page 1.
    Effect::new(move |_| {
        let value = typed.get();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if typed.get_untracked() == value && search.get_untracked() != value {
                filter.update(|s| s.set_page(1));
                search.set(value);
            }
        });
    });

    let clients = use_clients(filter, search.into());
    let delete = use_delete_client();

    let current_page = Signal::derive(move || filter.get().page);
    let page_size = Signal::derive(move || filter.get().limit);
    let total_pages =
        Signal::derive(move || clients.data.get().map(|page| page.total_pages).unwrap_or(0));
    let total_count =
        Signal::derive(move || clients.data.get().map(|page| page.total_count).unwrap_or(0));

    view! {
        <section class="entity-list">
            <h1>"Clients"</h1>
            <input
                type="search"
                placeholder="Search by name or phone"
                prop:value=move || typed.get()
                on:input=move |ev| typed.set(event_target_value(&ev))
            />
            <Show when=move || clients.loading.get()>
                <p class="loading">"Loading…"</p>
            </Show>
            {move || {
                clients
                    .error
                    .get()
                    .map(|err| view! { <p class="error">{err.to_string()}</p> })
            }}
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Phone"</th>
                        <th>"Email"</th>
                        <th>"Orders"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        clients
                            .data
                            .get()
                            .map(|page| {
                                page.items
                                    .into_iter()
                                    .map(|client| {
                                        let id = client.id;
                                        view! {
                                            <tr>
                                                <td>
                                                    <A href=format!("/clients/{id}")>{client.name}</A>
                                                </td>
                                                <td>{client.phone.unwrap_or_default()}</td>
                                                <td>{client.email.unwrap_or_default()}</td>
                                                <td>{client.orders_count}</td>
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
