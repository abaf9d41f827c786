use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::components::PaginationControls;
use crate::shared::list_state::use_list_state;

use super::super::queries::{use_constructions, use_delete_construction, ConstructionsDomain};

#[component]
pub fn ConstructionsList() -> impl IntoView {
    let filter = use_list_state::<ConstructionsDomain>();
    let constructions = use_constructions(filter);
    let delete = use_delete_construction();

    let current_page = Signal::derive(move || filter.get().page);
    let page_size = Signal::derive(move || filter.get().limit);
    let total_pages = Signal::derive(move || {
        constructions
            .data
            .get()
            .map(|page| page.total_pages)
            .unwrap_or(0)
    });
    let total_count = Signal::derive(move || {
        constructions
            .data
            .get()
            .map(|page| page.total_count)
            .unwrap_or(0)
    });

    view! {
        <section class="entity-list">
            <h1>"Constructions"</h1>
            <Show when=move || constructions.loading.get()>
                <p class="loading">"Loading…"</p>
            </Show>
            {move || {
                constructions
                    .error
                    .get()
                    .map(|err| view! { <p class="error">{err.to_string()}</p> })
            }}
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Size, mm"</th>
                        <th>"Qty"</th>
                        <th>"Price"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        constructions
                            .data
                            .get()
                            .map(|page| {
                                page.items
                                    .into_iter()
                                    .map(|construction| {
                                        let id = construction.id;
                                        view! {
                                            <tr>
                                                <td>
                                                    <A href=format!(
                                                        "/constructions/{id}",
                                                    )>{construction.name}</A>
                                                </td>
                                                <td>
                                                    {format!(
                                                        "{} × {}",
                                                        construction.width_mm,
                                                        construction.height_mm,
                                                    )}
                                                </td>
                                                <td>{construction.quantity}</td>
                                                <td>{format!("{:.2}", construction.price)}</td>
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
