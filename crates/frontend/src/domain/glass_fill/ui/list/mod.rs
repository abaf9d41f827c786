use leptos::prelude::*;

use crate::shared::components::PaginationControls;
use crate::shared::list_state::use_list_state;

use super::super::queries::{use_delete_glass_fill, use_glass_fills, GlassFillDomain};

#[component]
pub fn GlassFillList() -> impl IntoView {
    let filter = use_list_state::<GlassFillDomain>();
    let glass = use_glass_fills(filter);
    let delete = use_delete_glass_fill();

    let current_page = Signal::derive(move || filter.get().page);
    let page_size = Signal::derive(move || filter.get().limit);
    let total_pages =
        Signal::derive(move || glass.data.get().map(|page| page.total_pages).unwrap_or(0));
    let total_count =
        Signal::derive(move || glass.data.get().map(|page| page.total_count).unwrap_or(0));

    view! {
        <section class="entity-list">
            <h1>"Glass fill"</h1>
            <Show when=move || glass.loading.get()>
                <p class="loading">"Loading…"</p>
            </Show>
            {move || {
                glass
                    .error
                    .get()
                    .map(|err| view! { <p class="error">{err.to_string()}</p> })
            }}
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Formula"</th>
                        <th>"Thickness, mm"</th>
                        <th>"Chambers"</th>
                        <th>"In stock"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        glass
                            .data
                            .get()
                            .map(|page| {
                                page.formation
                                    .into_iter()
                                    .map(|fill| {
                                        let id = fill.id;
                                        view! {
                                            <tr>
                                                <td>{fill.name}</td>
                                                <td>{fill.formula}</td>
                                                <td>{fill.thickness_mm}</td>
                                                <td>{fill.chambers}</td>
                                                <td>{if fill.in_stock { "yes" } else { "no" }}</td>
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
