use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::components::PaginationControls;
use crate::shared::list_state::create_state;

use super::super::queries::{use_delete_order, use_order_statuses, use_orders, OrdersDomain};

#[component]
pub fn OrdersList() -> impl IntoView {
    // orders paging is local to this view, unlike the dictionary-like lists
    let filter = create_state::<OrdersDomain>();
    let orders = use_orders(filter);
    let statuses = use_order_statuses();
    let delete = use_delete_order();

    let current_page = Signal::derive(move || filter.get().page);
    let page_size = Signal::derive(move || filter.get().limit);
    let total_pages =
        Signal::derive(move || orders.data.get().map(|page| page.total_pages).unwrap_or(0));
    let total_count =
        Signal::derive(move || orders.data.get().map(|page| page.total_count).unwrap_or(0));

    view! {
        <section class="entity-list">
            <h1>"Orders"</h1>
            <div class="status-legend">
                {move || {
                    statuses
                        .data
                        .get()
                        .map(|statuses| {
                            statuses
                                .into_iter()
                                .map(|status| {
                                    view! {
                                        <span
                                            class="status-badge"
                                            style=format!("background-color:{}", status.color)
                                        >
                                            {status.name}
                                        </span>
                                    }
                                })
                                .collect_view()
                        })
                }}
            </div>
            <Show when=move || orders.loading.get()>
                <p class="loading">"Loading…"</p>
            </Show>
            {move || {
                orders
                    .error
                    .get()
                    .map(|err| view! { <p class="error">{err.to_string()}</p> })
            }}
            <table>
                <thead>
                    <tr>
                        <th>"Number"</th>
                        <th>"Client"</th>
                        <th>"Status"</th>
                        <th>"Total"</th>
                        <th>"Created"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        orders
                            .data
                            .get()
                            .map(|page| {
                                page.items
                                    .into_iter()
                                    .map(|order| {
                                        let id = order.id;
                                        view! {
                                            <tr>
                                                <td>
                                                    <A href=format!("/orders/{id}")>{order.number}</A>
                                                </td>
                                                <td>{order.client.name}</td>
                                                <td>
                                                    <span
                                                        class="status-badge"
                                                        style=format!("background-color:{}", order.status.color)
                                                    >
                                                        {order.status.name}
                                                    </span>
                                                </td>
                                                <td>{format!("{:.2}", order.total_price)}</td>
                                                <td>{order.created_at.format("%Y-%m-%d").to_string()}</td>
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
