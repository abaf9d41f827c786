use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

use super::super::queries::use_order;

/// Order card. The query stays suspended until the route carries a valid id.
#[component]
pub fn OrderDetails() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || {
        params.with(|p| p.get("id").and_then(|raw| Uuid::parse_str(&raw).ok()))
    });
    let order = use_order(id);

    view! {
        <section class="entity-details">
            <A href="/orders">"← Orders"</A>
            <Show when=move || order.loading.get()>
                <p class="loading">"Loading…"</p>
            </Show>
            {move || {
                order
                    .error
                    .get()
                    .map(|err| view! { <p class="error">{err.to_string()}</p> })
            }}
            {move || {
                order
                    .data
                    .get()
                    .map(|order| {
                        view! {
                            <h1>{format!("Order {}", order.number)}</h1>
                            <dl>
                                <dt>"Client"</dt>
                                <dd>{order.client.name}</dd>
                                <dt>"Phone"</dt>
                                <dd>{order.client.phone.unwrap_or_default()}</dd>
                                <dt>"Status"</dt>
                                <dd>
                                    <span
                                        class="status-badge"
                                        style=format!("background-color:{}", order.status.color)
                                    >
                                        {order.status.name}
                                    </span>
                                </dd>
                                <dt>"Total"</dt>
                                <dd>{format!("{:.2}", order.total_price)}</dd>
                                <dt>"Comment"</dt>
                                <dd>{order.comment.unwrap_or_default()}</dd>
                                <dt>"Created"</dt>
                                <dd>{order.created_at.format("%Y-%m-%d %H:%M").to_string()}</dd>
                            </dl>
                        }
                    })
            }}
        </section>
    }
}
