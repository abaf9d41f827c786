use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

use super::super::queries::use_client;

#[component]
pub fn ClientDetails() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || {
        params.with(|p| p.get("id").and_then(|raw| Uuid::parse_str(&raw).ok()))
    });
    let client = use_client(id);

    view! {
        <section class="entity-details">
            <A href="/clients">"← Clients"</A>
            <Show when=move || client.loading.get()>
                <p class="loading">"Loading…"</p>
            </Show>
            {move || {
                client
                    .error
                    .get()
                    .map(|err| view! { <p class="error">{err.to_string()}</p> })
            }}
            {move || {
                client
                    .data
                    .get()
                    .map(|client| {
                        view! {
                            <h1>{client.name}</h1>
                            <dl>
                                <dt>"Phone"</dt>
                                <dd>{client.phone.unwrap_or_default()}</dd>
                                <dt>"Email"</dt>
                                <dd>{client.email.unwrap_or_default()}</dd>
                                <dt>"Address"</dt>
                                <dd>{client.address.unwrap_or_default()}</dd>
                                <dt>"Orders placed"</dt>
                                <dd>{client.orders_count}</dd>
                                <dt>"Client since"</dt>
                                <dd>{client.created_at.format("%Y-%m-%d").to_string()}</dd>
                            </dl>
                        }
                    })
            }}
        </section>
    }
}
