use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

use super::super::queries::use_construction;

#[component]
pub fn ConstructionDetails() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || {
        params.with(|p| p.get("id").and_then(|raw| Uuid::parse_str(&raw).ok()))
    });
    let construction = use_construction(id);

    view! {
        <section class="entity-details">
            <A href="/constructions">"← Constructions"</A>
            <Show when=move || construction.loading.get()>
                <p class="loading">"Loading…"</p>
            </Show>
            {move || {
                construction
                    .error
                    .get()
                    .map(|err| view! { <p class="error">{err.to_string()}</p> })
            }}
            {move || {
                construction
                    .data
                    .get()
                    .map(|construction| {
                        view! {
                            <h1>{construction.name}</h1>
                            <dl>
                                <dt>"Order"</dt>
                                <dd>
                                    <A href=format!(
                                        "/orders/{}",
                                        construction.order_id,
                                    )>{construction.order_id.to_string()}</A>
                                </dd>
                                <dt>"Size"</dt>
                                <dd>
                                    {format!(
                                        "{} × {} mm",
                                        construction.width_mm,
                                        construction.height_mm,
                                    )}
                                </dd>
                                <dt>"Quantity"</dt>
                                <dd>{construction.quantity}</dd>
                                <dt>"Price"</dt>
                                <dd>{format!("{:.2}", construction.price)}</dd>
                            </dl>
                        }
                    })
            }}
        </section>
    }
}
