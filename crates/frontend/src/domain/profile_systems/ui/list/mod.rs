use leptos::prelude::*;

use super::super::queries::use_profile_systems;

/// Read-only dictionary view; the catalog is maintained upstream.
#[component]
pub fn ProfileSystemsList() -> impl IntoView {
    let systems = use_profile_systems();

    view! {
        <section class="entity-list">
            <h1>"Profile systems"</h1>
            <Show when=move || systems.loading.get()>
                <p class="loading">"Loading…"</p>
            </Show>
            {move || {
                systems
                    .error
                    .get()
                    .map(|err| view! { <p class="error">{err.to_string()}</p> })
            }}
            <table>
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Chambers"</th>
                        <th>"Mounting depth, mm"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        systems
                            .data
                            .get()
                            .map(|systems| {
                                systems
                                    .into_iter()
                                    .map(|system| {
                                        view! {
                                            <tr>
                                                <td>{system.name}</td>
                                                <td>{system.chambers}</td>
                                                <td>{system.mounting_depth_mm}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            })
                    }}
                </tbody>
            </table>
        </section>
    }
}
