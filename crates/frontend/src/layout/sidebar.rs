use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="app-sidebar">
            <span class="app-title">"Glazing Admin"</span>
            <A href="/orders">"Orders"</A>
            <A href="/constructions">"Constructions"</A>
            <A href="/clients">"Clients"</A>
            <A href="/glass-fill">"Glass fill"</A>
            <A href="/profile-systems">"Profile systems"</A>
            <A href="/users">"Users"</A>
        </nav>
    }
}
