pub mod sidebar;

use leptos::prelude::*;

use sidebar::Sidebar;

/// Two-column application shell: navigation on the left, the routed view in
/// the center.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar />
            <main class="app-main">{children()}</main>
        </div>
    }
}
