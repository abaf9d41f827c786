use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::clients::ui::{ClientDetails, ClientsList};
use crate::domain::constructions::ui::{ConstructionDetails, ConstructionsList};
use crate::domain::glass_fill::ui::GlassFillList;
use crate::domain::orders::ui::{OrderDetails, OrdersList};
use crate::domain::profile_systems::ui::ProfileSystemsList;
use crate::layout::Shell;
use crate::system::users::ui::UsersList;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="empty">"Page not found"</p> }>
                    <Route path=path!("/") view=OrdersList />
                    <Route path=path!("/orders") view=OrdersList />
                    <Route path=path!("/orders/:id") view=OrderDetails />
                    <Route path=path!("/clients") view=ClientsList />
                    <Route path=path!("/clients/:id") view=ClientDetails />
                    <Route path=path!("/constructions") view=ConstructionsList />
                    <Route path=path!("/constructions/:id") view=ConstructionDetails />
                    <Route path=path!("/glass-fill") view=GlassFillList />
                    <Route path=path!("/profile-systems") view=ProfileSystemsList />
                    <Route path=path!("/users") view=UsersList />
                </Routes>
            </Shell>
        </Router>
    }
}
