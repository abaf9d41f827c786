use leptos::prelude::*;

use crate::domain::clients::queries::ClientsDomain;
use crate::domain::constructions::queries::ConstructionsDomain;
use crate::domain::glass_fill::queries::GlassFillDomain;
use crate::routes::AppRoutes;
use crate::shared::list_state::create_state;
use crate::shared::query::client::QueryClient;
use crate::system::users::queries::UsersDomain;

#[component]
pub fn App() -> impl IntoView {
    // One request cache and one filter store per paged dictionary domain,
    // shared app-wide via context.
    QueryClient::provide();
    provide_context(create_state::<ClientsDomain>());
    provide_context(create_state::<ConstructionsDomain>());
    provide_context(create_state::<GlassFillDomain>());
    provide_context(create_state::<UsersDomain>());

    view! { <AppRoutes /> }
}
