use super::tabs::TabBar;
use crate::domain::r001_vehicle::ui::list::VehicleList;
use crate::domain::r002_booking::ui::cart::CartView;
use crate::layout::global_context::use_rental;
use leptos::prelude::*;

/// `#vehicles` section: tab bar plus the catalog or the cart
#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_rental();
    let active = Memo::new(move |_| ctx.state.with(|s| s.active_tab));

    view! {
        <main class="main-content" id="vehicles">
            <TabBar />
            {move || match active.get().category() {
                Some(category) => view! { <VehicleList category=category /> }.into_any(),
                None => view! { <CartView /> }.into_any(),
            }}
        </main>
    }
}
