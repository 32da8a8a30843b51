use super::card::VehicleCard;
use crate::layout::global_context::use_rental;
use contracts::enums::vehicle_category::VehicleCategory;
use leptos::prelude::*;
use thaw::Spinner;

#[component]
pub fn SearchBar(category: VehicleCategory) -> impl IntoView {
    let ctx = use_rental();

    view! {
        <div class="search-container">
            <input
                type="text"
                class="search-input"
                placeholder=format!("Search {}...", category.plural())
                prop:value=move || ctx.state.with(|s| s.search_term.clone())
                on:input=move |ev| ctx.set_search_term(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner">
            <Spinner />
            <p>"Loading vehicles..."</p>
        </div>
    }
}

/// Search, loading indicator and grid for one catalog category
#[component]
pub fn VehicleList(category: VehicleCategory) -> impl IntoView {
    let ctx = use_rental();
    let loading = Memo::new(move |_| ctx.state.with(|s| s.loading));
    let vehicles = Memo::new(move |_| ctx.state.with(|s| s.filtered_vehicles()));

    view! {
        <SearchBar category=category />
        <Show when=move || loading.get() fallback=move || view! {
            <div class="vehicle-grid">
                {move || {
                    let items = vehicles.get();
                    if items.is_empty() {
                        view! {
                            <div class="no-results">
                                <p>{format!("No {} found matching your search.", category.plural())}</p>
                            </div>
                        }.into_any()
                    } else {
                        items
                            .into_iter()
                            .map(|vehicle| view! { <VehicleCard vehicle=vehicle /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
        }>
            <LoadingSpinner />
        </Show>
    }
}
