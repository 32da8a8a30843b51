use crate::layout::global_context::use_rental;
use crate::shared::components::ui::Button;
use crate::shared::money::format_daily_price;
use contracts::domain::r001_vehicle::aggregate::{Vehicle, MAX_RATING_STARS};
use leptos::prelude::*;

fn star_class(index: usize, filled: usize) -> &'static str {
    if index < filled {
        "star filled"
    } else {
        "star"
    }
}

/// Whether the "Rent Now" control is enabled for `vehicle`
pub fn can_rent(vehicle: &Vehicle) -> bool {
    vehicle.available
}

#[component]
pub fn RatingStars(rating: f64, filled: usize) -> impl IntoView {
    view! {
        <div class="vehicle-rating">
            {(0..MAX_RATING_STARS)
                .map(|i| view! { <span class=star_class(i, filled)>"★"</span> })
                .collect_view()}
            <span class="rating-value">{rating.to_string()}</span>
        </div>
    }
}

/// Catalog card. "Rent Now" is disabled for unavailable vehicles.
#[component]
pub fn VehicleCard(vehicle: Vehicle) -> impl IntoView {
    let ctx = use_rental();
    let available = can_rent(&vehicle);
    let price = format_daily_price(vehicle.daily_price, &ctx.currency());
    let filled = vehicle.filled_stars();
    let rating = vehicle.rating;
    let name = vehicle.name.clone();
    let image_url = vehicle.image_url.clone();

    let rent = Callback::new(move |_| {
        if can_rent(&vehicle) {
            ctx.open_booking_modal(vehicle.clone());
        }
    });

    view! {
        <div class={if available { "vehicle-card" } else { "vehicle-card unavailable" }}>
            <div class="vehicle-image">
                <img src=image_url alt=name.clone() />
                {(!available).then(|| view! { <div class="unavailable-overlay">"Unavailable"</div> })}
            </div>
            <div class="vehicle-details">
                <h3>{name}</h3>
                <RatingStars rating=rating filled=filled />
                <p class="vehicle-price">{price}</p>
                <Button disabled={!available} on_click=rent>
                    "Rent Now"
                </Button>
            </div>
        </div>
    }
}
