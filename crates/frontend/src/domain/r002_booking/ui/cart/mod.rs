use crate::layout::global_context::use_rental;
use crate::shared::components::ui::Button;
use crate::shared::money::format_amount;
use contracts::domain::r002_booking::aggregate::Booking;
use contracts::enums::rental_tab::RentalTab;
use leptos::prelude::*;

#[component]
fn BookingCard(booking: Booking, index: usize) -> impl IntoView {
    let ctx = use_rental();
    let currency = ctx.currency();

    let (duration, cost) = match (booking.days(), booking.cost()) {
        (Ok(days), Ok(cost)) => (format!("{} days", days), format_amount(cost, &currency)),
        (Err(err), _) | (_, Err(err)) => {
            log::warn!("booking #{}: {}", booking.booking_id, err);
            ("-".to_string(), "-".to_string())
        }
    };

    view! {
        <div class="booking-card">
            <div class="booking-image">
                <img src=booking.vehicle.image_url.clone() alt=booking.vehicle.name.clone() />
            </div>
            <div class="booking-details">
                <h3>{booking.vehicle.name.clone()}</h3>
                <p>{format!("Booking ID: #{}", booking.booking_id)}</p>
                <p>{format!("Dates: {} to {}", booking.draft.start_date, booking.draft.end_date)}</p>
                <p>{format!("Duration: {}", duration)}</p>
                <p>{format!("Cost: {}", cost)}</p>
            </div>
            <Button variant="delete" on_click=Callback::new(move |_| ctx.cancel_booking(index))>
                "Cancel"
            </Button>
        </div>
    }
}

#[component]
fn CartSummary() -> impl IntoView {
    let ctx = use_rental();
    let currency = ctx.currency();
    let count = move || ctx.state.with(|s| s.cart_count());
    let total = move || ctx.state.with(|s| format_amount(s.total_cost(), &currency));

    view! {
        <div class="cart-summary">
            <h3>"Summary"</h3>
            <p>"Total Bookings: " {count}</p>
            <p>"Total Cost: " {total}</p>
            // no payment flow behind it
            <Button
                title="Online payment is not available"
                on_click=Callback::new(|_| log::info!("checkout requested"))
            >
                "Checkout"
            </Button>
        </div>
    }
}

/// "My Bookings" tab
#[component]
pub fn CartView() -> impl IntoView {
    let ctx = use_rental();
    let cart = Memo::new(move |_| ctx.state.with(|s| s.cart.clone()));

    view! {
        <div class="cart-container">
            <h2>"Your Bookings"</h2>
            <Show
                when=move || !cart.with(|c| c.is_empty())
                fallback=move || view! {
                    <div class="empty-cart">
                        <p>"You have no bookings yet."</p>
                        <Button on_click=Callback::new(move |_| ctx.select_tab(RentalTab::Cars))>
                            "Browse Cars"
                        </Button>
                    </div>
                }
            >
                <div class="booking-list">
                    {move || {
                        cart.get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, booking)| view! { <BookingCard booking=booking index=index /> })
                            .collect_view()
                    }}
                </div>
                <CartSummary />
            </Show>
        </div>
    }
}
