use crate::layout::global_context::use_rental;
use contracts::enums::rental_tab::RentalTab;
use leptos::prelude::*;

fn tab_label(tab: RentalTab, cart_count: usize) -> String {
    match tab {
        RentalTab::Cars => "Cars".to_string(),
        RentalTab::Bikes => "Bikes".to_string(),
        RentalTab::Cart => format!("My Bookings ({})", cart_count),
    }
}

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_rental();
    let active = Memo::new(move |_| ctx.state.with(|s| s.active_tab));
    let cart_count = Memo::new(move |_| ctx.state.with(|s| s.cart_count()));

    view! {
        <div class="tabs">
            {RentalTab::all()
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class=move || if active.get() == tab { "tab active" } else { "tab" }
                            on:click=move |_| ctx.select_tab(tab)
                        >
                            {move || tab_label(tab, cart_count.get())}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_label() {
        assert_eq!(tab_label(RentalTab::Cars, 3), "Cars");
        assert_eq!(tab_label(RentalTab::Bikes, 0), "Bikes");
        assert_eq!(tab_label(RentalTab::Cart, 2), "My Bookings (2)");
    }
}
