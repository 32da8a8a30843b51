use crate::layout::global_context::use_rental;
use crate::shared::components::ui::Button;
use contracts::enums::rental_tab::RentalTab;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_rental();

    view! {
        <section class="hero" id="home">
            <div class="hero-content">
                <h1 class="slide-in-left">"Explore The World On Your Terms"</h1>
                <p class="slide-in-right">"Premium Cars & Bikes For Your Journey"</p>
                <div class="hero-buttons">
                    <Button class="pulse" on_click=Callback::new(move |_| ctx.select_tab(RentalTab::Cars))>
                        "Rent a Car"
                    </Button>
                    <Button
                        variant="secondary"
                        class="pulse"
                        on_click=Callback::new(move |_| ctx.select_tab(RentalTab::Bikes))
                    >
                        "Rent a Bike"
                    </Button>
                </div>
            </div>
        </section>
    }
}
