use crate::layout::global_context::use_rental;
use crate::shared::icons::icon;
use contracts::enums::rental_tab::RentalTab;
use leptos::prelude::*;

/// In-page navigation anchors
pub const NAV_LINKS: [(&str, &str); 4] = [
    ("#home", "Home"),
    ("#vehicles", "Vehicles"),
    ("#about", "About Us"),
    ("#contact", "Contact"),
];

#[component]
pub fn Brand(#[prop(optional)] footer: bool) -> impl IntoView {
    let ctx = use_rental();
    let (first, second) = ctx
        .config
        .with_value(|c| (c.brand_first.clone(), c.brand_second.clone()));

    if footer {
        view! { <h2>{first}<span>{second}</span></h2> }.into_any()
    } else {
        view! { <h1>{first}<span>{second}</span></h1> }.into_any()
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_rental();
    let menu_open = Memo::new(move |_| ctx.state.with(|s| s.menu_open));
    let cart_count = Memo::new(move |_| ctx.state.with(|s| s.cart_count()));

    view! {
        <header data-zone="header" class="header">
            <div class="logo">
                <Brand />
            </div>
            <div class=move || if menu_open.get() { "nav-container open" } else { "nav-container" }>
                <button
                    class="menu-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| ctx.toggle_menu()
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class="navigation">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| view! { <a href=*href class="nav-link">{*label}</a> })
                        .collect_view()}
                </nav>
            </div>
            <div class="cart-icon" on:click=move |_| ctx.select_tab(RentalTab::Cart)>
                {icon("cart")}
                <span class="cart-count">{move || cart_count.get()}</span>
            </div>
        </header>
    }
}
