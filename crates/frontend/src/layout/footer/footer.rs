use crate::layout::global_context::use_rental;
use crate::layout::header::Brand;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_rental();
    let brand = ctx.config.with_value(|c| c.brand());

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer-content">
                <div class="footer-logo">
                    <Brand footer=true />
                </div>
                <p>{format!("© 2025 {}. All rights reserved.", brand)}</p>
                <div class="footer-links">
                    <a href="#">"Privacy Policy"</a>
                    <a href="#">"Terms of Service"</a>
                    <a href="#">"Help Center"</a>
                </div>
            </div>
        </footer>
    }
}
