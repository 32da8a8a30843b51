use crate::layout::global_context::use_rental;
use leptos::prelude::*;

const STATS: [(&str, &str); 3] = [
    ("10+", "Years Experience"),
    ("500+", "Vehicles"),
    ("50k+", "Happy Customers"),
];

#[component]
pub fn About() -> impl IntoView {
    let ctx = use_rental();
    let (brand, image_url) = ctx
        .config
        .with_value(|c| (c.brand(), c.about_image_url.clone()));

    view! {
        <section class="about-section" id="about">
            <h2>{format!("About {}", brand)}</h2>
            <div class="about-content">
                <div class="about-image">
                    <img src=image_url alt="About us" />
                </div>
                <div class="about-text">
                    <p>
                        {format!("{} has been providing premium car and bike rental services since 2010. \
                        With our fleet of well-maintained vehicles and customer-focused approach, \
                        we ensure you have the best travel experience.", brand)}
                    </p>
                    <p>
                        "Our mission is to offer affordable, reliable, and convenient rental options \
                        for all your transportation needs."
                    </p>
                    <div class="stats">
                        {STATS
                            .iter()
                            .map(|(value, label)| view! {
                                <div class="stat-item">
                                    <h3>{*value}</h3>
                                    <p>{*label}</p>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
