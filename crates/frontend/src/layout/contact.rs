use crate::shared::icons::icon;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Contact details and a message form. Messages are not sent anywhere.
#[component]
pub fn Contact() -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::info!("contact form submitted; no message transport configured");
    };

    view! {
        <section class="contact-section" id="contact">
            <h2>"Contact Us"</h2>
            <div class="contact-container">
                <div class="contact-info">
                    <div class="contact-item">
                        <span class="contact-icon">{icon("map-pin")}</span>
                        <p>"123 Main Street, Anytown, USA"</p>
                    </div>
                    <div class="contact-item">
                        <span class="contact-icon">{icon("phone")}</span>
                        <p>"+1 (555) 123-4567"</p>
                    </div>
                    <div class="contact-item">
                        <span class="contact-icon">{icon("mail")}</span>
                        <p>"info@speedyrentals.com"</p>
                    </div>
                    <div class="social-links">
                        <a href="#" class="social-link">"Facebook"</a>
                        <a href="#" class="social-link">"Twitter"</a>
                        <a href="#" class="social-link">"Instagram"</a>
                    </div>
                </div>
                <form class="contact-form" on:submit=on_submit>
                    <input type="text" placeholder="Your Name" required=true />
                    <input type="email" placeholder="Your Email" required=true />
                    <textarea placeholder="Your Message" rows="5" required=true></textarea>
                    <button type="submit" class="btn primary-btn">"Send Message"</button>
                </form>
            </div>
        </section>
    }
}
