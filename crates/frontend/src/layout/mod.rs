pub mod about;
pub mod center;
pub mod contact;
pub mod footer;
pub mod global_context;
pub mod header;
pub mod hero;

use crate::domain::r002_booking::ui::modal::BookingModal;
use leptos::prelude::*;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (brand, menu, cart icon)          |
/// +------------------------------------------+
/// |  Hero            #home                    |
/// |  Center          #vehicles (tabs)         |
/// |  About           #about                   |
/// |  Contact         #contact                 |
/// +------------------------------------------+
/// |  Footer                                   |
/// +------------------------------------------+
/// ```
///
/// The booking modal is rendered last so it overlays everything else.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="rental-app">
            <header::Header />
            <hero::Hero />
            <center::Center />
            <about::About />
            <contact::Contact />
            <footer::Footer />
            <BookingModal />
        </div>
    }
}
