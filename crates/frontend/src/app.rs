use crate::domain::r001_vehicle::loader::start_catalog_load;
use crate::layout::global_context::RentalContext;
use crate::layout::Shell;
use contracts::shared::config::RentalConfig;
use leptos::prelude::*;

/// Reads optional overrides from `<script id="rental-config" type="application/json">`.
fn load_config() -> RentalConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("rental-config"))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => RentalConfig::from_json(&raw).unwrap_or_else(|err| {
            log::warn!("Invalid rental-config, using defaults: {}", err);
            RentalConfig::default()
        }),
        _ => RentalConfig::default(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the page store to the whole app via context.
    let ctx = RentalContext::new(load_config());
    provide_context(ctx);

    start_catalog_load(ctx);

    view! {
        <Shell />
    }
}
