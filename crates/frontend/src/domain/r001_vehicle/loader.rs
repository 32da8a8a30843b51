use crate::layout::global_context::RentalContext;
use contracts::domain::r001_vehicle::catalog::sample_catalog;
use leptos::prelude::*;
use std::time::Duration;

/// Fills the catalog after the configured delay, simulating a fetch.
///
/// Must be called inside a component: the pending timer is cleared when that
/// component's owner is cleaned up, so a torn-down page is never updated.
pub fn start_catalog_load(ctx: RentalContext) {
    let (image_url, delay_ms) = ctx
        .config
        .with_value(|c| (c.placeholder_image_url.clone(), c.catalog_load_delay_ms));

    let load = {
        let image_url = image_url.clone();
        move || {
            ctx.finish_loading(sample_catalog(&image_url));
        }
    };

    match set_timeout_with_handle(load, Duration::from_millis(delay_ms as u64)) {
        Ok(handle) => {
            log::debug!("catalog load scheduled in {} ms", delay_ms);
            on_cleanup(move || handle.clear());
        }
        Err(err) => {
            log::error!("Failed to schedule catalog load: {:?}", err);
            ctx.finish_loading(sample_catalog(&image_url));
        }
    }
}
