use crate::shared::notify;
use crate::shared::state::rental_state::RentalState;
use contracts::domain::r001_vehicle::aggregate::Vehicle;
use contracts::domain::r001_vehicle::catalog::Catalog;
use contracts::domain::r002_booking::aggregate::{BookingId, DraftField};
use contracts::enums::rental_tab::RentalTab;
use contracts::shared::config::RentalConfig;
use leptos::prelude::*;

/// Page-wide store. All mutations of [`RentalState`] go through these methods.
#[derive(Clone, Copy)]
pub struct RentalContext {
    pub state: RwSignal<RentalState>,
    pub config: StoredValue<RentalConfig>,
}

impl RentalContext {
    pub fn new(config: RentalConfig) -> Self {
        Self {
            state: RwSignal::new(RentalState::default()),
            config: StoredValue::new(config),
        }
    }

    /// Returns `false` when the page was already torn down and nothing was updated.
    pub fn finish_loading(&self, catalog: Catalog) -> bool {
        let count = catalog.len();
        let applied = self.state.try_update(|s| s.finish_loading(catalog)).is_some();
        if applied {
            log::info!("catalog loaded: {} vehicles", count);
        } else {
            log::debug!("catalog load dropped: page disposed");
        }
        applied
    }

    pub fn select_tab(&self, tab: RentalTab) {
        log::debug!("select_tab: {}", tab.code());
        self.state.update(|s| s.select_tab(tab));
    }

    pub fn set_search_term(&self, term: String) {
        self.state.update(|s| s.set_search_term(term));
    }

    pub fn toggle_menu(&self) {
        self.state.update(|s| s.toggle_menu());
    }

    pub fn open_booking_modal(&self, vehicle: Vehicle) {
        log::debug!(
            "open_booking_modal: {} {} (#{})",
            vehicle.category,
            vehicle.name,
            vehicle.id.value()
        );
        self.state.update(|s| s.open_booking_modal(vehicle));
    }

    pub fn close_booking_modal(&self) {
        self.state.update(|s| s.close_booking_modal());
    }

    /// Applies an input event from the booking form, keyed by the input's `name`
    pub fn update_draft_from_input(&self, name: &str, value: String) {
        match DraftField::from_name(name) {
            Ok(field) => self.state.update(|s| s.update_draft_field(field, value)),
            Err(err) => log::warn!("{}", err),
        }
    }

    pub fn submit_booking(&self) {
        let booking_id = BookingId::from_unit(js_sys::Math::random());
        let booked = self.state.try_update(|s| s.submit_booking(booking_id)).flatten();

        match booked {
            Some(booking) => {
                log::info!(
                    "booking #{} created: {} {}..{}",
                    booking.booking_id,
                    booking.vehicle.name,
                    booking.draft.start_date,
                    booking.draft.end_date
                );
                notify::alert(&format!("Successfully booked {}!", booking.vehicle.name));
            }
            None => log::warn!("submit_booking: no vehicle selected"),
        }
    }

    pub fn cancel_booking(&self, index: usize) {
        match self.state.try_update(|s| s.cancel_booking(index)) {
            Some(Ok(booking)) => log::info!("booking #{} cancelled", booking.booking_id),
            Some(Err(err)) => log::warn!("{}", err),
            None => {}
        }
    }

    pub fn currency(&self) -> String {
        self.config.with_value(|c| c.currency_symbol.clone())
    }
}

pub fn use_rental() -> RentalContext {
    use_context::<RentalContext>().expect("RentalContext context not found")
}
