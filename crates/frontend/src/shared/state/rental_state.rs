//! Whole-page state and its transitions.
//!
//! Plain data with one method per user action; the reactive wrapper lives in
//! [`crate::layout::global_context::RentalContext`].

use contracts::domain::r001_vehicle::aggregate::Vehicle;
use contracts::domain::r001_vehicle::catalog::{filter_catalog, Catalog};
use contracts::domain::r002_booking::aggregate::{Booking, BookingDraft, BookingId, DraftField};
use contracts::domain::r002_booking::pricing::total_cart_cost;
use contracts::enums::rental_tab::RentalTab;
use contracts::shared::error::{RentalError, RentalResult};

#[derive(Clone, Debug)]
pub struct RentalState {
    pub active_tab: RentalTab,

    // data
    pub catalog: Option<Catalog>,
    pub cart: Vec<Booking>,

    // booking modal
    pub selected_vehicle: Option<Vehicle>,
    pub modal_open: bool,
    pub draft: BookingDraft,

    // filters (shared by both catalog tabs)
    pub search_term: String,

    pub menu_open: bool,

    // load flag
    pub loading: bool,
}

impl Default for RentalState {
    fn default() -> Self {
        Self {
            active_tab: RentalTab::Cars,
            catalog: None,
            cart: Vec::new(),
            selected_vehicle: None,
            modal_open: false,
            draft: BookingDraft::default(),
            search_term: String::new(),
            menu_open: false,
            loading: true,
        }
    }
}

impl RentalState {
    pub fn finish_loading(&mut self, catalog: Catalog) {
        self.catalog = Some(catalog);
        self.loading = false;
    }

    /// Switching tabs keeps the search term.
    pub fn select_tab(&mut self, tab: RentalTab) {
        self.active_tab = tab;
    }

    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Active category filtered by the search term; empty on the cart tab.
    pub fn filtered_vehicles(&self) -> Vec<Vehicle> {
        match self.active_tab.category() {
            Some(category) => filter_catalog(self.catalog.as_ref(), category, &self.search_term),
            None => Vec::new(),
        }
    }

    /// Availability is checked by the caller (the "Rent Now" button is disabled).
    pub fn open_booking_modal(&mut self, vehicle: Vehicle) {
        self.selected_vehicle = Some(vehicle);
        self.modal_open = true;
    }

    pub fn close_booking_modal(&mut self) {
        self.modal_open = false;
        self.draft = BookingDraft::default();
    }

    /// Vehicle shown in the modal, if the modal is open
    pub fn modal_vehicle(&self) -> Option<&Vehicle> {
        if self.modal_open {
            self.selected_vehicle.as_ref()
        } else {
            None
        }
    }

    pub fn update_draft_field(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
    }

    /// Moves the draft into the cart as a booking of the selected vehicle.
    /// Does nothing when no vehicle is selected.
    pub fn submit_booking(&mut self, booking_id: BookingId) -> Option<Booking> {
        let vehicle = self.selected_vehicle.clone()?;
        let draft = std::mem::take(&mut self.draft);
        let booking = Booking::new(vehicle, draft, booking_id);

        self.cart.push(booking.clone());
        self.modal_open = false;
        Some(booking)
    }

    pub fn cancel_booking(&mut self, index: usize) -> RentalResult<Booking> {
        if index >= self.cart.len() {
            return Err(RentalError::BookingIndexOutOfRange {
                index,
                len: self.cart.len(),
            });
        }
        Ok(self.cart.remove(index))
    }

    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    pub fn total_cost(&self) -> f64 {
        total_cart_cost(&self.cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::r001_vehicle::catalog::sample_catalog;

    fn loaded() -> RentalState {
        let mut state = RentalState::default();
        state.finish_loading(sample_catalog("/api/placeholder/300/200"));
        state
    }

    fn find(state: &RentalState, name: &str) -> Vehicle {
        let catalog = state.catalog.as_ref().unwrap();
        catalog
            .cars
            .iter()
            .chain(catalog.bikes.iter())
            .find(|v| v.name == name)
            .cloned()
            .unwrap()
    }

    fn fill_draft(state: &mut RentalState, start: &str, end: &str) {
        state.update_draft_field(DraftField::StartDate, start.to_string());
        state.update_draft_field(DraftField::EndDate, end.to_string());
        state.update_draft_field(DraftField::Name, "Ann Lee".to_string());
        state.update_draft_field(DraftField::Email, "ann@example.com".to_string());
        state.update_draft_field(DraftField::Phone, "+1 555 0100".to_string());
    }

    fn book(state: &mut RentalState, name: &str, start: &str, end: &str, id: u32) -> Booking {
        let vehicle = find(state, name);
        state.open_booking_modal(vehicle);
        fill_draft(state, start, end);
        state.submit_booking(BookingId::new(id)).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = RentalState::default();
        assert!(state.loading);
        assert_eq!(state.active_tab, RentalTab::Cars);
        assert!(state.filtered_vehicles().is_empty());
        assert_eq!(state.cart_count(), 0);
        assert!(state.modal_vehicle().is_none());
    }

    #[test]
    fn test_finish_loading() {
        let state = loaded();
        assert!(!state.loading);
        assert_eq!(state.filtered_vehicles().len(), 5);
    }

    #[test]
    fn test_search_tesla_scenario() {
        let mut state = loaded();
        state.select_tab(RentalTab::Cars);
        state.set_search_term("Tesla".to_string());

        let names: Vec<String> = state.filtered_vehicles().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["Tesla Model 3".to_string()]);
    }

    #[test]
    fn test_search_term_persists_across_tabs() {
        let mut state = loaded();
        state.set_search_term("honda".to_string());
        state.select_tab(RentalTab::Cart);
        assert!(state.filtered_vehicles().is_empty());
        state.select_tab(RentalTab::Bikes);

        assert_eq!(state.search_term, "honda");
        let names: Vec<String> = state.filtered_vehicles().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["Honda CBR".to_string()]);
    }

    #[test]
    fn test_toggle_menu() {
        let mut state = RentalState::default();
        state.toggle_menu();
        assert!(state.menu_open);
        state.toggle_menu();
        assert!(!state.menu_open);
    }

    #[test]
    fn test_submit_booking_scenario() {
        let mut state = loaded();
        let catalog_before = state.catalog.clone();

        let booking = book(&mut state, "Tesla Model 3", "2025-06-01", "2025-06-04", 42);

        assert_eq!(state.cart_count(), 1);
        assert_eq!(state.cart[0], booking);
        assert_eq!(booking.cost(), Ok(360.0));
        assert_eq!(state.total_cost(), 360.0);
        assert_eq!(state.catalog, catalog_before);

        assert!(!state.modal_open);
        assert_eq!(state.draft, BookingDraft::default());
        assert_eq!(booking.draft.renter_name, "Ann Lee");
        assert_eq!(booking.booking_id.value(), 42);
    }

    #[test]
    fn test_submit_without_vehicle_is_noop() {
        let mut state = loaded();
        fill_draft(&mut state, "2025-06-01", "2025-06-02");
        assert!(state.submit_booking(BookingId::new(1)).is_none());
        assert_eq!(state.cart_count(), 0);
        assert_eq!(state.draft.renter_name, "Ann Lee");
    }

    #[test]
    fn test_close_modal_resets_draft() {
        let mut state = loaded();
        let civic = find(&state, "Honda Civic");
        state.open_booking_modal(civic.clone());
        assert_eq!(state.modal_vehicle(), Some(&civic));

        state.update_draft_field(DraftField::Email, "x@y.z".to_string());
        state.close_booking_modal();

        assert!(state.modal_vehicle().is_none());
        assert_eq!(state.draft, BookingDraft::default());
        assert_eq!(state.cart_count(), 0);
    }

    #[test]
    fn test_modal_stays_open_until_close_or_submit() {
        let mut state = loaded();
        let camry = find(&state, "Toyota Camry");
        state.open_booking_modal(camry.clone());
        state.update_draft_field(DraftField::Name, "Ann Lee".to_string());

        state.select_tab(RentalTab::Bikes);
        state.set_search_term("ninja".to_string());
        state.toggle_menu();

        assert_eq!(state.modal_vehicle(), Some(&camry));
        assert_eq!(state.draft.renter_name, "Ann Lee");

        state.close_booking_modal();
        assert!(state.modal_vehicle().is_none());
    }

    #[test]
    fn test_unavailable_vehicle_is_not_guarded_internally() {
        let mut state = loaded();
        let mustang = find(&state, "Ford Mustang");
        assert!(!mustang.available);
        state.open_booking_modal(mustang);
        assert!(state.modal_open);
    }

    #[test]
    fn test_cancel_booking_preserves_order() {
        let mut state = loaded();
        book(&mut state, "Tesla Model 3", "2025-06-01", "2025-06-04", 1);
        book(&mut state, "Kawasaki Ninja", "2025-06-01", "2025-06-02", 2);
        book(&mut state, "Toyota Camry", "2025-01-01", "2025-01-03", 3);

        let removed = state.cancel_booking(1).unwrap();
        assert_eq!(removed.vehicle.name, "Kawasaki Ninja");

        let ids: Vec<u32> = state.cart.iter().map(|b| b.booking_id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(state.total_cost(), 360.0 + 160.0);
    }

    #[test]
    fn test_cancel_booking_out_of_range() {
        let mut state = loaded();
        book(&mut state, "Honda Civic", "2025-06-01", "2025-06-02", 1);
        assert_eq!(
            state.cancel_booking(3),
            Err(RentalError::BookingIndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(state.cart_count(), 1);
    }
}
