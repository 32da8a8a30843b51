use crate::domain::r001_vehicle::aggregate::Vehicle;
use crate::shared::error::{RentalError, RentalResult};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

pub const BOOKING_ID_RANGE: u32 = 1_000_000;

/// Номер брони. Случайный, уникальность не гарантируется.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub u32);

impl BookingId {
    pub fn new(value: u32) -> Self {
        Self(value % BOOKING_ID_RANGE)
    }

    /// Builds an id from a uniform random number in `[0, 1)`, e.g. `Math.random()`.
    pub fn from_unit(r: f64) -> Self {
        if !(0.0..1.0).contains(&r) {
            return Self(0);
        }
        let value = (r * BOOKING_ID_RANGE as f64).floor() as u32;
        Self(value.min(BOOKING_ID_RANGE - 1))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Draft (booking form)
// ============================================================================

/// Поля формы бронирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    StartDate,
    EndDate,
    Name,
    Email,
    Phone,
}

impl DraftField {
    /// Form input `name` attribute
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::StartDate => "startDate",
            DraftField::EndDate => "endDate",
            DraftField::Name => "name",
            DraftField::Email => "email",
            DraftField::Phone => "phone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::StartDate => "Start Date:",
            DraftField::EndDate => "End Date:",
            DraftField::Name => "Full Name:",
            DraftField::Email => "Email:",
            DraftField::Phone => "Phone:",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            DraftField::StartDate | DraftField::EndDate => "date",
            DraftField::Name => "text",
            DraftField::Email => "email",
            DraftField::Phone => "tel",
        }
    }

    pub fn all() -> Vec<DraftField> {
        vec![
            DraftField::StartDate,
            DraftField::EndDate,
            DraftField::Name,
            DraftField::Email,
            DraftField::Phone,
        ]
    }

    pub fn from_name(name: &str) -> RentalResult<Self> {
        match name {
            "startDate" => Ok(DraftField::StartDate),
            "endDate" => Ok(DraftField::EndDate),
            "name" => Ok(DraftField::Name),
            "email" => Ok(DraftField::Email),
            "phone" => Ok(DraftField::Phone),
            other => Err(RentalError::UnknownField(other.to_string())),
        }
    }
}

/// Незавершённая бронь: состояние формы до отправки
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub start_date: String,
    pub end_date: String,
    pub renter_name: String,
    pub renter_email: String,
    pub renter_phone: String,
}

impl BookingDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::StartDate => &self.start_date,
            DraftField::EndDate => &self.end_date,
            DraftField::Name => &self.renter_name,
            DraftField::Email => &self.renter_email,
            DraftField::Phone => &self.renter_phone,
        }
    }

    /// Overwrites one field, leaving the rest untouched.
    pub fn set(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::StartDate => &mut self.start_date,
            DraftField::EndDate => &mut self.end_date,
            DraftField::Name => &mut self.renter_name,
            DraftField::Email => &mut self.renter_email,
            DraftField::Phone => &mut self.renter_phone,
        };
        *slot = value;
    }

    /// All required fields are filled in. Same rule as the `required` inputs:
    /// any non-empty value counts, whitespace included.
    pub fn is_complete(&self) -> bool {
        DraftField::all()
            .into_iter()
            .all(|f| !self.get(f).is_empty())
    }
}

// ============================================================================
// Booking
// ============================================================================

/// Подтверждённая бронь: транспорт + данные формы + номер
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: BookingId,
    #[serde(flatten)]
    pub vehicle: Vehicle,
    #[serde(flatten)]
    pub draft: BookingDraft,
}

impl Booking {
    pub fn new(vehicle: Vehicle, draft: BookingDraft, booking_id: BookingId) -> Self {
        Self {
            booking_id,
            vehicle,
            draft,
        }
    }

    pub fn days(&self) -> RentalResult<i64> {
        super::pricing::compute_days(&self.draft.start_date, &self.draft.end_date)
    }

    pub fn cost(&self) -> RentalResult<f64> {
        Ok(super::pricing::compute_cost(&self.vehicle, self.days()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::vehicle_category::VehicleCategory;

    #[test]
    fn test_booking_id_from_unit() {
        assert_eq!(BookingId::from_unit(0.0).value(), 0);
        assert_eq!(BookingId::from_unit(0.5).value(), 500_000);
        assert_eq!(BookingId::from_unit(0.999_999_9).value(), 999_999);
        assert_eq!(BookingId::from_unit(1.0).value(), 0);
        assert_eq!(BookingId::from_unit(f64::NAN).value(), 0);
        assert_eq!(BookingId::new(1_000_042).value(), 42);
    }

    #[test]
    fn test_draft_field_names() {
        for field in DraftField::all() {
            assert_eq!(DraftField::from_name(field.name()), Ok(field));
        }
        assert_eq!(
            DraftField::from_name("address"),
            Err(RentalError::UnknownField("address".to_string()))
        );
    }

    #[test]
    fn test_draft_set_overwrites_only_that_field() {
        let mut draft = BookingDraft::default();
        draft.set(DraftField::Name, "Ann".to_string());
        draft.set(DraftField::StartDate, "2025-06-01".to_string());
        draft.set(DraftField::Name, "Ann Lee".to_string());

        assert_eq!(draft.renter_name, "Ann Lee");
        assert_eq!(draft.start_date, "2025-06-01");
        assert_eq!(draft.end_date, "");
        assert_eq!(draft.get(DraftField::Email), "");
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_draft_complete() {
        let mut draft = BookingDraft::default();
        for field in DraftField::all() {
            draft.set(field, "x".to_string());
        }
        assert!(draft.is_complete());
        draft.set(DraftField::Name, "   ".to_string());
        assert!(draft.is_complete());
        draft.set(DraftField::Phone, String::new());
        assert!(!draft.is_complete());
    }

    #[test]
    fn test_booking_merges_vehicle_and_draft() {
        let vehicle = Vehicle::new(1, "Tesla Model 3", VehicleCategory::Car, 120.0, "/img", 4.8, true);
        let draft = BookingDraft {
            start_date: "2025-06-01".into(),
            end_date: "2025-06-04".into(),
            renter_name: "Ann".into(),
            renter_email: "ann@example.com".into(),
            renter_phone: "555".into(),
        };
        let booking = Booking::new(vehicle, draft, BookingId::new(7));

        assert_eq!(booking.days(), Ok(3));
        assert_eq!(booking.cost(), Ok(360.0));

        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["bookingId"], 7);
        assert_eq!(json["name"], "Tesla Model 3");
        assert_eq!(json["startDate"], "2025-06-01");
        assert_eq!(json["renterEmail"], "ann@example.com");
    }
}
