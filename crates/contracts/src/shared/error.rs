use thiserror::Error;

/// Errors of the pure rental operations.
///
/// None of them is shown to the user: the UI prevents them at the form boundary,
/// the frontend only logs them when they slip through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RentalError {
    #[error("Invalid date in {field}: '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("Unknown booking form field: '{0}'")]
    UnknownField(String),

    #[error("Booking index {index} is out of range (cart has {len} entries)")]
    BookingIndexOutOfRange { index: usize, len: usize },
}

pub type RentalResult<T> = Result<T, RentalError>;
