use crate::enums::vehicle_category::VehicleCategory;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор транспорта, уникален в пределах своей категории
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(pub u32);

impl VehicleId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

// ============================================================================
// Aggregate
// ============================================================================

pub const MAX_RATING_STARS: usize = 5;

/// Позиция каталога. Создаётся при загрузке и больше не меняется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: VehicleId,
    pub name: String,
    pub category: VehicleCategory,
    pub daily_price: f64,
    pub image_url: String,
    pub rating: f64,
    pub available: bool,
}

impl Vehicle {
    pub fn new(
        id: u32,
        name: &str,
        category: VehicleCategory,
        daily_price: f64,
        image_url: &str,
        rating: f64,
        available: bool,
    ) -> Self {
        Self {
            id: VehicleId::new(id),
            name: name.to_string(),
            category,
            daily_price,
            image_url: image_url.to_string(),
            rating,
            available,
        }
    }

    /// Case-insensitive substring match on the name. An empty term matches everything.
    pub fn matches_name(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term.to_lowercase())
    }

    /// Number of filled stars in the five-star widget
    pub fn filled_stars(&self) -> usize {
        if self.rating.is_nan() || self.rating <= 0.0 {
            return 0;
        }
        (self.rating.floor() as usize).min(MAX_RATING_STARS)
    }
}
