use serde::{Deserialize, Serialize};

/// Категории транспорта в каталоге
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleCategory {
    Car,
    Bike,
}

impl VehicleCategory {
    /// Код категории (как в каталоге)
    pub fn code(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "car",
            VehicleCategory::Bike => "bike",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "Car",
            VehicleCategory::Bike => "Bike",
        }
    }

    /// Множественное число для подписей ("Search cars...")
    pub fn plural(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "cars",
            VehicleCategory::Bike => "bikes",
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
