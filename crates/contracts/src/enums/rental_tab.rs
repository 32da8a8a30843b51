use super::vehicle_category::VehicleCategory;
use serde::{Deserialize, Serialize};

/// Вкладки главного экрана
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalTab {
    #[default]
    Cars,
    Bikes,
    Cart,
}

impl RentalTab {
    pub fn code(&self) -> &'static str {
        match self {
            RentalTab::Cars => "cars",
            RentalTab::Bikes => "bikes",
            RentalTab::Cart => "cart",
        }
    }

    /// Категория каталога, которую показывает вкладка (у корзины её нет)
    pub fn category(&self) -> Option<VehicleCategory> {
        match self {
            RentalTab::Cars => Some(VehicleCategory::Car),
            RentalTab::Bikes => Some(VehicleCategory::Bike),
            RentalTab::Cart => None,
        }
    }

    pub fn all() -> Vec<RentalTab> {
        vec![RentalTab::Cars, RentalTab::Bikes, RentalTab::Cart]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_category() {
        assert_eq!(RentalTab::Cars.category(), Some(VehicleCategory::Car));
        assert_eq!(RentalTab::Bikes.category(), Some(VehicleCategory::Bike));
        assert_eq!(RentalTab::Cart.category(), None);
    }

    #[test]
    fn test_tab_order_and_default() {
        let codes: Vec<&str> = RentalTab::all().iter().map(|t| t.code()).collect();
        assert_eq!(codes, vec!["cars", "bikes", "cart"]);
        assert_eq!(RentalTab::default(), RentalTab::Cars);
    }
}
