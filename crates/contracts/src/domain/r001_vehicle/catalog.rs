//! The rentable fleet, partitioned by category.

use super::aggregate::Vehicle;
use crate::enums::vehicle_category::VehicleCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub cars: Vec<Vehicle>,
    pub bikes: Vec<Vehicle>,
}

impl Catalog {
    pub fn vehicles(&self, category: VehicleCategory) -> &[Vehicle] {
        match category {
            VehicleCategory::Car => &self.cars,
            VehicleCategory::Bike => &self.bikes,
        }
    }

    pub fn len(&self) -> usize {
        self.cars.len() + self.bikes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cars.is_empty() && self.bikes.is_empty()
    }

    /// Vehicles of `category` whose name contains `term`, in catalog order.
    pub fn filter(&self, category: VehicleCategory, term: &str) -> Vec<Vehicle> {
        filter_vehicles(self.vehicles(category), term)
    }
}

/// Returns the entries of `vehicles` whose name case-insensitively contains `term`,
/// keeping their relative order.
pub fn filter_vehicles(vehicles: &[Vehicle], term: &str) -> Vec<Vehicle> {
    vehicles
        .iter()
        .filter(|v| v.matches_name(term))
        .cloned()
        .collect()
}

/// Same as [`Catalog::filter`], but tolerates a catalog that is not loaded yet.
pub fn filter_catalog(catalog: Option<&Catalog>, category: VehicleCategory, term: &str) -> Vec<Vehicle> {
    catalog
        .map(|c| c.filter(category, term))
        .unwrap_or_default()
}

/// Built-in demo fleet.
pub fn sample_catalog(image_url: &str) -> Catalog {
    use VehicleCategory::{Bike, Car};

    Catalog {
        cars: vec![
            Vehicle::new(1, "Tesla Model 3", Car, 120.0, image_url, 4.8, true),
            Vehicle::new(2, "Toyota Camry", Car, 80.0, image_url, 4.5, true),
            Vehicle::new(3, "Honda Civic", Car, 70.0, image_url, 4.3, true),
            Vehicle::new(4, "Ford Mustang", Car, 150.0, image_url, 4.9, false),
            Vehicle::new(5, "BMW 3 Series", Car, 110.0, image_url, 4.6, true),
        ],
        bikes: vec![
            Vehicle::new(101, "Kawasaki Ninja", Bike, 75.0, image_url, 4.7, true),
            Vehicle::new(102, "Harley Davidson", Bike, 95.0, image_url, 4.9, true),
            Vehicle::new(103, "Yamaha MT-07", Bike, 65.0, image_url, 4.4, false),
            Vehicle::new(104, "Honda CBR", Bike, 60.0, image_url, 4.3, true),
            Vehicle::new(105, "Ducati Monster", Bike, 90.0, image_url, 4.8, true),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(vehicles: &[Vehicle]) -> Vec<&str> {
        vehicles.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn test_sample_catalog_shape() {
        let catalog = sample_catalog("/api/placeholder/300/200");
        assert_eq!(catalog.cars.len(), 5);
        assert_eq!(catalog.bikes.len(), 5);
        assert!(catalog.cars.iter().all(|v| v.category == VehicleCategory::Car));
        assert!(catalog.bikes.iter().all(|v| v.category == VehicleCategory::Bike));

        let mustang = catalog.cars.iter().find(|v| v.name == "Ford Mustang").unwrap();
        assert!(!mustang.available);
        let yamaha = catalog.bikes.iter().find(|v| v.id.value() == 103).unwrap();
        assert!(!yamaha.available);
    }

    #[test]
    fn test_empty_term_returns_all_in_order() {
        let catalog = sample_catalog("/img");
        assert_eq!(catalog.filter(VehicleCategory::Car, ""), catalog.cars);
        assert_eq!(catalog.filter(VehicleCategory::Bike, ""), catalog.bikes);
    }

    #[test]
    fn test_filter_keeps_relative_order() {
        let catalog = sample_catalog("/img");
        let with_o = catalog.filter(VehicleCategory::Car, "o");
        assert_eq!(
            names(&with_o),
            vec!["Tesla Model 3", "Toyota Camry", "Honda Civic", "Ford Mustang"]
        );
        for v in &with_o {
            assert!(v.name.to_lowercase().contains('o'));
        }
    }

    #[test]
    fn test_filter_case_insensitive() {
        let catalog = sample_catalog("/img");
        let result = catalog.filter(VehicleCategory::Car, "tEsLa");
        assert_eq!(names(&result), vec!["Tesla Model 3"]);

        let bikes = catalog.filter(VehicleCategory::Bike, "HONDA");
        assert_eq!(names(&bikes), vec!["Honda CBR"]);
    }

    #[test]
    fn test_filter_no_match() {
        let catalog = sample_catalog("/img");
        assert!(catalog.filter(VehicleCategory::Bike, "tesla").is_empty());
    }

    #[test]
    fn test_filter_not_loaded() {
        assert!(filter_catalog(None, VehicleCategory::Car, "").is_empty());
        let catalog = sample_catalog("/img");
        assert_eq!(filter_catalog(Some(&catalog), VehicleCategory::Car, "bmw").len(), 1);
    }
}
