pub mod rental_tab;
pub mod vehicle_category;
