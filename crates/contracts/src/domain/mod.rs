pub mod r001_vehicle;
pub mod r002_booking;
