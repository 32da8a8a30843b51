pub mod cart;
pub mod modal;
