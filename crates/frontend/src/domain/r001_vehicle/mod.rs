pub mod loader;
pub mod ui;
