pub mod header;

pub use header::{Brand, Header};
