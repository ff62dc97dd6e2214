pub mod meter;

pub use meter::{meter_text, Meter};
