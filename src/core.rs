pub mod battery;
pub mod estimate;
pub mod preset;
