pub mod envelope;
pub mod reading;
pub mod status;
