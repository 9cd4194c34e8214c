pub mod gravity;
pub mod length;
pub mod scientific;
