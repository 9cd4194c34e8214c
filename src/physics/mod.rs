pub mod advisory;
pub mod black_hole;
pub mod energy;
