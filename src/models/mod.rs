pub mod mass;

pub use mass::{Mass, MassUnit};
