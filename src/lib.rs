pub mod config;
pub mod constants;
pub mod format;
pub mod input;
pub mod models;
pub mod physics;
pub mod report;

pub use config::physical::PhysicalConstants;
pub use input::mass_errors::MassError;
pub use input::mass_parser::{convert_mass_to_kg, parse_mass};
pub use models::mass::{Mass, MassUnit};
pub use physics::black_hole::{BlackHole, BlackHoleProperties};
pub use report::black_hole_report::BlackHoleReport;
