use crate::config::physical::PhysicalConstants;
use crate::format::gravity::gravitational_pull_in_g;
use crate::format::length::convert_units;
use crate::format::scientific::custom_scientific_notation;
use crate::models::mass::Mass;
use crate::physics::advisory::RangeAdvisory;
use crate::physics::black_hole::{BlackHole, BlackHoleProperties};
use std::fmt;

/// Console report for a single black hole.
#[derive(Debug, Clone, PartialEq)]
pub struct BlackHoleReport {
    pub advisory: Option<RangeAdvisory>,
    pub properties: BlackHoleProperties,
    pub radius: String,
    pub gravity_in_g: String,
    pub lifetime_seconds: String,
    pub lifetime_years: String,
    pub energy_joules: String,
}

impl BlackHoleReport {
    pub fn new(mass: Mass, constants: &PhysicalConstants) -> Self {
        let advisory = RangeAdvisory::for_mass(&mass);
        let properties = BlackHole::new(mass).properties(constants);

        BlackHoleReport {
            advisory,
            radius: convert_units(properties.schwarzschild_radius),
            gravity_in_g: gravitational_pull_in_g(properties.surface_gravity, constants),
            lifetime_seconds: custom_scientific_notation(properties.lifetime_seconds),
            lifetime_years: custom_scientific_notation(properties.lifetime_years),
            energy_joules: custom_scientific_notation(properties.evaporation_energy),
            properties,
        }
    }
}

impl fmt::Display for BlackHoleReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let equivalents = &self.properties.equivalents;

        if let Some(advisory) = &self.advisory {
            writeln!(f, "{}", advisory)?;
        }
        writeln!(f, "The Schwarzschild radius is {}.", self.radius)?;
        writeln!(
            f,
            "The gravitational pull at the Schwarzschild radius is {} G's (Earth's gravity is 1G).",
            self.gravity_in_g
        )?;
        writeln!(f, "The lifetime in seconds is {} seconds.", self.lifetime_seconds)?;
        writeln!(f, "The lifetime in years is {} years.", self.lifetime_years)?;
        writeln!(f)?;
        writeln!(f, "The energy released by the evaporation of the black hole is:")?;
        writeln!(f, "- {:.3} kilotons of TNT,", equivalents.kilotons)?;
        writeln!(f, "- Equal to {} Joules,", self.energy_joules)?;
        writeln!(
            f,
            "- Which is equivalent to {:.3} Hiroshima bombs,",
            equivalents.hiroshima_bombs
        )?;
        writeln!(f, "- Or {:.3} Tsar Bombas.", equivalents.tsar_bombas)?;
        writeln!(f)?;
        writeln!(
            f,
            "The Tsar Bomba's area of destruction is approximately 1,521 square miles."
        )?;
        writeln!(
            f,
            "A single Tsar Bomba would be more than enough to completely wipe out New York City, Los Angeles, Houston, and many other major cities."
        )
    }
}
